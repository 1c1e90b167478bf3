use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::models::{DecodedTransaction, MatchedFilter, StakingFact};

/// A well-formed subscription message as received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawMessage {
	pub received_at: DateTime<Utc>,
	pub payload: Value,
}

impl RawMessage {
	pub fn new(payload: Value) -> Self {
		Self {
			received_at: Utc::now(),
			payload,
		}
	}
}

/// Receives pipeline output, one method per event category.
///
/// Every method defaults to doing nothing. The match callbacks fire only for
/// transactions that passed the filters and carry the evidence or facts that
/// triggered them.
pub trait TransactionObserver: Send + Sync {
	fn on_raw_message(&self, _message: &RawMessage) {}

	/// Every decoded transaction, whether or not it passed.
	fn on_transaction(&self, _tx: &DecodedTransaction) {}

	fn on_filtered_transaction(&self, _tx: &DecodedTransaction) {}

	fn on_wasm_match(&self, _tx: &DecodedTransaction, _matches: &[MatchedFilter]) {}

	fn on_wallet_match(&self, _tx: &DecodedTransaction, _matches: &[MatchedFilter]) {}

	fn on_staking_match(&self, _tx: &DecodedTransaction, _facts: &[StakingFact]) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TransactionObserver for NoopObserver {}

/// Logs passed transactions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl TransactionObserver for LoggingObserver {
	fn on_transaction(&self, tx: &DecodedTransaction) {
		tracing::debug!(
			tx_hash = tx.tx_hash.as_deref().unwrap_or_default(),
			height = tx.height,
			events = tx.events.len(),
			"Decoded transaction"
		);
	}

	fn on_filtered_transaction(&self, tx: &DecodedTransaction) {
		tracing::info!(
			tx_hash = tx.tx_hash.as_deref().unwrap_or_default(),
			height = tx.height,
			kind = tx.classified_type.map(|t| t.as_str()).unwrap_or("unclassified"),
			matches = tx.matched_filters.len(),
			"Transaction passed filters"
		);
	}

	fn on_wasm_match(&self, tx: &DecodedTransaction, matches: &[MatchedFilter]) {
		tracing::info!(
			tx_hash = tx.tx_hash.as_deref().unwrap_or_default(),
			contracts = matches.len(),
			"Wasm contract matched"
		);
	}

	fn on_wallet_match(&self, tx: &DecodedTransaction, matches: &[MatchedFilter]) {
		tracing::info!(
			tx_hash = tx.tx_hash.as_deref().unwrap_or_default(),
			wallets = matches.len(),
			"Wallet matched"
		);
	}
}

/// Forwards every callback to each inner observer in order.
#[derive(Clone, Default)]
pub struct CompositeObserver {
	observers: Vec<Arc<dyn TransactionObserver>>,
}

impl CompositeObserver {
	pub fn new(observers: Vec<Arc<dyn TransactionObserver>>) -> Self {
		Self { observers }
	}

	pub fn push(&mut self, observer: Arc<dyn TransactionObserver>) {
		self.observers.push(observer);
	}

	pub fn len(&self) -> usize {
		self.observers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.observers.is_empty()
	}
}

impl TransactionObserver for CompositeObserver {
	fn on_raw_message(&self, message: &RawMessage) {
		self.observers.iter().for_each(|o| o.on_raw_message(message));
	}

	fn on_transaction(&self, tx: &DecodedTransaction) {
		self.observers.iter().for_each(|o| o.on_transaction(tx));
	}

	fn on_filtered_transaction(&self, tx: &DecodedTransaction) {
		self.observers
			.iter()
			.for_each(|o| o.on_filtered_transaction(tx));
	}

	fn on_wasm_match(&self, tx: &DecodedTransaction, matches: &[MatchedFilter]) {
		self.observers
			.iter()
			.for_each(|o| o.on_wasm_match(tx, matches));
	}

	fn on_wallet_match(&self, tx: &DecodedTransaction, matches: &[MatchedFilter]) {
		self.observers
			.iter()
			.for_each(|o| o.on_wallet_match(tx, matches));
	}

	fn on_staking_match(&self, tx: &DecodedTransaction, facts: &[StakingFact]) {
		self.observers
			.iter()
			.for_each(|o| o.on_staking_match(tx, facts));
	}
}
