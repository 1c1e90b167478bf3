//! Per-message processing.
//!
//! Runs one subscription message through envelope extraction, attribute
//! decoding, chain transformation, fact extraction and filter evaluation,
//! then hands the result to the observer. Nothing in this path fails: bad
//! input ends in a `PipelineOutcome` variant.

use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::{
	models::{AdvancedFilter, ChainConfig, DecodedTransaction, FilterSpec},
	services::{
		decoder::{extract_envelope, is_oracle_vote, AttributeCodec, EventDecoder},
		dispatch::{RawMessage, TransactionObserver},
		extractor::SemanticExtractor,
		filter::{AdvancedFilterEngine, FilterEngine},
		transformer::ChainTransformer,
	},
	utils::metrics,
};

/// Basic and advanced filter engines, replaced together.
pub struct FilterEngines {
	pub basic: FilterEngine,
	pub advanced: AdvancedFilterEngine,
}

impl FilterEngines {
	pub fn new(spec: &FilterSpec, advanced: &[AdvancedFilter]) -> Self {
		Self {
			basic: FilterEngine::new(spec),
			advanced: AdvancedFilterEngine::new(advanced),
		}
	}
}

impl Default for FilterEngines {
	fn default() -> Self {
		Self::new(&FilterSpec::default(), &[])
	}
}

/// What happened to one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum PipelineOutcome {
	/// Body was not valid JSON
	Malformed(String),
	/// Dropped before decoding as an oracle vote
	Suppressed,
	/// No transaction payload, e.g. a subscription acknowledgement
	NotTransaction,
	Processed {
		passed: bool,
		transaction: Box<DecodedTransaction>,
	},
}

impl PipelineOutcome {
	pub fn passed(&self) -> bool {
		matches!(self, Self::Processed { passed: true, .. })
	}

	pub fn transaction(&self) -> Option<&DecodedTransaction> {
		match self {
			Self::Processed { transaction, .. } => Some(transaction),
			_ => None,
		}
	}
}

pub struct PipelineService {
	chain_id: String,
	decoder: EventDecoder,
	extractor: SemanticExtractor,
	transformer: Arc<dyn ChainTransformer>,
	filters: RwLock<Arc<FilterEngines>>,
	suppress_oracle_votes: bool,
	observer: Arc<dyn TransactionObserver>,
}

impl PipelineService {
	pub fn new(
		chain: &ChainConfig,
		transformer: Arc<dyn ChainTransformer>,
		filters: FilterEngines,
		observer: Arc<dyn TransactionObserver>,
	) -> Self {
		Self {
			chain_id: chain.chain_id.clone(),
			decoder: EventDecoder::new(AttributeCodec::new(chain)),
			extractor: SemanticExtractor::new(),
			transformer,
			filters: RwLock::new(Arc::new(filters)),
			suppress_oracle_votes: true,
			observer,
		}
	}

	pub fn with_oracle_suppression(mut self, enabled: bool) -> Self {
		self.suppress_oracle_votes = enabled;
		self
	}

	pub fn chain_id(&self) -> &str {
		&self.chain_id
	}

	/// Current filter snapshot.
	pub fn filters(&self) -> Arc<FilterEngines> {
		match self.filters.read() {
			Ok(guard) => Arc::clone(&guard),
			Err(poisoned) => Arc::clone(&poisoned.into_inner()),
		}
	}

	/// Swaps in a new filter configuration. Messages already in flight finish
	/// with the snapshot they started with.
	pub fn replace_filters(&self, filters: FilterEngines) {
		let filters = Arc::new(filters);
		match self.filters.write() {
			Ok(mut guard) => *guard = filters,
			Err(poisoned) => *poisoned.into_inner() = filters,
		}
		tracing::info!(chain_id = %self.chain_id, "Replaced filter configuration");
	}

	/// Processes one message body as received from the transport.
	pub fn process_message(&self, body: &str) -> PipelineOutcome {
		metrics::MESSAGES_RECEIVED.inc();
		match serde_json::from_str::<Value>(body) {
			Ok(message) => self.process_value(message),
			Err(e) => {
				metrics::MESSAGES_MALFORMED.inc();
				tracing::warn!(error = %e, "Dropping malformed message");
				PipelineOutcome::Malformed(e.to_string())
			}
		}
	}

	#[instrument(skip_all, fields(chain_id = %self.chain_id))]
	pub fn process_value(&self, message: Value) -> PipelineOutcome {
		let raw = RawMessage::new(message);
		self.observer.on_raw_message(&raw);
		let message = raw.payload;

		if self.suppress_oracle_votes && is_oracle_vote(&message) {
			metrics::MESSAGES_SUPPRESSED.inc();
			tracing::debug!("Suppressed oracle vote message");
			return PipelineOutcome::Suppressed;
		}

		let Some(mut tx) = self.decode(&message) else {
			metrics::MESSAGES_NON_TRANSACTION.inc();
			tracing::debug!("Message carries no transaction");
			return PipelineOutcome::NotTransaction;
		};

		let passed = self.evaluate(&mut tx);
		self.dispatch(&tx, passed);

		PipelineOutcome::Processed {
			passed,
			transaction: Box::new(tx),
		}
	}

	/// Decodes `message` into a transaction with facts and messaging data,
	/// without evaluating filters.
	pub fn decode(&self, message: &Value) -> Option<DecodedTransaction> {
		let envelope = extract_envelope(message)?;
		let events = self.decoder.decode(&envelope.events);
		let tx = DecodedTransaction::from_envelope(self.chain_id.clone(), &envelope, events);

		let mut tx = self.transformer.transform_events(tx);
		self.extractor.enrich(&mut tx);
		tx.messaging_data = self.transformer.extract_messaging_data(&tx);

		metrics::TRANSACTIONS_DECODED.inc();
		tracing::debug!(
			tx_hash = tx.tx_hash.as_deref().unwrap_or_default(),
			height = tx.height,
			events = tx.events.len(),
			"Decoded transaction"
		);
		Some(tx)
	}

	/// Evaluates all filter tiers and records their evidence on `tx`.
	///
	/// Passes when the basic tiers pass and, if advanced filters are
	/// configured, at least one of them holds.
	pub fn evaluate(&self, tx: &mut DecodedTransaction) -> bool {
		let filters = self.filters();
		let basic = filters.basic.evaluate(tx);
		let advanced = filters.advanced.evaluate(tx);
		let passed = basic.passed && (filters.advanced.is_empty() || !advanced.is_empty());

		tx.matched_filters = basic.matched_filters;
		tx.matched_filters.extend(advanced);
		for matched in &tx.matched_filters {
			metrics::FILTER_TIER_MATCHES
				.with_label_values(&[matched.filter_tier.as_str()])
				.inc();
		}
		passed
	}

	fn dispatch(&self, tx: &DecodedTransaction, passed: bool) {
		self.observer.on_transaction(tx);
		if !passed {
			return;
		}

		metrics::TRANSACTIONS_PASSED.inc();
		self.observer.on_filtered_transaction(tx);

		let (wallets, contracts): (Vec<_>, Vec<_>) = tx
			.matched_filters
			.iter()
			.filter(|m| m.is_wallet() || m.is_contract())
			.cloned()
			.partition(|m| m.is_wallet());
		if !contracts.is_empty() {
			self.observer.on_wasm_match(tx, &contracts);
		}
		if !wallets.is_empty() {
			self.observer.on_wallet_match(tx, &wallets);
		}
		if !tx.staking_facts.is_empty() {
			self.observer.on_staking_match(tx, &tx.staking_facts);
		}
	}
}
