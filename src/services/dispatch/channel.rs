use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
	models::{DecodedTransaction, MatchedFilter, StakingFact},
	services::dispatch::{RawMessage, TransactionObserver},
};

/// A passed transaction together with the matches of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchNotification<T> {
	pub transaction: DecodedTransaction,
	pub matches: Vec<T>,
}

/// Receiving ends of a `ChannelObserver`, one per category.
pub struct ObserverChannels {
	pub raw_messages: UnboundedReceiver<RawMessage>,
	pub transactions: UnboundedReceiver<DecodedTransaction>,
	pub filtered_transactions: UnboundedReceiver<DecodedTransaction>,
	pub wasm_matches: UnboundedReceiver<MatchNotification<MatchedFilter>>,
	pub wallet_matches: UnboundedReceiver<MatchNotification<MatchedFilter>>,
	pub staking_matches: UnboundedReceiver<MatchNotification<StakingFact>>,
}

/// Observer forwarding each category into its own typed channel.
///
/// Sends to a dropped receiver are discarded.
#[derive(Clone)]
pub struct ChannelObserver {
	raw_messages: UnboundedSender<RawMessage>,
	transactions: UnboundedSender<DecodedTransaction>,
	filtered_transactions: UnboundedSender<DecodedTransaction>,
	wasm_matches: UnboundedSender<MatchNotification<MatchedFilter>>,
	wallet_matches: UnboundedSender<MatchNotification<MatchedFilter>>,
	staking_matches: UnboundedSender<MatchNotification<StakingFact>>,
}

impl ChannelObserver {
	pub fn new() -> (Self, ObserverChannels) {
		let (raw_tx, raw_rx) = mpsc::unbounded_channel();
		let (tx_tx, tx_rx) = mpsc::unbounded_channel();
		let (filtered_tx, filtered_rx) = mpsc::unbounded_channel();
		let (wasm_tx, wasm_rx) = mpsc::unbounded_channel();
		let (wallet_tx, wallet_rx) = mpsc::unbounded_channel();
		let (staking_tx, staking_rx) = mpsc::unbounded_channel();
		(
			Self {
				raw_messages: raw_tx,
				transactions: tx_tx,
				filtered_transactions: filtered_tx,
				wasm_matches: wasm_tx,
				wallet_matches: wallet_tx,
				staking_matches: staking_tx,
			},
			ObserverChannels {
				raw_messages: raw_rx,
				transactions: tx_rx,
				filtered_transactions: filtered_rx,
				wasm_matches: wasm_rx,
				wallet_matches: wallet_rx,
				staking_matches: staking_rx,
			},
		)
	}
}

fn forward<T>(sender: &UnboundedSender<T>, value: T, category: &'static str) {
	if sender.send(value).is_err() {
		tracing::trace!(category, "Observer channel closed, dropping event");
	}
}

impl TransactionObserver for ChannelObserver {
	fn on_raw_message(&self, message: &RawMessage) {
		forward(&self.raw_messages, message.clone(), "raw_message");
	}

	fn on_transaction(&self, tx: &DecodedTransaction) {
		forward(&self.transactions, tx.clone(), "transaction");
	}

	fn on_filtered_transaction(&self, tx: &DecodedTransaction) {
		forward(&self.filtered_transactions, tx.clone(), "filtered_transaction");
	}

	fn on_wasm_match(&self, tx: &DecodedTransaction, matches: &[MatchedFilter]) {
		let notification = MatchNotification {
			transaction: tx.clone(),
			matches: matches.to_vec(),
		};
		forward(&self.wasm_matches, notification, "wasm_match");
	}

	fn on_wallet_match(&self, tx: &DecodedTransaction, matches: &[MatchedFilter]) {
		let notification = MatchNotification {
			transaction: tx.clone(),
			matches: matches.to_vec(),
		};
		forward(&self.wallet_matches, notification, "wallet_match");
	}

	fn on_staking_match(&self, tx: &DecodedTransaction, facts: &[StakingFact]) {
		let notification = MatchNotification {
			transaction: tx.clone(),
			matches: facts.to_vec(),
		};
		forward(&self.staking_matches, notification, "staking_match");
	}
}
