use serde::{Deserialize, Serialize};

use super::{
	DecodedEvent, IbcTransferFact, MatchedFilter, MessageSummary, RawEvent, StakingFact, SwapFact,
	TransactionType, TransferFacts,
};

/// Gas value used when the node omits gas fields.
pub const DEFAULT_GAS: &str = "0";

/// Transaction payload located inside one subscription message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransactionEnvelope {
	pub height: u64,
	pub tx_hash: Option<String>,
	pub index: Option<u32>,
	/// Base64 transaction bytes as delivered by the node.
	pub tx: Option<String>,
	pub code: u32,
	pub log: String,
	pub gas_wanted: String,
	pub gas_used: String,
	pub events: Vec<RawEvent>,
}

impl Default for TransactionEnvelope {
	fn default() -> Self {
		Self {
			height: 0,
			tx_hash: None,
			index: None,
			tx: None,
			code: 0,
			log: String::new(),
			gas_wanted: DEFAULT_GAS.to_string(),
			gas_used: DEFAULT_GAS.to_string(),
			events: Vec::new(),
		}
	}
}

/// Canonical record for one transaction, produced per message.
///
/// Nothing mutates a transaction after filter evaluation appends
/// `matched_filters`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecodedTransaction {
	pub chain_id: String,
	pub height: u64,
	pub tx_hash: Option<String>,
	pub code: u32,
	pub gas_wanted: String,
	pub gas_used: String,
	pub events: Vec<DecodedEvent>,
	pub transfer_facts: TransferFacts,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub swap_facts: Vec<SwapFact>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub staking_facts: Vec<StakingFact>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub ibc_facts: Vec<IbcTransferFact>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub classified_type: Option<TransactionType>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub messaging_data: Vec<MessageSummary>,
	#[serde(default)]
	pub matched_filters: Vec<MatchedFilter>,
}

impl DecodedTransaction {
	/// Creates a transaction with decoded events and no derived facts yet.
	pub fn from_envelope(
		chain_id: impl Into<String>,
		envelope: &TransactionEnvelope,
		events: Vec<DecodedEvent>,
	) -> Self {
		Self {
			chain_id: chain_id.into(),
			height: envelope.height,
			tx_hash: envelope.tx_hash.clone(),
			code: envelope.code,
			gas_wanted: envelope.gas_wanted.clone(),
			gas_used: envelope.gas_used.clone(),
			events,
			transfer_facts: TransferFacts::default(),
			swap_facts: Vec::new(),
			staking_facts: Vec::new(),
			ibc_facts: Vec::new(),
			classified_type: None,
			messaging_data: Vec::new(),
			matched_filters: Vec::new(),
		}
	}

	/// Whether the node reported the transaction as executed successfully.
	pub fn success(&self) -> bool {
		self.code == 0
	}

	pub fn events_of_type<'a>(
		&'a self,
		event_type: &'a str,
	) -> impl Iterator<Item = &'a DecodedEvent> + 'a {
		self.events.iter().filter(move |event| event.is_type(event_type))
	}

	pub fn message_events(&self) -> impl Iterator<Item = &DecodedEvent> {
		self.events_of_type("message")
	}

	pub fn has_event_type(&self, event_type: &str) -> bool {
		self.events.iter().any(|event| event.is_type(event_type))
	}
}
