use crate::models::{DecodedEvent, DecodedTransaction, TransactionEnvelope};

/// A builder for creating test transactions with default values.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
	chain_id: String,
	envelope: TransactionEnvelope,
	events: Vec<DecodedEvent>,
}

impl Default for TransactionBuilder {
	/// Default builder for a successful osmosis transaction at height 1
	fn default() -> Self {
		Self {
			chain_id: "osmosis-1".to_string(),
			envelope: TransactionEnvelope {
				height: 1,
				tx_hash: Some(
					"A5B4C3D2E1F0A5B4C3D2E1F0A5B4C3D2E1F0A5B4C3D2E1F0A5B4C3D2E1F0A5B4".to_string(),
				),
				..Default::default()
			},
			events: Vec::new(),
		}
	}
}

impl TransactionBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn chain_id(mut self, chain_id: impl Into<String>) -> Self {
		self.chain_id = chain_id.into();
		self
	}

	pub fn height(mut self, height: u64) -> Self {
		self.envelope.height = height;
		self
	}

	pub fn tx_hash(mut self, tx_hash: impl Into<String>) -> Self {
		self.envelope.tx_hash = Some(tx_hash.into());
		self
	}

	pub fn code(mut self, code: u32) -> Self {
		self.envelope.code = code;
		self
	}

	pub fn event(mut self, event: DecodedEvent) -> Self {
		self.events.push(event);
		self
	}

	pub fn events(mut self, events: Vec<DecodedEvent>) -> Self {
		self.events.extend(events);
		self
	}

	/// Builds the transaction without derived facts.
	pub fn build(self) -> DecodedTransaction {
		DecodedTransaction::from_envelope(self.chain_id, &self.envelope, self.events)
	}
}
