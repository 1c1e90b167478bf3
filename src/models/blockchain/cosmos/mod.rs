//! Cosmos SDK transaction data structures.
//!
//! Covers the raw event shapes delivered over the CometBFT subscription
//! interface, the decoded transaction record, derived facts and the evidence
//! attached by the filter tiers.

mod event;
mod facts;
mod monitor;
mod transaction;

pub use event::{AttributeProvenance, DecodedEvent, RawAttribute, RawEvent};
pub use facts::{
	IbcTransferFact, MessageSummary, StakingAction, StakingFact, SwapFact, TransactionType,
	TransferFacts,
};
pub use monitor::{FilterTier, MatchEvidence, MatchedFilter};
pub use transaction::{DecodedTransaction, TransactionEnvelope, DEFAULT_GAS};
