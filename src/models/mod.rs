//! Domain models and data structures for Cosmos transaction monitoring.
//!
//! This module contains all the core data structures used throughout the application:
//!
//! - `blockchain`: Cosmos event and transaction shapes, derived facts and match evidence
//! - `config`: Configuration loading and validation
//! - `core`: Filter definitions and chain/endpoint settings

mod blockchain;
mod config;
mod core;

// Re-export blockchain types
pub use blockchain::{strip_revision, ChainKind};

pub use blockchain::cosmos::{
	AttributeProvenance, DecodedEvent, DecodedTransaction, FilterTier, IbcTransferFact,
	MatchEvidence, MatchedFilter, MessageSummary, RawAttribute, RawEvent, StakingAction,
	StakingFact, SwapFact, TransactionEnvelope, TransactionType, TransferFacts, DEFAULT_GAS,
};

// Re-export core types
pub use core::{
	AdvancedFilter, ChainConfig, Condition, EventFilter, FilterSpec, MatchStrategy, NumericRange,
	WebsocketConfig, DEFAULT_ADDRESS_MAX_LENGTH, DEFAULT_ADDRESS_MIN_LENGTH,
	DEFAULT_FILTER_NAME, DEFAULT_SUBSCRIPTION_QUERY,
};

// Re-export config types
pub use config::{AppConfig, ConfigError, ConfigLoader, FilterConfig, FilterList};
