//! Transaction filtering functionality.
//!
//! Implements the filter tiers applied to decoded transactions:
//! - Basic tiers (attribute lists, wallets/contracts, event structure)
//! - Advanced boolean filters with string matching strategies

mod advanced;
mod filters;

pub use advanced::{AdvancedFilterEngine, CompiledCondition};
pub use filters::{
	AttributeListFilter, EventStructureFilter, FilterEngine, FilterOutcome, TierFilter,
	WalletContractFilter,
};
