//! Basic filter tiers.
//!
//! Provides the tier trait and the engine combining the three basic tiers:
//! - attribute-list matching
//! - wallet and wasm contract matching inside message events
//! - structural event rules
//!
//! A tier without configuration is vacuously satisfied. The engine passes a
//! transaction when every configured tier produced evidence.

mod attribute;
mod structural;
mod wallet;

pub use attribute::AttributeListFilter;
pub use structural::EventStructureFilter;
pub use wallet::WalletContractFilter;

use crate::models::{DecodedTransaction, FilterSpec, FilterTier, MatchEvidence, MatchedFilter};

pub trait TierFilter: Send + Sync {
	fn tier(&self) -> FilterTier;

	/// Whether this tier has anything to match against.
	fn is_configured(&self) -> bool;

	/// Evidence of every match in `tx`; empty when the tier does not match.
	fn evaluate(&self, tx: &DecodedTransaction) -> Vec<MatchEvidence>;
}

/// Decision of the basic tiers for one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
	pub passed: bool,
	pub matched_filters: Vec<MatchedFilter>,
}

impl FilterOutcome {
	pub fn wallet_matches(&self) -> impl Iterator<Item = &MatchedFilter> {
		self.matched_filters.iter().filter(|m| m.is_wallet())
	}

	pub fn contract_matches(&self) -> impl Iterator<Item = &MatchedFilter> {
		self.matched_filters.iter().filter(|m| m.is_contract())
	}
}

pub struct FilterEngine {
	tiers: Vec<Box<dyn TierFilter>>,
}

impl FilterEngine {
	pub fn new(spec: &FilterSpec) -> Self {
		Self::with_tiers(vec![
			Box::new(AttributeListFilter::new(spec.attribute_lists_by_key.clone())),
			Box::new(WalletContractFilter::new(
				spec.wallet_addresses.clone(),
				spec.wasm_contract_addresses.clone(),
			)),
			Box::new(EventStructureFilter::new(spec.event_filters.clone())),
		])
	}

	pub fn with_tiers(tiers: Vec<Box<dyn TierFilter>>) -> Self {
		Self { tiers }
	}

	/// Whether any tier is configured.
	pub fn is_configured(&self) -> bool {
		self.tiers.iter().any(|tier| tier.is_configured())
	}

	pub fn evaluate(&self, tx: &DecodedTransaction) -> FilterOutcome {
		let mut passed = true;
		let mut matched_filters = Vec::new();
		for tier in self.tiers.iter().filter(|tier| tier.is_configured()) {
			let evidence = tier.evaluate(tx);
			if evidence.is_empty() {
				tracing::trace!(tier = tier.tier().as_str(), "Filter tier did not match");
				passed = false;
				continue;
			}
			matched_filters.extend(
				evidence
					.into_iter()
					.map(|evidence| MatchedFilter::new(tier.tier(), evidence)),
			);
		}
		FilterOutcome {
			passed,
			matched_filters,
		}
	}
}

impl Default for FilterEngine {
	fn default() -> Self {
		Self::new(&FilterSpec::default())
	}
}
