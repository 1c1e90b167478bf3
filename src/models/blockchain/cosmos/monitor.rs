use serde::{Deserialize, Serialize};

/// The independently configurable matching stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterTier {
	/// Decoded attribute value found in a configured list
	AttributeList,
	/// Wallet address or wasm contract found in a qualifying message event
	WalletContract,
	/// Event type / attribute constraint rule
	EventStructure,
	/// Boolean combinator filter
	Advanced,
}

impl FilterTier {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::AttributeList => "attribute_list",
			Self::WalletContract => "wallet_contract",
			Self::EventStructure => "event_structure",
			Self::Advanced => "advanced",
		}
	}
}

/// What caused a tier to pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchEvidence {
	Attribute {
		event_type: String,
		key: String,
		value: String,
	},
	Wallet {
		address: String,
		role: String,
		action: String,
	},
	Contract {
		contract: String,
		action: String,
	},
	EventRule {
		rule_index: usize,
		event_type: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		attribute: Option<(String, String)>,
	},
	Advanced {
		filter_name: String,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchedFilter {
	pub filter_tier: FilterTier,
	pub evidence: MatchEvidence,
}

impl MatchedFilter {
	pub fn new(filter_tier: FilterTier, evidence: MatchEvidence) -> Self {
		Self {
			filter_tier,
			evidence,
		}
	}

	pub fn is_wallet(&self) -> bool {
		matches!(self.evidence, MatchEvidence::Wallet { .. })
	}

	pub fn is_contract(&self) -> bool {
		matches!(self.evidence, MatchEvidence::Contract { .. })
	}
}
