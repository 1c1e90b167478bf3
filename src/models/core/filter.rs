use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Name given to advanced filters configured without one.
pub const DEFAULT_FILTER_NAME: &str = "unnamed";

/// Configuration for the attribute-list, wallet/contract and structural tiers.
///
/// An empty field leaves its tier unconfigured.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterSpec {
	/// Allowed decoded values per decoded attribute key
	pub attribute_lists_by_key: HashMap<String, HashSet<String>>,
	pub wallet_addresses: HashSet<String>,
	pub wasm_contract_addresses: HashSet<String>,
	pub event_filters: Vec<EventFilter>,
}

impl FilterSpec {
	pub fn is_empty(&self) -> bool {
		self.attribute_lists_by_key.is_empty()
			&& self.wallet_addresses.is_empty()
			&& self.wasm_contract_addresses.is_empty()
			&& self.event_filters.is_empty()
	}
}

/// Structural rule: event type membership plus optional attribute constraints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EventFilter {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub event_types: Option<HashSet<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub attribute_constraints: Option<HashMap<String, HashSet<String>>>,
}

/// String comparison mode of a condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
	#[default]
	Exact,
	Contains,
	StartsWith,
	EndsWith,
	Regex,
}

/// One attribute test within an advanced filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Condition {
	/// Decoded attribute key
	pub key: String,
	/// Expected values; empty turns the condition into a key-existence check
	#[serde(default)]
	pub values: Vec<String>,
	#[serde(default)]
	pub strategy: MatchStrategy,
	#[serde(default)]
	pub negated: bool,
}

impl Condition {
	pub fn new(key: impl Into<String>, values: Vec<String>, strategy: MatchStrategy) -> Self {
		Self {
			key: key.into(),
			values,
			strategy,
			negated: false,
		}
	}

	pub fn negate(mut self) -> Self {
		self.negated = !self.negated;
		self
	}
}

/// Bounds applied to a numeric field of the transaction.
///
/// `field` is either `height` or a decoded attribute key; for an attribute the
/// range holds when any value of that key, anywhere in the transaction, has a
/// leading number within the bounds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NumericRange {
	pub field: String,
	#[serde(default)]
	pub min: Option<f64>,
	#[serde(default)]
	pub max: Option<f64>,
}

impl NumericRange {
	pub fn contains(&self, value: f64) -> bool {
		self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
	}
}

/// Recursive boolean filter evaluated by the advanced tier.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AdvancedFilter {
	#[serde(default = "default_filter_name")]
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub event_type: Option<String>,
	/// Message type names one of which a `message` event action must contain
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message_types: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub any_of: Vec<Condition>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub all_of: Vec<Condition>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub none_of: Vec<Condition>,
	#[serde(default, rename = "or", skip_serializing_if = "Vec::is_empty")]
	pub or_filters: Vec<AdvancedFilter>,
	#[serde(default, rename = "and", skip_serializing_if = "Vec::is_empty")]
	pub and_filters: Vec<AdvancedFilter>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tx_hashes: Option<HashSet<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub numeric_range: Option<NumericRange>,
}

fn default_filter_name() -> String {
	DEFAULT_FILTER_NAME.to_string()
}

impl Default for AdvancedFilter {
	fn default() -> Self {
		Self {
			name: default_filter_name(),
			event_type: None,
			message_types: None,
			any_of: Vec::new(),
			all_of: Vec::new(),
			none_of: Vec::new(),
			or_filters: Vec::new(),
			and_filters: Vec::new(),
			tx_hashes: None,
			numeric_range: None,
		}
	}
}

impl AdvancedFilter {
	/// Visits this filter and every nested filter.
	pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a AdvancedFilter)) {
		visit(self);
		for nested in self.or_filters.iter().chain(self.and_filters.iter()) {
			nested.walk(visit);
		}
	}

	/// All conditions of this filter and its nested filters.
	pub fn all_conditions(&self) -> Vec<&Condition> {
		let mut conditions = Vec::new();
		self.walk(&mut |filter| {
			conditions.extend(
				filter
					.any_of
					.iter()
					.chain(filter.all_of.iter())
					.chain(filter.none_of.iter()),
			);
		});
		conditions
	}
}
