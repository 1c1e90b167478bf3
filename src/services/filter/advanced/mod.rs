//! Advanced boolean filters.
//!
//! Configured and evaluated independently of the basic tiers. Each filter is
//! a recursive predicate; a transaction matches the engine when any filter
//! holds. Regex patterns are compiled once when the engine is built.

mod condition;

pub use condition::CompiledCondition;

use std::collections::HashSet;

use crate::{
	models::{
		AdvancedFilter, DecodedEvent, DecodedTransaction, FilterTier, MatchEvidence, MatchedFilter,
		NumericRange,
	},
	utils::parsing::leading_number,
};

const HEIGHT_FIELD: &str = "height";

#[derive(Debug, Clone)]
struct CompiledFilter {
	name: String,
	event_type: Option<String>,
	message_types: Option<Vec<String>>,
	any_of: Vec<CompiledCondition>,
	all_of: Vec<CompiledCondition>,
	none_of: Vec<CompiledCondition>,
	or_filters: Vec<CompiledFilter>,
	and_filters: Vec<CompiledFilter>,
	tx_hashes: Option<HashSet<String>>,
	numeric_range: Option<NumericRange>,
}

impl CompiledFilter {
	fn compile(filter: &AdvancedFilter) -> Self {
		let name = filter.name.clone();
		let mut on_invalid = |pattern: &str, error: &regex::Error| {
			tracing::warn!(
				filter = %name,
				pattern = %pattern,
				error = %error,
				"Invalid regex pattern in advanced filter, condition will not match"
			);
		};
		let mut compile_all = |conditions: &[crate::models::Condition]| {
			conditions
				.iter()
				.map(|c| CompiledCondition::compile(c, &mut on_invalid))
				.collect::<Vec<_>>()
		};
		let any_of = compile_all(&filter.any_of);
		let all_of = compile_all(&filter.all_of);
		let none_of = compile_all(&filter.none_of);

		Self {
			name: filter.name.clone(),
			event_type: filter.event_type.clone(),
			message_types: filter.message_types.clone(),
			any_of,
			all_of,
			none_of,
			or_filters: filter.or_filters.iter().map(Self::compile).collect(),
			and_filters: filter.and_filters.iter().map(Self::compile).collect(),
			tx_hashes: filter.tx_hashes.clone(),
			numeric_range: filter.numeric_range.clone(),
		}
	}

	fn matches(&self, tx: &DecodedTransaction) -> bool {
		if let Some(hashes) = &self.tx_hashes {
			let known = tx
				.tx_hash
				.as_deref()
				.is_some_and(|hash| hashes.iter().any(|h| h.eq_ignore_ascii_case(hash)));
			if !known {
				return false;
			}
		}

		if let Some(range) = &self.numeric_range {
			if !in_range(range, tx) {
				return false;
			}
		}

		if !self.or_filters.is_empty() && !self.or_filters.iter().any(|f| f.matches(tx)) {
			return false;
		}
		if !self.and_filters.iter().all(|f| f.matches(tx)) {
			return false;
		}

		let candidates: Vec<&DecodedEvent> = match &self.event_type {
			Some(event_type) => tx.events_of_type(event_type).collect(),
			None => tx.events.iter().collect(),
		};
		if self.event_type.is_some() && candidates.is_empty() {
			return false;
		}

		let holds_anywhere =
			|condition: &CompiledCondition| candidates.iter().any(|event| condition.holds(event));

		if !self.any_of.is_empty() && !self.any_of.iter().any(holds_anywhere) {
			return false;
		}
		if !self.all_of.iter().all(holds_anywhere) {
			return false;
		}
		if self.none_of.iter().any(holds_anywhere) {
			return false;
		}

		match &self.message_types {
			Some(types) if !types.is_empty() => candidates.iter().any(|event| {
				event.is_type("message")
					&& event
						.values("action")
						.iter()
						.any(|action| types.iter().any(|t| action.contains(t.as_str())))
			}),
			_ => true,
		}
	}
}

/// `height` bounds the block height; any other field bounds the leading
/// number of some value of that attribute key.
fn in_range(range: &NumericRange, tx: &DecodedTransaction) -> bool {
	if range.field == HEIGHT_FIELD {
		return range.contains(tx.height as f64);
	}
	tx.events
		.iter()
		.flat_map(|event| event.values(&range.field))
		.filter_map(|value| leading_number(value))
		.any(|value| range.contains(value))
}

/// Evaluates a list of advanced filters.
#[derive(Debug, Clone, Default)]
pub struct AdvancedFilterEngine {
	filters: Vec<CompiledFilter>,
}

impl AdvancedFilterEngine {
	pub fn new(filters: &[AdvancedFilter]) -> Self {
		Self {
			filters: filters.iter().map(CompiledFilter::compile).collect(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}

	pub fn len(&self) -> usize {
		self.filters.len()
	}

	/// Names of the top-level filters that hold for `tx`.
	pub fn matching_filters(&self, tx: &DecodedTransaction) -> Vec<&str> {
		self.filters
			.iter()
			.filter(|filter| filter.matches(tx))
			.map(|filter| filter.name.as_str())
			.collect()
	}

	pub fn matches_any(&self, tx: &DecodedTransaction) -> bool {
		self.filters.iter().any(|filter| filter.matches(tx))
	}

	/// Evidence for every matching filter.
	pub fn evaluate(&self, tx: &DecodedTransaction) -> Vec<MatchedFilter> {
		self.matching_filters(tx)
			.into_iter()
			.map(|name| {
				MatchedFilter::new(
					FilterTier::Advanced,
					MatchEvidence::Advanced {
						filter_name: name.to_string(),
					},
				)
			})
			.collect()
	}
}
