use regex::Regex;

use crate::models::{Condition, DecodedEvent, MatchStrategy};

/// A condition with its regex patterns compiled.
///
/// Patterns that failed to compile are kept as `None` and never match.
#[derive(Debug, Clone)]
pub struct CompiledCondition {
	condition: Condition,
	patterns: Vec<Option<Regex>>,
}

impl CompiledCondition {
	/// Compiles `condition`, reporting each invalid pattern to `on_invalid`.
	pub fn compile(condition: &Condition, on_invalid: &mut dyn FnMut(&str, &regex::Error)) -> Self {
		let patterns = match condition.strategy {
			MatchStrategy::Regex => condition
				.values
				.iter()
				.map(|pattern| match Regex::new(pattern) {
					Ok(regex) => Some(regex),
					Err(e) => {
						on_invalid(pattern, &e);
						None
					}
				})
				.collect(),
			_ => Vec::new(),
		};
		Self {
			condition: condition.clone(),
			patterns,
		}
	}

	pub fn key(&self) -> &str {
		&self.condition.key
	}

	/// Tests this condition against one event.
	///
	/// A missing key yields `negated`. Without expected values the condition
	/// checks that the key exists. Otherwise any pairing of an attribute value
	/// with an expected value matching under the strategy makes the condition
	/// true before negation.
	pub fn holds(&self, event: &DecodedEvent) -> bool {
		let negated = self.condition.negated;
		if !event.has(&self.condition.key) {
			return negated;
		}
		if self.condition.values.is_empty() {
			return !negated;
		}
		let matched = event
			.values(&self.condition.key)
			.iter()
			.any(|actual| self.matches_value(actual));
		matched != negated
	}

	fn matches_value(&self, actual: &str) -> bool {
		match self.condition.strategy {
			MatchStrategy::Exact => self.condition.values.iter().any(|v| actual == v),
			MatchStrategy::Contains => self
				.condition
				.values
				.iter()
				.any(|v| actual.contains(v.as_str())),
			MatchStrategy::StartsWith => self
				.condition
				.values
				.iter()
				.any(|v| actual.starts_with(v.as_str())),
			MatchStrategy::EndsWith => self
				.condition
				.values
				.iter()
				.any(|v| actual.ends_with(v.as_str())),
			MatchStrategy::Regex => self
				.patterns
				.iter()
				.flatten()
				.any(|regex| regex.is_match(actual)),
		}
	}
}
