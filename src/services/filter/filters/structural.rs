use crate::{
	models::{DecodedEvent, DecodedTransaction, EventFilter, FilterTier, MatchEvidence},
	services::filter::filters::TierFilter,
};

/// Structural rules over event types and attribute values.
///
/// A rule matches an event when the event type is allowed and, if the rule
/// has attribute constraints, one constrained key of that same event carries
/// an allowed value. The tier passes when any rule matches any event.
pub struct EventStructureFilter {
	rules: Vec<EventFilter>,
}

impl EventStructureFilter {
	pub fn new(rules: Vec<EventFilter>) -> Self {
		Self { rules }
	}

	fn rule_matches(
		rule_index: usize,
		rule: &EventFilter,
		event: &DecodedEvent,
	) -> Option<MatchEvidence> {
		if let Some(types) = &rule.event_types {
			if !types.contains(&event.event_type) {
				return None;
			}
		}

		let attribute = match &rule.attribute_constraints {
			None => None,
			Some(constraints) => {
				let hit = constraints.iter().find_map(|(key, allowed)| {
					event
						.values(key)
						.iter()
						.find(|value| allowed.contains(*value))
						.map(|value| (key.clone(), value.clone()))
				})?;
				Some(hit)
			}
		};

		Some(MatchEvidence::EventRule {
			rule_index,
			event_type: event.event_type.clone(),
			attribute,
		})
	}
}

impl TierFilter for EventStructureFilter {
	fn tier(&self) -> FilterTier {
		FilterTier::EventStructure
	}

	fn is_configured(&self) -> bool {
		!self.rules.is_empty()
	}

	fn evaluate(&self, tx: &DecodedTransaction) -> Vec<MatchEvidence> {
		self.rules
			.iter()
			.enumerate()
			.filter_map(|(index, rule)| {
				tx.events
					.iter()
					.find_map(|event| Self::rule_matches(index, rule, event))
			})
			.collect()
	}
}
