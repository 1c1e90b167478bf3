use std::collections::{HashMap, HashSet};

use crate::{
	models::{DecodedTransaction, FilterTier, MatchEvidence},
	services::filter::filters::TierFilter,
};

/// Matches decoded attribute values against externally loaded lists.
///
/// A list configured under `recipient` also applies to `receiver`
/// attributes.
pub struct AttributeListFilter {
	lists: HashMap<String, HashSet<String>>,
}

impl AttributeListFilter {
	pub fn new(lists: HashMap<String, HashSet<String>>) -> Self {
		Self { lists }
	}

	fn allowed_for(&self, key: &str) -> impl Iterator<Item = &HashSet<String>> {
		let alias = (key == "receiver").then(|| self.lists.get("recipient")).flatten();
		self.lists.get(key).into_iter().chain(alias)
	}
}

impl TierFilter for AttributeListFilter {
	fn tier(&self) -> FilterTier {
		FilterTier::AttributeList
	}

	fn is_configured(&self) -> bool {
		!self.lists.is_empty()
	}

	fn evaluate(&self, tx: &DecodedTransaction) -> Vec<MatchEvidence> {
		let mut evidence = Vec::new();
		for event in &tx.events {
			for (key, values) in &event.attributes {
				for allowed in self.allowed_for(key) {
					for value in values.iter().filter(|v| allowed.contains(*v)) {
						let matched = MatchEvidence::Attribute {
							event_type: event.event_type.clone(),
							key: key.clone(),
							value: value.clone(),
						};
						if !evidence.contains(&matched) {
							evidence.push(matched);
						}
					}
				}
			}
		}
		evidence
	}
}
