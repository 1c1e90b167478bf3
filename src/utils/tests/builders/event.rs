use crate::models::{DecodedEvent, RawAttribute, RawEvent};

/// A builder for creating test events.
///
/// Builds either a `DecodedEvent` with plain provenance or the equivalent
/// `RawEvent` as a node would deliver it.
#[derive(Debug, Clone)]
pub struct EventBuilder {
	event_type: String,
	attributes: Vec<(String, String)>,
}

impl Default for EventBuilder {
	fn default() -> Self {
		Self::new("message")
	}
}

impl EventBuilder {
	pub fn new(event_type: impl Into<String>) -> Self {
		Self {
			event_type: event_type.into(),
			attributes: Vec::new(),
		}
	}

	/// Appends an attribute; repeated keys accumulate values.
	pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.push((key.into(), value.into()));
		self
	}

	/// Shorthand for a `message` event with the given action.
	pub fn message(action: &str) -> Self {
		Self::new("message").attribute("action", action)
	}

	pub fn build(self) -> DecodedEvent {
		let mut event = DecodedEvent::new(self.event_type);
		for (key, value) in self.attributes {
			event.push_plain(key, value);
		}
		event
	}

	pub fn build_raw(self) -> RawEvent {
		RawEvent {
			event_type: self.event_type,
			attributes: self
				.attributes
				.into_iter()
				.map(|(key, value)| RawAttribute::new(key, value, true))
				.collect(),
		}
	}
}
