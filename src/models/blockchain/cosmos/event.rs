//! ABCI event structures before and after attribute decoding.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute exactly as the node delivered it. Key and value may or may not be
/// base64 encoded depending on the node version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawAttribute {
	pub key: String,
	#[serde(default)]
	pub value: String,
	#[serde(default, alias = "index")]
	pub indexed: bool,
}

impl RawAttribute {
	pub fn new(key: impl Into<String>, value: impl Into<String>, indexed: bool) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
			indexed,
		}
	}
}

/// Event exactly as the node delivered it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawEvent {
	#[serde(rename = "type")]
	pub event_type: String,
	#[serde(default)]
	pub attributes: Vec<RawAttribute>,
}

/// Raw and decoded form of one attribute, kept for auditing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttributeProvenance {
	pub raw_key: String,
	pub raw_value: String,
	pub decoded_key: String,
	pub decoded_value: String,
}

/// Event with decoded attributes.
///
/// `attributes` is always derived from `provenance`: every provenance entry
/// contributes its decoded value to the list under its decoded key. Keys keep
/// the order in which they were first seen and values keep append order.
/// Duplicates are retained.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecodedEvent {
	#[serde(rename = "type")]
	pub event_type: String,
	pub attributes: IndexMap<String, Vec<String>>,
	pub provenance: Vec<AttributeProvenance>,
}

impl DecodedEvent {
	/// Creates an event with no attributes.
	pub fn new(event_type: impl Into<String>) -> Self {
		Self {
			event_type: event_type.into(),
			attributes: IndexMap::new(),
			provenance: Vec::new(),
		}
	}

	/// Builds an event from provenance records, deriving the attribute map.
	pub fn from_provenance(
		event_type: impl Into<String>,
		provenance: impl IntoIterator<Item = AttributeProvenance>,
	) -> Self {
		let mut event = Self::new(event_type);
		for entry in provenance {
			event.push(entry);
		}
		event
	}

	/// Appends one decoded attribute.
	pub fn push(&mut self, entry: AttributeProvenance) {
		self.attributes
			.entry(entry.decoded_key.clone())
			.or_default()
			.push(entry.decoded_value.clone());
		self.provenance.push(entry);
	}

	/// Appends an attribute that never had an encoded form (synthetic events).
	pub fn push_plain(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();
		self.push(AttributeProvenance {
			raw_key: key.clone(),
			raw_value: value.clone(),
			decoded_key: key,
			decoded_value: value,
		});
	}

	/// All decoded values for `key`, empty when absent.
	pub fn values(&self, key: &str) -> &[String] {
		self.attributes
			.get(key)
			.map(|values| values.as_slice())
			.unwrap_or(&[])
	}

	/// First decoded value for `key`.
	pub fn first(&self, key: &str) -> Option<&str> {
		self.values(key).first().map(String::as_str)
	}

	pub fn has(&self, key: &str) -> bool {
		self.attributes.contains_key(key)
	}

	pub fn is_type(&self, event_type: &str) -> bool {
		self.event_type == event_type
	}
}
