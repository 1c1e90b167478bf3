use crate::{
	models::{AttributeProvenance, DecodedEvent, RawAttribute, RawEvent},
	services::decoder::AttributeCodec,
};

/// Applies the attribute codec to every attribute of every event.
#[derive(Debug, Clone)]
pub struct EventDecoder {
	codec: AttributeCodec,
}

impl EventDecoder {
	pub fn new(codec: AttributeCodec) -> Self {
		Self { codec }
	}

	pub fn codec(&self) -> &AttributeCodec {
		&self.codec
	}

	pub fn decode(&self, events: &[RawEvent]) -> Vec<DecodedEvent> {
		events.iter().map(|event| self.decode_event(event)).collect()
	}

	pub fn decode_event(&self, event: &RawEvent) -> DecodedEvent {
		DecodedEvent::from_provenance(
			event.event_type.clone(),
			event.attributes.iter().map(|attr| self.decode_attribute(attr)),
		)
	}

	/// Key and value are decoded independently. Values of address keys go
	/// through address-aware decoding starting from the raw value.
	pub fn decode_attribute(&self, attribute: &RawAttribute) -> AttributeProvenance {
		let decoded_key = self.codec.decode_if_encoded(&attribute.key);
		let decoded_value = if AttributeCodec::is_address_key(&decoded_key) {
			self.codec
				.decode_address_aware(&decoded_key, &attribute.value)
		} else {
			self.codec.decode_if_encoded(&attribute.value)
		};
		AttributeProvenance {
			raw_key: attribute.key.clone(),
			raw_value: attribute.value.clone(),
			decoded_key,
			decoded_value,
		}
	}
}
