use base64::{engine::general_purpose::STANDARD, Engine as _};
use cosmos_tx_monitor::{
	models::RawAttribute,
	services::decoder::{AttributeCodec, EventDecoder},
};
use proptest::prelude::*;

use crate::properties::strategies::{
	address_strategy, chain, plain_text_strategy, printable_strategy,
};

proptest! {
	#[test]
	fn decode_recovers_encoded_text(text in printable_strategy()) {
		let codec = AttributeCodec::new(&chain());
		prop_assert_eq!(codec.decode(&STANDARD.encode(&text)), text);
	}

	#[test]
	fn plain_text_is_left_alone(text in plain_text_strategy()) {
		let codec = AttributeCodec::new(&chain());
		prop_assert!(!codec.is_likely_encoded(&text));
		prop_assert_eq!(codec.decode_if_encoded(&text), text.clone());
		prop_assert_eq!(codec.decode_address_aware("memo", &text), text);
	}

	#[test]
	fn plain_numbers_are_left_alone(number in "[0-9]{1,12}", key in "[a-z_]{3,16}") {
		let codec = AttributeCodec::new(&chain());
		prop_assert!(!codec.is_likely_encoded(&number));
		prop_assert_eq!(codec.decode_address_aware(&key, &number), number.clone());

		let decoder = EventDecoder::new(codec);
		let decoded = decoder.decode_attribute(&RawAttribute::new("pool_id", number.clone(), true));
		prop_assert_eq!(decoded.decoded_value, number);
	}

	#[test]
	fn addresses_survive_address_aware_decoding(
		address in address_strategy(),
		key in prop::sample::select(vec!["sender", "recipient", "receiver", "delegator", "spender"]),
	) {
		let codec = AttributeCodec::new(&chain());
		prop_assert!(codec.is_address(&address));
		prop_assert_eq!(codec.decode_address_aware(key, &address), address.clone());
		prop_assert_eq!(codec.decode_address_aware(key, &STANDARD.encode(&address)), address);
	}

	#[test]
	fn decoding_is_idempotent(address in address_strategy(), text in printable_strategy()) {
		let decoder = EventDecoder::new(AttributeCodec::new(&chain()));
		let raw = RawAttribute::new(STANDARD.encode("sender"), STANDARD.encode(&address), true);
		let once = decoder.decode_attribute(&raw);
		let again = decoder.decode_attribute(&RawAttribute::new(
			once.decoded_key.clone(),
			once.decoded_value.clone(),
			true,
		));
		prop_assert_eq!(&once.decoded_key, "sender");
		prop_assert_eq!(&once.decoded_value, &address);
		prop_assert_eq!(again.decoded_value, address);

		let codec = decoder.codec();
		let decoded = codec.decode(&STANDARD.encode(&text));
		prop_assert_eq!(codec.decode_address_aware("sender", &decoded), decoded.clone());
		prop_assert_eq!(decoded, text);
	}
}
