use crate::models::{DecodedEvent, TransferFacts};

/// Collects every `sender`, `receiver`, `recipient`, `spender` and `amount`
/// value from all events, whatever their type.
pub fn extract_transfers(events: &[DecodedEvent]) -> TransferFacts {
	let mut facts = TransferFacts::default();
	for event in events {
		for (key, values) in &event.attributes {
			let target = match key.as_str() {
				"sender" => &mut facts.senders,
				"receiver" => &mut facts.receivers,
				"recipient" => &mut facts.recipients,
				"spender" => &mut facts.spenders,
				"amount" => &mut facts.amounts,
				_ => continue,
			};
			target.extend(values.iter().cloned());
		}
	}
	facts
}
