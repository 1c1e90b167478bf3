//! Transaction payload extraction from subscription messages.
//!
//! Nodes of different versions wrap the same transaction result in different
//! JSON shapes. A message is either the bare subscription result or a
//! JSON-RPC response holding it under `result`; in both cases the payload
//! lives at `data.value.TxResult`. Events come from the structured list at
//! `TxResult.result.events` or, when that is empty, from the flattened
//! `"<type>.<attribute>" -> [values]` map the node sends beside it.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::models::{RawAttribute, RawEvent, TransactionEnvelope, DEFAULT_GAS};

/// Flattened key whose presence marks an oracle price vote.
pub const ORACLE_VOTE_KEY: &str = "aggregate_vote.exchange_rates";
const ORACLE_VOTE_EVENT: &str = "aggregate_vote";
const TX_HASH_KEY: &str = "tx.hash";
const TX_HEIGHT_KEY: &str = "tx.height";

/// Locates the transaction payload inside one subscription message.
///
/// Returns `None` for messages without a transaction payload, such as
/// subscription acknowledgements.
pub fn extract_envelope(message: &Value) -> Option<TransactionEnvelope> {
	let result = subscription_result(message);
	let tx_result = result.pointer("/data/value/TxResult")?;

	let flattened = flattened_events(message);
	let tx_hash = resolve_tx_hash(message, result, tx_result);

	let mut events = tx_result
		.pointer("/result/events")
		.and_then(Value::as_array)
		.map(|events| events.iter().filter_map(raw_event_from_value).collect())
		.unwrap_or_else(Vec::new);
	if events.is_empty() {
		if let Some(map) = flattened {
			events = events_from_flattened(map);
		}
	}

	let height = tx_result
		.get("height")
		.and_then(number_like)
		.or_else(|| flattened.and_then(|map| first_flattened(map, TX_HEIGHT_KEY)?.parse().ok()))
		.unwrap_or(0);

	let inner = tx_result.get("result");
	Some(TransactionEnvelope {
		height,
		tx_hash,
		index: tx_result
			.get("index")
			.and_then(number_like)
			.and_then(|i| u32::try_from(i).ok()),
		tx: tx_result.get("tx").and_then(Value::as_str).map(str::to_string),
		code: inner
			.and_then(|r| r.get("code"))
			.and_then(number_like)
			.and_then(|c| u32::try_from(c).ok())
			.unwrap_or(0),
		log: inner
			.and_then(|r| r.get("log"))
			.and_then(Value::as_str)
			.unwrap_or_default()
			.to_string(),
		gas_wanted: gas_field(inner, "gas_wanted"),
		gas_used: gas_field(inner, "gas_used"),
		events,
	})
}

/// Whether the message carries an oracle aggregate vote.
pub fn is_oracle_vote(message: &Value) -> bool {
	let result = subscription_result(message);
	let flagged = [result.get("events"), message.get("events")]
		.into_iter()
		.flatten()
		.filter_map(Value::as_object)
		.any(|map| map.contains_key(ORACLE_VOTE_KEY));
	if flagged {
		return true;
	}
	result
		.pointer("/data/value/TxResult/result/events")
		.and_then(Value::as_array)
		.is_some_and(|events| {
			events
				.iter()
				.any(|event| event.get("type").and_then(Value::as_str) == Some(ORACLE_VOTE_EVENT))
		})
}

fn subscription_result(message: &Value) -> &Value {
	message.get("result").unwrap_or(message)
}

/// The flattened event map, from the subscription result or the root.
fn flattened_events(message: &Value) -> Option<&Map<String, Value>> {
	subscription_result(message)
		.get("events")
		.and_then(Value::as_object)
		.or_else(|| message.get("events").and_then(Value::as_object))
}

fn resolve_tx_hash(message: &Value, result: &Value, tx_result: &Value) -> Option<String> {
	let candidates = [
		tx_result.get("hash"),
		result.pointer("/data/value/hash"),
		tx_result.pointer("/result/hash"),
	];
	candidates
		.into_iter()
		.flatten()
		.find_map(non_empty_str)
		.or_else(|| {
			[result.get("events"), message.get("events")]
				.into_iter()
				.flatten()
				.filter_map(Value::as_object)
				.find_map(|map| first_flattened(map, TX_HASH_KEY))
		})
}

fn first_flattened(map: &Map<String, Value>, key: &str) -> Option<String> {
	match map.get(key)? {
		Value::Array(values) => values.iter().find_map(non_empty_str),
		other => non_empty_str(other),
	}
}

fn non_empty_str(value: &Value) -> Option<String> {
	value
		.as_str()
		.filter(|s| !s.is_empty())
		.map(str::to_string)
}

/// Reads an unsigned number sent either as a JSON number or a string.
fn number_like(value: &Value) -> Option<u64> {
	match value {
		Value::Number(n) => n.as_u64(),
		Value::String(s) => s.parse().ok(),
		_ => None,
	}
}

fn gas_field(result: Option<&Value>, key: &str) -> String {
	match result.and_then(|r| r.get(key)) {
		Some(Value::String(s)) if !s.is_empty() => s.clone(),
		Some(Value::Number(n)) => n.to_string(),
		_ => DEFAULT_GAS.to_string(),
	}
}

/// Parses one structured event, tolerating missing or null fields.
fn raw_event_from_value(value: &Value) -> Option<RawEvent> {
	let event_type = value.get("type")?.as_str()?.to_string();
	let attributes = value
		.get("attributes")
		.and_then(Value::as_array)
		.map(|attrs| {
			attrs
				.iter()
				.filter_map(|attr| {
					let key = attr.get("key")?.as_str()?;
					let value = attr.get("value").and_then(Value::as_str).unwrap_or_default();
					let indexed = attr
						.get("index")
						.or_else(|| attr.get("indexed"))
						.and_then(Value::as_bool)
						.unwrap_or(false);
					Some(RawAttribute::new(key, value, indexed))
				})
				.collect()
		})
		.unwrap_or_default();
	Some(RawEvent {
		event_type,
		attributes,
	})
}

/// Rebuilds structured events from the flattened map.
///
/// Keys are split at their first dot into event type and attribute name.
/// Event types keep the order they were first discovered in; each value
/// becomes its own indexed attribute.
pub fn events_from_flattened(map: &Map<String, Value>) -> Vec<RawEvent> {
	let mut grouped: IndexMap<&str, Vec<RawAttribute>> = IndexMap::new();
	for (key, values) in map {
		let Some((event_type, attribute)) = key.split_once('.') else {
			tracing::debug!(key = %key, "Skipping flattened event key without a type");
			continue;
		};
		let attributes = grouped.entry(event_type).or_default();
		let values = match values {
			Value::Array(values) => values.as_slice(),
			single => std::slice::from_ref(single),
		};
		for value in values {
			let value = match value {
				Value::String(s) => s.clone(),
				Value::Null => continue,
				other => other.to_string(),
			};
			attributes.push(RawAttribute::new(attribute, value, true));
		}
	}
	grouped
		.into_iter()
		.map(|(event_type, attributes)| RawEvent {
			event_type: event_type.to_string(),
			attributes,
		})
		.collect()
}
