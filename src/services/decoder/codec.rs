//! Conditional base64 attribute decoding.
//!
//! Older CometBFT nodes deliver attribute keys and values base64 encoded,
//! newer ones deliver plain text, and some producers mix both within one
//! event. Whether a string is encoded is decided per string by a heuristic.
//!
//! The heuristic is a known source of misclassification. Strings shorter than
//! `SHORT_TOKEN_LEN` that look like lowercase identifiers are never decoded,
//! so a short encoded token made only of lowercase letters, digits and
//! underscores stays encoded. Longer plain strings drawn from the base64
//! alphabet that happen to decode to printable text are decoded. Strings with
//! a leading digit are never decoded, which keeps plain pool ids, sequences and
//! amounts intact at the cost of leaving encoded non-ASCII text that starts
//! with a digit undecoded. Address detection downstream depends on this exact
//! threshold.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::models::ChainConfig;

/// Strings shorter than this that look like identifiers are left as-is.
const SHORT_TOKEN_LEN: usize = 10;

const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Attribute keys whose values are account, validator or contract addresses.
const ADDRESS_KEYS: &[&str] = &[
	"sender",
	"recipient",
	"receiver",
	"delegator",
	"validator",
	"spender",
	"source_validator",
	"destination_validator",
	"withdraw_address",
	"granter",
	"grantee",
	"contract_address",
	"_contract_address",
];

/// Decoder for attribute strings of one chain.
///
/// The address pattern is `<prefix>[valoper|valcons]1<data>` where `data` is
/// drawn from the bech32 charset and its length lies within the configured
/// bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeCodec {
	bech32_prefix: String,
	address_min_length: usize,
	address_max_length: usize,
}

impl AttributeCodec {
	pub fn new(chain: &ChainConfig) -> Self {
		Self {
			bech32_prefix: chain.bech32_prefix.clone(),
			address_min_length: chain.address_min_length,
			address_max_length: chain.address_max_length,
		}
	}

	pub fn bech32_prefix(&self) -> &str {
		&self.bech32_prefix
	}

	/// Best-effort guess whether `s` is base64 of printable text.
	pub fn is_likely_encoded(&self, s: &str) -> bool {
		if s.is_empty() || !s.chars().all(is_base64_char) {
			return false;
		}
		// Base64 of ASCII text starts with one of `A`..=`f`.
		if s.starts_with(|c: char| c.is_ascii_digit()) {
			return false;
		}
		if s.len() < SHORT_TOKEN_LEN && is_identifier_like(s) {
			return false;
		}
		try_decode(s).is_some()
	}

	/// Decodes `s`, returning it unchanged when it is not base64 of printable
	/// UTF-8 text.
	pub fn decode(&self, s: &str) -> String {
		try_decode(s).unwrap_or_else(|| s.to_string())
	}

	/// Decodes `s` only when it looks encoded.
	pub fn decode_if_encoded(&self, s: &str) -> String {
		if self.is_likely_encoded(s) {
			self.decode(s)
		} else {
			s.to_string()
		}
	}

	pub fn is_address(&self, s: &str) -> bool {
		let Some(rest) = s.strip_prefix(self.bech32_prefix.as_str()) else {
			return false;
		};
		let rest = rest
			.strip_prefix("valoper")
			.or_else(|| rest.strip_prefix("valcons"))
			.unwrap_or(rest);
		let Some(data) = rest.strip_prefix('1') else {
			return false;
		};
		(self.address_min_length..=self.address_max_length).contains(&data.len())
			&& data.chars().all(|c| BECH32_CHARSET.contains(c))
	}

	pub fn is_address_key(key: &str) -> bool {
		ADDRESS_KEYS.contains(&key)
	}

	/// Decodes `value` of attribute `key`, never corrupting an address.
	///
	/// For address keys a value that already is an address is returned
	/// unchanged, and a decoded form is only accepted when it is an address.
	pub fn decode_address_aware(&self, key: &str, value: &str) -> String {
		if !Self::is_address_key(key) {
			return self.decode_if_encoded(value);
		}
		if self.is_address(value) {
			return value.to_string();
		}
		match try_decode(value) {
			Some(decoded) if self.is_address(&decoded) => decoded,
			_ => value.to_string(),
		}
	}
}

fn is_base64_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}

fn is_identifier_like(s: &str) -> bool {
	let mut chars = s.chars();
	matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
		&& chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn try_decode(s: &str) -> Option<String> {
	let bytes = STANDARD.decode(s).ok()?;
	let text = String::from_utf8(bytes).ok()?;
	if text.is_empty() || text.chars().any(char::is_control) {
		return None;
	}
	Some(text)
}
