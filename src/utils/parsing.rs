//! Parsing utilities
//!
//! Helpers for the loosely formatted strings found in Cosmos event
//! attributes: coin amounts such as `100uosmo` or
//! `5ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2`,
//! and message type URLs such as `/cosmos.staking.v1beta1.MsgDelegate`.

/// Splits a coin string into its leading digits and the remaining denom.
///
/// Only the first coin of a comma separated list is considered. A string
/// without leading digits yields `(raw, "")`.
pub fn split_amount(raw: &str) -> (String, String) {
	let coin = raw.split(',').next().unwrap_or_default().trim();
	let digits = coin.bytes().take_while(u8::is_ascii_digit).count();
	if digits == 0 {
		return (raw.to_string(), String::new());
	}
	let (amount, denom) = coin.split_at(digits);
	(amount.to_string(), denom.to_string())
}

/// Removes alphabetic characters and slashes from an amount string.
///
/// Falls back to the raw string when nothing is left. Digits inside an
/// `ibc/<hash>` denom survive, so the result is only best-effort.
pub fn strip_amount(raw: &str) -> String {
	let stripped: String = raw
		.chars()
		.filter(|c| !c.is_alphabetic() && *c != '/')
		.collect();
	if stripped.is_empty() {
		raw.to_string()
	} else {
		stripped
	}
}

/// Parses the number a string starts with, e.g. `12.5` from `12.5uusd`.
pub fn leading_number(raw: &str) -> Option<f64> {
	let raw = raw.trim();
	let mut end = 0;
	let mut seen_dot = false;
	for (i, c) in raw.char_indices() {
		match c {
			'0'..='9' => end = i + 1,
			'-' if i == 0 => {}
			'.' if !seen_dot => seen_dot = true,
			_ => break,
		}
	}
	raw[..end].parse().ok()
}

/// Last dot separated segment of a message type URL.
///
/// `/cosmos.staking.v1beta1.MsgDelegate` yields `MsgDelegate`; legacy
/// action names such as `delegate` are returned unchanged.
pub fn action_name(action: &str) -> &str {
	action.rsplit('.').next().unwrap_or(action)
}
