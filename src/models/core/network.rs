use serde::{Deserialize, Serialize};

use crate::models::ChainKind;

pub const DEFAULT_ADDRESS_MIN_LENGTH: usize = 38;
pub const DEFAULT_ADDRESS_MAX_LENGTH: usize = 58;
pub const DEFAULT_SUBSCRIPTION_QUERY: &str = "tm.event='Tx'";

/// Chain whose events are processed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainConfig {
	pub chain_id: String,
	/// Human readable part of account addresses, e.g. `osmo`
	pub bech32_prefix: String,
	/// Minimum length of the bech32 data part after the `1` separator
	#[serde(default = "default_address_min_length")]
	pub address_min_length: usize,
	/// Maximum length of the bech32 data part after the `1` separator
	#[serde(default = "default_address_max_length")]
	pub address_max_length: usize,
}

fn default_address_min_length() -> usize {
	DEFAULT_ADDRESS_MIN_LENGTH
}

fn default_address_max_length() -> usize {
	DEFAULT_ADDRESS_MAX_LENGTH
}

impl ChainConfig {
	pub fn new(chain_id: impl Into<String>, bech32_prefix: impl Into<String>) -> Self {
		Self {
			chain_id: chain_id.into(),
			bech32_prefix: bech32_prefix.into(),
			address_min_length: DEFAULT_ADDRESS_MIN_LENGTH,
			address_max_length: DEFAULT_ADDRESS_MAX_LENGTH,
		}
	}

	pub fn kind(&self) -> ChainKind {
		ChainKind::from_chain_id(&self.chain_id)
	}
}

/// Node subscription endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WebsocketConfig {
	pub url: String,
	#[serde(default = "default_query")]
	pub query: String,
	#[serde(default = "default_reconnect_delay_ms")]
	pub reconnect_delay_ms: u64,
	#[serde(default = "default_max_reconnect_attempts")]
	pub max_reconnect_attempts: u32,
}

fn default_query() -> String {
	DEFAULT_SUBSCRIPTION_QUERY.to_string()
}

fn default_reconnect_delay_ms() -> u64 {
	5000
}

fn default_max_reconnect_attempts() -> u32 {
	10
}

impl WebsocketConfig {
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			query: default_query(),
			reconnect_delay_ms: default_reconnect_delay_ms(),
			max_reconnect_attempts: default_max_reconnect_attempts(),
		}
	}
}
