//! Service configuration file.
//!
//! One JSON document naming the chain, the node subscription endpoint, the
//! basic filter tiers and the advanced filters.

use std::{
	collections::{HashMap, HashSet},
	fs,
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::models::{
	config::error::ConfigError, AdvancedFilter, ChainConfig, ConfigLoader, EventFilter,
	WebsocketConfig,
};

/// Basic filter tiers as written in the config file.
///
/// `filter_lists` maps a decoded attribute key to a filter list file and
/// `filter_list_dir` names a directory whose `*.json` lists are keyed by file
/// stem. Both are resolved into a `FilterSpec` before processing starts; a
/// file named in `filter_lists` wins over a directory list with the same key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
	pub filter_lists: HashMap<String, PathBuf>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub filter_list_dir: Option<PathBuf>,
	pub wallet_addresses: HashSet<String>,
	pub wasm_contract_addresses: HashSet<String>,
	pub event_filters: Vec<EventFilter>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
	pub chain: ChainConfig,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub websocket: Option<WebsocketConfig>,
	/// Drop oracle aggregate-vote messages before decoding
	#[serde(default = "default_suppress_oracle_votes")]
	pub suppress_oracle_votes: bool,
	#[serde(default)]
	pub filters: FilterConfig,
	#[serde(default)]
	pub advanced_filters: Vec<AdvancedFilter>,
}

fn default_suppress_oracle_votes() -> bool {
	true
}

impl AppConfig {
	pub fn new(chain: ChainConfig) -> Self {
		Self {
			chain,
			websocket: None,
			suppress_oracle_votes: default_suppress_oracle_votes(),
			filters: FilterConfig::default(),
			advanced_filters: Vec::new(),
		}
	}

	/// Applies command line chain overrides and re-validates.
	///
	/// The bech32 prefix is not derived from the chain id, so overriding only
	/// the chain id keeps the configured prefix for address detection.
	pub fn override_chain(
		&mut self,
		chain_id: Option<&str>,
		bech32_prefix: Option<&str>,
	) -> Result<(), ConfigError> {
		if chain_id.is_none() && bech32_prefix.is_none() {
			return Ok(());
		}
		if let Some(chain_id) = chain_id {
			self.chain.chain_id = chain_id.to_string();
		}
		match bech32_prefix {
			Some(prefix) => self.chain.bech32_prefix = prefix.to_string(),
			None => tracing::warn!(
				chain_id = %self.chain.chain_id,
				bech32_prefix = %self.chain.bech32_prefix,
				"Chain id overridden without a prefix, keeping the configured bech32 prefix"
			),
		}
		self.validate()
	}
}

impl ConfigLoader for AppConfig {
	const DEFAULT_DIR: &'static str = "config";

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let content = fs::read_to_string(path).map_err(|e| {
			ConfigError::file_error(format!("failed to read {}: {}", path.display(), e))
		})?;
		let config: AppConfig = serde_json::from_str(&content)?;
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		let chain = &self.chain;
		if chain.chain_id.trim().is_empty() {
			return Err(ConfigError::validation_error("chain_id is required"));
		}

		if chain.bech32_prefix.is_empty()
			|| !chain
				.bech32_prefix
				.chars()
				.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
		{
			return Err(ConfigError::validation_error(format!(
				"bech32_prefix must be lowercase alphanumeric, got '{}'",
				chain.bech32_prefix
			)));
		}

		if chain.address_min_length > chain.address_max_length {
			return Err(ConfigError::validation_error(format!(
				"address_min_length ({}) exceeds address_max_length ({})",
				chain.address_min_length, chain.address_max_length
			)));
		}

		if let Some(ws) = &self.websocket {
			let url = url::Url::parse(&ws.url).map_err(|e| {
				ConfigError::validation_error(format!("invalid websocket url '{}': {}", ws.url, e))
			})?;
			if !matches!(url.scheme(), "ws" | "wss") {
				return Err(ConfigError::validation_error(format!(
					"websocket url must use ws or wss, got '{}'",
					url.scheme()
				)));
			}
			if ws.query.trim().is_empty() {
				return Err(ConfigError::validation_error(
					"websocket query must not be empty",
				));
			}
		}

		for (index, filter) in self.filters.event_filters.iter().enumerate() {
			if filter.event_types.is_none() && filter.attribute_constraints.is_none() {
				return Err(ConfigError::validation_error(format!(
					"event filter {} has neither event_types nor attribute_constraints",
					index
				)));
			}
		}

		Ok(())
	}
}
