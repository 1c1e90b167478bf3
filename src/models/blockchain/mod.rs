//! Blockchain-specific model implementations.
//!
//! Each submodule holds the block, transaction and event shapes of one
//! blockchain family. Only Cosmos SDK chains are supported; individual chains
//! are distinguished by `ChainKind`.

use serde::{Deserialize, Serialize};

pub mod cosmos;

/// Cosmos chains with dedicated event handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainKind {
	/// Any Cosmos SDK chain without special handling
	Generic,
	/// Osmosis DEX chain
	Osmosis,
	/// Terra / Terra Classic with CosmWasm pair contracts
	Terra,
}

impl ChainKind {
	/// Resolves the chain family from a chain id such as `osmosis-1` or
	/// `columbus-5`. Unknown ids resolve to `Generic`.
	pub fn from_chain_id(chain_id: &str) -> Self {
		match strip_revision(chain_id) {
			"osmosis" | "osmo-test" => Self::Osmosis,
			"phoenix" | "columbus" | "pisco" | "terra" => Self::Terra,
			_ => Self::Generic,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Generic => "generic",
			Self::Osmosis => "osmosis",
			Self::Terra => "terra",
		}
	}
}

/// Removes a trailing `-<digits>` revision from a chain id.
pub fn strip_revision(chain_id: &str) -> &str {
	match chain_id.rsplit_once('-') {
		Some((name, revision))
			if !name.is_empty()
				&& !revision.is_empty()
				&& revision.chars().all(|c| c.is_ascii_digit()) =>
		{
			name
		}
		_ => chain_id,
	}
}
