//! Shared fixture loading and pipeline setup.

use std::{fs, sync::Arc};

use cosmos_tx_monitor::{
	models::{AdvancedFilter, ChainConfig, FilterSpec},
	services::{
		dispatch::{NoopObserver, TransactionObserver},
		pipeline::{FilterEngines, PipelineService},
		transformer::TransformerRegistry,
	},
};
use serde_json::Value;

pub const TEST_FIXTURES_BASE: &str = "tests/integration/fixtures";

pub const COSMOS_DELEGATOR: &str = "cosmos1qyqszqgpqyqszqgpqyqszqgpqyqszqgpjnp7du";
pub const COSMOS_VALIDATOR: &str = "cosmosvaloper1zg69v7yszg69v7yszg69v7yszg69v7ys8xdv96";
pub const OSMO_SENDER: &str = "osmo1qyqszqgpqyqszqgpqyqszqgpqyqszqgpjnp7du";
pub const OSMO_RECIPIENT: &str = "osmo1zg69v7yszg69v7yszg69v7yszg69v7ys8xdv96";
pub const TERRA_TRADER: &str = "terra1qyqszqgpqyqszqgpqyqszqgpqyqszqgpjnp7du";
pub const TERRA_PAIR: &str = "terra1zg69v7yszg69v7yszg69v7yszg69v7yszg69v7yszg69v7ysxk2c2v";

pub fn fixture_path(name: &str) -> String {
	format!("{}/{}", TEST_FIXTURES_BASE, name)
}

pub fn read_fixture(name: &str) -> String {
	fs::read_to_string(fixture_path(name))
		.unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

pub fn load_fixture(name: &str) -> Value {
	serde_json::from_str(&read_fixture(name))
		.unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", name, e))
}

pub fn cosmos_chain() -> ChainConfig {
	ChainConfig::new("cosmoshub-4", "cosmos")
}

pub fn osmosis_chain() -> ChainConfig {
	ChainConfig::new("osmosis-1", "osmo")
}

pub fn terra_chain() -> ChainConfig {
	ChainConfig::new("phoenix-1", "terra")
}

pub fn pipeline_with(
	chain: ChainConfig,
	spec: FilterSpec,
	advanced: Vec<AdvancedFilter>,
	observer: Arc<dyn TransactionObserver>,
) -> PipelineService {
	let transformer = TransformerRegistry::new().resolve(&chain.chain_id);
	PipelineService::new(&chain, transformer, FilterEngines::new(&spec, &advanced), observer)
}

pub fn unfiltered_pipeline(chain: ChainConfig) -> PipelineService {
	pipeline_with(chain, FilterSpec::default(), Vec::new(), Arc::new(NoopObserver))
}
