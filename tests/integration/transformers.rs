//! Transformer selection by chain id.

use std::sync::Arc;

use cosmos_tx_monitor::{
	models::{ChainKind, DecodedTransaction, FilterSpec, MessageSummary},
	services::{
		dispatch::NoopObserver,
		pipeline::{FilterEngines, PipelineService},
		transformer::{ChainTransformer, TransformerRegistry},
	},
};

use crate::integration::common::{osmosis_chain, read_fixture, terra_chain};

#[test]
fn test_registry_resolution() {
	let registry = TransformerRegistry::new();
	assert_eq!(registry.resolve("osmosis-1").kind(), ChainKind::Osmosis);
	assert_eq!(registry.resolve("phoenix-1").kind(), ChainKind::Terra);
	assert_eq!(registry.resolve("columbus-5").kind(), ChainKind::Terra);
	assert_eq!(registry.resolve("cosmoshub-4").kind(), ChainKind::Generic);
	assert_eq!(registry.resolve("").kind(), ChainKind::Generic);
}

#[test]
fn test_terra_reshapes_wasm_swaps() {
	let transformer = TransformerRegistry::new().resolve(&terra_chain().chain_id);
	let pipeline = PipelineService::new(
		&terra_chain(),
		transformer,
		FilterEngines::default(),
		Arc::new(NoopObserver),
	);
	let tx = pipeline
		.decode(&serde_json::from_str(&read_fixture("terra_wasm_swap.json")).unwrap())
		.unwrap();

	assert!(tx.has_event_type("token_swapped"));
	let summary = tx
		.messaging_data
		.iter()
		.find(|summary| summary.module == "wasm" && summary.action == "swap")
		.unwrap();
	assert_eq!(summary.amount.as_deref(), Some("1000000uluna"));
}

/// Registered chain transformer that tags every transaction.
struct TaggingTransformer;

impl ChainTransformer for TaggingTransformer {
	fn kind(&self) -> ChainKind {
		ChainKind::Generic
	}

	fn extract_messaging_data(&self, _tx: &DecodedTransaction) -> Vec<MessageSummary> {
		vec![MessageSummary {
			module: "custom".to_string(),
			action: "tagged".to_string(),
			..Default::default()
		}]
	}
}

#[test]
fn test_registered_transformer_takes_precedence() {
	let mut registry = TransformerRegistry::new();
	registry.register("osmosis-1", Arc::new(TaggingTransformer));

	let pipeline = PipelineService::new(
		&osmosis_chain(),
		registry.resolve("osmosis-1"),
		FilterEngines::new(&FilterSpec::default(), &[]),
		Arc::new(NoopObserver),
	);
	let outcome = pipeline.process_message(&read_fixture("osmosis_swap_base64.json"));
	let tx = outcome.transaction().unwrap();
	assert_eq!(tx.messaging_data.len(), 1);
	assert_eq!(tx.messaging_data[0].module, "custom");
}
