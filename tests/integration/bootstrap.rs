//! Wiring from configuration to a running receive loop.

use std::{path::PathBuf, sync::Arc};

use cosmos_tx_monitor::{
	bootstrap::{build_pipeline, replay_file, run_pipeline},
	models::{AppConfig, ConfigLoader},
	services::{
		dispatch::NoopObserver, pipeline::PipelineOutcome, transformer::TransformerRegistry,
		transport::ReplaySource,
	},
};
use tokio::sync::watch;

use crate::integration::common::{fixture_path, read_fixture};

fn fixture_config() -> AppConfig {
	AppConfig::load_from_path(&PathBuf::from(fixture_path("config.json"))).unwrap()
}

#[tokio::test]
async fn test_receive_loop_over_recorded_messages() {
	let pipeline = build_pipeline(
		&fixture_config(),
		&TransformerRegistry::new(),
		Arc::new(NoopObserver),
	)
	.unwrap();
	let mut source = ReplaySource::new(vec![
		read_fixture("subscription_ack.json"),
		read_fixture("osmosis_swap_base64.json"),
		read_fixture("ibc_transfer.json"),
		read_fixture("oracle_vote.json"),
	]);
	let (_shutdown_tx, shutdown_rx) = watch::channel(false);

	let summary = run_pipeline(&pipeline, &mut source, shutdown_rx)
		.await
		.unwrap();
	assert_eq!(summary.received, 4);
	assert_eq!(summary.not_transaction, 1);
	assert_eq!(summary.suppressed, 1);
	assert_eq!(summary.processed, 2);
	// only the swap pays the listed recipient and matches both swap filters
	assert_eq!(summary.passed, 1);
}

#[test]
fn test_replay_recording() {
	let dir = tempfile::TempDir::new().unwrap();
	let path = dir.path().join("recording.jsonl");
	let lines = [
		serde_json::to_string(&serde_json::from_str::<serde_json::Value>(&read_fixture(
			"osmosis_swap_base64.json",
		))
		.unwrap())
		.unwrap(),
		"not json".to_string(),
	];
	std::fs::write(&path, lines.join("\n")).unwrap();

	let pipeline = build_pipeline(
		&fixture_config(),
		&TransformerRegistry::new(),
		Arc::new(NoopObserver),
	)
	.unwrap();
	let outcomes = replay_file(&pipeline, &path).unwrap();
	assert_eq!(outcomes.len(), 2);
	assert!(outcomes[0].passed());
	assert!(matches!(outcomes[1], PipelineOutcome::Malformed(_)));

	let rendered = serde_json::to_value(&outcomes[0]).unwrap();
	assert_eq!(rendered["outcome"], "processed");
	assert_eq!(rendered["detail"]["passed"], true);
}
