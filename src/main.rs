//! Cosmos transaction monitor entry point.
//!
//! Loads the service configuration, builds the processing pipeline and either
//! subscribes to the configured node or replays a recorded message file.
//!
//! # Flow
//! 1. Loads `.env` and the JSON configuration file
//! 2. Resolves filter lists and the chain transformer
//! 3. With `--dry-run`, prints the outcome of every recorded message as JSON
//! 4. Otherwise subscribes over websocket and processes messages until Ctrl+C

use cosmos_tx_monitor::{
	bootstrap::{build_pipeline, replay_file, run_pipeline},
	models::{AppConfig, ConfigLoader},
	services::{
		dispatch::{CompositeObserver, LoggingObserver},
		transformer::TransformerRegistry,
		transport::WsSubscriber,
	},
	utils::{logging::setup_logging, metrics::gather_metrics},
};

use anyhow::Context;
use clap::{Arg, Command};
use dotenvy::dotenv;
use std::{
	env::{set_var, var},
	path::PathBuf,
	sync::Arc,
};
use tokio::sync::watch;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/config.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let matches = Command::new("cosmos-tx-monitor")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Subscribes to Cosmos SDK transaction events, decodes and classifies them, and \
			 reports transactions that pass the configured filters.",
		)
		.arg(
			Arg::new("config")
				.long("config")
				.help("Path to the configuration file (default: config/config.json)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("chain")
				.long("chain")
				.help(
					"Override the configured chain id. Picks the chain transformer; the bech32 \
					 prefix stays as configured unless --prefix is given",
				)
				.value_name("CHAIN_ID"),
		)
		.arg(
			Arg::new("prefix")
				.long("prefix")
				.help("Override the configured bech32 address prefix")
				.value_name("PREFIX"),
		)
		.arg(
			Arg::new("no-suppress")
				.long("no-suppress")
				.help("Process oracle aggregate-vote messages instead of dropping them")
				.action(clap::ArgAction::SetTrue),
		)
		.arg(
			Arg::new("dry-run")
				.long("dry-run")
				.help("Run recorded messages from a file through the pipeline and print the outcomes")
				.value_name("FILE"),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.get_matches();

	dotenv().ok();

	// CLI level only applies when RUST_LOG is not already set
	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("RUST_LOG").is_err() {
			set_var("RUST_LOG", level);
		}
	}

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let config_path = matches
		.get_one::<String>("config")
		.map(PathBuf::from)
		.or_else(|| var("CONFIG_PATH").ok().map(PathBuf::from))
		.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

	let mut config = AppConfig::load_from_path(&config_path)
		.with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
	config.override_chain(
		matches.get_one::<String>("chain").map(String::as_str),
		matches.get_one::<String>("prefix").map(String::as_str),
	)?;
	if matches.get_flag("no-suppress") {
		config.suppress_oracle_votes = false;
	}

	let observer = CompositeObserver::new(vec![Arc::new(LoggingObserver)]);
	let pipeline = build_pipeline(&config, &TransformerRegistry::new(), Arc::new(observer))?;

	if let Some(path) = matches.get_one::<String>("dry-run") {
		for outcome in replay_file(&pipeline, &PathBuf::from(path))? {
			println!("{}", serde_json::to_string_pretty(&outcome)?);
		}
		return Ok(());
	}

	let websocket = config
		.websocket
		.clone()
		.context("No websocket endpoint configured; use --dry-run to replay a recording")?;
	let mut subscriber = WsSubscriber::new(websocket)?;

	let (shutdown_tx, shutdown_rx) = watch::channel(false);
	tokio::spawn(async move {
		if let Err(e) = tokio::signal::ctrl_c().await {
			error!("Error waiting for Ctrl+C: {}", e);
		}
		info!("Shutdown signal received, stopping services...");
		let _ = shutdown_tx.send(true);
	});

	info!("Service started. Press Ctrl+C to shutdown");
	let result = run_pipeline(&pipeline, &mut subscriber, shutdown_rx).await;
	subscriber.close().await;

	match gather_metrics() {
		Ok(metrics) => tracing::debug!(metrics = %String::from_utf8_lossy(&metrics), "Final metrics"),
		Err(e) => error!("Failed to gather metrics: {}", e),
	}

	let summary = result?;
	info!(
		received = summary.received,
		passed = summary.passed,
		"Shutdown complete"
	);
	Ok(())
}
