//! Bootstrap module for wiring the pipeline from configuration.
//!
//! Resolves the configured filter lists, picks the chain transformer, builds
//! the `PipelineService` and drives it from a `MessageSource` until the source
//! ends or shutdown is signalled.

use std::{path::Path, sync::Arc};

use anyhow::Context;
use serde::Serialize;
use tokio::sync::watch;

use crate::{
	models::AppConfig,
	repositories::FilterListService,
	services::{
		dispatch::TransactionObserver,
		pipeline::{FilterEngines, PipelineOutcome, PipelineService},
		transformer::TransformerRegistry,
		transport::{MessageSource, ReplaySource},
	},
};

/// Counts of message outcomes over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
	pub received: u64,
	pub malformed: u64,
	pub suppressed: u64,
	pub not_transaction: u64,
	pub processed: u64,
	pub passed: u64,
}

impl RunSummary {
	pub fn record(&mut self, outcome: &PipelineOutcome) {
		self.received += 1;
		match outcome {
			PipelineOutcome::Malformed(_) => self.malformed += 1,
			PipelineOutcome::Suppressed => self.suppressed += 1,
			PipelineOutcome::NotTransaction => self.not_transaction += 1,
			PipelineOutcome::Processed { passed, .. } => {
				self.processed += 1;
				if *passed {
					self.passed += 1;
				}
			}
		}
	}
}

/// Builds the filter snapshot for `config`, loading its filter list files.
pub fn load_filters(config: &AppConfig) -> anyhow::Result<FilterEngines> {
	let spec = FilterListService::load(&config.filters).context("Failed to load filter lists")?;
	Ok(FilterEngines::new(&spec, &config.advanced_filters))
}

/// Builds a pipeline for `config`.
pub fn build_pipeline(
	config: &AppConfig,
	registry: &TransformerRegistry,
	observer: Arc<dyn TransactionObserver>,
) -> anyhow::Result<PipelineService> {
	let filters = load_filters(config)?;
	let transformer = registry.resolve(&config.chain.chain_id);
	tracing::info!(
		chain_id = %config.chain.chain_id,
		transformer = ?transformer.kind(),
		advanced_filters = config.advanced_filters.len(),
		"Pipeline initialized"
	);
	Ok(
		PipelineService::new(&config.chain, transformer, filters, observer)
			.with_oracle_suppression(config.suppress_oracle_votes),
	)
}

/// Feeds messages from `source` through `pipeline` until the source is
/// exhausted or `shutdown` flips to true.
pub async fn run_pipeline<S>(
	pipeline: &PipelineService,
	source: &mut S,
	mut shutdown: watch::Receiver<bool>,
) -> anyhow::Result<RunSummary>
where
	S: MessageSource + ?Sized,
{
	let mut summary = RunSummary::default();
	loop {
		if *shutdown.borrow() {
			tracing::info!("Shutdown requested, stopping receive loop");
			break;
		}

		tokio::select! {
			changed = shutdown.changed() => {
				if changed.is_err() {
					break;
				}
			}
			message = source.next_message() => {
				match message.context("Message source failed")? {
					Some(body) => summary.record(&pipeline.process_message(&body)),
					None => {
						tracing::info!("Message source exhausted");
						break;
					}
				}
			}
		}
	}

	tracing::info!(
		received = summary.received,
		processed = summary.processed,
		passed = summary.passed,
		"Receive loop finished"
	);
	Ok(summary)
}

/// Runs every recorded message in `path` through `pipeline`.
pub fn replay_file(
	pipeline: &PipelineService,
	path: &Path,
) -> anyhow::Result<Vec<PipelineOutcome>> {
	let source = ReplaySource::from_file(path)
		.with_context(|| format!("Failed to read recording {}", path.display()))?;
	Ok(source
		.into_messages()
		.map(|body| pipeline.process_message(&body))
		.collect())
}
