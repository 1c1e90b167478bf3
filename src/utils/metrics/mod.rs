//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines the pipeline counters incremented per message.

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

lazy_static! {
	// Global Prometheus registry.
	pub static ref REGISTRY: Registry = Registry::new();

	// Messages handed to the pipeline.
	pub static ref MESSAGES_RECEIVED: IntCounter = {
		let counter = IntCounter::new("messages_received_total", "Subscription messages received").unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Messages whose body was not valid JSON.
	pub static ref MESSAGES_MALFORMED: IntCounter = {
		let counter = IntCounter::new("messages_malformed_total", "Messages dropped as malformed").unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Oracle vote messages dropped before decoding.
	pub static ref MESSAGES_SUPPRESSED: IntCounter = {
		let counter = IntCounter::new("messages_suppressed_total", "Messages dropped by suppression").unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Messages without a transaction payload.
	pub static ref MESSAGES_NON_TRANSACTION: IntCounter = {
		let counter = IntCounter::new("messages_non_transaction_total", "Messages without a transaction payload").unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	pub static ref TRANSACTIONS_DECODED: IntCounter = {
		let counter = IntCounter::new("transactions_decoded_total", "Transactions decoded").unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	pub static ref TRANSACTIONS_PASSED: IntCounter = {
		let counter = IntCounter::new("transactions_passed_total", "Transactions that passed all configured filters").unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Match evidence records per filter tier.
	pub static ref FILTER_TIER_MATCHES: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("filter_tier_matches_total", "Match evidence records per filter tier"),
			&["tier"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};
}

/// Gather all metrics and encode into the provided format.
pub fn gather_metrics() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
	let encoder = TextEncoder::new();
	let metric_families = REGISTRY.gather();
	let mut buffer = Vec::new();
	encoder.encode(&metric_families, &mut buffer)?;
	Ok(buffer)
}
