//! Terra CosmWasm pair contracts.
//!
//! Swaps on Terra are contract executions, reported only as `wasm` events.
//! They are re-shaped into `token_swapped` events so swap extraction and
//! filtering treat them like native pool swaps.

use crate::{
	models::{ChainKind, DecodedEvent, DecodedTransaction, MessageSummary},
	services::{
		extractor::TOKEN_SWAPPED_EVENT,
		transformer::{generic::message_summaries, ChainTransformer},
	},
};

const CONTRACT_ADDRESS_KEY: &str = "_contract_address";

#[derive(Debug, Clone, Copy, Default)]
pub struct TerraTransformer;

impl TerraTransformer {
	fn synthetic_swap(event: &DecodedEvent) -> Option<DecodedEvent> {
		if !event.is_type("wasm") || event.first("action") != Some("swap") {
			return None;
		}
		let pool_id = event.first(CONTRACT_ADDRESS_KEY)?;
		let tokens_in = format!(
			"{}{}",
			event.first("offer_amount")?,
			event.first("offer_asset")?
		);
		let tokens_out = format!(
			"{}{}",
			event.first("return_amount")?,
			event.first("ask_asset")?
		);

		let mut swap = DecodedEvent::new(TOKEN_SWAPPED_EVENT);
		swap.push_plain("pool_id", pool_id);
		if let Some(sender) = event.first("sender") {
			swap.push_plain("sender", sender);
		}
		swap.push_plain("tokens_in", tokens_in);
		swap.push_plain("tokens_out", tokens_out);
		Some(swap)
	}

	fn contract_summary(event: &DecodedEvent) -> Option<MessageSummary> {
		if !event.is_type("wasm") {
			return None;
		}
		let action = event.first("action")?;
		let amount = match action {
			"swap" => event
				.first("offer_amount")
				.zip(event.first("offer_asset"))
				.map(|(amount, asset)| format!("{}{}", amount, asset)),
			"provide_liquidity" => event.first("assets").map(str::to_string),
			"withdraw_liquidity" => event.first("withdrawn_share").map(str::to_string),
			_ => return None,
		};
		let contract = event.first(CONTRACT_ADDRESS_KEY).map(str::to_string);
		Some(MessageSummary {
			module: "wasm".to_string(),
			action: action.to_string(),
			sender: event.first("sender").map(str::to_string),
			recipient: event.first("receiver").map(str::to_string),
			amount,
			pool_id: contract.clone(),
			contract,
		})
	}
}

impl ChainTransformer for TerraTransformer {
	fn kind(&self) -> ChainKind {
		ChainKind::Terra
	}

	fn transform_events(&self, mut tx: DecodedTransaction) -> DecodedTransaction {
		let swaps: Vec<DecodedEvent> = tx.events.iter().filter_map(Self::synthetic_swap).collect();
		if !swaps.is_empty() {
			tracing::trace!(count = swaps.len(), "Added synthetic swap events");
		}
		tx.events.extend(swaps);
		tx
	}

	fn extract_messaging_data(&self, tx: &DecodedTransaction) -> Vec<MessageSummary> {
		let mut summaries = message_summaries(tx);
		summaries.extend(tx.events.iter().filter_map(Self::contract_summary));
		summaries
	}
}
