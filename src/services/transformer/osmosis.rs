//! Osmosis pool events.

use crate::{
	models::{ChainKind, DecodedEvent, DecodedTransaction, MessageSummary},
	services::{
		extractor::TOKEN_SWAPPED_EVENT,
		transformer::{generic::message_summaries, ChainTransformer},
	},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct OsmosisTransformer;

impl OsmosisTransformer {
	fn pool_summary(event: &DecodedEvent) -> Option<MessageSummary> {
		let (module, action, amount_key) = match event.event_type.as_str() {
			TOKEN_SWAPPED_EVENT => ("poolmanager", "swap", "tokens_in"),
			"pool_joined" => ("gamm", "join_pool", "tokens_in"),
			"pool_exited" => ("gamm", "exit_pool", "tokens_out"),
			_ => return None,
		};
		Some(MessageSummary {
			module: module.to_string(),
			action: action.to_string(),
			sender: event.first("sender").map(str::to_string),
			amount: event.first(amount_key).map(str::to_string),
			pool_id: event.first("pool_id").map(str::to_string),
			..Default::default()
		})
	}
}

impl ChainTransformer for OsmosisTransformer {
	fn kind(&self) -> ChainKind {
		ChainKind::Osmosis
	}

	/// Swap events emitted by some pool types omit the sender; it is taken
	/// from the first `message` event.
	fn transform_events(&self, mut tx: DecodedTransaction) -> DecodedTransaction {
		let Some(sender) = tx
			.message_events()
			.find_map(|event| event.first("sender"))
			.map(str::to_string)
		else {
			return tx;
		};
		for event in tx
			.events
			.iter_mut()
			.filter(|event| event.is_type(TOKEN_SWAPPED_EVENT) && !event.has("sender"))
		{
			event.push_plain("sender", sender.clone());
		}
		tx
	}

	fn extract_messaging_data(&self, tx: &DecodedTransaction) -> Vec<MessageSummary> {
		let mut summaries = message_summaries(tx);
		summaries.extend(tx.events.iter().filter_map(Self::pool_summary));
		summaries
	}
}
