use crate::{
	models::{ChainKind, DecodedEvent, DecodedTransaction, MessageSummary},
	services::transformer::ChainTransformer,
};

const UNKNOWN_MODULE: &str = "unknown";

/// Base behaviour shared by every chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericTransformer;

impl ChainTransformer for GenericTransformer {
	fn kind(&self) -> ChainKind {
		ChainKind::Generic
	}
}

/// Splits a message type URL into module and action name.
///
/// `/cosmos.bank.v1beta1.MsgSend` yields `("bank", "MsgSend")`. A string
/// without the leading slash or with fewer than three segments yields
/// `("unknown", <input>)`.
pub fn parse_action(action: &str) -> (String, String) {
	let segments: Vec<&str> = match action.strip_prefix('/') {
		Some(path) => path.split('.').collect(),
		None => Vec::new(),
	};
	match (segments.get(1), segments.last()) {
		(Some(module), Some(name)) if segments.len() >= 3 => {
			(module.to_string(), name.to_string())
		}
		_ => (UNKNOWN_MODULE.to_string(), action.to_string()),
	}
}

/// One summary per action of every `message` event.
pub fn message_summaries(tx: &DecodedTransaction) -> Vec<MessageSummary> {
	tx.message_events()
		.flat_map(|event| {
			event
				.values("action")
				.iter()
				.map(move |action| summarize(event, action))
		})
		.collect()
}

fn summarize(event: &DecodedEvent, action: &str) -> MessageSummary {
	let (module, action) = parse_action(action);
	let owned = |key: &str| event.first(key).map(str::to_string);
	MessageSummary {
		module,
		action,
		sender: owned("sender"),
		recipient: owned("recipient"),
		amount: owned("amount"),
		contract: owned("contract"),
		pool_id: None,
	}
}
