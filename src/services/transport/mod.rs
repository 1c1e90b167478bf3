//! Sources of raw subscription messages.
//!
//! The pipeline consumes message bodies from a `MessageSource`: a live
//! websocket subscription or a recorded replay.

mod error;
mod replay;
mod ws;

use async_trait::async_trait;
use serde_json::{json, Value};

pub use error::TransportError;
pub use replay::ReplaySource;
pub use ws::WsSubscriber;

#[async_trait]
pub trait MessageSource: Send {
	/// Next message body, or `None` once the source is exhausted.
	async fn next_message(&mut self) -> Result<Option<String>, TransportError>;
}

/// JSON-RPC `subscribe` request for `query`.
pub fn subscription_request(query: &str, id: u64) -> Value {
	json!({
		"jsonrpc": "2.0",
		"method": "subscribe",
		"id": id,
		"params": { "query": query },
	})
}
