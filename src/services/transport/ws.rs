//! Websocket subscription to a node's event stream.

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

use crate::{
	models::WebsocketConfig,
	services::transport::{subscription_request, MessageSource, TransportError},
};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Subscribes to `config.query` and yields every text frame.
///
/// A dropped connection is re-established and re-subscribed with
/// exponential backoff. Pings are answered in place.
pub struct WsSubscriber {
	config: WebsocketConfig,
	stream: Option<WsStream>,
	request_id: u64,
}

impl WsSubscriber {
	pub fn new(config: WebsocketConfig) -> Result<Self, TransportError> {
		let url = url::Url::parse(&config.url)
			.map_err(|e| TransportError::ConnectionError(format!("{}: {}", config.url, e)))?;
		if !matches!(url.scheme(), "ws" | "wss") {
			return Err(TransportError::ConnectionError(format!(
				"unsupported scheme '{}' in {}",
				url.scheme(),
				config.url
			)));
		}
		Ok(Self {
			config,
			stream: None,
			request_id: 0,
		})
	}

	pub fn is_connected(&self) -> bool {
		self.stream.is_some()
	}

	/// Connects and subscribes, retrying up to `max_reconnect_attempts` times.
	pub async fn connect(&mut self) -> Result<(), TransportError> {
		self.request_id += 1;
		let request_id = self.request_id;
		let url = self.config.url.clone();
		let request = subscription_request(&self.config.query, request_id).to_string();

		let backoff = ExponentialBuilder::default()
			.with_min_delay(Duration::from_millis(self.config.reconnect_delay_ms))
			.with_max_delay(Duration::from_secs(60))
			.with_max_times(self.config.max_reconnect_attempts as usize);

		let stream = (|| async { open_subscription(&url, &request).await })
			.retry(backoff)
			.notify(|e: &TransportError, delay: Duration| {
				tracing::warn!(
					url = %url,
					error = %e,
					retry_in_ms = delay.as_millis() as u64,
					"Websocket connection failed"
				);
			})
			.await?;

		tracing::info!(url = %url, query = %self.config.query, "Subscribed to node events");
		self.stream = Some(stream);
		Ok(())
	}

	pub async fn close(&mut self) {
		if let Some(mut stream) = self.stream.take() {
			if let Err(e) = stream.close(None).await {
				tracing::debug!(error = %e, "Error closing websocket");
			}
		}
	}

	fn check_subscription_error(&self, text: &str) -> Result<(), TransportError> {
		if !text.contains("\"error\"") {
			return Ok(());
		}
		let Ok(response) = serde_json::from_str::<Value>(text) else {
			return Ok(());
		};
		let is_ours = response.get("id").and_then(Value::as_u64) == Some(self.request_id);
		match response.get("error") {
			Some(error) if is_ours => Err(TransportError::SubscriptionError(error.to_string())),
			_ => Ok(()),
		}
	}
}

async fn open_subscription(url: &str, request: &str) -> Result<WsStream, TransportError> {
	let (mut stream, _) = connect_async(url)
		.await
		.map_err(|e| TransportError::ConnectionError(e.to_string()))?;
	stream
		.send(Message::Text(request.to_string().into()))
		.await
		.map_err(|e| TransportError::SubscriptionError(e.to_string()))?;
	Ok(stream)
}

#[async_trait]
impl MessageSource for WsSubscriber {
	async fn next_message(&mut self) -> Result<Option<String>, TransportError> {
		loop {
			let Some(stream) = self.stream.as_mut() else {
				self.connect().await?;
				continue;
			};

			match stream.next().await {
				Some(Ok(Message::Text(text))) => {
					let text = text.as_str().to_string();
					self.check_subscription_error(&text)?;
					return Ok(Some(text));
				}
				Some(Ok(Message::Binary(data))) => match String::from_utf8(data.to_vec()) {
					Ok(text) => return Ok(Some(text)),
					Err(_) => tracing::debug!(len = data.len(), "Ignoring binary frame"),
				},
				Some(Ok(Message::Ping(data))) => {
					if let Err(e) = stream.send(Message::Pong(data)).await {
						tracing::warn!(error = %e, "Failed to answer ping, reconnecting");
						self.stream = None;
					}
				}
				Some(Ok(Message::Close(frame))) => {
					tracing::warn!(?frame, "Node closed the websocket, reconnecting");
					self.stream = None;
				}
				Some(Ok(_)) => {}
				Some(Err(e)) => {
					tracing::warn!(error = %e, "Websocket error, reconnecting");
					self.stream = None;
				}
				None => {
					tracing::warn!("Websocket stream ended, reconnecting");
					self.stream = None;
				}
			}
		}
	}
}
