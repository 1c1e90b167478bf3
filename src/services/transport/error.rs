use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
	#[error("Connection error: {0}")]
	ConnectionError(String),

	#[error("Subscription error: {0}")]
	SubscriptionError(String),

	#[error("Protocol error: {0}")]
	ProtocolError(String),

	#[error("Replay source error: {0}")]
	ReplayError(#[from] std::io::Error),
}
