//! Delivery of pipeline output to subscribers.
//!
//! Subscribers implement `TransactionObserver`, which has one typed method
//! per event category. `ChannelObserver` turns the callbacks into tokio
//! channels and `CompositeObserver` fans out to several observers.

mod channel;
mod observer;

pub use channel::{ChannelObserver, MatchNotification, ObserverChannels};
pub use observer::{
	CompositeObserver, LoggingObserver, NoopObserver, RawMessage, TransactionObserver,
};
