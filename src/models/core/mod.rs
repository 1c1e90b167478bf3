mod filter;
mod network;

pub use filter::{
	AdvancedFilter, Condition, EventFilter, FilterSpec, MatchStrategy, NumericRange,
	DEFAULT_FILTER_NAME,
};
pub use network::{
	ChainConfig, WebsocketConfig, DEFAULT_ADDRESS_MAX_LENGTH, DEFAULT_ADDRESS_MIN_LENGTH,
	DEFAULT_SUBSCRIPTION_QUERY,
};
