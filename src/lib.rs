//! Cosmos transaction monitor.
//!
//! Subscribes to a Cosmos SDK node's transaction events, decodes their
//! attributes, extracts transfer, swap, staking and IBC facts, and filters
//! transactions by attribute lists, watched wallets and contracts, event
//! structure and advanced condition rules.

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
