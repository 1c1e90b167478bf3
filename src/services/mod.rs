//! Core services of the transaction monitor.
//!
//! Messages flow from a `transport` source through the `pipeline`, which
//! drives the `decoder`, `transformer`, `extractor` and `filter` stages and
//! hands results to `dispatch` observers.

pub mod decoder;
pub mod dispatch;
pub mod extractor;
pub mod filter;
pub mod pipeline;
pub mod transformer;
pub mod transport;
