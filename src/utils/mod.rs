//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the application. Currently includes:
//!
//! - logging: Logging utilities
//! - metrics: Metrics utilities
//! - parsing: Amount and message type parsing helpers
//! - tests: Builders for test fixtures

pub mod logging;
pub mod metrics;
pub mod parsing;
