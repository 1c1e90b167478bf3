//! Error types for repository operations.
//!
//! A filter list that is missing, unreadable or not a JSON array of strings
//! surfaces as `LoadError`; the caller decides whether startup continues.

use log::error;
use std::error::Error;
use std::fmt;

use crate::models::ConfigError;

/// Errors that can occur during repository operations
#[derive(Debug)]
pub enum RepositoryError {
	/// Loaded data failed validation
	ValidationError(String),

	/// A file could not be loaded
	LoadError(String),
}

impl RepositoryError {
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError(msg) => format!("Validation error: {}", msg),
			Self::LoadError(msg) => format!("Load error: {}", msg),
		}
	}

	/// Create a new validation error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new load error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn load_error(msg: impl Into<String>) -> Self {
		let error = Self::LoadError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for RepositoryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for RepositoryError {}

impl From<std::io::Error> for RepositoryError {
	fn from(err: std::io::Error) -> Self {
		Self::load_error(err.to_string())
	}
}

impl From<ConfigError> for RepositoryError {
	fn from(err: ConfigError) -> Self {
		match err {
			ConfigError::ValidationError(msg) => Self::validation_error(msg),
			other => Self::load_error(other.to_string()),
		}
	}
}
