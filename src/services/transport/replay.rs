use std::{collections::VecDeque, path::Path};

use async_trait::async_trait;
use serde_json::Value;

use crate::services::transport::{MessageSource, TransportError};

/// Replays recorded subscription messages.
///
/// A recording is either a JSON array of messages or one message per line.
/// Lines are passed on unparsed so malformed input reaches the pipeline as is.
#[derive(Debug, Default)]
pub struct ReplaySource {
	messages: VecDeque<String>,
}

impl ReplaySource {
	pub fn new(messages: impl IntoIterator<Item = String>) -> Self {
		Self {
			messages: messages.into_iter().collect(),
		}
	}

	pub fn from_file(path: &Path) -> Result<Self, TransportError> {
		let content = std::fs::read_to_string(path)?;
		Ok(Self::parse(&content))
	}

	pub fn parse(content: &str) -> Self {
		if content.trim_start().starts_with('[') {
			if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(content) {
				return Self::new(items.iter().map(Value::to_string));
			}
		}
		Self::new(
			content
				.lines()
				.map(str::trim)
				.filter(|line| !line.is_empty())
				.map(str::to_string),
		)
	}

	pub fn remaining(&self) -> usize {
		self.messages.len()
	}

	pub fn into_messages(self) -> impl Iterator<Item = String> {
		self.messages.into_iter()
	}
}

#[async_trait]
impl MessageSource for ReplaySource {
	async fn next_message(&mut self) -> Result<Option<String>, TransportError> {
		Ok(self.messages.pop_front())
	}
}
