//! Filter list files.
//!
//! A filter list is a file holding a single JSON array of strings. Any other
//! top-level shape is a load error.

use std::{collections::HashSet, fs, path::Path};

use serde_json::Value;

use crate::models::{config::error::ConfigError, ConfigLoader};

/// Values loaded from one filter list file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterList(pub Vec<String>);

impl FilterList {
	pub fn into_set(self) -> HashSet<String> {
		self.0.into_iter().collect()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl ConfigLoader for FilterList {
	const DEFAULT_DIR: &'static str = "config/lists";

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let content = fs::read_to_string(path).map_err(|e| {
			ConfigError::file_error(format!("failed to read {}: {}", path.display(), e))
		})?;
		let value: Value = serde_json::from_str(&content)?;

		let Value::Array(items) = value else {
			return Err(ConfigError::invalid_filter_list(
				path,
				"top-level value must be a JSON array of strings",
			));
		};

		let mut entries = Vec::with_capacity(items.len());
		for (index, item) in items.into_iter().enumerate() {
			match item {
				Value::String(s) => entries.push(s),
				other => {
					return Err(ConfigError::invalid_filter_list(
						path,
						format!("element {} is not a string: {}", index, other),
					));
				}
			}
		}

		let list = FilterList(entries);
		list.validate()?;
		Ok(list)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if let Some(index) = self.0.iter().position(|entry| entry.trim().is_empty()) {
			return Err(ConfigError::validation_error(format!(
				"filter list entry {} is empty",
				index
			)));
		}
		Ok(())
	}
}
