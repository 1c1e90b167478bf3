//! Configuration loading.
//!
//! - `app_config`: the service configuration file
//! - `filter_list`: externally maintained lists of attribute values

use std::{fs, path::Path};

mod app_config;
mod error;
mod filter_list;

pub use app_config::{AppConfig, FilterConfig};
pub use error::ConfigError;
pub use filter_list::FilterList;

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Directory searched by `load_all` when no path is given
	const DEFAULT_DIR: &'static str;

	/// Load every JSON file in a directory, keyed by file stem.
	///
	/// Any file that fails to load fails the whole call.
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let dir = path.unwrap_or(Path::new(Self::DEFAULT_DIR));
		if !dir.is_dir() {
			return Err(ConfigError::file_error(format!(
				"directory not found: {}",
				dir.display()
			)));
		}

		let mut entries = Vec::new();
		for entry in fs::read_dir(dir)? {
			let path = entry?.path();
			if !Self::is_json_file(&path) {
				continue;
			}
			let name = path
				.file_stem()
				.and_then(|s| s.to_str())
				.unwrap_or("unknown")
				.to_string();
			entries.push((name, Self::load_from_path(&path)?));
		}

		Ok(T::from_iter(entries))
	}

	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	fn validate(&self) -> Result<(), ConfigError>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
