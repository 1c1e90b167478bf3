use std::{
	collections::{HashMap, HashSet},
	path::{Path, PathBuf},
};

use crate::{
	models::{ConfigLoader, FilterConfig, FilterList, FilterSpec},
	repositories::error::RepositoryError,
};

/// Named filter lists, keyed by the decoded attribute key they constrain.
#[derive(Debug, Clone, Default)]
pub struct FilterListRepository {
	pub lists: HashMap<String, HashSet<String>>,
}

impl FilterListRepository {
	/// Loads every `*.json` list in a directory, keyed by file stem.
	pub fn new(path: Option<&Path>) -> Result<Self, RepositoryError> {
		let lists: HashMap<String, FilterList> = FilterList::load_all(path).map_err(|e| {
			RepositoryError::load_error(format!("Failed to load filter lists: {}", e))
		})?;
		Ok(Self {
			lists: lists
				.into_iter()
				.map(|(key, list)| (key, list.into_set()))
				.collect(),
		})
	}

	/// Loads one list file per attribute key.
	///
	/// All files are attempted; the first failure is returned after the
	/// remaining files have been tried so every broken file is logged.
	pub fn from_files(files: &HashMap<String, PathBuf>) -> Result<Self, RepositoryError> {
		let mut lists = HashMap::new();
		let mut first_error = None;
		for (key, path) in files {
			match FilterList::load_from_path(path) {
				Ok(list) => {
					tracing::debug!(key = %key, entries = list.len(), path = %path.display(), "Loaded filter list");
					lists.insert(key.clone(), list.into_set());
				}
				Err(e) => {
					let error = RepositoryError::load_error(format!(
						"Failed to load filter list '{}' from {}: {}",
						key,
						path.display(),
						e
					));
					first_error.get_or_insert(error);
				}
			}
		}
		match first_error {
			Some(error) => Err(error),
			None => Ok(Self { lists }),
		}
	}
}

pub trait FilterListRepositoryTrait {
	fn get(&self, key: &str) -> Option<HashSet<String>>;
	fn get_all(&self) -> HashMap<String, HashSet<String>>;
}

impl FilterListRepositoryTrait for FilterListRepository {
	fn get(&self, key: &str) -> Option<HashSet<String>> {
		self.lists.get(key).cloned()
	}

	fn get_all(&self) -> HashMap<String, HashSet<String>> {
		self.lists.clone()
	}
}

/// Resolves file-backed filter configuration into a `FilterSpec`.
pub struct FilterListService<T: FilterListRepositoryTrait> {
	repository: T,
}

impl<T: FilterListRepositoryTrait> FilterListService<T> {
	pub fn new_with_repository(repository: T) -> Self {
		FilterListService { repository }
	}

	/// Combines the loaded lists with the inline parts of `config`.
	pub fn resolve(&self, config: &FilterConfig) -> FilterSpec {
		FilterSpec {
			attribute_lists_by_key: self.repository.get_all(),
			wallet_addresses: config.wallet_addresses.clone(),
			wasm_contract_addresses: config.wasm_contract_addresses.clone(),
			event_filters: config.event_filters.clone(),
		}
	}
}

impl FilterListService<FilterListRepository> {
	/// Loads the list directory and the list files named in `config` and
	/// resolves the full spec. A named file replaces a directory list with the
	/// same key.
	pub fn load(config: &FilterConfig) -> Result<FilterSpec, RepositoryError> {
		let mut repository = match &config.filter_list_dir {
			Some(dir) => FilterListRepository::new(Some(dir.as_path()))?,
			None => FilterListRepository::default(),
		};
		let files = FilterListRepository::from_files(&config.filter_lists)?;
		repository.lists.extend(files.lists);
		Ok(FilterListService::new_with_repository(repository).resolve(config))
	}
}
