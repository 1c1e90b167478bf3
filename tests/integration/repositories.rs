//! Filter list and configuration loading from disk.

use std::{collections::HashMap, path::PathBuf};

use cosmos_tx_monitor::{
	models::{AppConfig, ConfigError, ConfigLoader, FilterConfig, FilterList},
	repositories::{FilterListRepository, FilterListService, RepositoryError},
};
use tempfile::TempDir;

use crate::integration::common::{fixture_path, OSMO_RECIPIENT};

#[test]
fn test_load_fixture_config() {
	let config = AppConfig::load_from_path(&PathBuf::from(fixture_path("config.json"))).unwrap();
	assert_eq!(config.chain.chain_id, "osmosis-1");
	assert_eq!(config.chain.address_min_length, 38);
	assert!(config.suppress_oracle_votes);
	assert_eq!(config.advanced_filters[0].name, "large-osmo-swaps");
}

#[test]
fn test_resolve_filter_lists_from_config() {
	let config = AppConfig::load_from_path(&PathBuf::from(fixture_path("config.json"))).unwrap();
	let spec = FilterListService::load(&config.filters).unwrap();
	assert!(spec.attribute_lists_by_key["recipient"].contains(OSMO_RECIPIENT));
	assert_eq!(spec.event_filters.len(), 1);
}

#[test]
fn test_non_array_list_is_a_load_error() {
	let filters = FilterConfig {
		filter_lists: HashMap::from([(
			"sender".to_string(),
			PathBuf::from(fixture_path("lists/broken.json")),
		)]),
		..Default::default()
	};
	let result = FilterListService::load(&filters);
	assert!(matches!(result, Err(RepositoryError::LoadError(_))));
}

#[test]
fn test_non_string_entries_rejected() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("mixed.json");
	std::fs::write(&path, r#"["osmo1a", 42]"#).unwrap();

	let result = FilterList::load_from_path(&path);
	assert!(matches!(result, Err(ConfigError::InvalidFilterList { .. })));
}

#[test]
fn test_directory_of_lists() {
	let repository =
		FilterListRepository::new(Some(&PathBuf::from(fixture_path("lists")))).map(|_| ());
	// broken.json sits beside recipients.json, so the directory fails as a whole
	assert!(matches!(repository, Err(RepositoryError::LoadError(_))));
}

#[test]
fn test_invalid_config_rejected() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("config.json");
	std::fs::write(
		&path,
		r#"{"chain": {"chain_id": "osmosis-1", "bech32_prefix": "OSMO"}}"#,
	)
	.unwrap();
	assert!(matches!(
		AppConfig::load_from_path(&path),
		Err(ConfigError::ValidationError(_))
	));

	std::fs::write(&path, "{").unwrap();
	assert!(matches!(
		AppConfig::load_from_path(&path),
		Err(ConfigError::ParseError(_))
	));
}
