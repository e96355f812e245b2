//! Storefront configuration.
//!
//! Read from TOML, or JSON when the file name ends in `.json`. Every field
//! has a default, so an empty file is a valid config.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::StaticCatalog;
use crate::error::StorefrontError;
use crate::search::{CategoryFilter, Criteria, SortMode};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Store branding.
    #[serde(default)]
    pub store: StoreConfig,

    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Initial listing criteria.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| StorefrontError::io(path, e))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    /// Load the configured catalog.
    ///
    /// No configured path yields an empty catalog. A path that cannot be read
    /// or parsed is an error.
    pub fn load_catalog(&self) -> Result<StaticCatalog, StorefrontError> {
        match &self.catalog.path {
            Some(path) => StaticCatalog::from_path(path),
            None => {
                tracing::warn!("no catalog path configured, starting with an empty catalog");
                Ok(StaticCatalog::default())
            }
        }
    }

    /// Criteria the listing opens with.
    pub fn initial_criteria(&self) -> Criteria {
        Criteria::new()
            .with_category(self.defaults.category)
            .with_sort(self.defaults.sort)
    }
}

/// Store branding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in headers.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Symbol prefixed to prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_store_name() -> String {
    "Storefront".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Catalog location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file holding an array of products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Initial listing criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub sort: SortMode,

    #[serde(default)]
    pub category: CategoryFilter,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, Category};
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.store.currency_symbol, "$");
        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.initial_criteria(), Criteria::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let file = write_temp(".toml", "");
        assert_eq!(StorefrontConfig::load(file.path()).unwrap(), StorefrontConfig::default());
    }

    #[test]
    fn test_load_toml() {
        let file = write_temp(
            ".toml",
            r#"
[store]
name = "Card Vault"
currency_symbol = "€"

[defaults]
sort = "price-asc"
category = "playmats"

[logging]
level = "debug"
format = "json"
"#,
        );
        let config = StorefrontConfig::load(file.path()).unwrap();
        assert_eq!(config.store.name, "Card Vault");
        assert_eq!(config.store.currency_symbol, "€");
        assert_eq!(config.defaults.sort, SortMode::PriceAsc);
        assert_eq!(
            config.initial_criteria().category,
            CategoryFilter::Only(Category::Playmats)
        );
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(".json", r#"{"defaults":{"sort":"price-desc"}}"#);
        let config = StorefrontConfig::load(file.path()).unwrap();
        assert_eq!(config.defaults.sort, SortMode::PriceDesc);
        assert_eq!(config.store.name, "Storefront");
    }

    #[test]
    fn test_bad_values_rejected() {
        let file = write_temp(".toml", "[defaults]\nsort = \"cheapest\"\n");
        assert!(matches!(
            StorefrontConfig::load(file.path()),
            Err(StorefrontError::Toml(_))
        ));

        let file = write_temp(".json", r#"{"defaults":{"category":"Sleeves"}}"#);
        assert!(matches!(
            StorefrontConfig::load(file.path()),
            Err(StorefrontError::Json(_))
        ));
    }

    #[test]
    fn test_catalog_without_path_is_empty() {
        let catalog = StorefrontConfig::default().load_catalog().unwrap();
        assert!(catalog.products().is_empty());
    }

    #[test]
    fn test_catalog_from_path() {
        let catalog_file = write_temp(
            ".json",
            r#"[{"id":"p1","name":"Sleeves","price":3,"category":"sleeves"}]"#,
        );
        let mut config = StorefrontConfig::default();
        config.catalog.path = Some(catalog_file.path().to_path_buf());
        assert_eq!(config.load_catalog().unwrap().len(), 1);
    }
}
