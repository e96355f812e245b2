//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_core::catalog::StaticCatalog;
use storefront_core::config::StorefrontConfig;

use crate::output::Output;

/// File names searched for when no `--config` is given.
const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// Directory relative catalog paths are resolved against.
    pub base_dir: PathBuf,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, base_dir) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                let config = StorefrontConfig::load(&path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?;
                (config, parent_dir(&path, &cwd))
            }
            // Try to find config in current directory or parent directories
            None => match Self::find_config(&cwd)? {
                Some(path) => {
                    output.debug(&format!("Using config {}", path.display()));
                    let config = StorefrontConfig::load(&path)
                        .with_context(|| format!("Failed to load config: {}", path.display()))?;
                    (config, parent_dir(&path, &cwd))
                }
                None => (StorefrontConfig::default(), cwd),
            },
        };

        Ok(Self {
            config,
            base_dir,
            output,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Result<Option<PathBuf>> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Ok(Some(candidate));
                }
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load the configured catalog. No configured path means an empty catalog.
    pub fn catalog(&self) -> Result<StaticCatalog> {
        let mut config = self.config.clone();
        if let Some(path) = &config.catalog.path {
            config.catalog.path = Some(self.resolve_path(path));
        }
        config.load_catalog().context("Failed to load catalog")
    }

    /// Resolve a path relative to the config directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Format a price with the configured currency symbol.
    pub fn price(&self, price: storefront_core::Price) -> String {
        price.display(&self.config.store.currency_symbol)
    }
}

fn parent_dir(path: &Path, cwd: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => cwd.join(parent),
        _ => cwd.to_path_buf(),
    }
}
