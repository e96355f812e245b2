//! Storefront error types.
//!
//! Cart commands and catalog derivation never fail. These errors belong to
//! the boundary: parsing user input, loading catalogs and reading config.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning outside input into storefront values.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Quantity text is not an integer.
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    /// Price is negative, not finite, or finer than one minor unit.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Category identifier is not one of the known categories.
    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    /// Sort mode identifier is not recognized.
    #[error("Unknown sort mode: {0:?}")]
    UnknownSortMode(String),

    /// Two catalog entries share one product id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// A serialized cart lists one `(product id, variant)` identity twice.
    #[error("Duplicate cart line: {0}")]
    DuplicateLine(String),

    /// Reading a file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl StorefrontError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorefrontError::Io {
            path: path.into(),
            source,
        }
    }
}
