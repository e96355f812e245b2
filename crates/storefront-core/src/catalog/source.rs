//! Catalog sources.
//!
//! The storefront never reaches for a global catalog. Whatever supplies
//! products is passed in as a [`CatalogSource`].

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::catalog::Product;
use crate::error::StorefrontError;

/// Supplies the raw product list.
///
/// An empty list is a valid answer, not an error.
pub trait CatalogSource {
    /// Current products, in catalog order.
    fn products(&self) -> Arc<[Product]>;
}

/// A catalog with no products.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl CatalogSource for EmptyCatalog {
    fn products(&self) -> Arc<[Product]> {
        Arc::from(Vec::<Product>::new())
    }
}

/// A missing source behaves as an empty catalog.
impl<S: CatalogSource> CatalogSource for Option<S> {
    fn products(&self) -> Arc<[Product]> {
        match self {
            Some(source) => source.products(),
            None => EmptyCatalog.products(),
        }
    }
}

impl<S: CatalogSource + ?Sized> CatalogSource for Arc<S> {
    fn products(&self) -> Arc<[Product]> {
        (**self).products()
    }
}

/// An in-memory catalog.
///
/// Hands out the same `Arc` on every call, so derived views can tell
/// cheaply that the catalog has not changed.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Arc<[Product]>,
}

impl StaticCatalog {
    /// Wrap a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::from(products),
        }
    }

    /// Parse a JSON array of products.
    ///
    /// Rejects duplicate product ids.
    pub fn from_json_str(json: &str) -> Result<Self, StorefrontError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        check_unique_ids(&products)?;
        Ok(Self::new(products))
    }

    /// Load a JSON array of products from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| StorefrontError::io(path, e))?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Product>> for StaticCatalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl CatalogSource for StaticCatalog {
    fn products(&self) -> Arc<[Product]> {
        Arc::clone(&self.products)
    }
}

fn check_unique_ids(products: &[Product]) -> Result<(), StorefrontError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(&product.id) {
            return Err(StorefrontError::DuplicateProduct(product.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use std::io::Write;

    const CATALOG: &str = r#"[
        {"id":"p1","name":"Matte Sleeves","price":10,"category":"sleeves","rating":4},
        {"id":"p2","name":"Vault Deck Box","price":5.5,"category":"deckboxes","colors":["black","red"]}
    ]"#;

    #[test]
    fn test_empty_sources() {
        assert!(EmptyCatalog.products().is_empty());
        let missing: Option<StaticCatalog> = None;
        assert!(missing.products().is_empty());
    }

    #[test]
    fn test_from_json() {
        let catalog = StaticCatalog::from_json_str(CATALOG).unwrap();
        let products = catalog.products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].category, Category::DeckBoxes);
        assert_eq!(products[1].colors.len(), 2);
    }

    #[test]
    fn test_same_arc_each_call() {
        let catalog = StaticCatalog::from_json_str(CATALOG).unwrap();
        assert!(Arc::ptr_eq(&catalog.products(), &catalog.products()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id":"p1","name":"A","price":1,"category":"sleeves"},
            {"id":"p1","name":"B","price":2,"category":"sleeves"}
        ]"#;
        let err = StaticCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, StorefrontError::DuplicateProduct(id) if id == "p1"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"[{"id":"p1","name":"A","price":-1,"category":"sleeves"}]"#;
        assert!(matches!(
            StaticCatalog::from_json_str(json),
            Err(StorefrontError::Json(_))
        ));
    }

    #[test]
    fn test_sub_cent_prices_rejected() {
        let json = r#"[
            {"id":"hi","name":"A","price":1.004,"category":"sleeves"},
            {"id":"lo","name":"B","price":1.001,"category":"sleeves"}
        ]"#;
        let err = StaticCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, StorefrontError::Json(_)));
        assert!(err.to_string().contains("Invalid price: 1.004"), "{err}");
    }

    #[test]
    fn test_empty_array_is_fine() {
        assert!(StaticCatalog::from_json_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        let catalog = StaticCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_from_missing_path() {
        let err = StaticCatalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, StorefrontError::Io { .. }));
    }
}
