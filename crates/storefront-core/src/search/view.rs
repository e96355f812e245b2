//! Memoized catalog derivation.

use std::sync::Arc;

use crate::catalog::Product;
use crate::search::derive::derive_indices;
use crate::search::Criteria;

/// Caches the last derived listing.
///
/// The cache key is the catalog `Arc` (by pointer) plus the criteria. A hit
/// returns exactly what [`derive_catalog`](crate::search::derive_catalog)
/// would return for the same inputs.
#[derive(Debug, Default)]
pub struct CatalogView {
    cached: Option<Cached>,
}

#[derive(Debug)]
struct Cached {
    catalog: Arc<[Product]>,
    criteria: Criteria,
    indices: Vec<usize>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible products for `catalog` under `criteria`.
    pub fn visible(&mut self, catalog: &Arc<[Product]>, criteria: &Criteria) -> Vec<Product> {
        let fresh = match &self.cached {
            Some(c) => !Arc::ptr_eq(&c.catalog, catalog) || c.criteria != *criteria,
            None => true,
        };

        if fresh {
            let indices = derive_indices(catalog, criteria);
            tracing::debug!(
                query = %criteria.query,
                category = %criteria.category,
                sort = %criteria.sort,
                visible = indices.len(),
                "derived catalog"
            );
            self.cached = Some(Cached {
                catalog: Arc::clone(catalog),
                criteria: criteria.clone(),
                indices,
            });
        }

        match &self.cached {
            Some(c) => c.indices.iter().map(|&i| c.catalog[i].clone()).collect(),
            None => Vec::new(),
        }
    }

    /// Drop the cached listing.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Check if a listing is cached for these inputs.
    pub fn is_cached(&self, catalog: &Arc<[Product]>, criteria: &Criteria) -> bool {
        self.cached
            .as_ref()
            .is_some_and(|c| Arc::ptr_eq(&c.catalog, catalog) && c.criteria == *criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::price::Price;
    use crate::search::{derive_catalog, SortMode};

    fn catalog() -> Arc<[Product]> {
        Arc::from(vec![
            Product::new("p1", "Matte Sleeves", Price::from_units(10), Category::Sleeves)
                .with_rating(4.0),
            Product::new("p2", "Vault Box", Price::from_units(5), Category::DeckBoxes)
                .with_rating(5.0),
        ])
    }

    fn fresh(catalog: &[Product], criteria: &Criteria) -> Vec<Product> {
        derive_catalog(catalog, criteria).into_iter().cloned().collect()
    }

    #[test]
    fn test_cache_hit_matches_fresh() {
        let catalog = catalog();
        let criteria = Criteria::new().with_sort(SortMode::PriceAsc);
        let mut view = CatalogView::new();

        let first = view.visible(&catalog, &criteria);
        assert!(view.is_cached(&catalog, &criteria));
        let second = view.visible(&catalog, &criteria);
        assert_eq!(first, second);
        assert_eq!(first, fresh(&catalog, &criteria));
    }

    #[test]
    fn test_criteria_change_recomputes() {
        let catalog = catalog();
        let mut view = CatalogView::new();
        let all = view.visible(&catalog, &Criteria::new());
        assert_eq!(all.len(), 2);

        let boxes = Criteria::new().with_query("box");
        assert!(!view.is_cached(&catalog, &boxes));
        assert_eq!(view.visible(&catalog, &boxes), fresh(&catalog, &boxes));
    }

    #[test]
    fn test_catalog_swap_recomputes() {
        let mut view = CatalogView::new();
        let criteria = Criteria::new();
        let _ = view.visible(&catalog(), &criteria);

        let empty: Arc<[Product]> = Arc::from(Vec::<Product>::new());
        assert!(view.visible(&empty, &criteria).is_empty());
    }

    #[test]
    fn test_invalidate() {
        let catalog = catalog();
        let criteria = Criteria::new();
        let mut view = CatalogView::new();
        let _ = view.visible(&catalog, &criteria);
        view.invalidate();
        assert!(!view.is_cached(&catalog, &criteria));
    }
}
