//! Catalog derivation: category filter, then text filter, then stable sort.

use crate::catalog::Product;
use crate::search::{Criteria, SortMode};

/// Compute the visible product list.
///
/// Pure: the input slice is only read, and the same inputs always give the
/// same order. Products with equal sort keys keep their catalog order.
pub fn derive_catalog<'a>(products: &'a [Product], criteria: &Criteria) -> Vec<&'a Product> {
    derive_indices(products, criteria)
        .into_iter()
        .map(|i| &products[i])
        .collect()
}

/// Same as [`derive_catalog`], as positions into `products`.
pub(crate) fn derive_indices(products: &[Product], criteria: &Criteria) -> Vec<usize> {
    let query = criteria.normalized_query();

    let mut visible: Vec<usize> = products
        .iter()
        .enumerate()
        .filter(|(_, p)| criteria.category.matches(p.category))
        .filter(|(_, p)| match &query {
            Some(q) => p.search_text().contains(q.as_str()),
            None => true,
        })
        .map(|(i, _)| i)
        .collect();

    // `sort_by` is stable, which the popularity tie rule depends on.
    match criteria.sort {
        SortMode::PriceAsc => visible.sort_by_key(|&i| products[i].price),
        SortMode::PriceDesc => {
            visible.sort_by(|&a, &b| products[b].price.cmp(&products[a].price))
        }
        SortMode::Popular => visible.sort_by(|&a, &b| {
            products[b]
                .sort_rating()
                .total_cmp(&products[a].sort_rating())
        }),
    }

    visible
}
