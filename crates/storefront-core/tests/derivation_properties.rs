//! Property tests for catalog derivation.

use std::sync::Arc;

use proptest::prelude::*;
use storefront_core::prelude::*;

const NAMES: [&str; 6] = [
    "Matte Sleeves",
    "Vault Deck Box",
    "Nine Pocket Binder",
    "Stitched Playmat",
    "Dice Bag",
    "Flip Box",
];

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(
        (
            prop::sample::select(NAMES.to_vec()),
            0u64..5000,
            arb_category(),
            prop::option::of(prop_oneof![Just(3.0), Just(4.0), Just(4.5), Just(5.0)]),
        ),
        0..25,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, minor, category, rating))| {
                let mut product =
                    Product::new(format!("p{i}"), name, Price::from_minor(minor), category);
                product.rating = rating;
                product
            })
            .collect()
    })
}

fn arb_criteria() -> impl Strategy<Value = Criteria> {
    (
        prop_oneof![Just(""), Just("box"), Just("SLEEVE"), Just("  mat "), Just(" "), Just("zzz")],
        prop_oneof![Just(CategoryFilter::All), arb_category().prop_map(CategoryFilter::Only)],
        prop::sample::select(SortMode::ALL.to_vec()),
    )
        .prop_map(|(query, category, sort)| Criteria {
            query: query.to_string(),
            category,
            sort,
        })
}

fn position(catalog: &[Product], product: &Product) -> usize {
    catalog.iter().position(|p| p.id == product.id).unwrap()
}

proptest! {
    /// Derivation is idempotent and leaves its input alone.
    #[test]
    fn prop_idempotent(catalog in arb_catalog(), criteria in arb_criteria()) {
        let before = catalog.clone();
        let first = derive_catalog(&catalog, &criteria);
        let second = derive_catalog(&catalog, &criteria);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&catalog, &before);
    }

    /// Every visible product passes both filters, and every product that
    /// passes both is visible.
    #[test]
    fn prop_filters_exact(catalog in arb_catalog(), criteria in arb_criteria()) {
        let visible = derive_catalog(&catalog, &criteria);
        let query = criteria.query.to_lowercase();
        let expected = catalog
            .iter()
            .filter(|p| criteria.category.matches(p.category))
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
            .count();
        prop_assert_eq!(visible.len(), expected);
    }

    /// Output is ordered by the sort key, and ties keep catalog order.
    #[test]
    fn prop_sorted_and_stable(catalog in arb_catalog(), criteria in arb_criteria()) {
        let visible = derive_catalog(&catalog, &criteria);
        for pair in visible.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let tie = match criteria.sort {
                SortMode::PriceAsc => {
                    prop_assert!(a.price <= b.price);
                    a.price == b.price
                }
                SortMode::PriceDesc => {
                    prop_assert!(a.price >= b.price);
                    a.price == b.price
                }
                SortMode::Popular => {
                    prop_assert!(a.sort_rating() >= b.sort_rating());
                    a.sort_rating() == b.sort_rating()
                }
            };
            if tie {
                prop_assert!(position(&catalog, a) < position(&catalog, b));
            }
        }
    }

    /// The memoized view always agrees with a fresh derivation.
    #[test]
    fn prop_view_matches_fresh(
        catalogs in prop::collection::vec(arb_catalog(), 1..3),
        steps in prop::collection::vec((0usize..3, arb_criteria()), 1..10),
    ) {
        let catalogs: Vec<Arc<[Product]>> = catalogs.into_iter().map(Arc::from).collect();
        let mut view = CatalogView::new();
        for (pick, criteria) in steps {
            let catalog = &catalogs[pick % catalogs.len()];
            let fresh: Vec<Product> = derive_catalog(catalog, &criteria).into_iter().cloned().collect();
            prop_assert_eq!(view.visible(catalog, &criteria), fresh);
        }
    }
}

#[test]
fn scenario_price_and_popularity_order() {
    let catalog = vec![
        Product::new("p1", "Sleeves A", Price::from_units(10), Category::Sleeves).with_rating(4.0),
        Product::new("p2", "Sleeves B", Price::from_units(5), Category::Sleeves).with_rating(5.0),
    ];
    let criteria = Criteria::new()
        .with_category(Category::Sleeves)
        .with_sort(SortMode::PriceAsc);
    let ids: Vec<_> = derive_catalog(&catalog, &criteria).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p2", "p1"]);

    let criteria = criteria.with_sort(SortMode::Popular);
    let ids: Vec<_> = derive_catalog(&catalog, &criteria).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p2", "p1"]);
}

#[test]
fn scenario_query_box_across_all_categories() {
    let catalog = vec![
        Product::new("p1", "Matte Sleeves", Price::from_units(10), Category::Sleeves),
        Product::new("p2", "Vault Box", Price::from_units(30), Category::DeckBoxes),
        Product::new("p3", "Playmat", Price::from_units(25), Category::Playmats),
    ];
    let criteria = Criteria::new().with_query("box").with_category(CategoryFilter::All);
    let visible = derive_catalog(&catalog, &criteria);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "p2");
}
