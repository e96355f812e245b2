//! The storefront facade handed to the view layer.

use std::sync::Arc;

use crate::cart::{CartCommand, CartState, CartStore, CheckoutSummary};
use crate::catalog::{CatalogSource, Product};
use crate::ids::ProductId;
use crate::search::{CatalogView, Criteria};

/// Catalog source, cart store and memoized listing in one place.
#[derive(Debug)]
pub struct Storefront<S> {
    source: S,
    cart: CartStore,
    view: CatalogView,
}

impl<S: CatalogSource> Storefront<S> {
    /// A storefront over `source` with an empty cart.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cart: CartStore::new(),
            view: CatalogView::new(),
        }
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> Arc<CartState> {
        self.cart.snapshot()
    }

    /// Apply a cart command.
    pub fn dispatch(&mut self, command: CartCommand) -> Arc<CartState> {
        self.cart.dispatch(command)
    }

    /// Products to show for `criteria`.
    pub fn visible_products(&mut self, criteria: &Criteria) -> Vec<Product> {
        let catalog = self.source.products();
        self.view.visible(&catalog, criteria)
    }

    /// Find a product in the current catalog.
    pub fn find_product(&self, id: &ProductId) -> Option<Product> {
        self.source.products().iter().find(|p| p.id == *id).cloned()
    }

    /// Checkout summary for the current cart.
    pub fn summary(&self) -> CheckoutSummary {
        CheckoutSummary::from_cart(&self.cart())
    }
}
