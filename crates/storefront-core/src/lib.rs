//! Cart state machine and catalog derivation for the storefront.
//!
//! - **Catalog**: products, categories, and the sources that supply them
//! - **Search**: the filter/sort pipeline that produces the visible listing
//! - **Cart**: a pure command-driven cart with clamped quantities
//! - **Config**: store branding, catalog location, listing defaults
//!
//! # Example
//!
//! ```rust
//! use storefront_core::prelude::*;
//!
//! let catalog = StaticCatalog::new(vec![
//!     Product::new("p1", "Matte Sleeves", Price::from_units(10), Category::Sleeves),
//!     Product::new("p2", "Vault Deck Box", Price::from_units(30), Category::DeckBoxes),
//! ]);
//! let mut shop = Storefront::new(catalog);
//!
//! let boxes = shop.visible_products(&Criteria::new().with_query("box"));
//! assert_eq!(boxes.len(), 1);
//!
//! shop.dispatch(CartCommand::add(boxes[0].clone(), 2, None));
//! assert_eq!(shop.summary().subtotal.display("$"), "$60.00");
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod search;

mod storefront;

pub use error::StorefrontError;
pub use ids::{ProductId, VariantLabel};
pub use price::Price;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::ids::{ProductId, VariantLabel};
    pub use crate::price::Price;
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{CatalogSource, Category, EmptyCatalog, Product, StaticCatalog};

    // Search
    pub use crate::search::{derive_catalog, CatalogView, CategoryFilter, Criteria, SortMode};

    // Cart
    pub use crate::cart::{
        parse_quantity, CartCommand, CartState, CartStore, CheckoutSummary, LineItem, LineKey,
        MAX_QUANTITY, MIN_QUANTITY,
    };

    // Config
    pub use crate::config::{LogFormat, StorefrontConfig};
}
