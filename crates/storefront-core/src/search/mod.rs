//! Search module.
//!
//! Turns the raw catalog plus the shopper's query, category and sort
//! choice into the listing the view renders.

mod criteria;
mod derive;
mod view;

pub use criteria::{CategoryFilter, Criteria, SortMode};
pub use derive::derive_catalog;
pub use view::CatalogView;
