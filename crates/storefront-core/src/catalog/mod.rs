//! Product catalog module.
//!
//! Contains the product and category types and the sources that supply them.

mod category;
mod product;
mod source;

pub use category::Category;
pub use product::Product;
pub use source::{CatalogSource, EmptyCatalog, StaticCatalog};
