//! CLI command implementations.

pub mod cart;
pub mod products;

use std::path::PathBuf;

use clap::Args;
use storefront_core::search::{CategoryFilter, SortMode};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Text to search for in product names and blurbs.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category identifier, or "all" (default from config).
    #[arg(long)]
    pub category: Option<CategoryFilter>,

    /// Sort order: popular, price-asc or price-desc (default from config).
    #[arg(short, long)]
    pub sort: Option<SortMode>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// JSON file holding an array of cart operations.
    pub script: PathBuf,
}
