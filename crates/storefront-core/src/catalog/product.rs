//! Catalog product type.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::{ProductId, VariantLabel};
use crate::price::Price;

/// A product in the catalog.
///
/// Products come from a [`CatalogSource`](crate::catalog::CatalogSource)
/// and are never mutated by the cart or the derivation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Category this product is listed under.
    pub category: Category,
    /// Average rating. Only used for the popularity sort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Selectable variant labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<VariantLabel>,
    /// Short descriptive text for listings. Searched along with the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blurb: Option<String>,
    /// Full description for the product page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Units in stock, when the catalog tracks it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl Product {
    /// Create a product with only the required fields set.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            rating: None,
            colors: Vec::new(),
            blurb: None,
            description: None,
            image: None,
            stock: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_blurb(mut self, blurb: impl Into<String>) -> Self {
        self.blurb = Some(blurb.into());
        self
    }

    pub fn with_colors<I, L>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<VariantLabel>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Rating used for sorting; unrated products count as 0.
    pub fn sort_rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Check if the shopper picks a variant for this product.
    pub fn has_variants(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Check if a label is one of this product's variants.
    pub fn offers_variant(&self, label: &VariantLabel) -> bool {
        self.colors.contains(label)
    }

    /// Check if the product can be bought. Untracked stock counts as available.
    pub fn in_stock(&self) -> bool {
        self.stock.map_or(true, |n| n > 0)
    }

    /// Lowercased text the search filter matches against.
    pub(crate) fn search_text(&self) -> String {
        match &self.blurb {
            Some(blurb) => format!("{} {}", self.name, blurb).to_lowercase(),
            None => self.name.to_lowercase(),
        }
    }
}
