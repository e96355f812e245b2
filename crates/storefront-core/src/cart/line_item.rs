//! Cart line items and their identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::{ProductId, VariantLabel};
use crate::price::Price;

/// Smallest quantity a line can hold.
pub const MIN_QUANTITY: i64 = 1;

/// Largest quantity a line can hold.
pub const MAX_QUANTITY: i64 = 99;

/// Clamp a requested quantity into `MIN_QUANTITY..=MAX_QUANTITY`.
pub fn clamp_quantity(quantity: i64) -> i64 {
    quantity.clamp(MIN_QUANTITY, MAX_QUANTITY)
}

/// Identity of a cart line.
///
/// `variant: None` is its own identity. A product added without a variant
/// never merges with the same product added with one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub variant: Option<VariantLabel>,
}

impl LineKey {
    pub fn new(product_id: impl Into<ProductId>, variant: Option<VariantLabel>) -> Self {
        Self {
            product_id: product_id.into(),
            variant,
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Some(variant) => write!(f, "{} ({})", self.product_id, variant),
            None => write!(f, "{}", self.product_id),
        }
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product as it was when first added.
    pub product: Product,
    /// Quantity, always within `MIN_QUANTITY..=MAX_QUANTITY`.
    pub quantity: i64,
    /// Selected variant, if any.
    pub variant: Option<VariantLabel>,
}

impl LineItem {
    /// Create a line item. The quantity is clamped.
    pub fn new(product: Product, quantity: i64, variant: Option<VariantLabel>) -> Self {
        Self {
            product,
            quantity: clamp_quantity(quantity),
            variant,
        }
    }

    /// The identity this line is merged and looked up by.
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product.id.clone(), self.variant.clone())
    }

    /// Check if this line has the given identity.
    pub fn matches(&self, product_id: &ProductId, variant: Option<&VariantLabel>) -> bool {
        self.product.id == *product_id && self.variant.as_ref() == variant
    }

    /// Unit price.
    pub fn unit_price(&self) -> Price {
        self.product.price
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}
