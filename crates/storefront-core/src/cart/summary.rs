//! Checkout summary.

use serde::{Deserialize, Serialize};

use crate::cart::CartState;
use crate::ids::{ProductId, VariantLabel};
use crate::price::Price;

/// Totals shown on the checkout page.
///
/// Display only: checkout does not take payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    /// One entry per cart line, in cart order.
    pub lines: Vec<SummaryLine>,
    /// Number of distinct lines.
    pub line_count: usize,
    /// Total units.
    pub item_count: i64,
    /// Sum of line totals.
    pub subtotal: Price,
}

impl CheckoutSummary {
    /// Aggregate a cart snapshot.
    pub fn from_cart(cart: &CartState) -> Self {
        let lines: Vec<SummaryLine> = cart
            .items()
            .iter()
            .map(|item| SummaryLine {
                product_id: item.product.id.clone(),
                name: item.product.name.clone(),
                variant: item.variant.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price(),
                total: item.line_total(),
            })
            .collect();

        Self {
            line_count: lines.len(),
            item_count: cart.item_count(),
            subtotal: lines.iter().map(|l| l.total).sum(),
            lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryLine {
    pub product_id: ProductId,
    pub name: String,
    pub variant: Option<VariantLabel>,
    pub quantity: i64,
    pub unit_price: Price,
    /// `unit_price * quantity`.
    pub total: Price,
}
