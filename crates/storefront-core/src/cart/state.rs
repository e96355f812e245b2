//! Cart state and its transition function.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cart::line_item::{clamp_quantity, LineItem, MAX_QUANTITY};
use crate::error::StorefrontError;
use crate::catalog::Product;
use crate::ids::{ProductId, VariantLabel};
use crate::price::Price;

/// A command the cart understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum CartCommand {
    /// Add units of a product, merging into an existing line.
    Add {
        product: Product,
        quantity: i64,
        #[serde(default)]
        variant: Option<VariantLabel>,
    },
    /// Remove the line with this identity.
    Remove {
        product_id: ProductId,
        #[serde(default)]
        variant: Option<VariantLabel>,
    },
    /// Overwrite the quantity of the line with this identity.
    SetQuantity {
        product_id: ProductId,
        #[serde(default)]
        variant: Option<VariantLabel>,
        quantity: i64,
    },
    /// Empty the cart.
    Clear,
}

impl CartCommand {
    /// Add `quantity` of a product under an optional variant.
    pub fn add(product: Product, quantity: i64, variant: Option<VariantLabel>) -> Self {
        CartCommand::Add {
            product,
            quantity,
            variant,
        }
    }

    /// Drop the line with this identity.
    pub fn remove(product_id: impl Into<ProductId>, variant: Option<VariantLabel>) -> Self {
        CartCommand::Remove {
            product_id: product_id.into(),
            variant,
        }
    }

    /// Replace the quantity of the line with this identity.
    pub fn set_quantity(
        product_id: impl Into<ProductId>,
        variant: Option<VariantLabel>,
        quantity: i64,
    ) -> Self {
        CartCommand::SetQuantity {
            product_id: product_id.into(),
            variant,
            quantity,
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartCommand::Add { .. } => "add",
            CartCommand::Remove { .. } => "remove",
            CartCommand::SetQuantity { .. } => "set-quantity",
            CartCommand::Clear => "clear",
        }
    }
}

/// An immutable cart snapshot.
///
/// Lines keep the order in which their identity was first added. No two
/// lines share a `(product id, variant)` identity and every quantity lies
/// in `1..=99`.
///
/// Serialized as its list of lines. Deserializing clamps each quantity and
/// rejects a list that repeats an identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next state. `self` is left as it was.
    pub fn apply(&self, command: CartCommand) -> CartState {
        match command {
            CartCommand::Add {
                product,
                quantity,
                variant,
            } => self.with_added(product, quantity, variant),
            CartCommand::Remove {
                product_id,
                variant,
            } => self.without(&product_id, variant.as_ref()),
            CartCommand::SetQuantity {
                product_id,
                variant,
                quantity,
            } => self.with_quantity(&product_id, variant.as_ref(), quantity),
            CartCommand::Clear => CartState::new(),
        }
    }

    fn with_added(&self, product: Product, quantity: i64, variant: Option<VariantLabel>) -> Self {
        let mut items = self.items.clone();
        match items
            .iter_mut()
            .find(|i| i.matches(&product.id, variant.as_ref()))
        {
            Some(existing) => {
                // Add never lowers a quantity.
                existing.quantity = existing
                    .quantity
                    .saturating_add(quantity.max(0))
                    .min(MAX_QUANTITY);
            }
            None => items.push(LineItem::new(product, quantity, variant)),
        }
        Self { items }
    }

    fn without(&self, product_id: &ProductId, variant: Option<&VariantLabel>) -> Self {
        let items = self
            .items
            .iter()
            .filter(|i| !i.matches(product_id, variant))
            .cloned()
            .collect();
        Self { items }
    }

    fn with_quantity(
        &self,
        product_id: &ProductId,
        variant: Option<&VariantLabel>,
        quantity: i64,
    ) -> Self {
        let quantity = clamp_quantity(quantity);
        let items = self
            .items
            .iter()
            .map(|i| {
                if i.matches(product_id, variant) {
                    LineItem {
                        quantity,
                        ..i.clone()
                    }
                } else {
                    i.clone()
                }
            })
            .collect();
        Self { items }
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up the line with this identity.
    pub fn get(&self, product_id: &ProductId, variant: Option<&VariantLabel>) -> Option<&LineItem> {
        self.items.iter().find(|i| i.matches(product_id, variant))
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

impl TryFrom<Vec<LineItem>> for CartState {
    type Error = StorefrontError;

    fn try_from(lines: Vec<LineItem>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(lines.len());
        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let key = line.key();
            if !seen.insert(key.clone()) {
                return Err(StorefrontError::DuplicateLine(key.to_string()));
            }
            items.push(LineItem::new(line.product, line.quantity, line.variant));
        }
        Ok(Self { items })
    }
}

impl From<CartState> for Vec<LineItem> {
    fn from(state: CartState) -> Self {
        state.items
    }
}
