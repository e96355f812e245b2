//! Cart replay command.
//!
//! Reads a JSON array of operations that name products by id, resolves them
//! against the configured catalog, and feeds them to the cart in order.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context as _, Result};
use serde::Deserialize;
use storefront_core::cart::{parse_quantity, CartCommand, CheckoutSummary};
use storefront_core::catalog::{CatalogSource, Product};
use storefront_core::{ProductId, Storefront, VariantLabel};

use super::CartArgs;
use crate::context::Context;

/// One scripted cart operation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum CartOp {
    Add {
        id: ProductId,
        #[serde(default)]
        quantity: QuantityInput,
        #[serde(default)]
        variant: Option<VariantLabel>,
    },
    Remove {
        id: ProductId,
        #[serde(default)]
        variant: Option<VariantLabel>,
    },
    SetQuantity {
        id: ProductId,
        quantity: QuantityInput,
        #[serde(default)]
        variant: Option<VariantLabel>,
    },
    Clear,
}

/// A quantity as a number, or as the raw text of a form field.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(i64),
    Text(String),
}

impl Default for QuantityInput {
    fn default() -> Self {
        QuantityInput::Number(1)
    }
}

impl QuantityInput {
    fn resolve(&self) -> Result<i64> {
        match self {
            QuantityInput::Number(n) => Ok(*n),
            QuantityInput::Text(s) => Ok(parse_quantity(s)?),
        }
    }
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let summary = replay(&args.script, ctx)?;
    if ctx.output.is_json() {
        ctx.output.json(&summary);
    } else {
        print_summary(&summary, ctx);
    }
    Ok(())
}

/// Replay a cart script against the configured catalog.
fn replay(script: &Path, ctx: &Context) -> Result<CheckoutSummary> {
    let content = fs::read_to_string(script)
        .with_context(|| format!("Failed to read cart script: {}", script.display()))?;
    let ops: Vec<CartOp> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse cart script: {}", script.display()))?;

    let mut shop = Storefront::new(ctx.catalog()?);
    for (n, op) in ops.into_iter().enumerate() {
        let command =
            to_command(op, &shop, ctx).with_context(|| format!("Operation {}", n + 1))?;
        shop.dispatch(command);
    }
    Ok(shop.summary())
}

/// Turn a scripted operation into a cart command.
///
/// Unknown product ids and non-numeric quantities are rejected here, before
/// the cart sees them.
fn to_command<S: CatalogSource>(
    op: CartOp,
    shop: &Storefront<S>,
    ctx: &Context,
) -> Result<CartCommand> {
    let command = match op {
        CartOp::Add {
            id,
            quantity,
            variant,
        } => {
            let product = known_product(shop, &id)?;
            if let Some(label) = &variant {
                if !product.offers_variant(label) {
                    ctx.output
                        .warn(&format!("{} has no variant {:?}", product.name, label.as_str()));
                }
            }
            CartCommand::add(product, quantity.resolve()?, variant)
        }
        CartOp::Remove { id, variant } => {
            known_product(shop, &id)?;
            CartCommand::remove(id, variant)
        }
        CartOp::SetQuantity {
            id,
            quantity,
            variant,
        } => {
            known_product(shop, &id)?;
            CartCommand::set_quantity(id, variant, quantity.resolve()?)
        }
        CartOp::Clear => CartCommand::Clear,
    };
    Ok(command)
}

fn known_product<S: CatalogSource>(shop: &Storefront<S>, id: &ProductId) -> Result<Product> {
    shop.find_product(id)
        .ok_or_else(|| anyhow!("Unknown product: {}", id))
}

fn print_summary(summary: &CheckoutSummary, ctx: &Context) {
    ctx.output
        .header(&format!("{} · Checkout summary", ctx.config.store.name));

    if summary.is_empty() {
        ctx.output.info("Your cart is empty.");
        return;
    }

    let widths = [28, 12, 5, 10, 10];
    ctx.output
        .table_row(&["ITEM", "VARIANT", "QTY", "EACH", "TOTAL"], &widths);
    for line in &summary.lines {
        let quantity = line.quantity.to_string();
        let each = ctx.price(line.unit_price);
        let total = ctx.price(line.total);
        ctx.output.table_row(
            &[
                &line.name,
                line.variant.as_ref().map_or("-", |v| v.as_str()),
                &quantity,
                &each,
                &total,
            ],
            &widths,
        );
    }

    println!();
    ctx.output.kv("Lines", &summary.line_count.to_string());
    ctx.output.kv("Items", &summary.item_count.to_string());
    ctx.output.kv("Subtotal", &ctx.price(summary.subtotal));
}
