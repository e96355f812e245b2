//! Catalog listing command.

use anyhow::Result;
use storefront_core::catalog::Product;
use storefront_core::search::Criteria;
use storefront_core::Storefront;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::format_rating;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let criteria = criteria_for(&args, ctx);
    let products = visible(&criteria, ctx)?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} · {} · {}",
        ctx.config.store.name,
        criteria.category.display_name(),
        criteria.sort.display_name()
    ));

    if products.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    print_products(&products, ctx);
    Ok(())
}

fn visible(criteria: &Criteria, ctx: &Context) -> Result<Vec<Product>> {
    let mut shop = Storefront::new(ctx.catalog()?);
    Ok(shop.visible_products(criteria))
}

/// Criteria from the flags, falling back to the configured defaults.
/// The query is typed at a shell, so surrounding whitespace is dropped.
fn criteria_for(args: &ProductsArgs, ctx: &Context) -> Criteria {
    let defaults = ctx.config.initial_criteria();
    Criteria::new()
        .with_query(args.query.trim())
        .with_category(args.category.unwrap_or(defaults.category))
        .with_sort(args.sort.unwrap_or(defaults.sort))
}

fn print_products(products: &[Product], ctx: &Context) {
    let widths = [8, 28, 14, 10, 12];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "RATING"], &widths);

    for product in products {
        let price = ctx.price(product.price);
        let rating = format_rating(product.rating);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                product.category.display_name(),
                &price,
                &rating,
            ],
            &widths,
        );
        if product.has_variants() {
            let colors: Vec<&str> = product.colors.iter().map(|c| c.as_str()).collect();
            ctx.output.kv("colors", &colors.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::catalog::Category;
    use storefront_core::search::{CategoryFilter, SortMode};

    use crate::context::tests::demo_context;

    fn args(query: &str, category: Option<CategoryFilter>, sort: Option<SortMode>) -> ProductsArgs {
        ProductsArgs {
            query: query.to_string(),
            category,
            sort,
        }
    }

    fn listed(args: &ProductsArgs, ctx: &Context) -> Vec<String> {
        visible(&criteria_for(args, ctx), ctx)
            .unwrap()
            .iter()
            .map(|p| p.id.to_string())
            .collect()
    }

    #[test]
    fn test_defaults_come_from_config() {
        let ctx = demo_context();
        let criteria = criteria_for(&args("", None, None), &ctx);
        assert_eq!(criteria.category, CategoryFilter::All);
        assert_eq!(criteria.sort, SortMode::Popular);
        assert_eq!(
            listed(&args("", None, None), &ctx),
            ["p2", "p5", "p1", "p3", "p6", "p7", "p4"]
        );
    }

    #[test]
    fn test_category_and_price_sort() {
        let ctx = demo_context();
        let flags = args(
            "",
            Some(CategoryFilter::Only(Category::DeckBoxes)),
            Some(SortMode::PriceAsc),
        );
        assert_eq!(listed(&flags, &ctx), ["p4", "p3"]);
    }

    #[test]
    fn test_query_flag_is_trimmed() {
        let ctx = demo_context();
        let criteria = criteria_for(&args("  BOX ", None, None), &ctx);
        assert_eq!(criteria.query, "BOX");
        assert_eq!(listed(&args("  BOX ", None, None), &ctx), ["p3", "p4"]);
    }
}
