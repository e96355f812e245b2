//! Storefront CLI - drive the storefront core from a terminal.
//!
//! Commands:
//! - `storefront products` - List the catalog through the filter/sort pipeline
//! - `storefront cart` - Replay a cart script and print the checkout summary

mod commands;
mod context;
mod output;
mod telemetry;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, ProductsArgs};

/// Storefront CLI - browse the catalog and build a cart
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching a query, category and sort order
    Products(ProductsArgs),

    /// Replay cart operations from a JSON file
    Cart(CartArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    telemetry::init(&ctx.config.logging, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
