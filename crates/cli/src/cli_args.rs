//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;
use shoe_inventory_core::config::DEFAULT_MAX_STOCK;

/// Command-line arguments for the `shoes` inventory tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use shoe_inventory_cli::cli_args::Args;
///
/// let args = Args::parse_from(["shoes", "--inventory-path", "stock.txt"]);
/// assert_eq!(args.inventory_path.as_deref(), Some("stock.txt"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the inventory file.
    ///
    /// If not provided, defaults to `inventory.txt` in the working directory.
    #[arg(long, short = 'i')]
    pub inventory_path: Option<String>,

    /// Quantity an item is topped up to by the "restock to max" option.
    #[arg(long, short = 'm', default_value_t = DEFAULT_MAX_STOCK)]
    pub max_stock: u32,
}
