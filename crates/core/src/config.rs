//! Configuration defaults for the inventory tool.
//!
//! This module provides the default backing file location, the restock cap,
//! and expansion of shell variables like `~` in user-supplied paths.

/// Default path of the inventory file, relative to the working directory
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.txt";

/// Quantity an item is topped up to by a "fill to max" restock
pub const DEFAULT_MAX_STOCK: u32 = 70;

/// Resolves the inventory file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses
/// [`DEFAULT_INVENTORY_PATH`]. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use shoe_inventory_core::config::get_inventory_path;
///
/// assert_eq!(get_inventory_path(&None), "inventory.txt");
/// assert_eq!(get_inventory_path(&Some("/srv/shoes.txt".to_string())), "/srv/shoes.txt");
/// ```
pub fn get_inventory_path(inventory_path_arg: &Option<String>) -> String {
    let inventory_path = match inventory_path_arg {
        Some(inventory_path) => inventory_path,
        None => DEFAULT_INVENTORY_PATH,
    };

    shellexpand::tilde(inventory_path).to_string()
}
