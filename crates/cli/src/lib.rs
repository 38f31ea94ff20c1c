//! Shoe Inventory CLI Library
//!
//! This crate provides the interactive command-line interface for the shoe
//! inventory tool. It handles argument parsing, the main menu loop, and the
//! prompts used to capture and restock products.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`menu`]: Main menu and restock sub-menu options
//! - [`input`]: Console prompts that re-ask until input is valid
//! - [`session`]: The menu loop dispatching to the inventory store
//!
//! # Examples
//!
//! ```bash
//! # Use ./inventory.txt
//! shoes
//!
//! # Use another file and a higher restock cap
//! shoes --inventory-path ~/shop/inventory.txt --max-stock 100
//! ```

pub mod cli_args;
pub mod input;
pub mod menu;
pub mod session;
