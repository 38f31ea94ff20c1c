//! Shoe Inventory Core Library
//!
//! This crate provides the core functionality for the shoe inventory tool: an
//! in-memory product list kept in sync with a flat, comma-delimited inventory
//! file.
//!
//! # Key Features
//!
//! - **Item Model**: Product records with validated `SKU` codes
//! - **Flat File Codec**: Header-prefixed comma-delimited reading and writing
//! - **Inventory Store**: Load, capture, search, restock and valuation
//! - **Configuration**: Default file location and restock cap
//! - **Error Handling**: One error type covering every failure mode
//!
//! # Examples
//!
//! Loading an inventory and finding the item that needs restocking:
//!
//! ```no_run
//! use shoe_inventory_core::store::{Inventory, RestockPlan};
//!
//! let mut inventory = Inventory::new("inventory.txt");
//! inventory.load()?;
//!
//! if let Some(lowest) = inventory.find_lowest_quantity()? {
//!     let code = lowest.code.clone();
//!     let report = inventory.restock_with(&code, RestockPlan::FillToCap(70))?;
//!     println!("Added {} units to {}", report.delta(), report.code);
//! }
//! # Ok::<(), shoe_inventory_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod item;
pub mod store;
