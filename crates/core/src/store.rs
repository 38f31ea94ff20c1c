//! The inventory store: the in-memory product list and its backing file.
//!
//! A store starts out [`StoreState::Unloaded`]. A successful [`Inventory::load`]
//! moves it to [`StoreState::Loaded`]; every other operation refuses to run
//! before that with [`Error::NotLoadedYet`].

use indexmap::IndexMap;
use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::file_handling;
use crate::item::{validate_code, validate_text, Item};

#[derive(Debug, Default)]
pub enum StoreState {
    #[default]
    Unloaded,
    Loaded(Vec<Item>),
}

/// Result of looking a product code up.
#[derive(Debug, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    Found(&'a Item),
    NotFound(String),
}

/// Quantity change applied by [`Inventory::restock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockReport {
    pub code: String,
    pub previous: u32,
    pub current: u32,
}

impl RestockReport {
    /// Units added to stock.
    #[must_use]
    pub fn delta(&self) -> i64 {
        i64::from(self.current) - i64::from(self.previous)
    }
}

/// How the new quantity of a restocked item is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestockPlan {
    /// Top the item up to this many units. Never lowers stock already above it.
    FillToCap(u32),
    /// Add this many units on top of the current stock.
    AddUnits(u32),
}

impl RestockPlan {
    #[must_use]
    pub fn target_quantity(self, current: u32) -> u32 {
        match self {
            RestockPlan::FillToCap(cap) => current.max(cap),
            RestockPlan::AddUnits(units) => current.saturating_add(units),
        }
    }
}

/// Per-item stock values, keyed by product code in collection order, plus their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockValuation {
    pub per_item: IndexMap<String, u64>,
    pub total: u64,
}

/// Product list backed by a flat inventory file.
#[derive(Debug)]
pub struct Inventory {
    path: String,
    state: StoreState,
}

/// Linear scan that keeps the first item for which `replaces(best, candidate)` never held.
fn first_extreme<'a>(items: &'a [Item], replaces: impl Fn(u32, u32) -> bool) -> Option<&'a Item> {
    items.iter().fold(None::<&'a Item>, |best, item| match best {
        Some(best) if !replaces(best.quantity, item.quantity) => Some(best),
        _ => Some(item),
    })
}

impl Inventory {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: StoreState::Unloaded,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, StoreState::Loaded(_))
    }

    /// Items in collection order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLoadedYet`] before a successful load.
    pub fn items(&self) -> Result<&[Item]> {
        match &self.state {
            StoreState::Loaded(items) => Ok(items),
            StoreState::Unloaded => Err(Error::NotLoadedYet),
        }
    }

    fn items_mut(&mut self) -> Result<&mut Vec<Item>> {
        match &mut self.state {
            StoreState::Loaded(items) => Ok(items),
            StoreState::Unloaded => Err(Error::NotLoadedYet),
        }
    }

    /// Reads the backing file and replaces the in-memory collection.
    ///
    /// On failure the store keeps whatever state it had before.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] or [`Error::CorruptedRecord`] as
    /// reported by [`file_handling::read_inventory`].
    pub fn load(&mut self) -> Result<usize> {
        let items = file_handling::read_inventory(&self.path)?;
        let count = items.len();

        if self.is_loaded() {
            info!("Reloading inventory from `{}`", self.path);
        }

        self.state = StoreState::Loaded(items);
        info!("Loaded {} items from `{}`", count, self.path);
        Ok(count)
    }

    /// Adds a new product to the end of the collection and the backing file.
    ///
    /// The code is validated and normalized to upper case first.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The store is not loaded
    /// - The code is not `SKU` followed by five digits
    /// - The product name or country contains a comma or line break
    /// - An item with the same code already exists
    /// - The backing file cannot be appended to
    pub fn append(&mut self, mut item: Item) -> Result<&Item> {
        item.code = validate_code(&item.code)?;
        validate_text("Name", &item.product)?;
        validate_text("Country", &item.country)?;

        if self.contains(&item.code)? {
            warn!("Rejected duplicate product code `{}`", item.code);
            return Err(Error::DuplicateCode(item.code));
        }

        file_handling::append_item(&self.path, &item)?;

        let items = self.items_mut()?;
        items.push(item);
        let added = &items[items.len() - 1];
        info!("Captured new product `{}`", added.code);
        Ok(added)
    }

    /// Whether an item with exactly this (already upper-cased) code exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLoadedYet`] before a successful load.
    pub fn contains(&self, code: &str) -> Result<bool> {
        Ok(self.items()?.iter().any(|item| item.code == code))
    }

    /// Finds the item whose stored code equals `code` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLoadedYet`] before a successful load. A missing
    /// code is reported as [`SearchOutcome::NotFound`], not as an error.
    pub fn search(&self, code: &str) -> Result<SearchOutcome<'_>> {
        let outcome = match self.items()?.iter().find(|item| item.code == code) {
            Some(item) => SearchOutcome::Found(item),
            None => SearchOutcome::NotFound(code.to_string()),
        };
        debug!("Search for `{}`: {:?}", code, outcome);
        Ok(outcome)
    }

    /// The item with the lowest quantity; the first one wins a tie.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLoadedYet`] before a successful load.
    pub fn find_lowest_quantity(&self) -> Result<Option<&Item>> {
        Ok(first_extreme(self.items()?, |best, candidate| {
            candidate < best
        }))
    }

    /// The item with the highest quantity; the first one wins a tie.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLoadedYet`] before a successful load.
    pub fn find_highest_quantity(&self) -> Result<Option<&Item>> {
        Ok(first_extreme(self.items()?, |best, candidate| {
            candidate > best
        }))
    }

    /// Sets the quantity of `code` to `new_quantity` and rewrites the whole backing file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The store is not loaded
    /// - No item has this code
    /// - The backing file cannot be rewritten
    pub fn restock(&mut self, code: &str, new_quantity: u32) -> Result<RestockReport> {
        let items = self.items()?;
        let index = items
            .iter()
            .position(|item| item.code == code)
            .ok_or_else(|| Error::UnknownCode(code.to_string()))?;

        let report = RestockReport {
            code: items[index].code.clone(),
            previous: items[index].quantity,
            current: new_quantity,
        };

        let mut updated = items.to_vec();
        updated[index].quantity = new_quantity;
        file_handling::write_inventory(&self.path, &updated)?;

        self.state = StoreState::Loaded(updated);
        info!(
            "Restocked `{}` from {} to {} units",
            report.code, report.previous, report.current
        );
        Ok(report)
    }

    /// Restocks `code` with a quantity computed from its current stock.
    ///
    /// # Errors
    ///
    /// See [`Inventory::restock`].
    pub fn restock_with(&mut self, code: &str, plan: RestockPlan) -> Result<RestockReport> {
        let current = match self.search(code)? {
            SearchOutcome::Found(item) => item.quantity,
            SearchOutcome::NotFound(code) => return Err(Error::UnknownCode(code)),
        };

        self.restock(code, plan.target_quantity(current))
    }

    /// Value of every item (`cost * quantity`) and the grand total.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLoadedYet`] before a successful load.
    pub fn total_value_by_item(&self) -> Result<StockValuation> {
        let mut per_item = IndexMap::new();
        let mut total: u64 = 0;

        for item in self.items()? {
            let value = item.line_value();
            total = total.saturating_add(value);
            per_item.insert(item.code.clone(), value);
        }

        Ok(StockValuation { per_item, total })
    }
}
