//! The interactive menu loop.
//!
//! One selection is read, run to completion, and the menu is shown again
//! until the user exits or the input closes. Every error an action can
//! recover from is printed and the loop carries on.

use std::io::{BufRead, Write};

use log::{debug, info, warn};
use shoe_inventory_core::error::{Error, Result};
use shoe_inventory_core::item::Item;
use shoe_inventory_core::store::{Inventory, RestockPlan, SearchOutcome};

use crate::input::Console;
use crate::menu::{MenuChoice, RestockChoice};

/// Whether the loop should keep going after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu loop driving an [`Inventory`] from console input.
pub struct Session<'a, R, W> {
    inventory: &'a mut Inventory,
    console: Console<R, W>,
    max_stock: u32,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(inventory: &'a mut Inventory, console: Console<R, W>, max_stock: u32) -> Self {
        Self {
            inventory,
            console,
            max_stock,
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the menu until the user picks Exit or the input closes.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures the loop cannot recover from, such
    /// as a failed write to the inventory file.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(Error::EndOfInput) => {
                    self.console.say("Goodbye!")?;
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {
                    warn!("Action failed: {e}");
                    self.console.say(format!("\n‼ {e}"))?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        self.console.say("\nPlease select one of the following options:")?;
        for choice in MenuChoice::ALL {
            self.console.say(format!("  {choice}"))?;
        }
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        self.print_menu()?;
        let selection = self.console.prompt("Your selection: ")?;

        let Some(choice) = MenuChoice::parse(&selection) else {
            self.console
                .say("\n‼ You have made a wrong choice, please try again.")?;
            return Ok(Flow::Continue);
        };
        debug!("Menu selection: {:?}", choice);

        if choice.requires_loaded() && !self.inventory.is_loaded() {
            return Err(Error::NotLoadedYet);
        }

        match choice {
            MenuChoice::Load => self.load()?,
            MenuChoice::Capture => self.capture()?,
            MenuChoice::ViewAll => self.view_all()?,
            MenuChoice::Restock => self.restock()?,
            MenuChoice::Search => self.search()?,
            MenuChoice::Values => self.values()?,
            MenuChoice::Sale => self.sale()?,
            MenuChoice::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn load(&mut self) -> Result<()> {
        let count = self.inventory.load()?;
        self.console
            .say(format!("\nInventory loaded successfully ({count} products)."))
    }

    fn capture(&mut self) -> Result<()> {
        let code = self.console.prompt_code()?;

        if self.inventory.contains(&code)? {
            return Err(Error::DuplicateCode(code));
        }

        let product = self
            .console
            .prompt_text("Name", "Enter the product name: ")?;
        let cost = self.console.prompt_amount("Price", "Enter the price: ")?;
        let quantity = self
            .console
            .prompt_amount("Quantity", "Enter the stock quantity: ")?;
        let country = self
            .console
            .prompt_text("Country", "Enter the country of origin: ")?;

        let added = self
            .inventory
            .append(Item::new(country, code, product, cost, quantity))?;
        let message = format!("\nProduct {} added to inventory.", added.code);
        self.console.say(message)
    }

    fn view_all(&mut self) -> Result<()> {
        let Self {
            inventory, console, ..
        } = self;

        for item in inventory.items()? {
            console.say(format!("\n{item}"))?;
        }
        Ok(())
    }

    fn restock(&mut self) -> Result<()> {
        let Some(lowest) = self.inventory.find_lowest_quantity()? else {
            return self.console.say("\nThere are no products to restock.");
        };
        let code = lowest.code.clone();
        let card = format!("\nThe product with the lowest quantity in stock:\n{lowest}\n");
        self.console.say(card)?;

        let plan = match self.console.prompt_restock_choice(self.max_stock)? {
            RestockChoice::FillToMax => RestockPlan::FillToCap(self.max_stock),
            RestockChoice::AddQuantity => RestockPlan::AddUnits(
                self.console
                    .prompt_amount("Restock amount", "Enter how many units to add to stock: ")?,
            ),
            RestockChoice::Cancel => {
                info!("Restock of `{}` cancelled", code);
                return Ok(());
            }
        };

        let report = self.inventory.restock_with(&code, plan)?;
        self.console
            .say(format!("Added {} units to stock.", report.delta()))?;
        self.console
            .say(format!("New stock total: {}", report.current))
    }

    fn search(&mut self) -> Result<()> {
        let query = self
            .console
            .prompt("Enter the SKU code you want to search: ")?
            .trim()
            .to_uppercase();

        let message = match self.inventory.search(&query)? {
            SearchOutcome::Found(item) => format!("\n{item}"),
            SearchOutcome::NotFound(code) => format!("\n‼ '{code}' not found."),
        };
        self.console.say(message)
    }

    fn values(&mut self) -> Result<()> {
        let valuation = self.inventory.total_value_by_item()?;
        let Self {
            inventory, console, ..
        } = self;

        console.say("\nThe values of each stock item\n")?;
        for item in inventory.items()? {
            let value = valuation.per_item.get(&item.code).copied().unwrap_or(0);
            console.say(format!("{} ({}) value: £{}", item.code, item.product, value))?;
        }
        console.say(format!("\nTotal stock worth: £{}", valuation.total))
    }

    fn sale(&mut self) -> Result<()> {
        let message = match self.inventory.find_highest_quantity()? {
            Some(highest) => format!(
                "\nThis shoe has the highest quantity in stock:\n\n{highest}\n\nIt's going on SALE!"
            ),
            None => "\nThere are no products to put on sale.".to_string(),
        };
        self.console.say(message)
    }
}
