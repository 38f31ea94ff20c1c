use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use shoe_inventory_cli::cli_args::Args;
use shoe_inventory_cli::input::Console;
use shoe_inventory_cli::session::Session;
use shoe_inventory_core::config;
use shoe_inventory_core::error::Result;
use shoe_inventory_core::store::Inventory;

fn execute() -> Result<()> {
    let args = Args::parse();

    let inventory_path = config::get_inventory_path(&args.inventory_path);
    debug!("Inventory path: `{}`", inventory_path);

    let mut inventory = Inventory::new(inventory_path);
    let console = Console::new(stdin().lock(), stdout().lock());

    Session::new(&mut inventory, console, args.max_stock).run()
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
