//! Reading and writing the flat inventory file.
//!
//! The file starts with a header row, followed by one comma-separated line
//! per item. There is no quoting or escaping, so values cannot contain
//! commas. New items are appended with a leading newline, which means a
//! well-kept file never ends with a line terminator.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};

use log::debug;

use crate::error::{Error, Result};
use crate::item::{parse_amount, validate_code, Item};

/// First line of every inventory file.
pub const HEADER: &str = "Country,Code,Product,Cost,Quantity";

const FIELD_COUNT: usize = 5;
const FILE_DESCRIPTION: &str = "inventory";

fn get_reader(path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::FileNotFound {
            path: path.to_string(),
        }),
        Err(e) => Err(Error::io_error(
            FILE_DESCRIPTION.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn parse_record(line: u64, record: &csv::StringRecord) -> Result<Item> {
    if record.len() != FIELD_COUNT {
        return Err(Error::corrupted_record(
            line,
            format!("expected {FIELD_COUNT} fields, found {}", record.len()),
        ));
    }

    let code = validate_code(&record[1])
        .map_err(|e| Error::corrupted_record(line, format!("{e}")))?;

    let numeric = |index: usize, field: &str| {
        parse_amount(field, &record[index])
            .map_err(|e| Error::corrupted_record(line, format!("{e}")))
    };

    let cost = numeric(3, "Cost")?;
    let quantity = numeric(4, "Quantity")?;

    Ok(Item::new(&record[0], code, &record[2], cost, quantity))
}

/// Loads every item from the inventory file, in file order.
///
/// The header line is skipped. Blank lines are ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`Error::FileNotFound`])
/// - A line does not split into exactly five fields, its code is not a
///   valid product code, its cost or quantity is not a non-negative integer,
///   or its code repeats an earlier line ([`Error::CorruptedRecord`])
/// - The file cannot be read
///
/// # Examples
///
/// ```no_run
/// use shoe_inventory_core::file_handling::read_inventory;
///
/// let items = read_inventory("inventory.txt")?;
/// println!("Loaded {} products", items.len());
/// # Ok::<(), shoe_inventory_core::error::Error>(())
/// ```
pub fn read_inventory(path: &str) -> Result<Vec<Item>> {
    let file = get_reader(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .from_reader(file);

    let mut items = Vec::new();
    let mut codes = HashSet::new();
    let mut record = csv::StringRecord::new();

    loop {
        let has_record = reader.read_record(&mut record).map_err(|e| {
            Error::csv_error(FILE_DESCRIPTION.to_string(), path.to_string(), e)
        })?;

        if !has_record {
            break;
        }

        let line = record.position().map_or(0, csv::Position::line);
        let item = parse_record(line, &record)?;
        if !codes.insert(item.code.clone()) {
            return Err(Error::corrupted_record(
                line,
                format!("duplicate product code `{}`", item.code),
            ));
        }
        items.push(item);
    }

    debug!("Read {} items from `{}`", items.len(), path);
    Ok(items)
}

/// Appends one item to the end of the inventory file.
///
/// Only the new line is written; the rest of the file is left untouched.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or written.
pub fn append_item(path: &str, item: &Item) -> Result<()> {
    let io_error = |e| Error::io_error(FILE_DESCRIPTION.to_string(), path.to_string(), e);

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(io_error)?;

    write!(file, "\n{}", item.to_record_line()).map_err(io_error)?;
    debug!("Appended `{}` to `{}`", item.code, path);
    Ok(())
}

/// Renders the full file contents: header first, then one line per item.
#[must_use]
pub fn serialize_inventory(items: &[Item]) -> String {
    let mut contents = String::from(HEADER);
    for item in items {
        contents.push('\n');
        contents.push_str(&item.to_record_line());
    }
    contents
}

/// Replaces the inventory file with the given items, in order.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn write_inventory(path: &str, items: &[Item]) -> Result<()> {
    let io_error = |e| Error::io_error(FILE_DESCRIPTION.to_string(), path.to_string(), e);

    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(serialize_inventory(items).as_bytes())
        .map_err(io_error)?;

    debug!("Rewrote `{}` with {} items", path, items.len());
    Ok(())
}
