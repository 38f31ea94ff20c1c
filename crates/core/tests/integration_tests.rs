//! Integration tests for shoe-inventory-core
//!
//! These tests drive the store against real files on disk to verify that the
//! in-memory collection and the backing file stay in step.

use shoe_inventory_core::{
    config::{get_inventory_path, DEFAULT_MAX_STOCK},
    error::Error,
    file_handling::{read_inventory, serialize_inventory},
    item::Item,
    store::{Inventory, RestockPlan, SearchOutcome},
};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_INVENTORY: &str = "Country,Code,Product,Cost,Quantity
South Africa,SKU44386,Air Max 90,2300,20
China,SKU90000,Jordan 1,3200,50
Vietnam,SKU63221,Blazer,1700,19
United States,SKU29077,Cortez,970,60
Russia,SKU89999,Air Force 1,2000,43";

fn sample_file() -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{SAMPLE_INVENTORY}").unwrap();
    temp_file
}

fn path_of(temp_file: &NamedTempFile) -> String {
    temp_file.path().to_str().unwrap().to_string()
}

/// Loading then serializing reproduces the file byte for byte
#[test]
fn test_load_serialize_round_trip() {
    let temp_file = sample_file();
    let mut inventory = Inventory::new(path_of(&temp_file));

    assert_eq!(inventory.load().unwrap(), 5);
    assert_eq!(
        serialize_inventory(inventory.items().unwrap()),
        SAMPLE_INVENTORY
    );
}

/// Capture, restock and reload a complete session's worth of changes
#[test]
fn test_capture_restock_reload_workflow() {
    let temp_file = sample_file();
    let path = path_of(&temp_file);
    let mut inventory = Inventory::new(path.clone());
    inventory.load().unwrap();

    inventory
        .append(Item::new("Portugal", "sku10101", "Stan Smith", 1500, 8))
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        format!("{SAMPLE_INVENTORY}\nPortugal,SKU10101,Stan Smith,1500,8")
    );

    let lowest = inventory.find_lowest_quantity().unwrap().unwrap();
    assert_eq!(lowest.code, "SKU10101");
    let code = lowest.code.clone();

    let report = inventory
        .restock_with(&code, RestockPlan::FillToCap(DEFAULT_MAX_STOCK))
        .unwrap();
    assert_eq!(report.delta(), 62);

    let mut reloaded = Inventory::new(path);
    reloaded.load().unwrap();
    assert_eq!(reloaded.items().unwrap(), inventory.items().unwrap());
    match reloaded.search("SKU10101").unwrap() {
        SearchOutcome::Found(item) => assert_eq!(item.quantity, 70),
        SearchOutcome::NotFound(code) => panic!("{code} should have been captured"),
    }
}

/// A rejected capture leaves the file untouched
#[test]
fn test_rejected_capture_does_not_touch_file() {
    let temp_file = sample_file();
    let path = path_of(&temp_file);
    let mut inventory = Inventory::new(path.clone());
    inventory.load().unwrap();

    let duplicate = inventory.append(Item::new("Peru", "sku44386", "Boot", 1, 1));
    assert!(matches!(duplicate, Err(Error::DuplicateCode(_))));

    let malformed = inventory.append(Item::new("Peru", "SKU4438", "Boot", 1, 1));
    assert!(matches!(malformed, Err(Error::InvalidCodeFormat(_))));

    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_INVENTORY);
    assert_eq!(inventory.items().unwrap().len(), 5);
}

/// Values and the sale candidate come from the same loaded collection
#[test]
fn test_valuation_and_sale_candidate() {
    let temp_file = sample_file();
    let mut inventory = Inventory::new(path_of(&temp_file));
    inventory.load().unwrap();

    let valuation = inventory.total_value_by_item().unwrap();
    assert_eq!(valuation.per_item.len(), 5);
    assert_eq!(valuation.per_item["SKU44386"], 46_000);
    assert_eq!(valuation.per_item.get_index(0).unwrap().0, "SKU44386");
    assert_eq!(
        valuation.total,
        46_000 + 160_000 + 32_300 + 58_200 + 86_000
    );

    let highest = inventory.find_highest_quantity().unwrap().unwrap();
    assert_eq!(highest.code, "SKU29077");
}

/// A corrupted line anywhere in the file fails the whole load
#[test]
fn test_corrupted_file_fails_load() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(
        temp_file,
        "Country,Code,Product,Cost,Quantity\nChina,SKU90000,Jordan 1,3200,50\nVietnam;SKU63221;Blazer;1700;19"
    )
    .unwrap();

    let result = read_inventory(&path_of(&temp_file));
    assert!(matches!(result, Err(Error::CorruptedRecord { line: 3, .. })));

    let mut inventory = Inventory::new(path_of(&temp_file));
    assert!(inventory.load().is_err());
    assert!(!inventory.is_loaded());
}

#[test]
fn test_inventory_path_resolution() {
    assert_eq!(get_inventory_path(&None), "inventory.txt");
    let custom = get_inventory_path(&Some("~/stock/inventory.txt".to_string()));
    assert!(custom.ends_with("stock/inventory.txt"));
}
