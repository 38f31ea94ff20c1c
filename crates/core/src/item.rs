//! The shoe product record and validation of user-supplied fields.

use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

/// Every product code starts with this prefix.
pub const CODE_PREFIX: &str = "SKU";
/// Number of digits following [`CODE_PREFIX`].
pub const CODE_DIGITS: usize = 5;

/// One product line of the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub country: String,
    pub code: String,
    pub product: String,
    pub cost: u32,
    pub quantity: u32,
}

impl Item {
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: u32,
        quantity: u32,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// Serializes the item as one line of the inventory file, without a line terminator.
    #[must_use]
    pub fn to_record_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.country, self.code, self.product, self.cost, self.quantity
        )
    }

    /// Stock value of this line: `cost * quantity`.
    #[must_use]
    pub fn line_value(&self) -> u64 {
        u64::from(self.cost) * u64::from(self.quantity)
    }
}

impl Display for Item {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(formatter, "Product code: {}", self.code)?;
        writeln!(formatter, "Name: {}", self.product)?;
        writeln!(formatter, "Price: £{}", self.cost)?;
        writeln!(formatter, "Quantity in stock: {}", self.quantity)?;
        write!(formatter, "Country of Origin: {}", self.country)
    }
}

/// Normalizes and validates a product code.
///
/// Input is case-insensitive; the returned code is upper-cased.
///
/// # Errors
///
/// Returns [`Error::InvalidCodeFormat`] unless the code is `SKU` followed by
/// exactly five digits.
///
/// # Examples
///
/// ```
/// use shoe_inventory_core::item::validate_code;
///
/// assert_eq!(validate_code("sku00042").unwrap(), "SKU00042");
/// assert!(validate_code("SKU12w45").is_err());
/// ```
pub fn validate_code(input: &str) -> Result<String> {
    let code = input.trim().to_uppercase();

    let valid = code.len() == CODE_PREFIX.len() + CODE_DIGITS
        && code.starts_with(CODE_PREFIX)
        && code[CODE_PREFIX.len()..].chars().all(|c| c.is_ascii_digit());

    if valid {
        Ok(code)
    } else {
        Err(Error::InvalidCodeFormat(code))
    }
}

/// Checks a free-text field (product name, country) can be stored on one line.
///
/// # Errors
///
/// Returns [`Error::InvalidFieldValue`] if `input` contains a comma or a line break.
pub fn validate_text(field: &str, input: &str) -> Result<()> {
    if input.contains([',', '\n', '\r']) {
        return Err(Error::InvalidFieldValue {
            field: field.to_string(),
            value: input.to_string(),
        });
    }

    Ok(())
}

/// Parses a price, stock quantity or restock amount.
///
/// # Errors
///
/// Returns [`Error::NonNumericInput`] if `input` is not a non-negative integer.
pub fn parse_amount(field: &str, input: &str) -> Result<u32> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| Error::non_numeric_input(field, trimmed))
}
