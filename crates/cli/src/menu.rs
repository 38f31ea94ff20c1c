//! Main menu options.

use std::fmt::{Display, Formatter};

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    Capture,
    ViewAll,
    Restock,
    Search,
    Values,
    Sale,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::Load,
        MenuChoice::Capture,
        MenuChoice::ViewAll,
        MenuChoice::Restock,
        MenuChoice::Search,
        MenuChoice::Values,
        MenuChoice::Sale,
        MenuChoice::Exit,
    ];

    /// Parses a menu selection such as `"3"`. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let number = input.trim().parse::<usize>().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    #[must_use]
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .map_or(0, |index| index + 1)
    }

    /// Whether the inventory must be loaded before this option can run.
    #[must_use]
    pub fn requires_loaded(self) -> bool {
        !matches!(self, MenuChoice::Load | MenuChoice::Exit)
    }

    fn label(self) -> &'static str {
        match self {
            MenuChoice::Load => "Load the inventory file",
            MenuChoice::Capture => "Enter new product to inventory",
            MenuChoice::ViewAll => "View all products",
            MenuChoice::Restock => "Re-stock",
            MenuChoice::Search => "Search for a product",
            MenuChoice::Values => "Values of each stock item",
            MenuChoice::Sale => "Find product for SALE",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl Display for MenuChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.number(), self.label())
    }
}

/// Sub-choices offered when restocking the lowest-quantity item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestockChoice {
    FillToMax,
    AddQuantity,
    Cancel,
}

impl RestockChoice {
    /// Accepts `a`, `b` or `c`, case-insensitively and with an optional trailing dot.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().trim_end_matches('.').to_lowercase().as_str() {
            "a" => Some(RestockChoice::FillToMax),
            "b" => Some(RestockChoice::AddQuantity),
            "c" => Some(RestockChoice::Cancel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Load));
        assert_eq!(MenuChoice::parse(" 5\n"), Some(MenuChoice::Search));
        assert_eq!(MenuChoice::parse("8"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("load"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_menu_numbers_round_trip() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.number().to_string()), Some(choice));
        }
    }

    #[test]
    fn test_requires_loaded() {
        assert!(!MenuChoice::Load.requires_loaded());
        assert!(!MenuChoice::Exit.requires_loaded());
        assert!(MenuChoice::Capture.requires_loaded());
        assert!(MenuChoice::Sale.requires_loaded());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", MenuChoice::Restock), "4 - Re-stock");
    }

    #[test]
    fn test_parse_restock_choice() {
        assert_eq!(RestockChoice::parse("a"), Some(RestockChoice::FillToMax));
        assert_eq!(RestockChoice::parse("B."), Some(RestockChoice::AddQuantity));
        assert_eq!(RestockChoice::parse(" c \n"), Some(RestockChoice::Cancel));
        assert_eq!(RestockChoice::parse("d"), None);
    }
}
