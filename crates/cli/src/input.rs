//! Console prompts and user input handling.
//!
//! All prompts re-ask until they get a usable answer, so callers only ever see
//! valid values or an I/O failure.

use std::io::{BufRead, Write};

use log::debug;
use shoe_inventory_core::error::{Error, Result};
use shoe_inventory_core::item::{parse_amount, validate_code, validate_text};

use crate::menu::RestockChoice;

/// Line-oriented console over any reader and writer.
///
/// The binary uses locked stdin/stdout; tests script the input with a `Cursor`.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes a full line of output.
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one line, without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfInput`] once the input is closed.
    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("Input closed while waiting for `{}`", prompt.trim());
            return Err(Error::EndOfInput);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Asks for a product code until it is `SKU` followed by five digits.
    ///
    /// Returns the upper-cased code.
    pub fn prompt_code(&mut self) -> Result<String> {
        loop {
            let input = self.prompt("Enter the product code: ")?;
            match validate_code(&input) {
                Ok(code) => return Ok(code),
                Err(e) => self.say(format!("‼ {e}. Let's try again."))?,
            }
        }
    }

    /// Asks for a free-text value until it fits on one inventory line.
    pub fn prompt_text(&mut self, field: &str, prompt: &str) -> Result<String> {
        loop {
            let input = self.prompt(prompt)?;
            match validate_text(field, &input) {
                Ok(()) => return Ok(input),
                Err(e) => self.say(format!("‼ {e} Let's try again."))?,
            }
        }
    }

    /// Asks for a non-negative integer until one is entered.
    pub fn prompt_amount(&mut self, field: &str, prompt: &str) -> Result<u32> {
        loop {
            let input = self.prompt(prompt)?;
            match parse_amount(field, &input) {
                Ok(amount) => return Ok(amount),
                Err(e) => self.say(format!("‼ {e} Let's try again."))?,
            }
        }
    }

    /// Offers the restock options until one of them is picked.
    pub fn prompt_restock_choice(&mut self, max_stock: u32) -> Result<RestockChoice> {
        self.say("Choose stock refill options:")?;
        self.say(format!(
            "    a. Restock up to max quantity allowed ({max_stock} units)"
        ))?;
        self.say("    b. Restock specific quantity")?;
        self.say("    c. Go back to menu")?;

        loop {
            let input = self.prompt("Your choice: ")?;
            match RestockChoice::parse(&input) {
                Some(choice) => return Ok(choice),
                None => self.say("‼ You have made a wrong choice, please try again.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_prompt_strips_line_terminator() {
        let mut console = console("Air Max 90\r\n");
        assert_eq!(console.prompt("Name: ").unwrap(), "Air Max 90");
        assert_eq!(output(console), "Name: ");
    }

    #[test]
    fn test_prompt_end_of_input() {
        let mut console = console("");
        assert!(matches!(console.prompt("Name: "), Err(Error::EndOfInput)));
    }

    #[test]
    fn test_prompt_code_retries_until_valid() {
        let mut console = console("SKU12w45\nABC12345\nsku12345\n");
        assert_eq!(console.prompt_code().unwrap(), "SKU12345");

        let printed = output(console);
        assert!(printed.contains("'SKU12W45' isn't good format"));
        assert!(printed.contains("'ABC12345' isn't good format"));
    }

    #[test]
    fn test_prompt_amount_retries_until_numeric() {
        let mut console = console("twelve\n-3\n12\n");
        assert_eq!(
            console.prompt_amount("Price", "Enter the price: ").unwrap(),
            12
        );
        assert!(output(console).contains("Price needs to be a number"));
    }

    #[test]
    fn test_prompt_text_retries_on_comma() {
        let mut console = console("Boot, suede\nSuede Boot\n");
        assert_eq!(
            console.prompt_text("Name", "Enter the product name: ").unwrap(),
            "Suede Boot"
        );
        assert!(output(console).contains("Name `Boot, suede` may not contain commas"));
    }

    #[test]
    fn test_prompt_restock_choice_retries() {
        let mut console = console("x\nb\n");
        assert_eq!(
            console.prompt_restock_choice(70).unwrap(),
            RestockChoice::AddQuantity
        );

        let printed = output(console);
        assert!(printed.contains("(70 units)"));
        assert!(printed.contains("wrong choice"));
    }
}
