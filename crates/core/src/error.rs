use log::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Inventory file not found at `{}`.", .path)]
    FileNotFound { path: String },

    #[error(
        "Inventory file has been corrupted at line {}: {}. Please check file contents and try again.",
        .line,
        .reason
    )]
    CorruptedRecord { line: u64, reason: String },

    #[error("'{}' isn't good format (e.g. 'SKU12345')", .0)]
    InvalidCodeFormat(String),

    #[error("{} `{}` may not contain commas or line breaks.", .field, .value)]
    InvalidFieldValue { field: String, value: String },

    #[error("Product code `{}` already exists.", .0)]
    DuplicateCode(String),

    #[error("{} needs to be a number, got `{}`.", .field, .value)]
    NonNumericInput { field: String, value: String },

    #[error("You need to load the inventory file first.")]
    NotLoadedYet,

    #[error("No product with code `{}` in the inventory.", .0)]
    UnknownCode(String),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error reading {} file at path `{}`: {}", .file_description, .path, .original)]
    Csv {
        file_description: String,
        path: String,
        original: csv::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Input was closed.")]
    EndOfInput,
}

impl Error {
    pub fn corrupted_record(line: u64, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        error!("Corrupted inventory record on line {line}: {reason}");
        Self::CorruptedRecord { line, reason }
    }

    pub fn non_numeric_input(field: &str, value: &str) -> Self {
        Self::NonNumericInput {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn csv_error(file_description: String, path: String, original: csv::Error) -> Self {
        Self::Csv {
            file_description,
            path,
            original,
        }
    }

    /// Errors the interactive loop reports and recovers from.
    ///
    /// Everything else (write failures, a closed terminal) ends the session.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Stdio(_) | Self::EndOfInput)
    }
}
