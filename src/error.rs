//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, CSV, regex, and mail errors, and provides semantic
//! variants for row-shape failures and external typesetting tools.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid identifier pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Row at line {line} has {width} fields, column {column} is out of range")]
    RowShape {
        line: u64,
        column: usize,
        width: usize,
    },

    #[error("External tool '{tool}' failed: {status}")]
    ExternalTool { tool: &'static str, status: String },

    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Message build error: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Processing error: {0}")]
    Processing(String),
}
