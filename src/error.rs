//! Error types for remittance assembly.

use crate::amount::Amount;
use thiserror::Error;

/// Result type alias for remittance operations
pub type Result<T> = std::result::Result<T, RemittanceError>;

/// Errors that can occur while loading input or assembling a file.
///
/// Field-level formatting tolerance never produces an error; everything
/// here is fatal and raised before any record is emitted, so a caller
/// receives either a complete record sequence or exactly one of these.
#[derive(Error, Debug)]
pub enum RemittanceError {
    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid payment row
    #[error("Invalid payment at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Pix key type outside the supported set
    #[error("Unknown Pix key type {0:?}")]
    UnknownKeyType(String),

    /// Amount field that does not parse as a decimal value
    #[error("Invalid amount {0:?}")]
    InvalidAmount(String),

    /// Payments must carry a strictly positive amount
    #[error("Non-positive amount {amount} for payee {payee:?}")]
    NonPositiveAmount { payee: String, amount: Amount },

    /// Payer account field the bank requires is empty
    #[error("Missing required payer field {0:?}")]
    MissingPayerField(&'static str),

    /// Payer file had a header but no data row
    #[error("Payer file contains no records")]
    MissingPayer,

    /// Missing command-line arguments
    #[error("Missing arguments. Usage: cnab240-pix <payer.csv> <payments.csv> <file-sequence>")]
    MissingArgument,

    /// File sequence number that is not a non-negative integer
    #[error("Invalid file sequence number {0:?}")]
    InvalidSequence(String),
}
