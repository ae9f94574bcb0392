//! Error types for rental billing.

use thiserror::Error;

/// Result type alias for billing operations
pub type Result<T> = std::result::Result<T, RentalError>;

/// Errors that can occur while building or loading a statement.
#[derive(Error, Debug)]
pub enum RentalError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid rental record in the input
    #[error("Invalid rental at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// A rental was given a negative duration
    #[error("Invalid days rented: {days}")]
    InvalidDaysRented { days: i64 },

    /// Category name that maps to no known pricing policy
    #[error("Unknown movie category: {0:?}")]
    UnknownCategory(String),

    /// The same title listed under two different categories
    #[error("Movie {title:?} is already {existing}, not {requested}")]
    ConflictingCategory {
        title: String,
        existing: String,
        requested: String,
    },

    /// Missing command-line arguments
    #[error("Missing arguments. Usage: rental-statement <customer-name> <rentals.csv>")]
    MissingArgument,
}
