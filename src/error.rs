//! Error types for the IIF export pipeline.

use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur during an export run.
///
/// There is no skip-and-continue path for broken input: a malformed row or
/// amount aborts the run, since a partially converted import file would be
/// silently wrong in the books.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to open, read, or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data row has the wrong shape or an unparseable date
    #[error("Malformed row {row}: {message}")]
    MalformedRow { row: usize, message: String },

    /// An amount or fee field is not valid currency text
    #[error("Malformed amount {value:?} at row {row}")]
    MalformedAmount { row: usize, value: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: iif-export <payments.csv>")]
    MissingArgument,
}
