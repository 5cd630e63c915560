//! Error types for table display operations.
//!
//! Only two things can fail: building a table from malformed column metadata,
//! and writing rendered output to a sink. Everything else is a plain append or
//! a read-only traversal.

use thiserror::Error;

/// Errors that can occur when building or writing a [`TableDisplay`](crate::TableDisplay).
#[derive(Debug, Error)]
pub enum DisplayError {
    /// A table needs at least one column.
    #[error("a table display needs at least one column")]
    NoColumns,

    /// Every column name must come with a type label.
    #[error("got {names} column names but {types} column types")]
    ColumnTypeMismatch { names: usize, types: usize },

    /// Configuration could not be parsed.
    #[error("invalid display configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Writing rendered output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for display operations.
pub type Result<T> = std::result::Result<T, DisplayError>;
