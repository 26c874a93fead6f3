use crate::grid::GridError;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for grid loading operations.
/// Covers failures reading the input file and turning its delimited text
/// into a validated [`crate::grid::Grid`].
#[derive(Error, Debug)]
pub enum GridLoaderError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the first line of the input is blank.
    #[error("File format exception. File is empty.")]
    Empty,

    /// Error when a token is not a non-negative integer.
    #[error("File format exception. Failed to parse '{token}' at row {row}, column {col}. Expected integer 0..256.")]
    InvalidValue {
        row: usize,
        col: usize,
        token: String,
    },

    /// Error when the parsed rows do not form a valid grid.
    #[error("File format exception. {0}")]
    Grid(#[from] GridError),
}
