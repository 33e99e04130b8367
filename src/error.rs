use thiserror::Error;

/// Result type alias for grid indexing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a [`SubstringIndex`](crate::SubstringIndex).
///
/// Queries never fail; only construction can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The grid is empty or not rectangular.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// The grid exceeds the fixed capacity bound.
    #[error("Grid of {rows}x{cols} exceeds the maximum size of {max}x{max}", max = crate::MAX_GRID_DIMENSION)]
    OversizeGrid {
        /// Number of rows supplied
        rows: usize,
        /// Number of columns in the first row
        cols: usize,
    },
}
