//! # Word Search - Grid Substring Frequency Index
//!
//! Indexes every contiguous horizontal and vertical substring of a character
//! grid and ranks candidate words by how often they occur.
//!
//! Construction enforces two constraints on the grid:
//! 1. **Shape**: at least one row, and all rows the same length
//! 2. **Capacity**: at most 64 rows and 64 columns
//!
//! ## Example
//!
//! ```
//! use word_search_rs::SubstringIndex;
//!
//! let index = SubstringIndex::from_rows(["abcd", "efgh", "ijkl", "mnop"]).unwrap();
//!
//! // Columns are read top to bottom
//! let found = index.find(["dhlp", "aeim", "zzz"]);
//! assert_eq!(found, vec!["aeim", "dhlp"]);
//!
//! println!("Indexed {} distinct substrings", index.len());
//! ```
//!
//! ## Performance
//!
//! - A line of length L contributes L(L+1)/2 substrings, so an R×C grid
//!   costs R·C²/2 + C·R²/2 insertions
//! - Queries are one hash lookup per word plus a sort of the hits
//! - The index is immutable once built and can be shared across threads

mod error;
mod grid;
mod index;
mod lines;
mod rank;


pub use error::{Error, Result};
pub use grid::{Grid, MAX_GRID_DIMENSION};
pub use index::{IndexStats, SubstringIndex};
pub use rank::MAX_RESULTS;
