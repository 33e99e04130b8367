use crate::error::{Error, Result};
use crate::lines::Lines;

/// Maximum number of rows and of columns a grid may have.
pub const MAX_GRID_DIMENSION: usize = 64;

/// A validated, rectangular character grid.
///
/// Rows are stored as `char` sequences so that columns are measured in
/// characters rather than bytes.
///
/// # Example
///
/// ```
/// use word_search_rs::Grid;
///
/// let grid = Grid::new(["abc", "def"]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// let column: String = grid.column(1).collect();
/// assert_eq!(column, "be");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    cols: usize,
}

impl Grid {
    /// Validates `rows` and builds a grid from them.
    ///
    /// Fails with [`Error::InvalidGrid`] when there are no rows or the rows
    /// differ in length, and with [`Error::OversizeGrid`] when either
    /// dimension exceeds [`MAX_GRID_DIMENSION`].
    pub fn new<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();

        let Some(first) = cells.first() else {
            log::debug!("rejecting grid with no rows");
            return Err(Error::InvalidGrid(
                "grid must contain at least one row".to_string(),
            ));
        };
        let cols = first.len();

        if cells.len() > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
            log::debug!("rejecting oversize grid {}x{}", cells.len(), cols);
            return Err(Error::OversizeGrid {
                rows: cells.len(),
                cols,
            });
        }

        if let Some((i, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != cols) {
            log::debug!("rejecting ragged grid at row {}", i);
            return Err(Error::InvalidGrid(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                cols
            )));
        }

        Ok(Self { cells, cols })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns row `i`, read left to right.
    pub fn row(&self, i: usize) -> Option<&[char]> {
        self.cells.get(i).map(Vec::as_slice)
    }

    /// Returns column `j`, read top to bottom.
    ///
    /// Yields nothing when `j` is out of range.
    pub fn column(&self, j: usize) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().filter_map(move |row| row.get(j).copied())
    }

    /// Iterates every row, then every column.
    pub(crate) fn lines(&self) -> Lines<'_> {
        Lines::new(self)
    }
}
