use crate::grid::Grid;
use std::borrow::Cow;

/// A single row or synthesized column of a grid.
///
/// Rows borrow straight from the grid; columns are gathered into a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    /// Characters of the line in reading order
    pub(crate) chars: Cow<'a, [char]>,
}

impl Line<'_> {
    /// Iterates every contiguous substring of the line.
    pub(crate) fn substrings(&self) -> Substrings<'_> {
        Substrings::new(&self.chars)
    }
}

/// Iterator over every line of a grid: all rows first, then all columns.
pub(crate) struct Lines<'a> {
    grid: &'a Grid,
    next_row: usize,
    next_col: usize,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            next_row: 0,
            next_col: 0,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if let Some(row) = self.grid.row(self.next_row) {
            self.next_row += 1;
            return Some(Line {
                chars: Cow::Borrowed(row),
            });
        }

        if self.next_col < self.grid.cols() {
            let chars = self.grid.column(self.next_col).collect();
            self.next_col += 1;
            return Some(Line {
                chars: Cow::Owned(chars),
            });
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.grid.rows() - self.next_row.min(self.grid.rows()))
            + (self.grid.cols() - self.next_col);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Lines<'_> {}

/// Iterator over the `(start, length)` substrings of a character slice.
///
/// Ordered by start, then by increasing length.
pub(crate) struct Substrings<'a> {
    chars: &'a [char],
    start: usize,
    len: usize,
}

impl<'a> Substrings<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            start: 0,
            len: 1,
        }
    }
}

impl<'a> Iterator for Substrings<'a> {
    type Item = &'a [char];

    fn next(&mut self) -> Option<&'a [char]> {
        if self.start >= self.chars.len() {
            return None;
        }

        let item = &self.chars[self.start..self.start + self.len];

        if self.start + self.len < self.chars.len() {
            self.len += 1;
        } else {
            self.start += 1;
            self.len = 1;
        }

        Some(item)
    }
}
