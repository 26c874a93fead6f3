//! The square grid of cell weights the search runs over.
//!
//! A `Grid` can only be built through [`Grid::from_rows`] or [`Grid::filled`],
//! both of which guarantee a non-empty N×N matrix whose values all lie in
//! `0..=MAX_CELL_VALUE`. The search relies on that and never re-validates.

use crate::snake::Point;
use thiserror::Error;

/// Largest weight a cell may carry.
pub const MAX_CELL_VALUE: u16 = 256;

/// Reasons a matrix cannot be turned into a [`Grid`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The matrix has no rows.
    #[error("Grid is empty.")]
    Empty,

    /// Number of rows differs from the width of the first row.
    #[error("Grid is not square: {rows} row(s) but rows are {width} wide.")]
    RowCount { rows: usize, width: usize },

    /// A row is shorter or longer than the first one.
    #[error("Grid row {row} has {found} value(s), expected {expected}.")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell exceeds `MAX_CELL_VALUE`.
    #[error("Value {value} at row {row}, column {col} is too big. Expected integer 0..{max}.", max = MAX_CELL_VALUE)]
    ValueTooLarge { row: usize, col: usize, value: u16 },
}

/// Read-only N×N matrix of weights, indexed by `(column, row)` through [`Point`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u16>, // row-major
}

impl Grid {
    /// Builds a grid from rows of values, checking squareness and range.
    pub fn from_rows(rows: Vec<Vec<u16>>) -> Result<Self, GridError> {
        let size = rows.first().map(Vec::len).ok_or(GridError::Empty)?;
        if size == 0 {
            return Err(GridError::Empty);
        }
        if rows.len() != size {
            return Err(GridError::RowCount {
                rows: rows.len(),
                width: size,
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(GridError::RowLength {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            if let Some((col, &value)) = values
                .iter()
                .enumerate()
                .find(|(_, v)| **v > MAX_CELL_VALUE)
            {
                return Err(GridError::ValueTooLarge { row, col, value });
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// Builds a `size`×`size` grid with every cell set to `value`.
    pub fn filled(size: usize, value: u16) -> Result<Self, GridError> {
        Self::from_rows(vec![vec![value; size]; size])
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `point` addresses a cell of this grid.
    pub fn contains(&self, point: Point) -> bool {
        self.index_of(point).is_some()
    }

    /// Weight of the cell at `point`, or `None` if it lies outside the grid.
    pub fn value_at(&self, point: Point) -> Option<u16> {
        self.index_of(point).map(|i| self.cells[i])
    }

    /// Iterates the rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u16]> {
        self.cells.chunks(self.size)
    }

    /// Serializes the grid as one delimited line per row.
    pub fn to_delimited(&self, delimiter: char) -> String {
        let mut out = String::with_capacity(self.cells.len() * 4);
        for row in self.rows() {
            let line = row
                .iter()
                .map(u16::to_string)
                .collect::<Vec<String>>()
                .join(&delimiter.to_string());
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }
}
