//! Heterogeneous rank-2 sequences.

use crate::collections::SharedVec;
use crate::error::{Error, Result};
use crate::value::Value;

/// A rows x cols grid of heterogeneous values, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    shape: Vec<usize>,
    cells: SharedVec<Value>,
}

impl Sequence {
    /// Creates a sequence from explicit dimensions and row-major cells.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ShapeMismatch`](crate::ErrorKind::ShapeMismatch)
    /// if `rows * cols` does not match the cell count.
    pub fn new(rows: usize, cols: usize, cells: Vec<Value>) -> Result<Self> {
        if cells.len() != rows * cols {
            return Err(Error::shape_mismatch(rows * cols, cells.len()));
        }
        Ok(Self {
            shape: vec![rows, cols],
            cells: cells.into(),
        })
    }

    /// Creates a single-row sequence.
    #[must_use]
    pub fn row(cells: Vec<Value>) -> Self {
        Self {
            shape: vec![1, cells.len()],
            cells: cells.into(),
        }
    }

    /// Creates a sequence from nested rows.
    ///
    /// # Errors
    /// Returns [`ErrorKind::RaggedRows`](crate::ErrorKind::RaggedRows) if
    /// the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::ragged_rows(i, ncols, row.len()));
            }
            cells.extend(row);
        }
        Self::new(nrows, ncols, cells)
    }

    /// Returns the shape, always `[rows, cols]`.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn numel(&self) -> usize {
        self.cells.len()
    }

    /// Gets the cell at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        if row < self.rows() && col < self.cols() {
            self.cells.get(row * self.cols() + col)
        } else {
            None
        }
    }
}
