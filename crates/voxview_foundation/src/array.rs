//! Shaped leaf values: numeric arrays and character grids.
//!
//! Both types store row-major data behind an `Arc`, so cloning and
//! reshaping are O(1). Logical and integer elements are normalized into
//! the same `f64` storage at construction; [`ElemKind`] only controls how
//! elements are later formatted.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::shape;

/// Element kind of a [`NumericArray`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElemKind {
    /// Logical elements, stored as 0.0 / 1.0.
    Bool,
    /// Integer elements, stored exactly for |v| < 2^53.
    Int,
    /// Floating point elements.
    Float,
}

impl ElemKind {
    /// Returns the display name of this element kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
        }
    }
}

/// N-dimensional numeric array, rank >= 0, row-major.
#[derive(Clone, Debug)]
pub struct NumericArray {
    elem: ElemKind,
    shape: Vec<usize>,
    data: Arc<[f64]>,
}

impl NumericArray {
    /// Creates an array from a shape and row-major data.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ShapeMismatch`](crate::ErrorKind::ShapeMismatch)
    /// if the data length does not match the shape.
    pub fn new(elem: ElemKind, shape: Vec<usize>, data: Vec<f64>) -> Result<Self> {
        let expected = shape::numel(&shape);
        if data.len() != expected {
            return Err(Error::shape_mismatch(expected, data.len()));
        }
        Ok(Self {
            elem,
            shape,
            data: data.into(),
        })
    }

    /// Creates a 1x1 array holding a single value.
    #[must_use]
    pub fn scalar(elem: ElemKind, value: f64) -> Self {
        Self {
            elem,
            shape: vec![1, 1],
            data: Arc::from(vec![value]),
        }
    }

    /// Creates a rank-2 float array from nested rows.
    ///
    /// # Errors
    /// Returns [`ErrorKind::RaggedRows`](crate::ErrorKind::RaggedRows) if
    /// the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows_kind(ElemKind::Float, rows)
    }

    /// Creates a rank-2 integer array from nested rows.
    ///
    /// # Errors
    /// Returns [`ErrorKind::RaggedRows`](crate::ErrorKind::RaggedRows) if
    /// the rows differ in length.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_int_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let rows = rows
            .into_iter()
            .map(|r| r.into_iter().map(|v| v as f64).collect())
            .collect();
        Self::from_rows_kind(ElemKind::Int, rows)
    }

    fn from_rows_kind(elem: ElemKind, rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::ragged_rows(i, ncols, row.len()));
            }
            data.extend(row);
        }
        Self::new(elem, vec![nrows, ncols], data)
    }

    /// Returns the element kind.
    #[must_use]
    pub const fn elem(&self) -> ElemKind {
        self.elem
    }

    /// Returns the shape.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the rank (number of dimensions).
    #[must_use]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn numel(&self) -> usize {
        shape::numel(&self.shape)
    }

    /// Returns a copy reshaped to rank-2 normal form (shares data).
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            elem: self.elem,
            shape: shape::normalized(&self.shape),
            data: Arc::clone(&self.data),
        }
    }

    /// Returns the element at `(row, col)` of a rank-2 array.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Option<f64> {
        match *self.shape.as_slice() {
            [_, cols] => self.data.get(row * cols + col).copied(),
            _ => None,
        }
    }

    /// Extracts the rank-2 page at the given trailing indices.
    ///
    /// For an array of shape `d1 x d2 x d3 x ... x dN`, fixing
    /// `trailing = [i3, ..., iN]` (0-based) yields the `d1 x d2` slice.
    /// Returns `None` unless `rank > 2` and the indices are in bounds.
    #[must_use]
    pub fn page(&self, trailing: &[usize]) -> Option<Self> {
        let (rows, cols, offset) = page_offset(&self.shape, trailing)?;
        let strides = strides(&self.shape);
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(self.data[offset + r * strides[0] + c * strides[1]]);
            }
        }
        Some(Self {
            elem: self.elem,
            shape: vec![rows, cols],
            data: data.into(),
        })
    }
}

// Bit equality on elements, so NaN-containing arrays stay reflexive.
impl PartialEq for NumericArray {
    fn eq(&self, other: &Self) -> bool {
        self.elem == other.elem
            && self.shape == other.shape
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for NumericArray {}

/// N-dimensional character array, usually a rank-2 grid of text rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    shape: Vec<usize>,
    data: Arc<[char]>,
}

impl CharGrid {
    /// Creates a grid from a shape and row-major characters.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ShapeMismatch`](crate::ErrorKind::ShapeMismatch)
    /// if the data length does not match the shape.
    pub fn new(shape: Vec<usize>, data: Vec<char>) -> Result<Self> {
        let expected = shape::numel(&shape);
        if data.len() != expected {
            return Err(Error::shape_mismatch(expected, data.len()));
        }
        Ok(Self {
            shape,
            data: data.into(),
        })
    }

    /// Creates a single-row grid from a string.
    #[must_use]
    pub fn from_str_row(s: &str) -> Self {
        let data: Vec<char> = s.chars().collect();
        Self {
            shape: vec![1, data.len()],
            data: data.into(),
        }
    }

    /// Creates a rank-2 grid from equal-length rows.
    ///
    /// # Errors
    /// Returns [`ErrorKind::RaggedRows`](crate::ErrorKind::RaggedRows) if
    /// the rows differ in character count.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.chars().count());
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != ncols {
                return Err(Error::ragged_rows(i, ncols, chars.len()));
            }
            data.extend(chars);
        }
        Ok(Self {
            shape: vec![nrows, ncols],
            data: data.into(),
        })
    }

    /// Returns the shape.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the rank (number of dimensions).
    #[must_use]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the number of characters.
    #[must_use]
    pub fn numel(&self) -> usize {
        shape::numel(&self.shape)
    }

    /// Returns a copy reshaped to rank-2 normal form (shares data).
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            shape: shape::normalized(&self.shape),
            data: Arc::clone(&self.data),
        }
    }

    /// Returns row `r` of a rank-2 grid as a string.
    #[must_use]
    pub fn line(&self, r: usize) -> Option<String> {
        match *self.shape.as_slice() {
            [rows, cols] if r < rows => Some(self.data[r * cols..(r + 1) * cols].iter().collect()),
            _ => None,
        }
    }

    /// Extracts the rank-2 page at the given trailing indices.
    ///
    /// Same contract as [`NumericArray::page`].
    #[must_use]
    pub fn page(&self, trailing: &[usize]) -> Option<Self> {
        let (rows, cols, offset) = page_offset(&self.shape, trailing)?;
        let strides = strides(&self.shape);
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(self.data[offset + r * strides[0] + c * strides[1]]);
            }
        }
        Some(Self {
            shape: vec![rows, cols],
            data: data.into(),
        })
    }
}

/// Row-major strides for a shape.
fn strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Validates trailing page indices and returns `(rows, cols, base offset)`.
fn page_offset(shape: &[usize], trailing: &[usize]) -> Option<(usize, usize, usize)> {
    if shape.len() <= 2 || trailing.len() != shape.len() - 2 {
        return None;
    }
    let strides = strides(shape);
    let mut offset = 0;
    for (k, &idx) in trailing.iter().enumerate() {
        if idx >= shape[k + 2] {
            return None;
        }
        offset += idx * strides[k + 2];
    }
    Some((shape[0], shape[1], offset))
}
