//! Ordered records and record arrays.
//!
//! A [`Record`] is a string-keyed mapping whose insertion order is
//! semantic: the renderer shows fields in exactly the order they were
//! added. Fields live in a persistent vector of pairs rather than a
//! sorted map for that reason.

use std::sync::Arc;

use crate::collections::SharedVec;
use crate::error::{Error, Result};
use crate::shape;
use crate::value::Value;

/// Ordered string-keyed mapping.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Record {
    fields: SharedVec<(Arc<str>, Value)>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new record with the field appended.
    ///
    /// Appending an already-present key adds a second entry; the renderer
    /// shows every entry, so callers are expected to keep keys unique.
    #[must_use]
    pub fn with(self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        Self {
            fields: self.fields.push_back((name.into(), value.into())),
        }
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks a field up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v)
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Iterates field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_ref())
    }
}

/// A shaped array of records; almost always the scalar `1x1` case.
///
/// The source domain allows multi-element record arrays, so the shape is
/// kept here rather than special-casing the scalar form everywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordArray {
    shape: Vec<usize>,
    elems: SharedVec<Record>,
}

impl RecordArray {
    /// Wraps a single record as a 1x1 array.
    #[must_use]
    pub fn scalar(record: Record) -> Self {
        Self {
            shape: vec![1, 1],
            elems: vec![record].into(),
        }
    }

    /// Creates a record array from a shape and row-major elements.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ShapeMismatch`](crate::ErrorKind::ShapeMismatch)
    /// if the element count does not match the shape.
    pub fn new(shape: Vec<usize>, elems: Vec<Record>) -> Result<Self> {
        let expected = shape::numel(&shape);
        if elems.len() != expected {
            return Err(Error::shape_mismatch(expected, elems.len()));
        }
        Ok(Self {
            shape,
            elems: elems.into(),
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

    /// Returns true if this is a single record.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        shape::numel(&self.shape) == 1
    }

    /// Returns the sole record of a scalar array.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Record> {
        if self.is_scalar() {
            self.elems.first()
        } else {
            None
        }
    }

    /// Iterates elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.elems.iter()
    }
}

impl From<Record> for RecordArray {
    fn from(record: Record) -> Self {
        Self::scalar(record)
    }
}
