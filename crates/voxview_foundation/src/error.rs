//! Error types for the Voxview system.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// Result alias for Voxview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Voxview operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a shape mismatch error.
    #[must_use]
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::ShapeMismatch { expected, actual })
    }

    /// Creates a ragged rows error.
    #[must_use]
    pub fn ragged_rows(row: usize, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::RaggedRows {
            row,
            expected,
            actual,
        })
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// Creates an invalid options error.
    #[must_use]
    pub fn invalid_options(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidOptions {
            reason: reason.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Data length does not match the product of the shape dimensions.
    #[error("shape mismatch: shape requires {expected} elements, got {actual}")]
    ShapeMismatch {
        /// Element count required by the shape.
        expected: usize,
        /// Element count actually supplied.
        actual: usize,
    },

    /// Row-based input is not rectangular.
    #[error("ragged rows: row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },

    /// A value of the wrong kind was routed to a kind-specific renderer.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected kind name.
        expected: String,
        /// The actual kind name.
        actual: String,
    },

    /// Render options fail validation.
    #[error("invalid options: {reason}")]
    InvalidOptions {
        /// Why the options were rejected.
        reason: String,
    },
}
