//! Core types, values, and persistent collections for Voxview.
//!
//! This crate provides:
//! - [`Value`] - The closed value union the renderer dispatches over
//! - [`NumericArray`] / [`CharGrid`] - Shaped leaf values
//! - [`Record`] / [`Sequence`] - Ordered containers
//! - [`Error`] - Error types with categorized kinds
//! - [`SharedVec`] - Persistent vector with structural sharing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod array;
pub mod collections;
pub mod error;
pub mod record;
pub mod sequence;
pub mod shape;
pub mod value;

pub use array::{CharGrid, ElemKind, NumericArray};
pub use collections::SharedVec;
pub use error::{Error, ErrorKind, Result};
pub use record::{Record, RecordArray};
pub use sequence::Sequence;
pub use value::{Callable, OpaqueInfo, Value};
