//! Core value type for all Voxview data.

use std::fmt;
use std::sync::Arc;

use crate::array::{CharGrid, ElemKind, NumericArray};
use crate::record::{Record, RecordArray};
use crate::sequence::Sequence;

/// The closed set of value kinds the renderer understands.
///
/// Values are immutable and cheaply cloneable: composite variants use
/// persistent collections or shared buffers. Anything outside this set is
/// carried as [`Value::Opaque`] and rendered as a type-and-shape tag only.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Ordered string-keyed record(s).
    Record(RecordArray),
    /// Rank-2 grid of heterogeneous values.
    Sequence(Sequence),
    /// Numeric or logical array of any rank.
    Array(NumericArray),
    /// Character grid (strings, usually rank 2).
    Text(CharGrid),
    /// Function reference, rendered by name only.
    Callable(Callable),
    /// Foreign value: type name and shape, never recursed into.
    Opaque(OpaqueInfo),
}

/// Opaque function reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Callable {
    name: Arc<str>,
}

impl Callable {
    /// Creates a callable reference with the given display name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Type-and-shape summary of a value outside the closed kind set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpaqueInfo {
    type_name: Arc<str>,
    shape: Vec<usize>,
}

impl OpaqueInfo {
    /// Creates an opaque summary from a type name and shape.
    #[must_use]
    pub fn new(type_name: impl Into<Arc<str>>, shape: Vec<usize>) -> Self {
        Self {
            type_name: type_name.into(),
            shape,
        }
    }

    /// Returns the foreign type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the shape.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
}

impl Value {
    /// Returns the display name of this value's kind.
    ///
    /// Arrays report their element kind (`int`, `float`, `bool`) so that
    /// opaque tags read like `<int@2x3x4>`.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Record(_) => "record",
            Self::Sequence(_) => "sequence",
            Self::Array(a) => a.elem().name(),
            Self::Text(_) => "text",
            Self::Callable(_) => "fn",
            Self::Opaque(info) => info.type_name(),
        }
    }

    /// Returns the shape of this value.
    ///
    /// Every kind has one: callables are scalar `1x1`.
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Self::Record(ra) => ra.shape().to_vec(),
            Self::Sequence(s) => s.shape().to_vec(),
            Self::Array(a) => a.shape().to_vec(),
            Self::Text(g) => g.shape().to_vec(),
            Self::Callable(_) => vec![1, 1],
            Self::Opaque(info) => info.shape().to_vec(),
        }
    }

    /// Returns the rank of this value's shape.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.shape().len()
    }

    /// Returns true if this value's renderer never recurses.
    ///
    /// Leaves are rank <= 2 arrays and text, callables, and opaques.
    /// Records, sequences, and rank > 2 arrays all expand child
    /// renderings and therefore consume depth budget.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        match self {
            Self::Record(_) | Self::Sequence(_) => false,
            Self::Array(a) => a.rank() <= 2,
            Self::Text(g) => g.rank() <= 2,
            Self::Callable(_) | Self::Opaque(_) => true,
        }
    }

    /// Attempts to extract a record array reference.
    #[must_use]
    pub const fn as_record(&self) -> Option<&RecordArray> {
        match self {
            Self::Record(ra) => Some(ra),
            _ => None,
        }
    }

    /// Attempts to extract a sequence reference.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a numeric array reference.
    #[must_use]
    pub const fn as_array(&self) -> Option<&NumericArray> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to extract a character grid reference.
    #[must_use]
    pub const fn as_text(&self) -> Option<&CharGrid> {
        match self {
            Self::Text(g) => Some(g),
            _ => None,
        }
    }

    /// Attempts to extract a callable reference.
    #[must_use]
    pub const fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Callable(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}@{}>",
            self.kind_name(),
            crate::shape::suffix(&self.shape())
        )
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Array(NumericArray::scalar(ElemKind::Bool, f64::from(b)))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Array(NumericArray::scalar(ElemKind::Int, n as f64))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Array(NumericArray::scalar(ElemKind::Int, f64::from(n)))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Array(NumericArray::scalar(ElemKind::Float, n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(CharGrid::from_str_row(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(CharGrid::from_str_row(&s))
    }
}

impl From<NumericArray> for Value {
    fn from(a: NumericArray) -> Self {
        Self::Array(a)
    }
}

impl From<CharGrid> for Value {
    fn from(g: CharGrid) -> Self {
        Self::Text(g)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Self::Record(RecordArray::scalar(r))
    }
}

impl From<RecordArray> for Value {
    fn from(ra: RecordArray) -> Self {
        Self::Record(ra)
    }
}

impl From<Sequence> for Value {
    fn from(s: Sequence) -> Self {
        Self::Sequence(s)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Self::Callable(c)
    }
}

impl From<OpaqueInfo> for Value {
    fn from(info: OpaqueInfo) -> Self {
        Self::Opaque(info)
    }
}
