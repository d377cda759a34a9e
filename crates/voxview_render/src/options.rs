//! Configuration for rendering.

use voxview_foundation::{Error, Result};

/// Configuration threaded through a render call.
///
/// Options are read-only after construction; the one exception is the
/// depth budget, which is copied-and-decremented via [`descend`] on each
/// recursive container expansion so sibling subtrees see the same budget.
///
/// [`descend`]: RenderOptions::descend
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Item count above which an axis becomes eligible for summarization.
    ///
    /// `usize::MAX` means "never summarize".
    pub threshold: usize,

    /// Items kept at each edge of a summarized axis.
    pub edgeitems: usize,

    /// Decimal digits for floating point text.
    pub precision: usize,

    /// Column count above which text rows are truncated.
    pub max_string_length: usize,

    /// Remaining container expansions before falling back to opaque tags.
    pub max_depth: usize,

    /// Show the shape suffix even when nothing was summarized.
    pub always_show_shape: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            threshold: 5,
            edgeitems: 3,
            precision: 3,
            max_string_length: 20,
            max_depth: 6,
            always_show_shape: false,
        }
    }
}

impl RenderOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that never summarize or truncate.
    ///
    /// The depth budget stays finite: it is the only guard against very
    /// deep structures.
    #[must_use]
    pub fn full() -> Self {
        Self {
            threshold: usize::MAX,
            edgeitems: usize::MAX,
            max_string_length: usize::MAX,
            ..Self::default()
        }
    }

    /// Builder method to set the summarization threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder method to set the edge item count.
    #[must_use]
    pub fn with_edgeitems(mut self, edgeitems: usize) -> Self {
        self.edgeitems = edgeitems;
        self
    }

    /// Builder method to set the numeric precision.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method to set the text truncation width.
    #[must_use]
    pub fn with_max_string_length(mut self, max_string_length: usize) -> Self {
        self.max_string_length = max_string_length;
        self
    }

    /// Builder method to set the depth budget.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder method to always show shape suffixes.
    #[must_use]
    pub fn with_always_show_shape(mut self, always_show_shape: bool) -> Self {
        self.always_show_shape = always_show_shape;
        self
    }

    /// Returns a copy with one less unit of depth budget.
    #[must_use]
    pub fn descend(&self) -> Self {
        Self {
            max_depth: self.max_depth.saturating_sub(1),
            ..self.clone()
        }
    }

    /// Validates the options at the top-level render entry.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidOptions`](voxview_foundation::ErrorKind::InvalidOptions)
    /// if `max_string_length` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_string_length == 0 {
            return Err(Error::invalid_options("max_string_length must be at least 1"));
        }
        Ok(())
    }
}
