//! Summarization policy: which indices of an axis to show.

use std::ops::Range;

use crate::options::RenderOptions;

/// The literal spliced between the kept edges of a summarized axis.
pub const ELLIPSIS_INFIX: &str = " ... ";

/// The kept index ranges for one axis of extent `n`.
///
/// `post == None` signals that the axis was not summarized; the marker
/// and shape-suffix logic key off exactly that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisSplit {
    /// Indices kept at the leading edge (all of them when not summarized).
    pub pre: Range<usize>,
    /// Indices kept at the trailing edge, if the axis was summarized.
    pub post: Option<Range<usize>>,
}

impl AxisSplit {
    /// Applies the policy to an axis of extent `n`.
    ///
    /// Summarizes iff `n > max(threshold, 2 * edgeitems)`; the arithmetic
    /// saturates so `usize::MAX` behaves as "never summarize".
    #[must_use]
    pub fn of(n: usize, options: &RenderOptions) -> Self {
        let limit = options.threshold.max(options.edgeitems.saturating_mul(2));
        if n > limit {
            Self {
                pre: 0..options.edgeitems,
                post: Some(n - options.edgeitems..n),
            }
        } else {
            Self {
                pre: 0..n,
                post: None,
            }
        }
    }

    /// Returns true if the middle of the axis was dropped.
    #[must_use]
    pub fn summarized(&self) -> bool {
        self.post.is_some()
    }

    /// Returns the number of kept indices.
    #[must_use]
    pub fn kept(&self) -> usize {
        self.pre.len() + self.post.as_ref().map_or(0, ExactSizeIterator::len)
    }

    /// Iterates the kept indices, leading edge first.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.pre.clone().chain(self.post.clone().into_iter().flatten())
    }
}
