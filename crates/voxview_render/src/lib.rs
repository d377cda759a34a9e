//! Recursive structured-value rendering.
//!
//! Turns a [`voxview_foundation::Value`] tree into fixed-width text. The
//! layout engine is a single compositor over rectangular [`TextBlock`]s;
//! every renderer (numeric matrices, text grids, records, sequences,
//! rank > 2 pages) produces blocks and lets [`block::compose`] do the
//! alignment. Summarization of large axes and depth-limiting of deep
//! trees are policy, held in [`RenderOptions`] and applied uniformly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod block;
mod container;
mod matrix;
pub mod options;
mod render;
pub mod summarize;
mod text;

pub use block::{compose, compose_gap, hcat, indent, vcat, TextBlock};
pub use options::RenderOptions;
pub use render::{display, render, render_with};
pub use summarize::{AxisSplit, ELLIPSIS_INFIX};
