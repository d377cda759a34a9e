//! Voxview - Structured-value display for analysis datasets
//!
//! This crate re-exports all layers of the Voxview system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: voxview_synth      — Deterministic synthetic datasets
//! Layer 1: voxview_render     — Block compositor, renderers, dispatch
//! Layer 0: voxview_foundation — Core types (Value, Record, NumericArray)
//! ```

pub use voxview_foundation as foundation;
pub use voxview_render as render;
pub use voxview_synth as synth;
