//! Integration tests for Layer 1: Render
//!
//! Tests the block compositor and the public render API: matrices,
//! strings, records, sequences, pages, summarization, and depth limits.

mod blocks;
mod containers;
