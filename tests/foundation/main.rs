//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, arrays, records, sequences, and errors.

mod values;
