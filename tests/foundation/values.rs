//! Integration tests for the Value union
//!
//! Tests kind names, shapes, leaf classification, and From conversions.

use voxview_foundation::{
    Callable, CharGrid, ElemKind, NumericArray, OpaqueInfo, Record, Sequence, Value,
};

// =============================================================================
// Construction and Kind Names
// =============================================================================

#[test]
fn scalar_int_from_i64() {
    let v = Value::from(7i64);
    assert_eq!(v.kind_name(), "int");
    assert_eq!(v.shape(), vec![1, 1]);
}

#[test]
fn scalar_float_from_f64() {
    let v = Value::from(1.5);
    assert_eq!(v.kind_name(), "float");
}

#[test]
fn scalar_bool() {
    let v = Value::from(true);
    assert_eq!(v.kind_name(), "bool");
    assert_eq!(v.as_array().map(NumericArray::numel), Some(1));
}

#[test]
fn text_from_str() {
    let v = Value::from("hello");
    assert_eq!(v.kind_name(), "text");
    assert_eq!(v.shape(), vec![1, 5]);
}

#[test]
fn record_kind() {
    let v = Value::from(Record::new().with("x", 1i64));
    assert_eq!(v.kind_name(), "record");
    assert_eq!(v.shape(), vec![1, 1]);
}

#[test]
fn sequence_kind() {
    let v = Value::from(Sequence::row(vec![Value::from(1i64), Value::from("a")]));
    assert_eq!(v.kind_name(), "sequence");
    assert_eq!(v.shape(), vec![1, 2]);
}

#[test]
fn callable_kind_and_shape() {
    let v = Value::from(Callable::new("zscore"));
    assert_eq!(v.kind_name(), "fn");
    assert_eq!(v.shape(), vec![1, 1]);
}

#[test]
fn opaque_reports_foreign_type() {
    let v = Value::from(OpaqueInfo::new("mapper", vec![1, 1]));
    assert_eq!(v.kind_name(), "mapper");
}

// =============================================================================
// Leaf Classification
// =============================================================================

#[test]
fn rank2_arrays_are_leaves() {
    let a = NumericArray::from_int_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert!(Value::from(a).is_leaf());
    assert!(Value::from("text").is_leaf());
}

#[test]
fn rank3_arrays_are_not_leaves() {
    let cube = NumericArray::new(ElemKind::Float, vec![2, 2, 2], vec![0.0; 8]).unwrap();
    assert!(!Value::from(cube).is_leaf());
}

#[test]
fn containers_are_not_leaves() {
    assert!(!Value::from(Record::new()).is_leaf());
    assert!(!Value::from(Sequence::row(vec![])).is_leaf());
}

#[test]
fn callables_and_opaques_are_leaves() {
    assert!(Value::from(Callable::new("f")).is_leaf());
    assert!(Value::from(OpaqueInfo::new("blob", vec![3, 3, 3])).is_leaf());
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn equality_distinguishes_elem_kinds() {
    assert_ne!(Value::from(1i64), Value::from(1.0));
    assert_eq!(Value::from(1i64), Value::from(1i32));
}

#[test]
fn nan_arrays_are_reflexively_equal() {
    let a = NumericArray::from_rows(vec![vec![f64::NAN]]).unwrap();
    let v = Value::from(a);
    assert_eq!(v, v.clone());
}

#[test]
fn char_grid_round_trips_through_value() {
    let grid = CharGrid::from_rows(&["ab", "cd"]).unwrap();
    let v = Value::from(grid.clone());
    assert_eq!(v.as_text(), Some(&grid));
}
