//! Integration tests for record, sequence, and page rendering

use voxview_foundation::{Callable, ElemKind, NumericArray, Record, RecordArray, Sequence, Value};
use voxview_render::{render, render_with, RenderOptions};

// =============================================================================
// Records
// =============================================================================

#[test]
fn record_fields_as_dotted_lines() {
    let r = Record::new()
        .with("samples", NumericArray::from_int_rows(vec![vec![1, 2]]).unwrap())
        .with("name", "demo");
    let out = render(&Value::from(r)).unwrap();
    assert_eq!(out, ".samples\n  [ 1 2 ]\n.name\n  'demo'");
}

#[test]
fn record_preserves_declaration_order() {
    let r = Record::new()
        .with("zebra", 1i64)
        .with("apple", 2i64)
        .with("mango", 3i64);
    let out = render(&Value::from(r)).unwrap();
    let z = out.find(".zebra").unwrap();
    let a = out.find(".apple").unwrap();
    let m = out.find(".mango").unwrap();
    assert!(z < a && a < m);
}

#[test]
fn nested_records_accumulate_indent() {
    let r = Record::new().with("outer", Record::new().with("inner", 7i64));
    let out = render(&Value::from(r)).unwrap();
    assert_eq!(out, ".outer\n  .inner\n    [ 7 ]");
}

#[test]
fn empty_record_renders_its_tag() {
    assert_eq!(render(&Value::from(Record::new())).unwrap(), "<record@1x1>");
}

#[test]
fn multi_element_record_array_renders_like_a_sequence() {
    let elems = vec![
        Record::new().with("id", 1i64),
        Record::new().with("id", 2i64),
    ];
    let ra = RecordArray::new(vec![1, 2], elems).unwrap();
    let out = render(&Value::from(ra)).unwrap();
    assert!(out.starts_with("{ "));
    assert!(out.ends_with(" }"));
    assert_eq!(out.matches(".id").count(), 2);
}

#[test]
fn record_field_values_can_be_multiline() {
    let m = NumericArray::from_int_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let r = Record::new().with("m", m);
    let out = render(&Value::from(r)).unwrap();
    assert_eq!(out, ".m\n  [ 1 2\n    3 4 ]");
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn sequence_cells_in_braces() {
    let s = Sequence::row(vec![Value::from("ab"), Value::from(3i64)]);
    assert_eq!(render(&Value::from(s)).unwrap(), "{ 'ab'  [ 3 ] }");
}

#[test]
fn empty_sequence_collapses() {
    assert_eq!(render(&Value::from(Sequence::row(vec![]))).unwrap(), "{ }");
}

#[test]
fn long_sequence_summarizes_with_cell_ellipsis() {
    let cells: Vec<Value> = (1..=11).map(|i| Value::from(format!("s{i}"))).collect();
    let out = render(&Value::from(Sequence::row(cells))).unwrap();
    assert_eq!(out, "{ 's1'  's2'  's3'  ...  's9'  's10'  's11' }@1x11");
}

#[test]
fn tall_sequence_gets_marker_row() {
    let rows: Vec<Vec<Value>> = (1..=11).map(|i| vec![Value::from(i64::from(i))]).collect();
    let s = Sequence::from_rows(rows).unwrap();
    let out = render(&Value::from(s)).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[3].contains(':'));
    assert!(!lines[3].contains('['));
}

#[test]
fn sequence_cells_recurse() {
    let inner = Sequence::row(vec![Value::from(1i64)]);
    let s = Sequence::row(vec![Value::from(inner), Value::from("x")]);
    let out = render(&Value::from(s)).unwrap();
    assert_eq!(out, "{ { [ 1 ] }  'x' }");
}

#[test]
fn callable_cell() {
    let s = Sequence::row(vec![Value::from(Callable::new("zscore"))]);
    assert_eq!(render(&Value::from(s)).unwrap(), "{ @zscore }");
}

// =============================================================================
// Rank > 2 Pages
// =============================================================================

#[test]
fn cube_renders_header_and_labeled_pages() {
    let data: Vec<f64> = (1..=8).map(f64::from).collect();
    let cube = NumericArray::new(ElemKind::Int, vec![2, 2, 2], data).unwrap();
    let out = render(&Value::from(cube)).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "<int@2x2x2>");
    assert_eq!(lines[1], "(:,:,1) = [ 1 3");
    assert_eq!(lines[2], "            5 7 ]");
    assert_eq!(lines[3], "(:,:,2) = [ 2 4");
    assert_eq!(lines[4], "            6 8 ]");
}

#[test]
fn rank4_labels_count_rightmost_fastest() {
    let a = NumericArray::new(ElemKind::Int, vec![1, 1, 2, 3], (0..6).map(f64::from).collect())
        .unwrap();
    let out = render(&Value::from(a)).unwrap();
    let order: Vec<usize> = [
        "(:,:,1,1)",
        "(:,:,1,2)",
        "(:,:,1,3)",
        "(:,:,2,1)",
        "(:,:,2,2)",
        "(:,:,2,3)",
    ]
    .iter()
    .map(|label| out.find(label).unwrap())
    .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn empty_cube_is_a_single_tag_line() {
    let a = NumericArray::new(ElemKind::Float, vec![0, 2, 3], vec![]).unwrap();
    assert_eq!(render(&Value::from(a)).unwrap(), "<float@0x2x3> (empty)");
}

#[test]
fn pages_consume_one_level_of_depth() {
    let data = vec![0.0; 8];
    let cube = NumericArray::new(ElemKind::Int, vec![2, 2, 2], data).unwrap();
    let out = render_with(
        &Value::from(cube),
        &RenderOptions::new().with_max_depth(0),
    )
    .unwrap();
    assert_eq!(out, "<int@2x2x2>");
}
