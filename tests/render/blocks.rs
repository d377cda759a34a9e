//! Integration tests for the text block compositor

use voxview_render::{compose, compose_gap, hcat, indent, vcat, TextBlock};

fn block(lines: &[&str]) -> TextBlock {
    TextBlock::from_lines(lines.iter().map(ToString::to_string).collect())
}

// =============================================================================
// Block Construction
// =============================================================================

#[test]
fn blocks_are_always_rectangular() {
    let b = block(&["short", "a much longer line", "x"]);
    assert_eq!(b.width(), 18);
    assert!(b.lines().iter().all(|l| l.chars().count() == 18));
}

#[test]
fn width_counts_chars_not_bytes() {
    let b = TextBlock::from_line("héllo");
    assert_eq!(b.width(), 5);
}

#[test]
fn empty_block_has_no_lines() {
    let b = TextBlock::empty();
    assert!(b.is_empty());
    assert_eq!(b.height(), 0);
    assert_eq!(b.width(), 0);
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn compose_aligns_mixed_heights() {
    let grid = vec![vec![block(&["aa", "aa", "aa"]), block(&["b"])]];
    let out = compose(&grid);
    assert_eq!(out.lines(), &["aab", "aa ", "aa "]);
}

#[test]
fn compose_column_width_is_grid_wide() {
    let grid = vec![
        vec![block(&["1"]), block(&["22"])],
        vec![block(&["333"]), block(&["4"])],
    ];
    let out = compose(&grid);
    assert_eq!(out.lines(), &["1  22", "3334 "]);
}

#[test]
fn compose_drops_all_empty_rows() {
    let grid = vec![
        vec![block(&["a"]), block(&["b"])],
        vec![TextBlock::empty(), TextBlock::empty()],
        vec![block(&["c"]), block(&["d"])],
    ];
    let out = compose(&grid);
    assert_eq!(out.height(), 2);
}

#[test]
fn compose_gap_separates_columns() {
    let grid = vec![vec![block(&["x"]), block(&["y"])]];
    assert_eq!(compose_gap(&grid, 3).lines(), &["x   y"]);
}

#[test]
fn hcat_then_vcat_nests() {
    let row = hcat(vec![block(&["a"]), block(&["b"])]);
    let out = vcat(vec![row.clone(), row]);
    assert_eq!(out.lines(), &["ab", "ab"]);
}

#[test]
fn indent_shifts_content_right() {
    let out = indent(block(&["line1", "line2"]), 4);
    assert_eq!(out.lines(), &["    line1", "    line2"]);
}

#[test]
fn bottom_aligned_fills_above() {
    let b = TextBlock::bottom_aligned("]", 3);
    assert_eq!(b.lines(), &[" ", " ", "]"]);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_has_no_trailing_spaces_or_newline() {
    let b = block(&["ab", "abcdef", "c"]);
    let text = b.to_string();
    assert!(!text.ends_with('\n'));
    for line in text.lines() {
        assert_eq!(line, line.trim_end());
    }
}
