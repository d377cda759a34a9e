//! Rank-2 numeric matrix renderer.
//!
//! Elements are formatted to fixed-precision text and aligned into a
//! character grid with one space between right-aligned columns. When an
//! axis is summarized, the dropped middle is marked with a `:` row
//! (vertical) or a `" ... "` infix (horizontal).

use voxview_foundation::{ElemKind, NumericArray};

use crate::block::TextBlock;
use crate::options::RenderOptions;
use crate::render::enclose;
use crate::summarize::{AxisSplit, ELLIPSIS_INFIX};

/// Renders a rank <= 2 numeric array as a bracketed block.
pub(crate) fn matrix_block(array: &NumericArray, options: &RenderOptions) -> TextBlock {
    let array = array.normalized();
    let rows = array.shape()[0];
    let cols = array.shape()[1];

    if array.numel() == 0 {
        return enclose(TextBlock::empty(), "[ ", " ]", array.shape(), false, options);
    }

    let rsplit = AxisSplit::of(rows, options);
    let csplit = AxisSplit::of(cols, options);
    let kept_rows: Vec<usize> = rsplit.indices().collect();

    let left = aligned_group(&array, &kept_rows, &csplit.pre, options);
    let right = csplit
        .post
        .as_ref()
        .map(|post| aligned_group(&array, &kept_rows, post, options));

    let data_line = |i: usize| match &right {
        Some(right) => format!("{}{ELLIPSIS_INFIX}{}", left[i], right[i]),
        None => left[i].clone(),
    };

    let npre = rsplit.pre.len();
    let mut lines: Vec<String> = (0..npre).map(data_line).collect();
    if rsplit.summarized() {
        let marker = match &right {
            Some(right) => format!(
                "{}{}{}",
                marker_line(&left),
                " ".repeat(ELLIPSIS_INFIX.chars().count()),
                marker_line(right)
            ),
            None => marker_line(&left),
        };
        lines.push(marker);
        lines.extend((npre..kept_rows.len()).map(data_line));
    }

    let summarized = rsplit.summarized() || csplit.summarized();
    enclose(
        TextBlock::from_lines(lines),
        "[ ",
        " ]",
        array.shape(),
        summarized,
        options,
    )
}

/// Formats the selected rows of a column range, right-aligned per column
/// with single-space separators.
fn aligned_group(
    array: &NumericArray,
    row_indices: &[usize],
    cols: &std::ops::Range<usize>,
    options: &RenderOptions,
) -> Vec<String> {
    let texts: Vec<Vec<String>> = row_indices
        .iter()
        .map(|&r| {
            cols.clone()
                .map(|c| {
                    number_text(
                        array.at(r, c).unwrap_or(f64::NAN),
                        array.elem(),
                        options.precision,
                    )
                })
                .collect()
        })
        .collect();

    let mut widths = vec![0usize; cols.len()];
    for row in &texts {
        for (i, text) in row.iter().enumerate() {
            widths[i] = widths[i].max(text.chars().count());
        }
    }

    texts
        .iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(text, width)| format!("{text:>width$}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Formats one element according to the array's element kind.
#[allow(clippy::cast_possible_truncation)]
fn number_text(value: f64, elem: ElemKind, precision: usize) -> String {
    match elem {
        ElemKind::Float => format!("{value:.precision$}"),
        // Int and Bool data is integral by construction.
        ElemKind::Int | ElemKind::Bool => format!("{}", value as i64),
    }
}

/// Builds the vertical truncation marker for an aligned group.
///
/// Scans for whitespace-only character columns to find the printed column
/// runs, then places a single `:` at each run's midpoint.
fn marker_line(group: &[String]) -> String {
    let width = group.first().map_or(0, |l| l.chars().count());
    let grid: Vec<Vec<char>> = group.iter().map(|l| l.chars().collect()).collect();
    let mut out = vec![' '; width];
    let mut run_start: Option<usize> = None;
    for col in 0..=width {
        let occupied = col < width && grid.iter().any(|row| row[col] != ' ');
        match (run_start, occupied) {
            (None, true) => run_start = Some(col),
            (Some(start), false) => {
                out[(start + col - 1) / 2] = ':';
                run_start = None;
            }
            _ => {}
        }
    }
    out.into_iter().collect()
}
