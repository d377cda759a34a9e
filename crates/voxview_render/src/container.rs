//! Container renderers: records, sequences, and rank > 2 pages.

use voxview_foundation::{shape, Error, RecordArray, Result, Sequence, Value};

use crate::block::{self, TextBlock};
use crate::options::RenderOptions;
use crate::render::{dispatch, enclose, tag_text};
use crate::summarize::AxisSplit;

/// Renders a record array.
///
/// The scalar case lays fields out vertically, one `.name` line followed
/// by the indented field rendering. Multi-element rank-2 arrays are
/// normalized to a sequence of scalar records; rank > 2 arrays fall back
/// to enumerating field names without recursing.
pub(crate) fn record_block(array: &RecordArray, options: &RenderOptions) -> Result<TextBlock> {
    if let Some(record) = array.as_scalar() {
        if record.is_empty() {
            return Ok(TextBlock::from_line(tag_text("record", array.shape())));
        }
        let mut fields = Vec::with_capacity(record.len());
        for (name, value) in record.iter() {
            let rendered = dispatch(value, options)?;
            fields.push(block::vcat(vec![
                TextBlock::from_line(format!(".{name}")),
                block::indent(rendered, 2),
            ]));
        }
        return Ok(block::vcat(fields));
    }

    if array.rank() <= 2 {
        let norm = shape::normalized(array.shape());
        let cells: Vec<Value> = array
            .iter()
            .cloned()
            .map(|r| Value::Record(RecordArray::scalar(r)))
            .collect();
        let seq = Sequence::new(norm[0], norm[1], cells)?;
        return sequence_block(&seq, options);
    }

    // Degenerate fallback: field names only, one line each.
    let mut parts = vec![TextBlock::from_line(tag_text("record", array.shape()))];
    for record in array.iter() {
        let mut lines = vec![format!("<record with {} fields>", record.len())];
        lines.extend(record.keys().map(|name| format!("  .{name}")));
        parts.push(block::indent(TextBlock::from_lines(lines), 2));
    }
    Ok(block::vcat(parts))
}

/// Renders a heterogeneous rank-2 sequence as a braced grid of
/// recursively rendered cells.
pub(crate) fn sequence_block(sequence: &Sequence, options: &RenderOptions) -> Result<TextBlock> {
    if sequence.numel() == 0 {
        return Ok(enclose(
            TextBlock::empty(),
            "{ ",
            " }",
            sequence.shape(),
            false,
            options,
        ));
    }

    let rsplit = AxisSplit::of(sequence.rows(), options);
    let csplit = AxisSplit::of(sequence.cols(), options);

    // Column slots: kept column indices, with `None` for the ellipsis
    // column spliced between the edges of a summarized axis.
    let mut slots: Vec<Option<usize>> = csplit.pre.clone().map(Some).collect();
    if let Some(post) = &csplit.post {
        slots.push(None);
        slots.extend(post.clone().map(Some));
    }

    let mut grid: Vec<Vec<TextBlock>> = Vec::new();
    for r in rsplit.indices() {
        let mut row = Vec::with_capacity(slots.len());
        for slot in &slots {
            row.push(match slot {
                Some(c) => match sequence.get(r, *c) {
                    Some(cell) => dispatch(cell, options)?,
                    None => TextBlock::empty(),
                },
                None => TextBlock::from_line("..."),
            });
        }
        grid.push(row);
    }

    if rsplit.summarized() {
        grid.insert(rsplit.pre.len(), marker_row(&grid, &slots));
    }

    let content = block::compose_gap(&grid, 2);
    let summarized = rsplit.summarized() || csplit.summarized();
    Ok(enclose(
        content,
        "{ ",
        " }",
        sequence.shape(),
        summarized,
        options,
    ))
}

/// Builds the `:` marker row for a summarized sequence.
///
/// Cell contents may legitimately contain spaces, so the matrix trick of
/// scanning whitespace columns is unsound here; instead each cell
/// column's final width is computed and the `:` centered in it. The
/// ellipsis column stays blank on this row.
fn marker_row(grid: &[Vec<TextBlock>], slots: &[Option<usize>]) -> Vec<TextBlock> {
    let mut widths = vec![0usize; slots.len()];
    for row in grid {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    slots
        .iter()
        .zip(&widths)
        .map(|(slot, width)| {
            let mut chars = vec![' '; *width];
            if slot.is_some() && *width > 0 {
                chars[(*width - 1) / 2] = ':';
            }
            TextBlock::from_line(chars.into_iter().collect::<String>())
        })
        .collect()
}

/// Renders a rank > 2 numeric or text array as labeled rank-2 pages.
pub(crate) fn pages_block(value: &Value, options: &RenderOptions) -> Result<TextBlock> {
    let dims = value.shape();
    let kind = value.kind_name().to_string();
    if shape::numel(&dims) == 0 {
        return Ok(TextBlock::from_line(format!(
            "{} (empty)",
            tag_text(&kind, &dims)
        )));
    }

    let mut pages: Vec<Vec<TextBlock>> = Vec::new();
    for trailing in trailing_indices(&dims[2..]) {
        let slice = match value {
            Value::Array(a) => a.page(&trailing).map(Value::Array),
            Value::Text(g) => g.page(&trailing).map(Value::Text),
            _ => None,
        }
        .ok_or_else(|| Error::type_mismatch("array or text", value.kind_name()))?;
        pages.push(vec![
            TextBlock::from_line(page_label(&trailing)),
            dispatch(&slice, options)?,
        ]);
    }

    Ok(block::vcat(vec![
        TextBlock::from_line(tag_text(&kind, &dims)),
        block::compose(&pages),
    ]))
}

/// Enumerates trailing index tuples in row-major order (rightmost
/// dimension fastest).
fn trailing_indices(dims: &[usize]) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut idx = vec![0usize; dims.len()];
    loop {
        out.push(idx.clone());
        let mut k = dims.len();
        loop {
            if k == 0 {
                return out;
            }
            k -= 1;
            idx[k] += 1;
            if idx[k] < dims[k] {
                break;
            }
            idx[k] = 0;
        }
    }
}

/// Formats a page label like `(:,:,1) = `, 1-based.
fn page_label(trailing: &[usize]) -> String {
    let indices = trailing
        .iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("(:,:,{indices}) = ")
}
