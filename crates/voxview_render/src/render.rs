//! Dispatcher and public render entry points.

use voxview_foundation::{shape, Result, Value};

use crate::block::{self, TextBlock};
use crate::options::RenderOptions;
use crate::{container, matrix, text};

/// Renders a value with default options.
///
/// # Errors
/// Fails only on malformed input routed to a kind-specific renderer; see
/// [`voxview_foundation::ErrorKind`].
pub fn render(value: &Value) -> Result<String> {
    render_with(value, &RenderOptions::default())
}

/// Renders a value with explicit options.
///
/// Pure: no output is written anywhere. The returned string has no
/// trailing newline and no trailing spaces on any line.
///
/// # Errors
/// Returns [`ErrorKind::InvalidOptions`](voxview_foundation::ErrorKind::InvalidOptions)
/// if the options fail validation.
pub fn render_with(value: &Value, options: &RenderOptions) -> Result<String> {
    options.validate()?;
    Ok(dispatch(value, options)?.to_string())
}

/// Renders a value with default options and prints it, once.
///
/// # Errors
/// Same failure modes as [`render`].
pub fn display(value: &Value) -> Result<()> {
    println!("{}", render(value)?);
    Ok(())
}

/// Routes a value to its renderer.
///
/// The depth budget is spent only by renderers that recurse: when it is
/// exhausted, records, sequences, and rank > 2 arrays collapse to their
/// opaque tag, while leaf values still render normally. Containers pass a
/// copied-and-decremented budget downward, so sibling subtrees at the
/// same level see the same remaining depth.
pub(crate) fn dispatch(value: &Value, options: &RenderOptions) -> Result<TextBlock> {
    if options.max_depth == 0 && !value.is_leaf() {
        return Ok(TextBlock::from_line(tag_text(
            value.kind_name(),
            &value.shape(),
        )));
    }
    match value {
        Value::Record(array) => container::record_block(array, &options.descend()),
        Value::Sequence(sequence) => container::sequence_block(sequence, &options.descend()),
        Value::Array(array) if array.rank() > 2 => {
            container::pages_block(value, &options.descend())
        }
        Value::Array(array) => Ok(matrix::matrix_block(array, options)),
        Value::Text(grid) if grid.rank() > 2 => container::pages_block(value, &options.descend()),
        Value::Text(_) => text::text_block(value, options),
        Value::Callable(callable) => Ok(text::callable_block(callable, options)),
        Value::Opaque(_) => Ok(TextBlock::from_line(tag_text(
            value.kind_name(),
            &value.shape(),
        ))),
    }
}

/// Formats an opaque tag like `<int@2x3x4>`.
pub(crate) fn tag_text(kind: &str, dims: &[usize]) -> String {
    format!("<{kind}@{}>", shape::suffix(dims))
}

/// Wraps content in borders and appends the shape suffix when due.
///
/// Empty content collapses to `open close` on one line. The suffix (and
/// its `" (empty)"` marker for zero-sized shapes) appears only when an
/// axis was summarized or `always_show_shape` is set.
pub(crate) fn enclose(
    content: TextBlock,
    open: &str,
    close: &str,
    dims: &[usize],
    summarized: bool,
    options: &RenderOptions,
) -> TextBlock {
    let mut out = if content.is_empty() {
        TextBlock::from_line(format!("{} {}", open.trim_end(), close.trim_start()))
    } else {
        let height = content.height();
        block::hcat(vec![
            TextBlock::from_line(open),
            content,
            TextBlock::bottom_aligned(close, height),
        ])
    };
    if summarized || options.always_show_shape {
        let mut suffix = format!("@{}", shape::suffix(dims));
        if shape::numel(dims) == 0 {
            suffix.push_str(" (empty)");
        }
        let height = out.height();
        out = block::hcat(vec![out, TextBlock::bottom_aligned(suffix, height)]);
    }
    out
}
