//! Text grid and callable renderers.

use voxview_foundation::{Callable, CharGrid, Error, Result, Value};

use crate::block::TextBlock;
use crate::options::RenderOptions;
use crate::summarize::ELLIPSIS_INFIX;

/// Renders a text value as a quoted block.
///
/// # Errors
/// Returns [`ErrorKind::TypeMismatch`](voxview_foundation::ErrorKind::TypeMismatch)
/// if a non-text value was routed here by a calling mistake.
pub(crate) fn text_block(value: &Value, options: &RenderOptions) -> Result<TextBlock> {
    let grid = value
        .as_text()
        .ok_or_else(|| Error::type_mismatch("text", value.kind_name()))?;
    Ok(char_grid_block(grid, options))
}

/// Renders a rank <= 2 character grid, truncating long rows and wrapping
/// each row in quotes.
pub(crate) fn char_grid_block(grid: &CharGrid, options: &RenderOptions) -> TextBlock {
    let grid = grid.normalized();
    let rows = grid.shape()[0];
    if rows == 0 {
        return TextBlock::from_line("''");
    }
    let lines = (0..rows)
        .map(|r| {
            let line = grid.line(r).unwrap_or_default();
            format!("'{}'", truncate_middle(&line, options.max_string_length))
        })
        .collect();
    TextBlock::from_lines(lines)
}

/// Renders a callable reference: marker prefix, no quote border.
pub(crate) fn callable_block(callable: &Callable, options: &RenderOptions) -> TextBlock {
    TextBlock::from_line(format!(
        "@{}",
        truncate_middle(callable.name(), options.max_string_length)
    ))
}

/// Keeps `floor((max_len - infix) / 2)` characters from each end of a
/// too-long line, splicing the ellipsis infix at the midpoint.
fn truncate_middle(line: &str, max_len: usize) -> String {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= max_len {
        return line.to_string();
    }
    let keep = max_len.saturating_sub(ELLIPSIS_INFIX.chars().count()) / 2;
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{head}{ELLIPSIS_INFIX}{tail}")
}
