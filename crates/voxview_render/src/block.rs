//! Rectangular text blocks and the grid compositor.
//!
//! A [`TextBlock`] is a rectangular grid of characters: every line has the
//! same character width, enforced by padding at construction. Blocks are
//! never mutated after creation; every layout step builds a new block from
//! smaller ones through the single [`compose`] primitive.

use std::fmt;

/// A rectangular grid of characters, the universal rendering unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBlock {
    width: usize,
    lines: Vec<String>,
}

impl TextBlock {
    /// Creates a block with no lines.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            width: 0,
            lines: Vec::new(),
        }
    }

    /// Creates a single-line block.
    #[must_use]
    pub fn from_line(line: impl Into<String>) -> Self {
        let line = line.into();
        Self {
            width: line.chars().count(),
            lines: vec![line],
        }
    }

    /// Creates a block from lines, right-padding shorter lines with spaces.
    ///
    /// Padding, never truncation: the width is the widest line's width.
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let lines = lines
            .into_iter()
            .map(|l| pad_line(&l, width))
            .collect();
        Self { width, lines }
    }

    /// Creates a block of `height` lines with `line` on the last one.
    ///
    /// Used for closing brackets and shape suffixes, which sit on the
    /// bottom line of the block they follow.
    #[must_use]
    pub fn bottom_aligned(line: impl Into<String>, height: usize) -> Self {
        if height == 0 {
            return Self::empty();
        }
        let line = line.into();
        let width = line.chars().count();
        let mut lines = vec![" ".repeat(width); height - 1];
        lines.push(line);
        Self { width, lines }
    }

    /// Returns the character width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the block has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the lines of the block.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for TextBlock {
    /// Writes the block's lines joined by newlines, trailing spaces
    /// trimmed per line. No trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Composes a rectangular arrangement of blocks into one block.
///
/// Equivalent to [`compose_gap`] with no gap between columns.
#[must_use]
pub fn compose(grid: &[Vec<TextBlock>]) -> TextBlock {
    compose_gap(grid, 0)
}

/// Composes a grid of blocks with `hgap` spaces between columns.
///
/// Per-column widths and per-row heights are the maxima over the grid;
/// every occupied cell is right- and bottom-padded with spaces to fit.
/// Rows whose cells are all empty have zero height and are skipped
/// entirely rather than padded (this is how a suppressed marker row is
/// deleted from a layout).
#[must_use]
pub fn compose_gap(grid: &[Vec<TextBlock>], hgap: usize) -> TextBlock {
    let ncols = grid.iter().map(Vec::len).max().unwrap_or(0);
    if ncols == 0 {
        return TextBlock::empty();
    }
    let mut col_widths = vec![0usize; ncols];
    for row in grid {
        for (c, cell) in row.iter().enumerate() {
            col_widths[c] = col_widths[c].max(cell.width());
        }
    }
    let gap = " ".repeat(hgap);
    let total_width: usize =
        col_widths.iter().sum::<usize>() + hgap * ncols.saturating_sub(1);

    let mut lines = Vec::new();
    for row in grid {
        let height = row.iter().map(TextBlock::height).max().unwrap_or(0);
        for i in 0..height {
            let mut line = String::with_capacity(total_width);
            for (c, width) in col_widths.iter().enumerate() {
                if c > 0 {
                    line.push_str(&gap);
                }
                let cell_line = row.get(c).and_then(|cell| cell.lines().get(i));
                line.push_str(&pad_line(cell_line.map_or("", String::as_str), *width));
            }
            lines.push(line);
        }
    }
    TextBlock {
        width: total_width,
        lines,
    }
}

/// Concatenates blocks left to right, top-aligned.
#[must_use]
pub fn hcat(blocks: Vec<TextBlock>) -> TextBlock {
    compose(&[blocks])
}

/// Stacks blocks top to bottom, left-aligned.
#[must_use]
pub fn vcat(blocks: Vec<TextBlock>) -> TextBlock {
    let grid: Vec<Vec<TextBlock>> = blocks.into_iter().map(|b| vec![b]).collect();
    compose(&grid)
}

/// Indents a block by `n` columns of spaces.
#[must_use]
pub fn indent(block: TextBlock, n: usize) -> TextBlock {
    if block.is_empty() {
        return block;
    }
    hcat(vec![TextBlock::from_line(" ".repeat(n)), block])
}

fn pad_line(line: &str, width: usize) -> String {
    let len = line.chars().count();
    let mut padded = String::with_capacity(width);
    padded.push_str(line);
    for _ in len..width {
        padded.push(' ');
    }
    padded
}
