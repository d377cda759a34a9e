//! Shape helpers shared by values and renderers.
//!
//! Shapes are plain `&[usize]` slices, highest dimension first, row-major
//! element order. An empty slice is the shape of a scalar.

/// Returns the number of elements a shape describes.
///
/// The empty shape describes a single scalar element.
#[must_use]
pub fn numel(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Returns true if the shape has a zero dimension.
#[must_use]
pub fn is_degenerate(shape: &[usize]) -> bool {
    shape.contains(&0)
}

/// Formats a shape as a display suffix, e.g. `2x3x4`.
///
/// Scalars and vectors are shown in their rank-2 normal form.
#[must_use]
pub fn suffix(shape: &[usize]) -> String {
    normalized(shape)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("x")
}

/// Normalizes a shape to rank 2 or higher.
///
/// Scalars become `1x1`, vectors become a single row `1xN`; anything of
/// rank 2 or above is returned unchanged.
#[must_use]
pub fn normalized(shape: &[usize]) -> Vec<usize> {
    match shape {
        [] => vec![1, 1],
        [n] => vec![1, *n],
        _ => shape.to_vec(),
    }
}
