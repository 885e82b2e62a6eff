use std::cmp::min;

use itertools::iproduct;

/// Positions adjacent to `(row, col)` on a square grid of side `size`:
/// the surrounding box clipped to `[0, size)`, minus the centre itself.
pub(crate) fn neighbours(
    (row, col): (usize, usize),
    size: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let row_hi = min(row + 1, size.saturating_sub(1));
    let col_hi = min(col + 1, size.saturating_sub(1));
    iproduct!(row.saturating_sub(1)..=row_hi, col.saturating_sub(1)..=col_hi)
        .filter(move |&pos| pos != (row, col))
}
