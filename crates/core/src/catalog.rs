//! The standard shape catalog.
//!
//! Eight masks: T, S, Z, the vertical and horizontal bars, the square and
//! the two corner pieces. Engines may also be built with a custom catalog
//! through `GameConfig`.

use blockfall_types::Cell;

use crate::mask::Mask;

const PATTERNS: &[&[&[u8]]] = &[
    // T
    &[&[0, 1, 0], &[1, 1, 1]],
    // S
    &[&[0, 1, 1], &[1, 1, 0]],
    // Z
    &[&[1, 1, 0], &[0, 1, 1]],
    // vertical bar
    &[&[1], &[1], &[1], &[1]],
    // horizontal bar
    &[&[1, 1, 1, 1]],
    // square
    &[&[1, 1], &[1, 1]],
    // corner, foot left
    &[&[1, 1], &[1, 0], &[1, 0]],
    // corner, foot right
    &[&[1, 1], &[0, 1], &[0, 1]],
];

/// Build the standard eight-mask catalog.
pub fn standard_catalog() -> Vec<Mask> {
    PATTERNS
        .iter()
        .map(|pattern| {
            let rows = pattern
                .iter()
                .map(|row| row.iter().map(|&b| Cell::from_u8(b)).collect())
                .collect();
            Mask::from_rows_unchecked(rows)
        })
        .collect()
}
