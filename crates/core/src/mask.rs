//! Shape masks: rectangular binary patterns defining a piece's cells.
//!
//! Catalog masks are immutable; rotation produces a new mask. Coordinates
//! are (x, y) with the origin at the mask's top-left corner.

use blockfall_types::Cell;

use crate::error::CoreError;

/// A rectangular grid of cells describing one piece.
///
/// Invariants (enforced at construction): at least one row, all rows the
/// same non-zero length, at least one filled cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    rows: Vec<Vec<Cell>>,
}

impl Mask {
    /// Build a mask from rows of cells, validating the invariants.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, CoreError> {
        let Some(first) = rows.first() else {
            return Err(CoreError::InvalidConfig("mask has no rows".into()));
        };
        if first.is_empty() {
            return Err(CoreError::InvalidConfig("mask rows are empty".into()));
        }
        if rows.iter().any(|row| row.len() != first.len()) {
            return Err(CoreError::InvalidConfig(
                "mask rows have unequal lengths".into(),
            ));
        }
        if !rows.iter().flatten().any(|cell| cell.is_filled()) {
            return Err(CoreError::InvalidConfig("mask has no filled cells".into()));
        }
        Ok(Self { rows })
    }

    /// Build a mask from a 0/1 pattern (1 = filled, anything else = empty).
    pub fn from_bits(bits: &[&[u8]]) -> Result<Self, CoreError> {
        let rows = bits
            .iter()
            .map(|row| row.iter().map(|&b| Cell::from_u8(b)).collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Construct from rows known to be valid (catalog data).
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|row| row.len() == rows[0].len()));
        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell at mask-local (x, y). Panics outside the mask (caller iterates
    /// within `width()`/`height()`).
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Iterate (x, y) offsets of all filled cells, row-major.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_filled())
                .map(move |(x, _)| (x, y))
        })
    }

    /// 90° rotation: transpose (rows become columns), then reverse the row
    /// order of the result. A w×h mask becomes h×w.
    pub fn rotated(&self) -> Mask {
        let w = self.width();
        let h = self.height();
        let mut rotated = vec![vec![Cell::Empty; h]; w];
        for y in 0..h {
            for x in 0..w {
                rotated[x][y] = self.rows[y][x];
            }
        }
        rotated.reverse();
        Mask {
            rows: rotated,
        }
    }

    /// 0/1 view of the mask for snapshots.
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.as_u8()).collect())
            .collect()
    }
}
