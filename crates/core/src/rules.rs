//! Collision and bounds predicates.
//!
//! Pure functions over a mask, a candidate position and the grid; nothing
//! here mutates. The engine consults these before every move, rotation and
//! descent.

use crate::grid::Grid;
use crate::mask::Mask;

/// Whether the mask's bounding box at (x, y) lies inside a width×height
/// play area. The y ≥ 0 half matters for rotations near the top row.
pub fn within_bounds(mask: &Mask, x: i32, y: i32, width: usize, height: usize) -> bool {
    x >= 0
        && y >= 0
        && x + mask.width() as i32 <= width as i32
        && y + mask.height() as i32 <= height as i32
}

/// Whether every filled cell of the mask, translated by (x, y), lands on an
/// in-bounds, unoccupied grid cell. Short-circuits on the first violation.
pub fn fits(mask: &Mask, x: i32, y: i32, grid: &Grid) -> bool {
    mask.filled_cells().all(|(dx, dy)| {
        matches!(
            grid.get(x + dx as i32, y + dy as i32),
            Some(cell) if !cell.is_filled()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::Cell;

    fn square() -> Mask {
        Mask::from_bits(&[&[1, 1], &[1, 1]]).unwrap()
    }

    #[test]
    fn test_within_bounds_edges() {
        let mask = square();
        assert!(within_bounds(&mask, 0, 0, 10, 20));
        assert!(within_bounds(&mask, 8, 18, 10, 20));
        assert!(!within_bounds(&mask, 9, 0, 10, 20));
        assert!(!within_bounds(&mask, 0, 19, 10, 20));
        assert!(!within_bounds(&mask, -1, 0, 10, 20));
        assert!(!within_bounds(&mask, 0, -1, 10, 20));
    }

    #[test]
    fn test_fits_anywhere_on_empty_grid() {
        let grid = Grid::new(10, 20);
        let mask = square();
        for y in 0..19 {
            for x in 0..9 {
                assert!(fits(&mask, x, y, &grid), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fits_rejects_out_of_bounds() {
        let grid = Grid::new(10, 20);
        let mask = square();
        assert!(!fits(&mask, -1, 0, &grid));
        assert!(!fits(&mask, 9, 0, &grid));
        assert!(!fits(&mask, 0, 19, &grid));
    }

    #[test]
    fn test_fits_rejects_any_overlap() {
        let mut grid = Grid::new(10, 20);
        grid.set(3, 4, Cell::Filled);

        let mask = square();
        // Every placement whose filled cells cover (3, 4) must fail.
        assert!(!fits(&mask, 3, 4, &grid));
        assert!(!fits(&mask, 2, 3, &grid));
        assert!(!fits(&mask, 2, 4, &grid));
        assert!(!fits(&mask, 3, 3, &grid));
        // A neighbouring placement that misses it is fine.
        assert!(fits(&mask, 4, 4, &grid));
    }

    #[test]
    fn test_fits_ignores_empty_mask_cells() {
        let mut grid = Grid::new(10, 20);
        grid.set(0, 0, Cell::Filled);

        // .#
        // ##  (the hole lines up with the occupied grid cell, so it fits)
        let mask = Mask::from_bits(&[&[0, 1], &[1, 1]]).unwrap();
        assert!(fits(&mask, 0, 0, &grid));

        // Shift right by one and the filled column collides.
        grid.set(1, 0, Cell::Filled);
        assert!(!fits(&mask, 0, 0, &grid));
    }
}
