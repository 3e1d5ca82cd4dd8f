//! The grid of landed blocks.
//!
//! Flat row-major storage (index = y * width + x) for cache locality, the
//! same layout the snapshot and view code consume. Dimensions are fixed at
//! construction; only `merge`, `clear_rows` and `clear` mutate cells.

use blockfall_types::Cell;

use crate::error::CoreError;
use crate::mask::Mask;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid. Dimensions are validated by `GameConfig`
    /// before this is reached.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Cell at (x, y), or `None` out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether the cell at (x, y) is occupied.
    ///
    /// Out-of-bounds access is a programming error in the calling collision
    /// logic and fails loudly instead of clamping.
    pub fn is_occupied(&self, x: i32, y: i32) -> Result<bool, CoreError> {
        self.get(x, y)
            .map(|cell| cell.is_filled())
            .ok_or(CoreError::OutOfBounds { x, y })
    }

    /// Set a cell; returns false (and does nothing) out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Stamp every filled cell of `mask` onto the grid at the given origin.
    ///
    /// The caller must already have verified the placement with
    /// `rules::fits`; merge does not re-check and will silently overwrite
    /// occupied cells. Mask cells outside the grid are skipped.
    pub fn merge(&mut self, mask: &Mask, origin_x: i32, origin_y: i32) {
        for (dx, dy) in mask.filled_cells() {
            let _ = self.set(origin_x + dx as i32, origin_y + dy as i32, Cell::Filled);
        }
    }

    fn is_row_complete(&self, y: usize) -> bool {
        let start = y * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_filled())
    }

    /// Indices of fully occupied rows, top to bottom.
    pub fn find_complete_rows(&self) -> Vec<usize> {
        (0..self.height)
            .filter(|&y| self.is_row_complete(y))
            .collect()
    }

    /// Remove the given rows and insert the same number of empty rows at
    /// the top, preserving the total row count.
    ///
    /// Rows are marked first and the grid rebuilt in a single bottom-up
    /// compaction pass, so the input may list indices in any order without
    /// invalidation. Out-of-range indices are ignored.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        if rows.is_empty() {
            return;
        }

        let mut cleared = vec![false; self.height];
        for &row in rows {
            if row < self.height {
                cleared[row] = true;
            }
        }

        // Compact surviving rows toward the bottom.
        let mut write = self.height;
        for read in (0..self.height).rev() {
            if cleared[read] {
                continue;
            }
            write -= 1;
            if write != read {
                let src = read * self.width;
                let dst = write * self.width;
                self.cells.copy_within(src..src + self.width, dst);
            }
        }

        // Fresh empty rows on top.
        for cell in &mut self.cells[..write * self.width] {
            *cell = Cell::Empty;
        }
    }

    /// Reset every cell to empty (game restart).
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::Empty;
        }
    }

    /// Row-major flat view of the cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the grid into a reusable 0/1 row buffer (snapshot path).
    pub fn write_u8_grid(&self, out: &mut Vec<Vec<u8>>) {
        out.resize(self.height, Vec::new());
        for (y, row) in out.iter_mut().enumerate() {
            row.resize(self.width, 0);
            let start = y * self.width;
            for (x, cell) in self.cells[start..start + self.width].iter().enumerate() {
                row[x] = cell.as_u8();
            }
        }
    }
}
