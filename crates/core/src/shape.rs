//! The active falling shape.

use crate::mask::Mask;

/// The currently controllable piece: a mask plus its grid position.
///
/// Width and height are derived from the mask, so they always reflect the
/// current orientation after a rotation replaces the mask. (x, y) is the
/// mask's top-left corner in grid coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveShape {
    mask: Mask,
    x: i32,
    y: i32,
}

impl ActiveShape {
    pub fn new(mask: Mask, x: i32, y: i32) -> Self {
        Self { mask, x, y }
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> usize {
        self.mask.width()
    }

    pub fn height(&self) -> usize {
        self.mask.height()
    }

    pub(crate) fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Swap in a new mask (successful rotation). Position is unchanged.
    pub(crate) fn set_mask(&mut self, mask: Mask) {
        self.mask = mask;
    }
}
