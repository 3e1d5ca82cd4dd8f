//! Shared data types and constants.
//!
//! This crate contains pure data with no dependencies. Everything that both
//! the engine and the presentation layers need to agree on lives here.

/// Default board dimensions used by the demo driver.
pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 20;

/// Automatic descent cadence in milliseconds.
pub const TICK_MS: u64 = 800;

/// Points awarded per number of simultaneously cleared rows (index = rows).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Pure points lookup for external scoring.
///
/// Clears beyond four rows (possible with oversized catalog masks) are
/// rewarded at the four-row value.
pub fn line_points(rows: usize) -> u32 {
    LINE_SCORES[rows.min(LINE_SCORES.len() - 1)]
}

/// One cell of a grid or shape mask.
///
/// Occupancy is an explicit two-state enum rather than a truthy integer, so
/// completeness and collision checks cannot be fooled by stray values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled)
    }

    /// 0/1 encoding used by snapshots and wire-facing views.
    pub fn as_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled => 1,
        }
    }

    /// Decode the 0/1 encoding; exactly 1 means filled.
    pub fn from_u8(bit: u8) -> Self {
        if bit == 1 {
            Cell::Filled
        } else {
            Cell::Empty
        }
    }
}

/// Player-visible movement kinds, reported with `MoveAccepted` events so
/// collaborators can pick the matching cue (sound, flash, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Left,
    Right,
    Down,
    Rotate,
}

impl MoveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveKind::Left => "left",
            MoveKind::Right => "right",
            MoveKind::Down => "down",
            MoveKind::Rotate => "rotate",
        }
    }
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Running => "running",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_points_table() {
        assert_eq!(line_points(0), 0);
        assert_eq!(line_points(1), 40);
        assert_eq!(line_points(2), 100);
        assert_eq!(line_points(3), 300);
        assert_eq!(line_points(4), 1200);
    }

    #[test]
    fn test_line_points_clamps_above_four() {
        assert_eq!(line_points(5), 1200);
        assert_eq!(line_points(100), 1200);
    }

    #[test]
    fn test_cell_u8_roundtrip() {
        assert_eq!(Cell::from_u8(Cell::Filled.as_u8()), Cell::Filled);
        assert_eq!(Cell::from_u8(Cell::Empty.as_u8()), Cell::Empty);
        // Anything that is not exactly 1 is empty.
        assert_eq!(Cell::from_u8(2), Cell::Empty);
        assert_eq!(Cell::from_u8(255), Cell::Empty);
    }

    #[test]
    fn test_cell_is_filled() {
        assert!(Cell::Filled.is_filled());
        assert!(!Cell::Empty.is_filled());
    }
}
