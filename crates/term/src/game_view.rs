//! GameView: maps a `GameSnapshot` into terminal text lines.
//!
//! This module is pure (no I/O), so the whole board drawing path can be
//! unit-tested without a terminal.

use blockfall_core::GameSnapshot;

/// Characters per board cell. Two columns per cell compensates for the
/// typical terminal glyph aspect ratio.
const CELL_FILLED: &str = "[]";
const CELL_ACTIVE: &str = "##";
const CELL_EMPTY: &str = " .";

pub struct GameView;

impl GameView {
    /// Render the snapshot into bordered text lines, one per terminal row.
    ///
    /// `status` is whatever the driver wants on the line under the board
    /// (event cues, pause message).
    pub fn render_lines(snap: &GameSnapshot, status: &str) -> Vec<String> {
        let inner = snap.width * 2;
        let mut lines = Vec::with_capacity(snap.height + 3);

        lines.push(format!("+{}+", "-".repeat(inner)));

        for y in 0..snap.height {
            let mut line = String::with_capacity(inner + 2);
            line.push('|');
            for x in 0..snap.width {
                line.push_str(Self::cell_str(snap, x, y));
            }
            line.push('|');
            lines.push(line);
        }

        lines.push(format!("+{}+", "-".repeat(inner)));

        let message = if snap.game_over {
            "GAME OVER! press r to restart"
        } else if snap.paused {
            "paused (p to resume)"
        } else {
            status
        };
        lines.push(message.to_string());

        lines
    }

    fn cell_str(snap: &GameSnapshot, x: usize, y: usize) -> &'static str {
        if let Some(active) = &snap.active {
            let local_x = x as i32 - active.x;
            let local_y = y as i32 - active.y;
            if local_y >= 0
                && (local_y as usize) < active.cells.len()
                && local_x >= 0
                && (local_x as usize) < active.cells[local_y as usize].len()
                && active.cells[local_y as usize][local_x as usize] == 1
            {
                return CELL_ACTIVE;
            }
        }
        if snap.cells[y][x] == 1 {
            CELL_FILLED
        } else {
            CELL_EMPTY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::{GameConfig, GameEngine, Mask};

    fn snapshot_2x2_on_4x4() -> GameSnapshot {
        let mask = Mask::from_bits(&[&[1, 1], &[1, 1]]).unwrap();
        let engine = GameEngine::new(GameConfig::new(4, 4, vec![mask])).unwrap();
        engine.snapshot()
    }

    #[test]
    fn test_lines_have_expected_shape() {
        let snap = snapshot_2x2_on_4x4();
        let lines = GameView::render_lines(&snap, "");

        // border + 4 rows + border + status
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "+--------+");
        assert_eq!(lines[6], "");
        for row in &lines[1..=4] {
            assert_eq!(row.len(), 10);
            assert!(row.starts_with('|') && row.ends_with('|'));
        }
    }

    #[test]
    fn test_active_shape_is_drawn() {
        let snap = snapshot_2x2_on_4x4();
        let lines = GameView::render_lines(&snap, "");

        // Square at the origin: top two rows show the active glyph.
        assert_eq!(lines[1], "|#### . .|");
        assert_eq!(lines[2], "|#### . .|");
        assert_eq!(lines[3], "| . . . .|");
    }

    #[test]
    fn test_landed_cells_are_drawn() {
        let mask = Mask::from_bits(&[&[1, 1], &[1, 1]]).unwrap();
        let mut engine = GameEngine::new(GameConfig::new(4, 4, vec![mask])).unwrap();
        // Land the first square (floor at y = 2), respawning another.
        engine.tick();
        engine.tick();
        engine.tick();

        let lines = GameView::render_lines(&engine.snapshot(), "");
        assert_eq!(lines[3], "|[][] . .|");
        assert_eq!(lines[4], "|[][] . .|");
    }

    #[test]
    fn test_status_messages() {
        let mut snap = snapshot_2x2_on_4x4();
        let lines = GameView::render_lines(&snap, "rows cleared!");
        assert_eq!(lines.last().unwrap(), "rows cleared!");

        snap.paused = true;
        let lines = GameView::render_lines(&snap, "");
        assert_eq!(lines.last().unwrap(), "paused (p to resume)");

        snap.paused = false;
        snap.game_over = true;
        let lines = GameView::render_lines(&snap, "");
        assert_eq!(lines.last().unwrap(), "GAME OVER! press r to restart");
    }
}
