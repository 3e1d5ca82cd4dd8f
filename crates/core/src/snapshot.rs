//! Serializable read-only views of engine state.
//!
//! Snapshots are the hand-off format for presentation and automation
//! layers: a 0/1 cell grid plus the active shape and phase flags. The
//! buffers are reusable via `snapshot_into` so render loops do not
//! reallocate every frame.

use serde::Serialize;

use blockfall_types::GamePhase;

use crate::engine::GameEngine;
use crate::shape::ActiveShape;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub x: i32,
    pub y: i32,
    /// 0/1 rows of the shape mask in its current orientation.
    pub cells: Vec<Vec<u8>>,
}

impl From<&ActiveShape> for ActiveSnapshot {
    fn from(shape: &ActiveShape) -> Self {
        Self {
            x: shape.x(),
            y: shape.y(),
            cells: shape.mask().to_bits(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// 0/1 rows of landed cells, top to bottom.
    pub cells: Vec<Vec<u8>>,
    pub active: Option<ActiveSnapshot>,
    pub paused: bool,
    pub game_over: bool,
}

impl GameEngine {
    /// Fill a reusable snapshot buffer with the current state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid().width();
        out.height = self.grid().height();
        self.grid().write_u8_grid(&mut out.cells);
        out.active = self.active().map(ActiveSnapshot::from);
        out.paused = self.phase() == GamePhase::Paused;
        out.game_over = self.phase() == GamePhase::GameOver;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
