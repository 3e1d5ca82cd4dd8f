//! The game engine: tick-driven state machine over grid and active shape.
//!
//! The engine owns both mutable pieces of state exclusively. A driver calls
//! the command methods between ticks (single logical thread, commands and
//! ticks never interleave), drains events with `poll_event`, and renders
//! from the read-only views.

use std::collections::VecDeque;

use blockfall_types::{GamePhase, MoveKind};

use crate::error::CoreError;
use crate::grid::Grid;
use crate::mask::Mask;
use crate::rng::SimpleRng;
use crate::rules::{fits, within_bounds};
use crate::shape::ActiveShape;

/// Engine construction parameters.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub catalog: Vec<Mask>,
    pub seed: u32,
}

impl GameConfig {
    pub fn new(width: usize, height: usize, catalog: Vec<Mask>) -> Self {
        Self {
            width,
            height,
            catalog,
            seed: 1,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.width == 0 {
            return Err(CoreError::InvalidConfig("width must be positive".into()));
        }
        if self.height == 0 {
            return Err(CoreError::InvalidConfig("height must be positive".into()));
        }
        if self.catalog.is_empty() {
            return Err(CoreError::InvalidConfig(
                "shape catalog must not be empty".into(),
            ));
        }
        for (i, mask) in self.catalog.iter().enumerate() {
            if mask.width() > self.width || mask.height() > self.height {
                return Err(CoreError::InvalidConfig(format!(
                    "catalog mask {} ({}x{}) does not fit a {}x{} grid",
                    i,
                    mask.width(),
                    mask.height(),
                    self.width,
                    self.height
                )));
            }
        }
        Ok(())
    }
}

/// Lifecycle notifications for presentation collaborators (renderer, audio,
/// scoring). Drained in emission order via [`GameEngine::poll_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new active shape entered the board.
    ShapeSpawned { mask: Mask, x: i32, y: i32 },
    /// A player move or rotation was applied (UI/audio cue).
    MoveAccepted(MoveKind),
    /// A landing completed one or more rows; `rows` is ascending.
    RowsCleared { count: usize, rows: Vec<usize> },
    /// A landing completed no rows (distinct sound cue).
    NoRowsCleared,
    /// The session ended; only `reset` revives it.
    GameOver,
    /// Pause was toggled; payload is the new paused state.
    PausedChanged(bool),
}

pub struct GameEngine {
    grid: Grid,
    active: Option<ActiveShape>,
    catalog: Vec<Mask>,
    rng: SimpleRng,
    phase: GamePhase,
    events: VecDeque<GameEvent>,
}

impl GameEngine {
    /// Build an engine and spawn the first shape.
    pub fn new(config: GameConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let mut engine = Self {
            grid: Grid::new(config.width, config.height),
            active: None,
            catalog: config.catalog,
            rng: SimpleRng::new(config.seed),
            phase: GamePhase::Running,
            events: VecDeque::new(),
        };
        engine.spawn();
        Ok(engine)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&ActiveShape> {
        self.active.as_ref()
    }

    /// Next pending event, oldest first.
    pub fn poll_event(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    /// One automatic descent step.
    ///
    /// Returns true if the engine state advanced (descent or landing).
    /// No-op while paused or after game over; the driver stops its timer
    /// on pause, but a stray tick must not mutate anything.
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        if self.can_descend() {
            if let Some(shape) = self.active.as_mut() {
                shape.translate(0, 1);
            }
            true
        } else {
            self.land();
            true
        }
    }

    fn can_descend(&self) -> bool {
        let Some(shape) = self.active.as_ref() else {
            return false;
        };
        // Leading-edge bound first, then the full collision check.
        shape.y() + shape.height() as i32 + 1 <= self.grid.height() as i32
            && fits(shape.mask(), shape.x(), shape.y() + 1, &self.grid)
    }

    /// Shift the active shape one column left. Rejected (false, no event)
    /// at the wall or on collision.
    pub fn move_left(&mut self) -> bool {
        self.try_shift(MoveKind::Left)
    }

    /// Shift the active shape one column right.
    pub fn move_right(&mut self) -> bool {
        self.try_shift(MoveKind::Right)
    }

    /// Player-driven descent by one row. Unlike `tick`, a blocked move is
    /// rejected rather than landing the shape.
    pub fn move_down(&mut self) -> bool {
        self.try_shift(MoveKind::Down)
    }

    fn try_shift(&mut self, kind: MoveKind) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(shape) = self.active.as_ref() else {
            return false;
        };

        // Leading-edge bound for the direction of travel.
        let allowed = match kind {
            MoveKind::Left => shape.x() > 0,
            MoveKind::Right => shape.x() + (shape.width() as i32) < self.grid.width() as i32,
            MoveKind::Down => shape.y() + (shape.height() as i32) < self.grid.height() as i32,
            MoveKind::Rotate => false,
        };
        if !allowed {
            return false;
        }

        let (dx, dy) = match kind {
            MoveKind::Left => (-1, 0),
            MoveKind::Right => (1, 0),
            MoveKind::Down => (0, 1),
            MoveKind::Rotate => return false,
        };
        if !fits(shape.mask(), shape.x() + dx, shape.y() + dy, &self.grid) {
            return false;
        }

        if let Some(shape) = self.active.as_mut() {
            shape.translate(dx, dy);
        }
        self.emit(GameEvent::MoveAccepted(kind));
        true
    }

    /// Rotate the active shape 90° in place.
    ///
    /// Applied only if the rotated mask fits the grid and stays within the
    /// play bounds at the current position; otherwise rejected unchanged
    /// (no wall-kick search).
    pub fn rotate(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(shape) = self.active.as_ref() else {
            return false;
        };

        let candidate = shape.mask().rotated();
        let ok = fits(&candidate, shape.x(), shape.y(), &self.grid)
            && within_bounds(
                &candidate,
                shape.x(),
                shape.y(),
                self.grid.width(),
                self.grid.height(),
            );
        if !ok {
            return false;
        }

        if let Some(shape) = self.active.as_mut() {
            shape.set_mask(candidate);
        }
        self.emit(GameEvent::MoveAccepted(MoveKind::Rotate));
        true
    }

    /// Toggle Running <-> Paused. No-op after game over.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                self.emit(GameEvent::PausedChanged(true));
                true
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.emit(GameEvent::PausedChanged(false));
                true
            }
            GamePhase::GameOver => false,
        }
    }

    /// Restart from any phase: empty grid, fresh shape, pending events
    /// discarded.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.events.clear();
        self.active = None;
        self.phase = GamePhase::Running;
        self.spawn();
    }

    /// Landing sequence: merge, top-out check, row clearing, respawn.
    fn land(&mut self) {
        let Some(shape) = self.active.take() else {
            return;
        };
        let landed_y = shape.y();
        self.grid.merge(shape.mask(), shape.x(), landed_y);

        // Top-out rule: a shape that lands with its top at or above row 0
        // ends the session. Evaluated before row clearing, using the
        // pre-merge position.
        if landed_y <= 0 {
            self.phase = GamePhase::GameOver;
            self.emit(GameEvent::GameOver);
            return;
        }

        let complete = self.grid.find_complete_rows();
        if complete.is_empty() {
            self.emit(GameEvent::NoRowsCleared);
        } else {
            self.grid.clear_rows(&complete);
            self.emit(GameEvent::RowsCleared {
                count: complete.len(),
                rows: complete,
            });
        }

        self.spawn();
    }

    /// Spawn a random catalog shape at the top-left corner (x = 0, y = 0).
    /// If it does not fit the current grid, the session is over.
    fn spawn(&mut self) {
        let pick = self.rng.next_range(self.catalog.len() as u32) as usize;
        let mask = self.catalog[pick].clone();

        if !fits(&mask, 0, 0, &self.grid) {
            self.phase = GamePhase::GameOver;
            self.emit(GameEvent::GameOver);
            return;
        }

        self.emit(GameEvent::ShapeSpawned {
            mask: mask.clone(),
            x: 0,
            y: 0,
        });
        self.active = Some(ActiveShape::new(mask, 0, 0));
    }
}
