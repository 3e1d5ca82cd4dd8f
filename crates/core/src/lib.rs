//! Game engine: pure game rules and state, no I/O.
//!
//! The engine owns the grid and the active shape exclusively. Presentation
//! layers drive it through commands (`tick`, moves, `rotate`, pause, reset),
//! drain its event queue, and read state through read-only views or
//! serializable snapshots.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod grid;
pub mod mask;
pub mod rng;
pub mod rules;
pub mod shape;
pub mod snapshot;

pub use catalog::standard_catalog;
pub use engine::{GameConfig, GameEngine, GameEvent};
pub use error::CoreError;
pub use grid::Grid;
pub use mask::Mask;
pub use rng::SimpleRng;
pub use rules::{fits, within_bounds};
pub use shape::ActiveShape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
