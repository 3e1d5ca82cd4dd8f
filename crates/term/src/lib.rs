//! Terminal presentation layer.
//!
//! `game_view` maps engine snapshots to text lines (pure, unit-testable);
//! `renderer` flushes those lines to a raw-mode terminal.

pub mod game_view;
pub mod renderer;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
