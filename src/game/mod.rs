//! Core game logic for Seed Snake
//!
//! Everything in here is free of I/O and rendering concerns: the grid, the
//! snake, the step engine, and the tick driver can all be exercised directly
//! from tests without a terminal or a timer.

pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod state;
pub mod timing;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, NextCell, StepInfo, StepResult};
pub use grid::Grid;
pub use state::{CollisionKind, GameOutcome, GameState, Position, Snake};
pub use timing::TickDriver;
