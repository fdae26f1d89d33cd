use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed grid width in cells; fitted to the viewport when absent
    pub grid_width: Option<u16>,
    /// Fixed grid height in cells; fitted to the viewport when absent
    pub grid_height: Option<u16>,
    /// Footprint of one cell on the drawing surface, in character columns.
    /// Two columns per row approximate a square on most terminals.
    pub cell_width: u16,
    /// Footprint of one cell in character rows
    pub cell_height: u16,
    /// Initial length of the snake (never below 3)
    pub initial_snake_length: usize,
    /// Game ticks per second
    pub tick_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: None,
            grid_height: None,
            cell_width: 2,
            cell_height: 1,
            initial_snake_length: 3,
            tick_hz: 15,
        }
    }
}

impl GameConfig {
    /// Fix the grid to a custom size instead of fitting the viewport
    pub fn fixed(width: u16, height: u16) -> Self {
        Self {
            grid_width: Some(width),
            grid_height: Some(height),
            ..Default::default()
        }
    }

    /// A small fixed grid for tests
    pub fn small() -> Self {
        Self::fixed(10, 10)
    }
}
