use anyhow::{ensure, Result};
use rand::Rng;

use super::state::Position;

/// The playing field, in cells. Dimensions never change after construction;
/// a viewport resize builds a fresh grid (and a fresh game) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Create a grid with the given dimensions in cells
    pub fn new(width: u16, height: u16) -> Result<Self> {
        ensure!(
            width >= 1 && height >= 1,
            "invalid grid size: {}x{} cells",
            width,
            height
        );
        Ok(Self { width, height })
    }

    /// Lay out a grid over the available drawing area.
    ///
    /// Only whole cells count: the remainder of the integer division is
    /// discarded, and one extra margin cell per axis is dropped so the field
    /// never touches the viewport edge.
    pub fn from_viewport(avail_w: u16, avail_h: u16, cell_w: u16, cell_h: u16) -> Result<Self> {
        ensure!(cell_w >= 1 && cell_h >= 1, "invalid cell size: {}x{}", cell_w, cell_h);
        let width = (avail_w / cell_w).saturating_sub(1);
        let height = (avail_h / cell_h).saturating_sub(1);
        ensure!(
            width >= 1 && height >= 1,
            "viewport {}x{} too small for {}x{} cells",
            avail_w,
            avail_h,
            cell_w,
            cell_h
        );
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_count(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }

    /// Check whether a position lies within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < i32::from(self.width)
            && pos.y >= 0
            && pos.y < i32::from(self.height)
    }

    /// Draw a uniformly random cell
    pub fn random_position(&self, rng: &mut impl Rng) -> Position {
        let x = rng.gen_range(0..self.width) as i32;
        let y = rng.gen_range(0..self.height) as i32;
        Position::new(x, y)
    }
}
