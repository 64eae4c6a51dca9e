//! Grid module - discretizes the arena into fixed-size cells
//!
//! Pure geometry: bounds checks and random in-bounds cell generation.
//! The grid holds no occupancy state; entities track their own cells.

use crate::core::rng::SimpleRng;
use crate::types::Cell;

/// The playing field, `[0, width) x [0, height)` in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i16,
    height: i16,
}

impl Grid {
    pub fn new(width: i16, height: i16) -> Self {
        assert!(width > 0 && height > 0, "grid must have positive area");
        Self { width, height }
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    /// Whether `cell` lies inside the arena bounds
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// The center cell, where the actor starts
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// A uniformly random in-bounds cell.
    ///
    /// No occupancy check; a drawn cell can coincide with the actor or an
    /// obstacle.
    pub fn random_cell(&self, rng: &mut SimpleRng) -> Cell {
        let x = rng.next_range(self.width as u32) as i16;
        let y = rng.next_range(self.height as u32) as i16;
        Cell::new(x, y)
    }
}
