//! Read-only view of a session for the render collaborator.
//!
//! The runner keeps one snapshot and refills it every tick via
//! `Session::snapshot_into`, so drawing never touches live core state and
//! the per-frame allocations are reused.

use crate::types::{Cell, Direction, PowerUp};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// Body cells, oldest first; the head is the last element
    pub body: Vec<Cell>,
    pub head: Cell,
    pub direction: Direction,

    pub regular_food: Cell,
    pub special_food: Option<Cell>,
    pub poison_food: Option<Cell>,
    pub power_up: Option<Cell>,
    pub obstacles: Vec<Cell>,

    pub effect: Option<PowerUp>,
    /// Remaining effect duration as a fraction of the full window
    pub effect_remaining: f32,

    /// Displayed score (already doubled under DoubleScore)
    pub score: u32,
    /// Effective speed in ticks per second
    pub speed: u32,
    pub game_over: bool,
    pub ticks: u64,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            body: Vec::new(),
            head: Cell::new(0, 0),
            direction: Direction::Right,
            regular_food: Cell::new(0, 0),
            special_food: None,
            poison_food: None,
            power_up: None,
            obstacles: Vec::new(),
            effect: None,
            effect_remaining: 0.0,
            score: 0,
            speed: 0,
            game_over: false,
            ticks: 0,
        }
    }
}
