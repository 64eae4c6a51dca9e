//! Terminal snake variant: a tick-driven grid simulation with food
//! categories, static obstacles, and timed power-ups.
//!
//! `core` is pure and deterministic (seeded RNG, no I/O); `term` and `input`
//! are the crossterm-facing collaborators; `score` persists the best score.

pub mod core;
pub mod input;
pub mod score;
pub mod term;
pub mod types;
