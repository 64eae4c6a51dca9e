//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O.

pub mod grid;
pub mod powerup;
pub mod rng;
pub mod session;
pub mod snake;
pub mod snapshot;
pub mod spawn;

// Re-export commonly used types
pub use grid::Grid;
pub use powerup::EffectState;
pub use rng::SimpleRng;
pub use session::{CollisionKind, Session, SessionConfig, TickEvent, TickEvents};
pub use snake::Snake;
pub use snapshot::SessionSnapshot;
pub use spawn::{Slot, Spawner};
