//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws into a simple
//! framebuffer which is flushed to the terminal with diff-based writes.
//! Keeps `core` deterministic and testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
