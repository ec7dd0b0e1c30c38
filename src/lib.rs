//! Torus Snake - the classic snake game on a board whose edges wrap around
//!
//! This library provides:
//! - Core game logic (game module)
//! - Terminal rendering (render module)
//! - Keyboard mapping (input module)
//! - The interactive game loop (modes module)

pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
