//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The board wraps on both axes, so the only way to lose is to run into yourself.

pub mod action;
pub mod config;
pub mod controller;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;
pub mod tiles;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::{FoodPlacement, GameConfig};
pub use controller::{GameController, Transition};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::FoodPool;
pub use grid::{Coordinate, Grid, classify_adjacency, wrap};
pub use state::{GameState, GameStatus, Score, Snake, StopReason};
pub use tiles::{TILE_ASSETS, Tile, orient, tile_for};
