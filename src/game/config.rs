use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::state::Snake;
use crate::error::ConfigError;

/// How new food picks its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPlacement {
    /// Any cell, even one already holding food or snake
    #[default]
    Unchecked,
    /// Only cells free of food and snake, while any remain
    AvoidOccupied,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Food items kept on the board
    pub food_max: usize,
    /// Milliseconds between ticks
    pub tick_ms: u64,
    pub food_placement: FoodPlacement,
    /// Fixed seed for food placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 16,
            food_max: 3,
            tick_ms: 100,
            food_placement: FoodPlacement::Unchecked,
            seed: None,
        }
    }
}

impl GameConfig {
    pub const MIN_BOARD_SIZE: usize = 4;
    pub const MAX_BOARD_SIZE: usize = 64;
    pub const MIN_TICK_MS: u64 = 10;
    pub const MAX_TICK_MS: u64 = 5000;

    /// Create a new configuration with custom board size
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    /// Read a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range(
            "board_size",
            self.board_size as u64,
            Self::MIN_BOARD_SIZE as u64,
            Self::MAX_BOARD_SIZE as u64,
        )?;

        // The starting snake occupies some cells; the rest may hold food
        let free_cells = self.board_size * self.board_size - Snake::INITIAL_LENGTH;
        check_range("food_max", self.food_max as u64, 1, free_cells as u64)?;

        check_range("tick_ms", self.tick_ms, Self::MIN_TICK_MS, Self::MAX_TICK_MS)
    }
}

fn check_range(field: &'static str, value: u64, min: u64, max: u64) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 16);
        assert_eq!(config.food_max, 3);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.food_placement, FoodPlacement::Unchecked);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(10);
        assert_eq!(config.board_size, 10);
        assert_eq!(config.food_max, 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let too_small = GameConfig::new(3);
        assert!(matches!(
            too_small.validate(),
            Err(ConfigError::OutOfRange {
                field: "board_size",
                ..
            })
        ));

        let no_food = GameConfig {
            food_max: 0,
            ..Default::default()
        };
        assert!(no_food.validate().is_err());

        let crowded = GameConfig {
            board_size: 4,
            food_max: 14,
            ..Default::default()
        };
        assert!(crowded.validate().is_err());

        let fast = GameConfig {
            tick_ms: 1,
            ..Default::default()
        };
        assert!(fast.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            board_size = 20
            food_placement = "avoid_occupied"
            "#,
        )
        .unwrap();

        assert_eq!(config.board_size, 20);
        assert_eq!(config.food_max, 3);
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.food_placement, FoodPlacement::AvoidOccupied);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/snake.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
