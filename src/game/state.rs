use super::action::Direction;
use super::food::FoodPool;
use super::grid::{Coordinate, Grid};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, tail at index 0 and head last
    pub body: Vec<Coordinate>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Length of the snake after a reset
    pub const INITIAL_LENGTH: usize = 3;

    /// Canonical starting snake: three cells along the top row, heading right
    pub fn new() -> Self {
        let body = (0..Self::INITIAL_LENGTH as i32)
            .map(|col| Coordinate::new(0, col))
            .collect();

        Self {
            body,
            direction: Direction::Right,
        }
    }

    /// Build a snake from explicit segments, tail first
    pub fn from_segments(body: Vec<Coordinate>, direction: Direction) -> Self {
        Self { body, direction }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Get the head position
    pub fn head(&self) -> Option<Coordinate> {
        self.body.last().copied()
    }

    /// Get the tail position (first segment)
    pub fn tail(&self) -> Option<Coordinate> {
        self.body.first().copied()
    }

    pub fn contains(&self, pos: Coordinate) -> bool {
        self.body.contains(&pos)
    }

    /// Change heading unless the request is a 180-degree turn.
    ///
    /// Returns whether the direction was accepted.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.direction.is_opposite(requested) {
            return false;
        }

        self.direction = requested;
        true
    }

    /// Where the head will be after one step in the current direction
    pub fn next_head_position(&self, grid: &Grid) -> Option<Coordinate> {
        self.head().map(|head| grid.step(head, self.direction))
    }

    /// Push a new head. Without growth the tail is dropped first and its
    /// cell is returned so the caller can clear it.
    pub fn advance(&mut self, new_head: Coordinate, grow: bool) -> Option<Coordinate> {
        let vacated = if grow || self.body.is_empty() {
            None
        } else {
            Some(self.body.remove(0))
        };

        self.body.push(new_head);
        vacated
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Stopped,
    Started,
    Paused,
}

/// Why the last game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The head ran into the body
    Collision,
    /// The player pressed stop
    User,
}

/// Current score plus the best score seen this session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    current: u32,
    high: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    /// Add points, raising the high score watermark if it is passed
    pub fn add(&mut self, delta: u32) {
        self.current = self.current.saturating_add(delta);
        if self.current > self.high {
            self.high = self.current;
        }
    }

    /// Zero the current score; the high score is kept
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: FoodPool,
    pub score: Score,
    pub status: GameStatus,
    pub last_stop: Option<StopReason>,
    pub steps: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(grid: Grid, snake: Snake, food: FoodPool) -> Self {
        Self {
            grid,
            snake,
            food,
            score: Score::new(),
            status: GameStatus::Stopped,
            last_stop: None,
            steps: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Started
    }
}
