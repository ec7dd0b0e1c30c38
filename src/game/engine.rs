use super::{
    config::GameConfig,
    food::FoodPool,
    grid::{Coordinate, Grid},
    state::{GameState, Snake},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// What changed during a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Cell the head moved into, or would have moved into on a collision
    pub head: Option<Coordinate>,
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Tail cell left behind by a plain move
    pub vacated: Option<Coordinate>,
    /// Replacement food spawned after eating
    pub spawned_food: Option<Coordinate>,
    /// Body cell the head ran into
    pub collision: Option<Coordinate>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn terminated(info: StepInfo) -> Self {
        Self {
            terminated: true,
            info,
        }
    }
}

/// Resolves ticks against a [`GameState`]
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            grid: Grid::new(config.board_size),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Fresh state for a stopped game, snake and food already laid out
    pub fn new_state(&mut self) -> GameState {
        let snake = Snake::new();
        let mut food = FoodPool::new(self.config.food_max, self.config.food_placement);
        food.reset(&self.grid, &snake, &mut self.rng);

        GameState::new(self.grid, snake, food)
    }

    /// Put snake, food and score back to their starting values
    pub fn reset(&mut self, state: &mut GameState) {
        state.snake.reset();
        state.food.reset(&self.grid, &state.snake, &mut self.rng);
        state.score.reset();
        state.steps = 0;
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        let Some(new_head) = state.snake.next_head_position(&state.grid) else {
            return StepResult::terminated(StepInfo::default());
        };

        // The tail has not moved yet, so running into it counts
        if state.snake.contains(new_head) {
            return StepResult::terminated(StepInfo {
                head: Some(new_head),
                collision: Some(new_head),
                ..Default::default()
            });
        }

        let mut info = StepInfo {
            head: Some(new_head),
            ..Default::default()
        };

        match state.food.find_index_at(new_head) {
            Some(index) => {
                state.snake.advance(new_head, true);
                state.food.remove_at(index);
                state.score.add(1);

                let spawned = state.food.generate_one(&state.grid, &state.snake, &mut self.rng);
                info.ate_food = true;
                info.spawned_food = Some(spawned);

                tracing::debug!(
                    row = new_head.row,
                    col = new_head.col,
                    score = state.score.current(),
                    length = state.snake.len(),
                    "food eaten"
                );
            }
            None => {
                info.vacated = state.snake.advance(new_head, false);
            }
        }

        state.steps += 1;

        StepResult {
            terminated: false,
            info,
        }
    }
}
