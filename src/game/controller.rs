//! Game lifecycle: owns the state and decides which commands take effect.

use super::{
    action::{Command, Direction},
    config::GameConfig,
    engine::{GameEngine, StepResult},
    state::{GameState, GameStatus, StopReason},
};

/// Outcome of a command, used by the caller to arm or cancel its tick clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Game is now running; `reset` is set when a new game was laid out
    Started { reset: bool },
    Paused,
    Stopped(StopReason),
    /// Heading changed
    Turned(Direction),
    /// Command had no effect in the current status
    Ignored,
}

/// Owns a [`GameState`] and drives it through start, pause, stop and ticks
pub struct GameController {
    engine: GameEngine,
    state: GameState,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.new_state();

        Self { engine, state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for setting up positions in tests and tools
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn handle(&mut self, command: Command) -> Transition {
        match command {
            Command::Turn(direction) => self.turn(direction),
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Stop => self.stop(),
        }
    }

    /// Request a new heading; reversals are dropped
    pub fn turn(&mut self, direction: Direction) -> Transition {
        if self.state.snake.set_direction(direction) {
            Transition::Turned(direction)
        } else {
            Transition::Ignored
        }
    }

    /// Start a new game from Stopped, or resume from Paused
    pub fn start(&mut self) -> Transition {
        match self.state.status {
            GameStatus::Started => Transition::Ignored,
            GameStatus::Paused => {
                self.state.status = GameStatus::Started;
                tracing::info!(steps = self.state.steps, "game resumed");
                Transition::Started { reset: false }
            }
            GameStatus::Stopped => {
                self.engine.reset(&mut self.state);
                self.state.status = GameStatus::Started;
                self.state.last_stop = None;
                tracing::info!(high_score = self.state.score.high(), "game started");
                Transition::Started { reset: true }
            }
        }
    }

    pub fn pause(&mut self) -> Transition {
        if self.state.status != GameStatus::Started {
            return Transition::Ignored;
        }

        self.state.status = GameStatus::Paused;
        tracing::info!(steps = self.state.steps, "game paused");
        Transition::Paused
    }

    pub fn stop(&mut self) -> Transition {
        self.halt(StopReason::User)
    }

    fn halt(&mut self, reason: StopReason) -> Transition {
        if self.state.status == GameStatus::Stopped {
            return Transition::Ignored;
        }

        self.state.status = GameStatus::Stopped;
        self.state.last_stop = Some(reason);
        tracing::info!(
            ?reason,
            score = self.state.score.current(),
            high_score = self.state.score.high(),
            length = self.state.snake.len(),
            "game over"
        );
        Transition::Stopped(reason)
    }

    /// Advance one step if the game is running.
    ///
    /// A collision stops the game before the result is returned.
    pub fn tick(&mut self) -> Option<StepResult> {
        if !self.state.is_running() {
            return None;
        }

        let result = self.engine.step(&mut self.state);
        if result.terminated {
            self.halt(StopReason::Collision);
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coordinate, FoodPlacement, FoodPool, Snake};

    fn controller() -> GameController {
        GameController::new(GameConfig {
            seed: Some(9),
            ..Default::default()
        })
    }

    #[test]
    fn test_starts_stopped() {
        let game = controller();
        assert_eq!(game.status(), GameStatus::Stopped);
        assert_eq!(game.state().last_stop, None);
        assert_eq!(game.state().snake, Snake::new());
    }

    #[test]
    fn test_lifecycle() {
        let mut game = controller();

        assert_eq!(game.pause(), Transition::Ignored);
        assert_eq!(game.start(), Transition::Started { reset: true });
        assert_eq!(game.start(), Transition::Ignored);
        assert_eq!(game.pause(), Transition::Paused);
        assert_eq!(game.pause(), Transition::Ignored);
        assert_eq!(game.start(), Transition::Started { reset: false });
        assert_eq!(game.stop(), Transition::Stopped(StopReason::User));
        assert_eq!(game.stop(), Transition::Ignored);
        assert_eq!(game.state().last_stop, Some(StopReason::User));
    }

    #[test]
    fn test_stop_from_paused() {
        let mut game = controller();
        game.start();
        game.pause();
        assert_eq!(game.stop(), Transition::Stopped(StopReason::User));
        assert_eq!(game.status(), GameStatus::Stopped);
    }

    #[test]
    fn test_tick_only_while_started() {
        let mut game = controller();
        assert!(game.tick().is_none());

        game.start();
        assert!(game.tick().is_some());

        game.pause();
        let snake = game.state().snake.clone();
        assert!(game.tick().is_none());
        assert_eq!(game.state().snake, snake);
    }

    #[test]
    fn test_resume_keeps_progress() {
        let mut game = controller();
        game.start();
        game.state_mut().food = FoodPool::new(3, FoodPlacement::Unchecked);
        game.tick();
        game.state_mut().score.add(2);
        game.pause();
        game.start();

        assert_eq!(game.state().steps, 1);
        assert_eq!(game.state().score.current(), 2);
    }

    #[test]
    fn test_collision_stops_game() {
        let mut game = controller();
        game.start();
        game.state_mut().snake = Snake::from_segments(
            vec![
                Coordinate::new(6, 5),
                Coordinate::new(6, 6),
                Coordinate::new(5, 6),
                Coordinate::new(5, 5),
            ],
            Direction::Down,
        );

        let result = game.tick().unwrap();
        assert!(result.terminated);
        assert_eq!(game.status(), GameStatus::Stopped);
        assert_eq!(game.state().last_stop, Some(StopReason::Collision));
        assert!(game.tick().is_none());
    }

    #[test]
    fn test_restart_resets_score_only_from_stopped() {
        let mut game = controller();
        game.start();
        game.state_mut().score.add(5);
        game.stop();
        assert_eq!(game.state().score.current(), 5);

        game.start();
        assert_eq!(game.state().score.current(), 0);
        assert_eq!(game.state().score.high(), 5);
        assert_eq!(game.state().snake, Snake::new());
    }

    #[test]
    fn test_turn_routes_through_snake() {
        let mut game = controller();
        game.start();
        assert_eq!(game.handle(Command::Turn(Direction::Left)), Transition::Ignored);
        assert_eq!(
            game.handle(Command::Turn(Direction::Up)),
            Transition::Turned(Direction::Up)
        );
        assert_eq!(game.state().snake.direction, Direction::Up);
    }
}
