use proptest::prelude::*;
use torus_snake::game::{
    Coordinate, Direction, FoodPlacement, FoodPool, GameConfig, GameEngine, Grid, Score, Snake,
    classify_adjacency, wrap,
};

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

prop_compose! {
    fn arb_cell()(size in 4usize..=64)(
        size in Just(size),
        row in 0..size as i32,
        col in 0..size as i32
    ) -> (usize, Coordinate) {
        (size, Coordinate::new(row, col))
    }
}

/// A straight horizontal snake of `len` cells on row 0, tail at column 0
fn straight_snake(len: usize) -> Snake {
    let body = (0..len as i32).map(|col| Coordinate::new(0, col)).collect();
    Snake::from_segments(body, Direction::Right)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_wrap_edges(size in 1i32..=64) {
        prop_assert_eq!(wrap(size, size), 0);
        prop_assert_eq!(wrap(-1, size), size - 1);
    }

    #[test]
    fn test_step_stays_on_board((size, pos) in arb_cell(), dir in arb_direction()) {
        let grid = Grid::new(size);
        let next = grid.step(pos, dir);
        prop_assert!(grid.contains(next), "{:?} left the board", next);
        prop_assert_eq!(classify_adjacency(next, pos), Some(dir));
        prop_assert_eq!(classify_adjacency(pos, next), Some(dir.opposite()));
    }

    #[test]
    fn test_reversal_never_changes_direction(start in arb_direction()) {
        let mut snake = Snake::from_segments(vec![Coordinate::new(3, 3)], start);
        prop_assert!(!snake.set_direction(start.opposite()));
        prop_assert_eq!(snake.direction, start);
    }

    #[test]
    fn test_growth_invariant(len in 3usize..12, eat in any::<bool>(), seed in any::<u64>()) {
        let config = GameConfig { seed: Some(seed), ..Default::default() };
        let mut engine = GameEngine::new(config);
        let mut state = engine.new_state();
        state.snake = straight_snake(len);

        let mut food = FoodPool::new(3, FoodPlacement::Unchecked);
        if eat {
            food.place(Coordinate::new(0, len as i32));
        }
        food.place(Coordinate::new(8, 8));
        food.place(Coordinate::new(9, 9));
        state.food = food;
        let food_before = if eat { state.food.capacity() } else { 2 };

        let result = engine.step(&mut state);

        prop_assert!(!result.terminated);
        prop_assert_eq!(result.info.ate_food, eat);
        prop_assert_eq!(state.snake.len(), if eat { len + 1 } else { len });
        prop_assert_eq!(state.food.len(), food_before);
    }

    #[test]
    fn test_collision_at_any_segment(len in 4usize..12, hit in 0usize..12) {
        // Snake runs along row 0 and then turns up at column len - 1; its head
        // sits in row 1 and steps back up into segment `hit`
        let hit = hit % (len - 1);
        let mut body: Vec<Coordinate> = (0..(len - 1) as i32).map(|col| Coordinate::new(0, col)).collect();
        let target = body[hit];
        body.push(Coordinate::new(1, target.col));

        let mut engine = GameEngine::new(GameConfig { board_size: 16, seed: Some(1), ..Default::default() });
        let mut state = engine.new_state();
        state.snake = Snake::from_segments(body, Direction::Up);
        let before = state.snake.clone();

        let result = engine.step(&mut state);

        prop_assert!(result.terminated);
        prop_assert_eq!(result.info.collision, Some(target));
        prop_assert_eq!(state.snake, before);
    }

    #[test]
    fn test_high_score_never_decreases(ops in proptest::collection::vec(prop_oneof![
        (1u32..5).prop_map(Some),
        Just(None),
    ], 0..50)) {
        let mut score = Score::new();
        let mut high = 0;

        for op in ops {
            match op {
                Some(delta) => score.add(delta),
                None => score.reset(),
            }
            prop_assert!(score.high() >= high);
            prop_assert!(score.high() >= score.current());
            high = score.high();
        }
    }
}
