//! Property tests for placement and tick invariants.
//!
//! Run with: PROPTEST_CASES=10000 cargo test --release placement_props

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use proptest::prelude::*;

use snake_common::games::SessionRng;
use snake_common::games::snake::placement::{available_coordinates, food_placement, initialize_snake_and_food};
use snake_common::games::snake::progression::{MIN_THRESHOLD_SPEED, speed_increment};
use snake_common::games::snake::{
    BoardSize, Coordinate, Direction, GameMap, Obstruction, SnakeGameState, SnakeSessionSettings, SnakeSpeed,
    TickOutcome,
};

fn board_size_strategy() -> impl Strategy<Value = BoardSize> {
    prop::sample::select(BoardSize::ALL.to_vec())
}

fn map_strategy() -> impl Strategy<Value = GameMap> {
    prop::sample::select(GameMap::ALL.to_vec())
}

fn speed_strategy() -> impl Strategy<Value = SnakeSpeed> {
    prop::sample::select(SnakeSpeed::ALL.to_vec())
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn on_board(cell: Coordinate, size: i32) -> bool {
    (0..size).contains(&cell.x) && (0..size).contains(&cell.y)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The opening snake and food sit on distinct free cells of every map.
    #[test]
    fn prop_initial_layout_is_free(
        seed in any::<u64>(),
        board_size in board_size_strategy(),
        map in map_strategy(),
    ) {
        let mut rng = SessionRng::new(seed);
        let obstruction = Obstruction::for_map(map, board_size);
        let size = board_size.cells();

        let (snake, food) = initialize_snake_and_food(size, &obstruction, &mut rng);

        prop_assert_ne!(snake, food);
        prop_assert!(on_board(snake, size));
        prop_assert!(on_board(food, size));
        prop_assert!(!obstruction.contains(&snake));
        prop_assert!(!obstruction.contains(&food));
    }

    /// Free cells plus occupied on-board cells cover the whole board exactly once.
    #[test]
    fn prop_available_coordinates_partition_board(
        size in 1i32..=30,
        occupied in prop::collection::hash_set((-2i32..32, -2i32..32), 0..64),
    ) {
        let occupied: HashSet<Coordinate> = occupied.into_iter().map(|(x, y)| Coordinate::new(x, y)).collect();
        let available = available_coordinates(size, &occupied);
        let occupied_on_board = occupied.iter().filter(|cell| on_board(**cell, size)).count();

        prop_assert_eq!(available.len() + occupied_on_board, (size * size) as usize);
        prop_assert!(available.iter().all(|cell| on_board(*cell, size) && !occupied.contains(cell)));
    }

    /// A short snake on a large board never gets food on top of it.
    #[test]
    fn prop_food_avoids_short_snake(
        seed in any::<u64>(),
        body in prop::collection::vec((0i32..30, 0i32..30), 1..12),
        map in map_strategy(),
    ) {
        let mut rng = SessionRng::new(seed);
        let body: Vec<Coordinate> = body.into_iter().map(|(x, y)| Coordinate::new(x, y)).collect();
        let obstruction = Obstruction::for_map(map, BoardSize::Large);

        let food = food_placement(&body, 30, &obstruction, &mut rng).unwrap();

        prop_assert!(on_board(food, 30));
        prop_assert!(!body.contains(&food));
        prop_assert!(!obstruction.contains(&food));
    }

    /// The tick interval only ever shrinks and never below the threshold.
    #[test]
    fn prop_speed_stays_above_threshold(
        initial in speed_strategy(),
        meals in 0u32..200,
    ) {
        let mut speed = initial.millis();
        for score in 0..meals {
            let next = speed_increment(speed, score);
            prop_assert!(next <= speed);
            prop_assert!(next >= MIN_THRESHOLD_SPEED);
            speed = next;
        }
    }

    /// Arbitrary input sequences keep the body contiguous and the score in
    /// step with its length.
    #[test]
    fn prop_ticks_keep_body_consistent(
        seed in any::<u64>(),
        board_size in board_size_strategy(),
        map in map_strategy(),
        inputs in prop::collection::vec(direction_strategy(), 1..200),
    ) {
        let mut rng = SessionRng::new(seed);
        let settings = SnakeSessionSettings::new(board_size, map, SnakeSpeed::Normal);
        let mut state = SnakeGameState::new(settings, None, &mut rng);
        let size = board_size.cells();

        for direction in inputs {
            state.set_direction(direction);
            let outcome = state.tick(&mut rng).unwrap();
            let snake = state.snake().to_vec();

            prop_assert_eq!(snake.len() as u32, state.scores().score() + 1);
            prop_assert!(state.scores().high_score() >= state.scores().score());

            if let TickOutcome::GameOver(_) = outcome {
                prop_assert!(state.is_game_over());
                break;
            }

            prop_assert!(snake.iter().all(|cell| on_board(*cell, size)));
            prop_assert!(snake.iter().all(|cell| !state.obstruction().contains(cell)));
            let unique: HashSet<_> = snake.iter().collect();
            prop_assert_eq!(unique.len(), snake.len());
            for pair in snake.windows(2) {
                let step = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
                prop_assert_eq!(step, 1);
            }
        }
    }
}
