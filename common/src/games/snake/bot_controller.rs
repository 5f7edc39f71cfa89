use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::collision::detect_collision;
use super::game_state::SnakeGameState;
use super::movement::{check_valid_move, handle_direction};
use super::types::{Coordinate, Direction};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    /// Walks toward the food along safe cells.
    #[default]
    Greedy,
    /// Any safe direction.
    Random,
}

pub struct BotController;

impl BotController {
    /// Direction the bot wants for the next tick, or `None` once the game is over.
    pub fn calculate_move(
        bot_type: BotType,
        state: &SnakeGameState,
        rng: &mut SessionRng,
    ) -> Option<Direction> {
        if state.is_game_over() {
            return None;
        }

        match bot_type {
            BotType::Greedy => Self::greedy_move(state, rng),
            BotType::Random => Self::random_valid_move(state, rng),
        }
    }

    fn greedy_move(state: &SnakeGameState, rng: &mut SessionRng) -> Option<Direction> {
        let head = state.snake().head();
        let food = state.food();

        let mut best_dir = None;
        let mut best_distance = i32::MAX;

        for dir in Self::safe_directions(state) {
            let distance = Self::manhattan_distance(head + handle_direction(dir), food);
            if distance < best_distance {
                best_distance = distance;
                best_dir = Some(dir);
            }
        }

        best_dir.or_else(|| Self::random_valid_move(state, rng))
    }

    fn random_valid_move(state: &SnakeGameState, rng: &mut SessionRng) -> Option<Direction> {
        let safe_directions = Self::safe_directions(state);

        if safe_directions.is_empty() {
            // boxed in; keep going and let the collision end the game
            let current = state.direction();
            Some(if current.is_idle() { Direction::Up } else { current })
        } else {
            let idx = rng.random_range(0..safe_directions.len());
            Some(safe_directions[idx])
        }
    }

    fn safe_directions(state: &SnakeGameState) -> Vec<Direction> {
        let current = state.direction();
        let head = state.snake().head();

        Direction::MOVING
            .into_iter()
            .filter(|dir| check_valid_move(current, *dir))
            .filter(|dir| {
                let next = head + handle_direction(*dir);
                detect_collision(next, state.snake(), state.board_size(), state.obstruction()).is_none()
            })
            .collect()
    }

    fn manhattan_distance(a: Coordinate, b: Coordinate) -> i32 {
        (a.x - b.x).abs() + (a.y - b.y).abs()
    }
}
