use std::time::Duration;

use crate::{log, SnakeError};
use crate::games::SessionRng;
use super::board::{Obstruction, create_board};
use super::collision::{check_food_consumption, detect_collision};
use super::movement::{check_valid_move, handle_direction};
use super::placement::{food_placement, initialize_snake_and_food};
use super::progression::speed_increment;
use super::score::ScoreBoard;
use super::settings::SnakeSessionSettings;
use super::snake::SnakeBody;
use super::types::{Coordinate, DeathReason, Direction, GameStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No direction chosen yet; nothing moved.
    Idle,
    Moved,
    Ate { score: u32, speed: u32 },
    GameOver(DeathReason),
}

/// Read-only view handed to renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSnapshot {
    pub board_size: i32,
    /// Cell labels for laying out the grid, see [`create_board`].
    pub board: Vec<Vec<u32>>,
    pub snake: Vec<Coordinate>,
    pub food: Coordinate,
    pub obstruction: Vec<Coordinate>,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub speed: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    settings: SnakeSessionSettings,
    board_size: i32,
    obstruction: Obstruction,
    snake: SnakeBody,
    food: Coordinate,
    direction: Direction,
    pending_direction: Option<Direction>,
    scores: ScoreBoard,
    speed: u32,
    status: GameStatus,
    death_reason: Option<DeathReason>,
}

impl SnakeGameState {
    pub fn new(
        settings: SnakeSessionSettings,
        restored_high_score: Option<u32>,
        rng: &mut SessionRng,
    ) -> Self {
        let board_size = settings.board_size.cells();
        let obstruction = settings.obstruction();
        let (snake_head, food) = initialize_snake_and_food(board_size, &obstruction, rng);

        Self::with_layout(
            settings,
            obstruction,
            SnakeBody::new(snake_head),
            food,
            ScoreBoard::new(restored_high_score),
        )
    }

    /// Builds a state from an explicit layout instead of random placement.
    pub fn with_layout(
        settings: SnakeSessionSettings,
        obstruction: Obstruction,
        snake: SnakeBody,
        food: Coordinate,
        scores: ScoreBoard,
    ) -> Self {
        Self {
            settings,
            board_size: settings.board_size.cells(),
            obstruction,
            snake,
            food,
            direction: Direction::Idle,
            pending_direction: None,
            scores,
            speed: settings.initial_speed.millis(),
            status: GameStatus::NotStarted,
            death_reason: None,
        }
    }

    /// Throws away snake, food, score and speed and starts over on the same
    /// board. The high score carries over.
    pub fn restart(&mut self, rng: &mut SessionRng) {
        let (snake_head, food) = initialize_snake_and_food(self.board_size, &self.obstruction, rng);
        let mut scores = self.scores;
        scores.reset();

        self.snake = SnakeBody::new(snake_head);
        self.food = food;
        self.direction = Direction::Idle;
        self.pending_direction = None;
        self.scores = scores;
        self.speed = self.settings.initial_speed.millis();
        self.status = GameStatus::NotStarted;
        self.death_reason = None;
    }

    /// Queues a turn for the next tick. Reversals of the current heading are
    /// dropped, as is any input after game over.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.status == GameStatus::GameOver || !check_valid_move(self.direction, direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Advances the session by one step.
    pub fn tick(&mut self, rng: &mut SessionRng) -> Result<TickOutcome, SnakeError> {
        if let Some(reason) = self.death_reason {
            return Ok(TickOutcome::GameOver(reason));
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        if self.direction.is_idle() {
            return Ok(TickOutcome::Idle);
        }

        self.status = GameStatus::Running;

        let new_head = self.snake.head() + handle_direction(self.direction);

        if let Some(reason) = detect_collision(new_head, &self.snake, self.board_size, &self.obstruction) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(reason);
            log!(
                "Game over at {}: snake {}. Score: {}",
                new_head,
                reason,
                self.scores.score()
            );
            return Ok(TickOutcome::GameOver(reason));
        }

        if check_food_consumption(new_head, self.food) {
            self.snake.grow(new_head);
            self.food = food_placement(&self.snake, self.board_size, &self.obstruction, rng)?;

            // the speed curve looks at the score from before this meal
            let previous_score = self.scores.score();
            let score = self.scores.record_food();
            let speed = speed_increment(self.speed, previous_score);
            if speed != self.speed {
                log!("Speed changed from {}ms to {}ms", self.speed, speed);
                self.speed = speed;
            }

            log!(
                "Ate food at {}. Score: {}. Next food at {}",
                new_head,
                score,
                self.food
            );
            return Ok(TickOutcome::Ate { score, speed });
        }

        self.snake.advance(new_head);
        Ok(TickOutcome::Moved)
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            board_size: self.board_size,
            board: create_board(self.board_size as usize),
            snake: self.snake.to_vec(),
            food: self.food,
            obstruction: self.obstruction.cells().to_vec(),
            direction: self.direction,
            score: self.scores.score(),
            high_score: self.scores.high_score(),
            speed: self.speed,
            status: self.status,
            death_reason: self.death_reason,
        }
    }

    pub fn settings(&self) -> &SnakeSessionSettings {
        &self.settings
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    pub fn obstruction(&self) -> &Obstruction {
        &self.obstruction
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn food(&self) -> Coordinate {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.speed))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::types::{BoardSize, GameMap, SnakeSpeed};

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn classic_small() -> SnakeSessionSettings {
        SnakeSessionSettings::new(BoardSize::Small, GameMap::Classic, SnakeSpeed::Normal)
    }

    fn create_state(snake: &[Coordinate], food: Coordinate, walls: Vec<Coordinate>) -> SnakeGameState {
        SnakeGameState::with_layout(
            classic_small(),
            Obstruction::new(walls),
            SnakeBody::from_segments(snake.iter().copied()).unwrap(),
            food,
            ScoreBoard::new(None),
        )
    }

    #[test]
    fn test_new_places_snake_and_food_apart() {
        let mut rng = SessionRng::new(42);
        let settings = SnakeSessionSettings::new(BoardSize::Medium, GameMap::Square, SnakeSpeed::Fast);
        let state = SnakeGameState::new(settings, Some(9), &mut rng);
        assert_eq!(state.snake().len(), 1);
        assert_ne!(state.snake().head(), state.food());
        assert!(!state.obstruction().contains(&state.snake().head()));
        assert!(!state.obstruction().contains(&state.food()));
        assert_eq!(state.speed(), 160);
        assert_eq!(state.scores().high_score(), 9);
        assert_eq!(state.status(), GameStatus::NotStarted);
    }

    #[test]
    fn test_idle_tick_does_not_move() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(&[c(5, 5)], c(0, 0), vec![]);
        assert_eq!(state.tick(&mut rng).unwrap(), TickOutcome::Idle);
        assert_eq!(state.snake().head(), c(5, 5));
        assert_eq!(state.status(), GameStatus::NotStarted);
    }

    #[test]
    fn test_move_translates_body() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(&[c(5, 3), c(5, 4), c(5, 5)], c(0, 0), vec![]);
        assert!(state.set_direction(Direction::Right));
        assert_eq!(state.tick(&mut rng).unwrap(), TickOutcome::Moved);
        assert_eq!(state.snake().to_vec(), vec![c(5, 4), c(5, 5), c(5, 6)]);
        assert_eq!(state.status(), GameStatus::Running);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(&[c(5, 5)], c(4, 5), vec![]);
        state.set_direction(Direction::Up);
        let outcome = state.tick(&mut rng).unwrap();
        assert_eq!(outcome, TickOutcome::Ate { score: 1, speed: 200 });
        assert_eq!(state.snake().to_vec(), vec![c(5, 5), c(4, 5)]);
        assert_eq!(state.scores().score(), 1);
        assert_eq!(state.scores().high_score(), 1);
        assert!(!state.snake().iter().any(|cell| *cell == state.food()));
    }

    #[test]
    fn test_boundary_ends_game_and_freezes() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(&[c(0, 5)], c(9, 9), vec![]);
        state.set_direction(Direction::Up);
        assert_eq!(
            state.tick(&mut rng).unwrap(),
            TickOutcome::GameOver(DeathReason::BoundaryCollision)
        );
        let frozen = state.snapshot();
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(
            state.tick(&mut rng).unwrap(),
            TickOutcome::GameOver(DeathReason::BoundaryCollision)
        );
        assert_eq!(state.snapshot(), frozen);
        assert_eq!(state.snake().head(), c(0, 5));
    }

    #[test]
    fn test_wall_ends_game() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(&[c(5, 5)], c(9, 9), vec![c(5, 6)]);
        state.set_direction(Direction::Right);
        assert_eq!(
            state.tick(&mut rng).unwrap(),
            TickOutcome::GameOver(DeathReason::ObstructionCollision)
        );
        assert!(state.is_game_over());
    }

    #[test]
    fn test_running_into_body_ends_game() {
        let mut rng = SessionRng::new(42);
        // head at (4, 4) heading down into (5, 4), which is part of the body
        let body = [c(5, 3), c(5, 4), c(5, 5), c(4, 5), c(4, 4)];
        let mut state = create_state(&body, c(0, 0), vec![]);
        state.set_direction(Direction::Down);
        assert_eq!(
            state.tick(&mut rng).unwrap(),
            TickOutcome::GameOver(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(&[c(5, 4), c(5, 5)], c(0, 0), vec![]);
        state.set_direction(Direction::Right);
        state.tick(&mut rng).unwrap();
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.tick(&mut rng).unwrap(), TickOutcome::Moved);
        assert_eq!(state.snake().head(), c(5, 7));
    }

    #[test]
    fn test_latest_turn_wins_within_a_tick() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(&[c(5, 4), c(5, 5)], c(0, 0), vec![]);
        state.set_direction(Direction::Right);
        state.tick(&mut rng).unwrap();
        assert!(state.set_direction(Direction::Up));
        // still heading right, so left stays a reversal until the tick applies up
        assert!(!state.set_direction(Direction::Left));
        assert!(state.set_direction(Direction::Down));
        state.tick(&mut rng).unwrap();
        assert_eq!(state.direction(), Direction::Down);
        assert_eq!(state.snake().head(), c(6, 6));
    }

    #[test]
    fn test_speed_drops_on_meal_after_fifth_point() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(&[c(5, 5)], c(5, 6), vec![]);
        for _ in 0..5 {
            state.scores.record_food();
        }
        state.set_direction(Direction::Right);
        let outcome = state.tick(&mut rng).unwrap();
        assert_eq!(outcome, TickOutcome::Ate { score: 6, speed: 180 });
        assert_eq!(state.tick_interval(), Duration::from_millis(180));
    }

    #[test]
    fn test_restart_keeps_high_score() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(&[c(5, 5)], c(5, 6), vec![]);
        state.set_direction(Direction::Right);
        state.tick(&mut rng).unwrap();
        state.set_direction(Direction::Up);
        while !state.is_game_over() {
            state.tick(&mut rng).unwrap();
        }
        let best = state.scores().high_score();
        assert!(best >= 1);
        state.restart(&mut rng);
        assert_eq!(state.status(), GameStatus::NotStarted);
        assert_eq!(state.scores().score(), 0);
        assert_eq!(state.scores().high_score(), best);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.speed(), 200);
        assert_eq!(state.direction(), Direction::Idle);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut rng = SessionRng::new(42);
        let mut state = create_state(&[c(2, 2)], c(7, 7), vec![c(1, 1)]);
        state.set_direction(Direction::Down);
        state.tick(&mut rng).unwrap();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.board_size, 10);
        assert_eq!(snapshot.board.len(), 10);
        assert!(snapshot.board.iter().all(|row| row.len() == 10));
        assert_eq!(snapshot.board[1][2], 12);
        assert_eq!(snapshot.snake, vec![c(3, 2)]);
        assert_eq!(snapshot.food, c(7, 7));
        assert_eq!(snapshot.obstruction, vec![c(1, 1)]);
        assert_eq!(snapshot.direction, Direction::Down);
        assert_eq!(snapshot.status, GameStatus::Running);
        assert_eq!(snapshot.death_reason, None);
    }
}
