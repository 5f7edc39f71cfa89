pub mod board;
mod bot_controller;
pub mod collision;
mod game_state;
pub mod movement;
pub mod placement;
pub mod progression;
mod score;
mod session;
mod settings;
mod snake;
mod types;

pub use board::{CellSet, Obstruction};
pub use bot_controller::{BotController, BotType};
pub use game_state::{SnakeGameState, SnakeSnapshot, TickOutcome};
pub use movement::{ControlKey, InputCommand, parse_input};
pub use score::ScoreBoard;
pub use session::{GameOverSummary, SessionCommand, SnakeSession, SnakeSessionState};
pub use settings::SnakeSessionSettings;
pub use snake::SnakeBody;
pub use types::{BoardSize, Coordinate, DeathReason, Direction, GameMap, GameStatus, SnakeSpeed};
