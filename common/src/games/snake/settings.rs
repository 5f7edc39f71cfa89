use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::SnakeError;
use super::board::Obstruction;
use super::types::{BoardSize, GameMap, SnakeSpeed};

/// Fixed for the whole session once play starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeSessionSettings {
    pub board_size: BoardSize,
    pub map: GameMap,
    pub initial_speed: SnakeSpeed,
}

impl SnakeSessionSettings {
    pub fn new(board_size: BoardSize, map: GameMap, initial_speed: SnakeSpeed) -> Self {
        Self {
            board_size,
            map,
            initial_speed,
        }
    }

    pub fn from_raw(board_size: u32, map: &str, initial_speed_ms: u32) -> Result<Self, SnakeError> {
        Ok(Self {
            board_size: BoardSize::try_from(board_size)?,
            map: map.parse()?,
            initial_speed: SnakeSpeed::try_from(initial_speed_ms)?,
        })
    }

    pub fn obstruction(&self) -> Obstruction {
        Obstruction::for_map(self.map, self.board_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.initial_speed.millis()))
    }
}
