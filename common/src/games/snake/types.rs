use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SnakeError;

/// A board cell. `x` is the row and `y` the column, both 0-indexed.
///
/// Signed so that a prospective head one step past the edge is representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// `Idle` is the pre-game state: the snake holds still until a real direction is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Idle,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Idle,
    ];

    pub const MOVING: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Direction::Idle)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BoardSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Small, BoardSize::Medium, BoardSize::Large];

    /// Cells per side.
    pub fn cells(&self) -> i32 {
        match self {
            BoardSize::Small => 10,
            BoardSize::Medium => 20,
            BoardSize::Large => 30,
        }
    }
}

impl TryFrom<u32> for BoardSize {
    type Error = SnakeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(BoardSize::Small),
            20 => Ok(BoardSize::Medium),
            30 => Ok(BoardSize::Large),
            other => Err(SnakeError::UnsupportedBoardSize(other)),
        }
    }
}

impl From<BoardSize> for u32 {
    fn from(size: BoardSize) -> u32 {
        size.cells() as u32
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMap {
    #[default]
    Classic,
    Square,
    Vertical,
}

impl GameMap {
    pub const ALL: [GameMap; 3] = [GameMap::Classic, GameMap::Square, GameMap::Vertical];

    pub fn name(&self) -> &'static str {
        match self {
            GameMap::Classic => "classic",
            GameMap::Square => "square",
            GameMap::Vertical => "vertical",
        }
    }
}

impl FromStr for GameMap {
    type Err = SnakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(GameMap::Classic),
            "square" => Ok(GameMap::Square),
            "vertical" => Ok(GameMap::Vertical),
            _ => Err(SnakeError::UnknownMap(s.to_string())),
        }
    }
}

impl fmt::Display for GameMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Initial milliseconds per tick. Lower is faster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SnakeSpeed {
    Fast,
    #[default]
    Normal,
    Slow,
}

impl SnakeSpeed {
    pub const ALL: [SnakeSpeed; 3] = [SnakeSpeed::Fast, SnakeSpeed::Normal, SnakeSpeed::Slow];

    pub fn millis(&self) -> u32 {
        match self {
            SnakeSpeed::Fast => 160,
            SnakeSpeed::Normal => 200,
            SnakeSpeed::Slow => 260,
        }
    }
}

impl TryFrom<u32> for SnakeSpeed {
    type Error = SnakeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            160 => Ok(SnakeSpeed::Fast),
            200 => Ok(SnakeSpeed::Normal),
            260 => Ok(SnakeSpeed::Slow),
            other => Err(SnakeError::UnsupportedSpeed(other)),
        }
    }
}

impl From<SnakeSpeed> for u32 {
    fn from(speed: SnakeSpeed) -> u32 {
        speed.millis()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Running,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    BoundaryCollision,
    SelfCollision,
    ObstructionCollision,
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathReason::BoundaryCollision => f.write_str("hit the board edge"),
            DeathReason::SelfCollision => f.write_str("ran into itself"),
            DeathReason::ObstructionCollision => f.write_str("hit a wall"),
        }
    }
}
