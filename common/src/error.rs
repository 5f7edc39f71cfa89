#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnakeError {
    InvalidRange { min: i32, max: i32 },
    UnsupportedBoardSize(u32),
    UnsupportedSpeed(u32),
    UnknownMap(String),
}

impl std::fmt::Display for SnakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnakeError::InvalidRange { min, max } => write!(
                f,
                "Minimum value must be less than or equal to maximum value, got min {} and max {}",
                min, max
            ),
            SnakeError::UnsupportedBoardSize(size) => {
                write!(f, "Board size must be one of 10, 20 or 30, got {}", size)
            }
            SnakeError::UnsupportedSpeed(speed) => {
                write!(f, "Initial speed must be one of 160, 200 or 260 ms, got {}", speed)
            }
            SnakeError::UnknownMap(name) => {
                write!(f, "Map must be one of classic, square or vertical, got '{}'", name)
            }
        }
    }
}

impl std::error::Error for SnakeError {}
