use super::types::{Coordinate, Direction};

/// Unit step for a direction; `Idle` does not move.
pub fn handle_direction(direction: Direction) -> Coordinate {
    match direction {
        Direction::Up => Coordinate::new(-1, 0),
        Direction::Down => Coordinate::new(1, 0),
        Direction::Left => Coordinate::new(0, -1),
        Direction::Right => Coordinate::new(0, 1),
        Direction::Idle => Coordinate::new(0, 0),
    }
}

/// Rejects only the four exact reversals.
pub fn check_valid_move(current: Direction, attempted: Direction) -> bool {
    !current.is_opposite(&attempted)
}

/// Keyboard tokens recognised as steering input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
}

impl ControlKey {
    pub const ALL: [ControlKey; 8] = [
        ControlKey::ArrowUp,
        ControlKey::W,
        ControlKey::ArrowDown,
        ControlKey::S,
        ControlKey::ArrowLeft,
        ControlKey::A,
        ControlKey::ArrowRight,
        ControlKey::D,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            ControlKey::ArrowUp => "arrowup",
            ControlKey::ArrowDown => "arrowdown",
            ControlKey::ArrowLeft => "arrowleft",
            ControlKey::ArrowRight => "arrowright",
            ControlKey::W => "w",
            ControlKey::A => "a",
            ControlKey::S => "s",
            ControlKey::D => "d",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            ControlKey::ArrowUp | ControlKey::W => Direction::Up,
            ControlKey::ArrowDown | ControlKey::S => Direction::Down,
            ControlKey::ArrowLeft | ControlKey::A => Direction::Left,
            ControlKey::ArrowRight | ControlKey::D => Direction::Right,
        }
    }

    /// Case-insensitive lookup.
    pub fn from_token(token: &str) -> Option<ControlKey> {
        let token = token.to_ascii_lowercase();
        Self::ALL.into_iter().find(|key| key.token() == token)
    }
}

pub fn is_valid_key(token: &str) -> bool {
    ControlKey::from_token(token).is_some()
}

pub fn resolve_direction(token: &str) -> Option<Direction> {
    ControlKey::from_token(token).map(|key| key.direction())
}

pub fn is_valid_transition(current: Direction, next: Direction) -> bool {
    check_valid_move(current, next)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Direction),
    TogglePause,
}

/// Steering keys become turns, the space bar toggles pause.
pub fn parse_input(token: &str) -> Option<InputCommand> {
    if token == " " || token.eq_ignore_ascii_case("space") {
        return Some(InputCommand::TogglePause);
    }
    resolve_direction(token).map(InputCommand::Turn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_direction_deltas() {
        assert_eq!(handle_direction(Direction::Up), Coordinate::new(-1, 0));
        assert_eq!(handle_direction(Direction::Down), Coordinate::new(1, 0));
        assert_eq!(handle_direction(Direction::Left), Coordinate::new(0, -1));
        assert_eq!(handle_direction(Direction::Right), Coordinate::new(0, 1));
        assert_eq!(handle_direction(Direction::Idle), Coordinate::new(0, 0));
    }

    #[test]
    fn test_handle_direction_unit_steps() {
        for direction in Direction::MOVING {
            let delta = handle_direction(direction);
            assert_eq!(delta.x.abs() + delta.y.abs(), 1);
            assert_eq!(handle_direction(direction), delta);
        }
    }

    #[test]
    fn test_reversals_rejected() {
        assert!(!check_valid_move(Direction::Up, Direction::Down));
        assert!(!check_valid_move(Direction::Down, Direction::Up));
        assert!(!check_valid_move(Direction::Left, Direction::Right));
        assert!(!check_valid_move(Direction::Right, Direction::Left));
    }

    #[test]
    fn test_all_other_transitions_accepted() {
        let mut accepted = 0;
        for current in Direction::ALL {
            for attempted in Direction::ALL {
                if check_valid_move(current, attempted) {
                    accepted += 1;
                }
            }
        }
        assert_eq!(accepted, 21);
        assert!(check_valid_move(Direction::Up, Direction::Up));
        assert!(check_valid_move(Direction::Left, Direction::Idle));
        assert!(check_valid_move(Direction::Idle, Direction::Down));
    }

    #[test]
    fn test_key_lookup_is_case_insensitive() {
        assert_eq!(resolve_direction("ArrowUp"), Some(Direction::Up));
        assert_eq!(resolve_direction("W"), Some(Direction::Up));
        assert_eq!(resolve_direction("s"), Some(Direction::Down));
        assert_eq!(resolve_direction("ARROWLEFT"), Some(Direction::Left));
        assert_eq!(resolve_direction("d"), Some(Direction::Right));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(!is_valid_key("q"));
        assert!(!is_valid_key("arrow"));
        assert!(!is_valid_key(""));
        assert_eq!(resolve_direction("enter"), None);
        assert!(is_valid_key("a"));
    }

    #[test]
    fn test_parse_input_pause_and_turns() {
        assert_eq!(parse_input(" "), Some(InputCommand::TogglePause));
        assert_eq!(parse_input("Space"), Some(InputCommand::TogglePause));
        assert_eq!(parse_input("arrowright"), Some(InputCommand::Turn(Direction::Right)));
        assert_eq!(parse_input("x"), None);
    }

    #[test]
    fn test_transition_gate_matches_valid_move() {
        for current in Direction::ALL {
            for next in Direction::ALL {
                assert_eq!(is_valid_transition(current, next), check_valid_move(current, next));
            }
        }
    }
}
