use crate::SnakeError;
use crate::games::SessionRng;

use super::board::CellSet;
use super::types::Coordinate;

/// Sampling budget for [`food_placement`].
pub const FOOD_PLACEMENT_MAX_RETRIES: usize = 100;

/// Every cell of a `board_size` square not in `occupied`, row by row.
pub fn available_coordinates<C>(board_size: i32, occupied: &C) -> Vec<Coordinate>
where
    C: CellSet + ?Sized,
{
    let mut available = Vec::new();
    for x in 0..board_size {
        for y in 0..board_size {
            let cell = Coordinate::new(x, y);
            if !occupied.contains_cell(&cell) {
                available.push(cell);
            }
        }
    }
    available
}

/// Uniform pick among the free cells, or `None` when the board is full.
pub fn get_random_available_coordinate<C>(
    board_size: i32,
    occupied: &C,
    rng: &mut SessionRng,
) -> Option<Coordinate>
where
    C: CellSet + ?Sized,
{
    let available = available_coordinates(board_size, occupied);
    pick(&available, rng)
}

fn pick(available: &[Coordinate], rng: &mut SessionRng) -> Option<Coordinate> {
    if available.is_empty() {
        return None;
    }
    Some(available[rng.random_range(0..available.len())])
}

/// Samples independent rows and columns until the cell misses both the snake
/// and the walls. After [`FOOD_PLACEMENT_MAX_RETRIES`] resamples the last draw
/// is returned as is, so a nearly full board can rarely put food on an
/// occupied cell.
pub fn food_placement<S, B>(
    snake_body: &S,
    board_size: i32,
    blocked_objects: &B,
    rng: &mut SessionRng,
) -> Result<Coordinate, SnakeError>
where
    S: CellSet + ?Sized,
    B: CellSet + ?Sized,
{
    let max = board_size - 1;
    let mut food = Coordinate::new(rng.random_int(0, max)?, rng.random_int(0, max)?);

    let mut attempts = 0;
    while (snake_body.contains_cell(&food) || blocked_objects.contains_cell(&food))
        && attempts < FOOD_PLACEMENT_MAX_RETRIES
    {
        food = Coordinate::new(rng.random_int(0, max)?, rng.random_int(0, max)?);
        attempts += 1;
    }

    Ok(food)
}

pub fn default_snake_start() -> Coordinate {
    Coordinate::new(0, 0)
}

pub fn default_food_start(board_size: i32) -> Coordinate {
    Coordinate::new(board_size - 1, board_size - 2)
}

/// Picks the opening snake head and food, each uniformly among cells free of
/// walls, redrawing both until they differ. A board with no free cell falls
/// back to the fixed defaults. A board with exactly one free cell gives it to
/// the snake and puts the food on a default cell.
pub fn initialize_snake_and_food<C>(
    board_size: i32,
    obstruction: &C,
    rng: &mut SessionRng,
) -> (Coordinate, Coordinate)
where
    C: CellSet + ?Sized,
{
    let snake_fallback = default_snake_start();
    let food_fallback = default_food_start(board_size);

    let available = available_coordinates(board_size, obstruction);

    match available.len() {
        0 => (snake_fallback, food_fallback),
        1 => {
            let snake = available[0];
            let food = if snake == food_fallback {
                snake_fallback
            } else {
                food_fallback
            };
            (snake, food)
        }
        _ => loop {
            let snake = pick(&available, rng).unwrap_or(snake_fallback);
            let food = pick(&available, rng).unwrap_or(food_fallback);
            if snake != food {
                break (snake, food);
            }
        },
    }
}
