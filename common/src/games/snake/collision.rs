use super::board::CellSet;
use super::types::{Coordinate, DeathReason};

pub fn check_collide_with_boundary(head: Coordinate, board_size: i32) -> bool {
    head.x < 0 || head.x >= board_size || head.y < 0 || head.y >= board_size
}

/// `body` is the body before the prospective head is appended, tail first.
/// Its last element is the current head and is not compared.
pub fn check_collide_with_self<'a, I>(head: Coordinate, body: I) -> bool
where
    I: IntoIterator<Item = &'a Coordinate>,
    I::IntoIter: ExactSizeIterator,
{
    let segments = body.into_iter();
    let len = segments.len();
    len > 1 && segments.take(len - 1).any(|cell| *cell == head)
}

pub fn check_collide_with_obstruction<C>(head: Coordinate, obstructed_cells: &C) -> bool
where
    C: CellSet + ?Sized,
{
    obstructed_cells.contains_cell(&head)
}

pub fn check_food_consumption(head: Coordinate, food: Coordinate) -> bool {
    head == food
}

pub fn check_game_over<'a, I, C>(
    head: Coordinate,
    body: I,
    board_size: i32,
    obstructed_cells: &C,
) -> bool
where
    I: IntoIterator<Item = &'a Coordinate>,
    I::IntoIter: ExactSizeIterator,
    C: CellSet + ?Sized,
{
    detect_collision(head, body, board_size, obstructed_cells).is_some()
}

/// Same checks as [`check_game_over`], reporting which one fired first.
/// Boundary is tested first, then self, then walls.
pub fn detect_collision<'a, I, C>(
    head: Coordinate,
    body: I,
    board_size: i32,
    obstructed_cells: &C,
) -> Option<DeathReason>
where
    I: IntoIterator<Item = &'a Coordinate>,
    I::IntoIter: ExactSizeIterator,
    C: CellSet + ?Sized,
{
    if check_collide_with_boundary(head, board_size) {
        Some(DeathReason::BoundaryCollision)
    } else if check_collide_with_self(head, body) {
        Some(DeathReason::SelfCollision)
    } else if check_collide_with_obstruction(head, obstructed_cells) {
        Some(DeathReason::ObstructionCollision)
    } else {
        None
    }
}
