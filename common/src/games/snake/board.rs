use std::collections::{HashSet, VecDeque};

use super::types::{BoardSize, Coordinate, GameMap};

/// Anything that can answer "is this cell taken?".
pub trait CellSet {
    fn contains_cell(&self, cell: &Coordinate) -> bool;
}

impl CellSet for [Coordinate] {
    fn contains_cell(&self, cell: &Coordinate) -> bool {
        self.contains(cell)
    }
}

impl CellSet for Vec<Coordinate> {
    fn contains_cell(&self, cell: &Coordinate) -> bool {
        self.contains(cell)
    }
}

impl<const N: usize> CellSet for [Coordinate; N] {
    fn contains_cell(&self, cell: &Coordinate) -> bool {
        self.contains(cell)
    }
}

impl CellSet for VecDeque<Coordinate> {
    fn contains_cell(&self, cell: &Coordinate) -> bool {
        self.contains(cell)
    }
}

impl CellSet for HashSet<Coordinate> {
    fn contains_cell(&self, cell: &Coordinate) -> bool {
        self.contains(cell)
    }
}

/// Static wall cells for one session. Keeps generation order for rendering
/// and a hash set for collision lookups.
#[derive(Clone, Debug, Default)]
pub struct Obstruction {
    cells: Vec<Coordinate>,
    cell_set: HashSet<Coordinate>,
}

impl Obstruction {
    pub fn new(cells: Vec<Coordinate>) -> Self {
        let cell_set = cells.iter().copied().collect();
        Self { cells, cell_set }
    }

    pub fn for_map(map: GameMap, board_size: BoardSize) -> Self {
        match map {
            GameMap::Classic => Self::default(),
            GameMap::Square => Self::new(square_map(board_size)),
            GameMap::Vertical => Self::new(vertical_map(board_size)),
        }
    }

    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn contains(&self, cell: &Coordinate) -> bool {
        self.cell_set.contains(cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl CellSet for Obstruction {
    fn contains_cell(&self, cell: &Coordinate) -> bool {
        self.contains(cell)
    }
}

/// Row-major grid of cell labels for laying out the renderer's grid.
/// Label of `(row, col)` is `row * size + col`, unique per board.
pub fn create_board(board_size: usize) -> Vec<Vec<u32>> {
    (0..board_size)
        .map(|row| {
            (0..board_size)
                .map(|col| (row * board_size + col) as u32)
                .collect()
        })
        .collect()
}

/// Traces the top and bottom rows between `start_x..=end_x`, then the left
/// and right columns between `left_y..=right_y`.
pub fn generate_square_map(
    start_x: i32,
    end_x: i32,
    top_y: i32,
    bottom_y: i32,
    left_y: i32,
    right_y: i32,
) -> Vec<Coordinate> {
    let mut borders = Vec::new();

    for x in start_x..=end_x {
        borders.push(Coordinate::new(x, top_y));
        borders.push(Coordinate::new(x, bottom_y));
    }

    for y in left_y..=right_y {
        borders.push(Coordinate::new(start_x, y));
        borders.push(Coordinate::new(end_x, y));
    }

    borders
}

/// Evenly spaced full-length bars at `y` positions between `start_y` and
/// `end_y`. The line count is floored at 2 and may be fractional; a fractional
/// count runs one extra bar past the last whole one, exactly like counting
/// `i` upward while `i < number_of_lines`.
pub fn generate_vertical_map(
    start_x: i32,
    end_x: i32,
    start_y: i32,
    end_y: i32,
    number_of_lines: f64,
) -> Vec<Coordinate> {
    let mut coordinates = Vec::new();

    let number_of_lines = number_of_lines.max(2.0);
    let gap = f64::from(end_y - start_y) / (number_of_lines - 1.0);

    let mut i = 0u32;
    while f64::from(i) < number_of_lines {
        let y = round_half_up(f64::from(start_y) + f64::from(i) * gap);
        for x in start_x..=end_x {
            coordinates.push(Coordinate::new(x, y));
        }
        i += 1;
    }

    coordinates
}

// Halves round toward positive infinity.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

fn border_padding(board_size: BoardSize) -> i32 {
    board_size.cells() / 10
}

pub fn square_map(board_size: BoardSize) -> Vec<Coordinate> {
    let size = board_size.cells();
    let padding = border_padding(board_size);

    let start_x = padding + 1;
    let end_x = size - start_x - 1;

    let top_y = padding;
    let bottom_y = size - padding - 1;

    let left_y = start_x + padding;
    let right_y = end_x - padding;

    generate_square_map(start_x, end_x, top_y, bottom_y, left_y, right_y)
}

pub fn vertical_map(board_size: BoardSize) -> Vec<Coordinate> {
    let size = board_size.cells();
    let padding = border_padding(board_size);

    let start_x = padding + 1;
    let end_x = size - start_x - 1;

    let start_y = padding;
    let end_y = size - padding - 1;

    let number_of_lines = f64::from(size - padding * 2) / f64::from(padding * 2);

    generate_vertical_map(start_x, end_x, start_y, end_y, number_of_lines)
}
