use std::collections::VecDeque;

use super::board::CellSet;
use super::types::Coordinate;

/// Ordered snake segments. The front is the tail, the back is the head.
/// Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeBody {
    segments: VecDeque<Coordinate>,
}

impl SnakeBody {
    pub fn new(head: Coordinate) -> Self {
        let mut segments = VecDeque::new();
        segments.push_back(head);
        Self { segments }
    }

    /// Builds a body from tail to head. Returns `None` for an empty sequence.
    pub fn from_segments<I>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let segments: VecDeque<Coordinate> = segments.into_iter().collect();
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn head(&self) -> Coordinate {
        self.segments[self.segments.len() - 1]
    }

    pub fn tail(&self) -> Coordinate {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Coordinate> {
        self.segments.iter()
    }

    pub fn to_vec(&self) -> Vec<Coordinate> {
        self.segments.iter().copied().collect()
    }

    /// Appends a new head and keeps the tail: the snake grows by one.
    pub fn grow(&mut self, new_head: Coordinate) {
        self.segments.push_back(new_head);
    }

    /// Appends a new head and drops the tail: the length stays the same.
    /// Returns the vacated tail cell.
    pub fn advance(&mut self, new_head: Coordinate) -> Coordinate {
        self.segments.push_back(new_head);
        match self.segments.pop_front() {
            Some(tail) => tail,
            None => new_head,
        }
    }
}

impl CellSet for SnakeBody {
    fn contains_cell(&self, cell: &Coordinate) -> bool {
        self.segments.contains(cell)
    }
}

impl<'a> IntoIterator for &'a SnakeBody {
    type Item = &'a Coordinate;
    type IntoIter = std::collections::vec_deque::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
