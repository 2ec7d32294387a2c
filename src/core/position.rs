//! Grid coordinates, directions and input commands.

use serde::{Deserialize, Serialize};

/// A cell on the grid. `x` grows rightwards, `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`. Saturates at the
    /// edges of `i32`, which always lie outside any grid.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid dimensions. Valid cells are `0..columns` × `0..rows`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridBounds {
    pub columns: i32,
    pub rows: i32,
}

impl GridBounds {
    #[must_use]
    pub const fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }

    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.columns && pos.y >= 0 && pos.y < self.rows
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::new(20, 20)
    }
}

/// One of the four unit moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(dx, dy)` for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Progress of `pos` along this direction; larger means further ahead.
    #[must_use]
    pub const fn progress(self, pos: Position) -> i32 {
        match self {
            Direction::Up => pos.y.saturating_neg(),
            Direction::Down => pos.y,
            Direction::Left => pos.x.saturating_neg(),
            Direction::Right => pos.x,
        }
    }
}

/// An input command: a move, or a neutral recheck that only re-runs the
/// rule pass and state evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Recheck,
}

impl Command {
    /// Parse a raw delta. Only unit axis steps and `(0, 0)` are valid.
    #[must_use]
    pub const fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, 0) => Some(Command::Recheck),
            (1, 0) => Some(Command::Move(Direction::Right)),
            (-1, 0) => Some(Command::Move(Direction::Left)),
            (0, 1) => Some(Command::Move(Direction::Down)),
            (0, -1) => Some(Command::Move(Direction::Up)),
            _ => None,
        }
    }
}
