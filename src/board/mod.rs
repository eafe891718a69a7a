//! Board representation for Othello/Reversi

pub mod board;


// Re-exports
pub use board::{Board, Flip, MoveRecord};

/// Standard board size (8x8)
pub const DEFAULT_SIZE: usize = 8;

/// Largest supported board dimension
pub const MAX_BOARD_SIZE: usize = 26;

/// The 8 scan directions as (dx, dy), in the order flips are applied and recorded
pub const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// One of the two playable pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Piece {
    Black,
    White,
}

impl Piece {
    /// Get the other piece
    #[inline]
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Black => Piece::White,
            Piece::White => Piece::Black,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Piece::Black => 0,
            Piece::White => 1,
        }
    }
}

/// Value read from a board coordinate.
///
/// `OutOfBound` is never stored in the grid; it is what [`Board::get`]
/// answers for any coordinate outside it, which lets capture scans stop at
/// the edge without a separate bounds test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Piece(Piece),
    OutOfBound,
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn is_out_of_bound(self) -> bool {
        self == Cell::OutOfBound
    }

    /// The piece occupying the cell, if any
    #[inline]
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Piece(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Option<Piece>> for Cell {
    #[inline]
    fn from(slot: Option<Piece>) -> Self {
        match slot {
            Some(p) => Cell::Piece(p),
            None => Cell::Empty,
        }
    }
}

/// Position on the board. `x` is the column, `y` the row; (0, 0) is the upper left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!((x as usize) < MAX_BOARD_SIZE && (y as usize) < MAX_BOARD_SIZE);
        Self { x, y }
    }

    /// Step `steps` cells along `(dx, dy)`, as signed coordinates
    #[inline]
    pub fn offset(self, (dx, dy): (i32, i32), steps: i32) -> (i32, i32) {
        (i32::from(self.x) + dx * steps, i32::from(self.y) + dy * steps)
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.y as usize * size + self.x as usize
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major: top row first, left to right within a row
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}
