//! Error types for the checked board and engine surfaces
//!
//! The search hot path never produces these: it only issues legal moves and
//! balanced apply/undo pairs. They exist for drivers that accept moves or
//! configuration from outside the crate.

use thiserror::Error;

use crate::board::{Piece, Pos};

/// Errors raised by the checked board operations (`play`, `try_undo`, `try_new`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside `[0, size)` on either axis
    #[error("position ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    /// Target cell already holds a piece
    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    /// Empty cell, but no direction forms a sandwich
    #[error("{piece:?} cannot move to {pos}: no pieces would be flipped")]
    IllegalMove { piece: Piece, pos: Pos },

    /// Undo requested with no recorded move
    #[error("no move to undo")]
    EmptyHistory,

    /// Board dimension of zero or beyond `MAX_BOARD_SIZE`
    #[error("invalid board size {0}")]
    InvalidSize(usize),
}

/// Errors raised when validating a [`SearchConfig`](crate::config::SearchConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("search depth {0} exceeds the maximum of {max}", max = crate::config::MAX_DEPTH)]
    DepthTooLarge(u8),

    /// A full board at this weight could reach the terminal scores
    #[error("region weight magnitude {0} is too large to stay below a won game")]
    WeightsTooLarge(i32),
}
