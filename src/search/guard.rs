//! Scoped move application
//!
//! The search mutates one board in place. A [`MoveGuard`] applies a move on
//! creation and undoes it when dropped, so every exit from a search frame,
//! including a cutoff `break` or an early `return`, leaves the board as it
//! found it.

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Piece, Pos};

/// Exclusive borrow of a board with one move applied.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    /// History depth right after the move, checked on release
    depth: usize,
}

impl<'a> MoveGuard<'a> {
    /// Apply `piece` at `pos`. The move must be legal.
    #[inline]
    pub fn new(board: &'a mut Board, piece: Piece, pos: Pos) -> Self {
        board.make_move(piece, pos);
        let depth = board.history().len();
        Self { board, depth }
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    #[inline]
    fn drop(&mut self) {
        debug_assert_eq!(
            self.board.history().len(),
            self.depth,
            "unbalanced make/undo under a move guard"
        );
        self.board.undo();
    }
}
