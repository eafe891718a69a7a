//! Move ordering by destination cell weight
//!
//! Ordering only affects how much alpha-beta prunes, never the value found.
//! Equal weights keep row-major order, so results are reproducible.

use crate::board::{Board, Piece, Pos};
use crate::eval::HeuristicTable;
use crate::rules::legal_moves;

/// Legal moves for `piece`, highest destination weight first.
pub fn order_moves(board: &Board, table: &HeuristicTable, piece: Piece) -> Vec<Pos> {
    let mut moves = legal_moves(board, piece);
    // Stable sort: ties stay row-major
    moves.sort_by_key(|&pos| std::cmp::Reverse(table.weight_at(pos)));
    moves
}
