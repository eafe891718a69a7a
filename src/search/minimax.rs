//! Plain minimax without pruning
//!
//! Same move order, pass rule and scoring as [`Searcher`](super::Searcher),
//! but every branch is explored. Exponentially slower; it exists to check
//! that pruning never changes the chosen move or its value.

use crate::board::{Board, Piece, Pos};
use crate::eval::{evaluate, HeuristicTable, Score};

use super::alphabeta::terminal_score;
use super::{order_moves, MoveGuard};

/// Exhaustive search to `depth` plies with `piece` to move.
///
/// # Returns
/// The first move reaching the best value (in move order) and that value.
/// The move is `None` at depth 0, in a finished game, or when `piece` must pass.
pub fn minimax(
    board: &mut Board,
    table: &HeuristicTable,
    piece: Piece,
    depth: u8,
) -> (Option<Pos>, i32) {
    if depth == 0 || board.game_over() {
        return (None, value(board, table, piece, 0, true));
    }
    let moves = order_moves(board, table, piece);
    if moves.is_empty() {
        return (None, evaluate(board, table, piece));
    }

    let mut best_move = None;
    let mut best_score = Score::NEG_INF;
    for mov in moves {
        let score = {
            let mut child = MoveGuard::new(board, piece, mov);
            value(&mut child, table, piece, depth - 1, false)
        };
        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(mov);
        }
    }
    (best_move, best_score)
}

fn value(board: &mut Board, table: &HeuristicTable, piece: Piece, depth: u8, maximizing: bool) -> i32 {
    if board.game_over() {
        return terminal_score(board, piece);
    }
    if depth == 0 {
        return evaluate(board, table, piece);
    }

    let mover = if maximizing { piece } else { piece.opponent() };
    let moves = order_moves(board, table, mover);
    if moves.is_empty() {
        return value(board, table, piece, depth, !maximizing);
    }

    let mut best = if maximizing { Score::NEG_INF } else { Score::INF };
    for mov in moves {
        let score = {
            let mut child = MoveGuard::new(board, mover, mov);
            value(&mut child, table, piece, depth - 1, !maximizing)
        };
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}
