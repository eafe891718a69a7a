//! Fixed-depth alpha-beta search
//!
//! Minimax with alpha-beta pruning over a single board that is mutated in
//! place: each candidate is applied through a [`MoveGuard`], searched, and
//! undone when the guard drops.
//!
//! # Features
//!
//! - Moves ordered by destination weight for earlier cutoffs
//! - A side with no legal move passes without consuming depth; the
//!   `game_over` check at the top of every node ends mutual passing
//! - Finished games score [`Score::WIN`] / [`Score::LOSS`] / 0, outside the
//!   range of any positional evaluation
//!
//! # Example
//!
//! ```
//! use reversi::board::{Board, Piece};
//! use reversi::eval::{HeuristicTable, RegionWeights};
//! use reversi::search::Searcher;
//!
//! let mut board = Board::standard(8).unwrap();
//! let table = HeuristicTable::new(&board, RegionWeights::default());
//!
//! let result = Searcher::new(&table, Piece::Black, 3).search(&mut board);
//! assert!(result.best_move.is_some());
//! ```

use log::trace;

use crate::board::{Board, Piece, Pos};
use crate::eval::{evaluate, HeuristicTable, Score};

use super::{order_moves, MoveGuard};

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Nodes where the remaining candidates were pruned
    pub cutoffs: u64,
    /// Nodes where the side to move had to pass
    pub passes: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` when the searching side has no legal move
    pub best_move: Option<Pos>,
    /// Minimax value of the best move
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    pub stats: SearchStats,
}

/// Score of a finished game for `piece`.
#[inline]
pub fn terminal_score(board: &Board, piece: Piece) -> i32 {
    let own = board.count(piece);
    let other = board.count(piece.opponent());
    match own.cmp(&other) {
        std::cmp::Ordering::Greater => Score::WIN,
        std::cmp::Ordering::Less => Score::LOSS,
        std::cmp::Ordering::Equal => 0,
    }
}

/// Alpha-beta searcher for one piece over one heuristic table.
///
/// The searcher holds no board; it borrows one mutably for the duration of
/// [`search`](Searcher::search) and returns it unchanged.
pub struct Searcher<'t> {
    table: &'t HeuristicTable,
    piece: Piece,
    depth: u8,
    stats: SearchStats,
}

impl<'t> Searcher<'t> {
    /// # Arguments
    ///
    /// * `table` - Heuristic table for the board geometry being searched
    /// * `piece` - The maximizing side
    /// * `depth` - Plies to search; 0 scores the position without moving
    #[must_use]
    pub fn new(table: &'t HeuristicTable, piece: Piece, depth: u8) -> Self {
        Self {
            table,
            piece,
            depth,
            stats: SearchStats::default(),
        }
    }

    /// Search the current position with `piece` to move.
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        self.stats = SearchStats::default();
        self.stats.nodes += 1;

        if board.game_over() {
            return self.no_move(terminal_score(board, self.piece));
        }
        if self.depth == 0 {
            return self.no_move(evaluate(board, self.table, self.piece));
        }

        let moves = order_moves(board, self.table, self.piece);
        if moves.is_empty() {
            trace!("{:?} has no legal move at the root", self.piece);
            self.stats.passes += 1;
            return self.no_move(evaluate(board, self.table, self.piece));
        }

        let mut alpha = Score::NEG_INF;
        let beta = Score::INF;
        let mut best_score = Score::NEG_INF;
        let mut best_move = None;

        for mov in moves {
            let score = {
                let mut child = MoveGuard::new(board, self.piece, mov);
                self.alpha_beta(&mut child, self.depth - 1, alpha, beta, false)
            };

            // Strict improvement: the first of several equal moves is kept
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            depth: self.depth,
            stats: self.stats,
        }
    }

    fn no_move(&self, score: i32) -> SearchResult {
        SearchResult {
            best_move: None,
            score,
            depth: self.depth,
            stats: self.stats,
        }
    }

    /// Value of the current node.
    ///
    /// `maximizing` is true when the searching piece is to move.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if board.game_over() {
            return terminal_score(board, self.piece);
        }
        if depth == 0 {
            return evaluate(board, self.table, self.piece);
        }

        let mover = if maximizing {
            self.piece
        } else {
            self.piece.opponent()
        };
        let moves = order_moves(board, self.table, mover);
        if moves.is_empty() {
            // Pass: same depth, other side to move
            self.stats.passes += 1;
            return self.alpha_beta(board, depth, alpha, beta, !maximizing);
        }

        let mut best = if maximizing {
            Score::NEG_INF
        } else {
            Score::INF
        };

        for mov in moves {
            let score = {
                let mut child = MoveGuard::new(board, mover, mov);
                self.alpha_beta(&mut child, depth - 1, alpha, beta, !maximizing)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::RegionWeights;

    fn table_for(board: &Board) -> HeuristicTable {
        HeuristicTable::new(board, RegionWeights::default())
    }

    #[test]
    fn test_search_opening() {
        let mut board = Board::standard(8).unwrap();
        let table = table_for(&board);

        let result = Searcher::new(&table, Piece::Black, 3).search(&mut board);
        let best = result.best_move.unwrap();
        assert!(board.is_legal_move(Piece::Black, best));
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::standard(8).unwrap();
        board.make_move(Piece::Black, Pos::new(3, 2));
        let before = board.clone();
        let table = table_for(&board);

        let _ = Searcher::new(&table, Piece::White, 4).search(&mut board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_takes_corner() {
        let mut board = Board::new(8);
        board.place(Piece::Black, Pos::new(2, 2));
        board.place(Piece::White, Pos::new(1, 1));
        board.place(Piece::White, Pos::new(5, 4));
        board.place(Piece::Black, Pos::new(6, 4));
        let table = table_for(&board);

        let result = Searcher::new(&table, Piece::Black, 1).search(&mut board);
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
        // Black: 60 - 5 + 6 - 2, White: 6
        assert_eq!(result.score, 53);
    }

    #[test]
    fn test_search_winning_score() {
        let mut board = Board::new(8);
        // B W _ : taking the last white piece ends the game
        board.place(Piece::Black, Pos::new(0, 0));
        board.place(Piece::White, Pos::new(1, 0));
        let table = table_for(&board);

        let result = Searcher::new(&table, Piece::Black, 3).search(&mut board);
        assert_eq!(result.best_move, Some(Pos::new(2, 0)));
        assert_eq!(result.score, Score::WIN);
    }

    #[test]
    fn test_pass_keeps_depth() {
        let mut board = Board::new(8);
        // White hugs the black corner and can never move. After Black takes
        // one white piece White must pass, and Black takes the other.
        board.place(Piece::Black, Pos::new(0, 0));
        board.place(Piece::White, Pos::new(1, 0));
        board.place(Piece::White, Pos::new(0, 1));
        let table = table_for(&board);

        assert!(!board.game_over());
        assert!(board.legal_moves(Piece::White).is_empty());

        // Depth 1 stops at the first reply and scores the position
        let shallow = Searcher::new(&table, Piece::Black, 1).search(&mut board);
        assert!(shallow.score < Score::WIN);

        // Depth 2 reaches the finished game only if the pass is free
        let result = Searcher::new(&table, Piece::Black, 2).search(&mut board);
        assert_eq!(result.score, Score::WIN);
        assert_eq!(result.best_move, Some(Pos::new(2, 0)));
        assert!(result.stats.passes > 0);
    }

    #[test]
    fn test_no_legal_move() {
        let mut board = Board::new(8);
        board.place(Piece::Black, Pos::new(0, 0));
        board.place(Piece::White, Pos::new(1, 0));
        let table = table_for(&board);

        let result = Searcher::new(&table, Piece::White, 3).search(&mut board);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_zero_depth_scores_position() {
        let mut board = Board::standard(4).unwrap();
        let table = table_for(&board);
        let before = board.clone();

        let result = Searcher::new(&table, Piece::Black, 0).search(&mut board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&board, &table, Piece::Black));
        assert_eq!(result.depth, 0);
        assert_eq!(result.stats.nodes, 1);
        assert_eq!(board, before);
    }

    #[test]
    fn test_root_pass_counted() {
        let mut board = Board::new(8);
        board.place(Piece::Black, Pos::new(0, 0));
        board.place(Piece::White, Pos::new(1, 0));
        board.place(Piece::White, Pos::new(0, 1));
        let table = table_for(&board);

        let result = Searcher::new(&table, Piece::White, 3).search(&mut board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.stats.passes, 1);
        assert_eq!(result.score, evaluate(&board, &table, Piece::White));
    }

    #[test]
    fn test_finished_game_at_root() {
        let mut board = Board::new(4);
        board.place(Piece::Black, Pos::new(0, 0));
        let table = table_for(&board);

        let result = Searcher::new(&table, Piece::Black, 3).search(&mut board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, Score::WIN);
    }

    #[test]
    fn test_terminal_score() {
        let mut board = Board::new(4);
        board.place(Piece::Black, Pos::new(0, 0));
        assert_eq!(terminal_score(&board, Piece::Black), Score::WIN);
        assert_eq!(terminal_score(&board, Piece::White), Score::LOSS);

        board.place(Piece::White, Pos::new(3, 3));
        assert_eq!(terminal_score(&board, Piece::Black), 0);
    }

    #[test]
    fn test_search_node_count() {
        let mut board = Board::standard(8).unwrap();
        let table = table_for(&board);

        let shallow = Searcher::new(&table, Piece::Black, 2).search(&mut board);
        let deep = Searcher::new(&table, Piece::Black, 4).search(&mut board);
        assert!(shallow.stats.nodes > 1);
        assert!(deep.stats.nodes > shallow.stats.nodes);
    }
}
