//! Main AI engine for one side of an Othello game
//!
//! The engine binds a piece to a heuristic table built from the board's
//! geometry, then answers move requests with a fixed-depth alpha-beta search
//! over the caller's board. The board is borrowed only for the duration of a
//! request and handed back in the state it was received.
//!
//! # Example
//!
//! ```
//! use reversi::{AIEngine, Board, Piece, SearchConfig};
//!
//! let mut board = Board::standard(8).unwrap();
//! let engine = AIEngine::with_config(&board, Piece::Black, SearchConfig::default().with_depth(3))
//!     .unwrap();
//!
//! if let Some(pos) = engine.get_next_move(&mut board) {
//!     board.make_move(Piece::Black, pos);
//! }
//! assert_eq!(board.history().len(), 1);
//! ```

use std::time::Instant;

use log::{debug, warn};

use crate::board::{Board, Piece, Pos};
use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::eval::{evaluate, HeuristicTable};
use crate::search::{SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` if the engine's piece has no legal move
    pub best_move: Option<Pos>,
    /// Minimax value of the move from the engine's perspective
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of pruned nodes
    pub cutoffs: u64,
}

impl MoveResult {
    /// Create a result from alpha-beta search
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.stats.nodes,
            cutoffs: result.stats.cutoffs,
        }
    }
}

/// Automated player for one piece.
///
/// # Configuration
///
/// The engine can be configured with:
/// - Search depth in plies (default 9)
/// - Region weights for the positional table
pub struct AIEngine {
    piece: Piece,
    table: HeuristicTable,
    config: SearchConfig,
}

impl AIEngine {
    /// Create an engine for `piece` with the default configuration.
    ///
    /// The heuristic table is built from `board`'s geometry; the engine
    /// must only be used with boards of the same size.
    #[must_use]
    pub fn new(board: &Board, piece: Piece) -> Self {
        let config = SearchConfig::default();
        Self {
            piece,
            table: HeuristicTable::new(board, config.weights),
            config,
        }
    }

    /// Create an engine with a custom configuration.
    ///
    /// # Arguments
    ///
    /// * `board` - Board whose geometry the heuristic table is built from
    /// * `piece` - The piece this engine plays
    /// * `config` - Search depth and region weights
    pub fn with_config(
        board: &Board,
        piece: Piece,
        config: SearchConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            piece,
            table: HeuristicTable::new(board, config.weights),
            config,
        })
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn table(&self) -> &HeuristicTable {
        &self.table
    }

    /// Get the move to play for the engine's piece.
    ///
    /// # Returns
    ///
    /// The chosen move, or `None` if the engine's piece has no legal move.
    #[must_use]
    pub fn get_next_move(&self, board: &mut Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the move to play with search statistics.
    ///
    /// `board` is mutated during the search and restored before returning.
    pub fn get_move_with_stats(&self, board: &mut Board) -> MoveResult {
        debug_assert_eq!(
            board.size(),
            self.table.size(),
            "engine used on a board of a different size"
        );
        let start = Instant::now();

        let result = Searcher::new(&self.table, self.piece, self.config.depth).search(board);
        let result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);

        match result.best_move {
            Some(pos) => debug!(
                "{:?} plays {} (score {}, depth {}, {} nodes, {} cutoffs, {}ms)",
                self.piece,
                pos,
                result.score,
                result.depth,
                result.nodes,
                result.cutoffs,
                result.time_ms
            ),
            None => warn!("{:?} asked to move with no legal move", self.piece),
        }
        result
    }

    /// Static positional score of `board` for the engine's piece.
    #[must_use]
    pub fn evaluate_board(&self, board: &Board) -> i32 {
        evaluate(board, &self.table, self.piece)
    }
}
