//! Othello/Reversi engine with heuristic alpha-beta search
//!
//! A board engine with exact undo and an automated player for square
//! boards of any supported size:
//! - Sandwich capture in all 8 directions
//! - Undo stack that restores the grid and piece counts exactly
//! - Positional heuristic built once from the board geometry
//! - Fixed-depth alpha-beta search that mutates and restores one board
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid, piece counts and move history
//! - [`rules`]: Capture scanning, legal moves, game outcome
//! - [`eval`]: Region classification and positional evaluation
//! - [`search`]: Move ordering, alpha-beta and reference minimax
//! - [`engine`]: Automated player integrating all components
//!
//! # Quick Start
//!
//! ```
//! use reversi::{AIEngine, Board, Piece, SearchConfig};
//!
//! let mut board = Board::standard(8).unwrap();
//! let config = SearchConfig::default().with_depth(4);
//! let engine = AIEngine::with_config(&board, Piece::White, config).unwrap();
//!
//! // Opponent plays, then the AI answers
//! board.play(Piece::Black, reversi::Pos::new(3, 2)).unwrap();
//! if let Some(pos) = engine.get_next_move(&mut board) {
//!     board.make_move(Piece::White, pos);
//!     println!("AI plays at {pos}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, MoveRecord, Piece, Pos, DEFAULT_SIZE};
pub use config::SearchConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{BoardError, ConfigError};
pub use rules::Outcome;
