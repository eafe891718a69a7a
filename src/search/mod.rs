//! Search module for the Othello AI
//!
//! Contains:
//! - Scoped apply/undo over the shared board
//! - Move ordering by heuristic weight
//! - Fixed-depth alpha-beta search
//! - Unpruned minimax for verification

pub mod alphabeta;
pub mod guard;
pub mod minimax;
pub mod ordering;

pub use alphabeta::{terminal_score, SearchResult, SearchStats, Searcher};
pub use guard::MoveGuard;
pub use minimax::minimax;
pub use ordering::order_moves;
