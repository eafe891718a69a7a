//! Game rules for Othello/Reversi
//!
//! This module implements the rule set:
//! - Sandwich capture (a run of opponent pieces closed by the mover's piece)
//! - Legal move generation
//! - End of game and winner

pub mod flip;
pub mod outcome;

// Re-exports for convenient access
pub use flip::{capture_run, has_legal_move, legal_moves};
pub use outcome::{outcome, Outcome};
