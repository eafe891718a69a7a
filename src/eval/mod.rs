//! Evaluation module for Othello positions
//!
//! Positions are scored from a fixed per-cell table built once from the
//! board geometry; piece occupancy only selects which cells count for whom.

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, HeuristicTable, Region};
pub use weights::{RegionWeights, Score};
