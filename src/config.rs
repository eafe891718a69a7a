//! Search configuration

use crate::board::MAX_BOARD_SIZE;
use crate::error::ConfigError;
use crate::eval::{RegionWeights, Score};

/// Default number of plies searched per move
pub const DEFAULT_DEPTH: u8 = 9;

/// Deepest search accepted by [`SearchConfig::validate`]
pub const MAX_DEPTH: u8 = 32;

/// Fixed-depth search settings for an [`AIEngine`](crate::engine::AIEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Plies searched from the current position
    pub depth: u8,
    /// Positional weights for the heuristic table
    pub weights: RegionWeights,
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: RegionWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Reject depths the search cannot run with, and weights whose positional
    /// score on the largest board could reach [`Score::WIN`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.depth {
            0 => return Err(ConfigError::ZeroDepth),
            d if d > MAX_DEPTH => return Err(ConfigError::DepthTooLarge(d)),
            _ => {}
        }

        let max_abs = self.weights.max_abs();
        let cells = (MAX_BOARD_SIZE * MAX_BOARD_SIZE) as i64;
        if i64::from(max_abs) * cells >= i64::from(Score::WIN) {
            return Err(ConfigError::WeightsTooLarge(max_abs));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            weights: RegionWeights::default(),
        }
    }
}
