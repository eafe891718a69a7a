//! Score constants and positional weights for Othello evaluation
//!
//! Region weights follow the usual strategic reading of the board: corners
//! can never be flipped, edges backed by a corner are nearly as safe, and the
//! cells that open a corner to the opponent are penalised.

/// Score constants shared by evaluation and search
pub struct Score;

impl Score {
    /// Search bound above every reachable score
    pub const INF: i32 = i32::MAX;
    /// Search bound below every reachable score
    pub const NEG_INF: i32 = i32::MIN;
    /// Finished game won by the engine's piece
    pub const WIN: i32 = i32::MAX - 100;
    /// Finished game lost by the engine's piece
    pub const LOSS: i32 = i32::MIN + 100;
    /// Weight reported for coordinates outside the grid
    pub const OUT_OF_BOUND: i32 = -1000;
}

/// Weight given to each of the five board regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionWeights {
    /// Region 1: interior cells
    pub interior: i32,
    /// Region 2: cells that expose a quasi-stable edge
    pub exposure: i32,
    /// Region 3: quasi-stable edges
    pub edge: i32,
    /// Region 4: corner-adjacent danger cells
    pub danger: i32,
    /// Region 5: stable corners
    pub corner: i32,
}

impl RegionWeights {
    /// Largest absolute weight of any region
    pub fn max_abs(&self) -> i32 {
        [
            self.interior,
            self.exposure,
            self.edge,
            self.danger,
            self.corner,
        ]
        .iter()
        .map(|w| w.saturating_abs())
        .max()
        .unwrap_or(0)
    }
}

impl Default for RegionWeights {
    fn default() -> Self {
        Self {
            interior: 6,
            exposure: -2,
            edge: 15,
            danger: -5,
            corner: 60,
        }
    }
}
