//! Positional heuristic table for Othello evaluation
//!
//! Every cell is classified once, from geometry alone, into one of five
//! stability regions:
//! - Region 5: stable corners
//! - Region 4: danger cells next to a corner
//! - Region 3: quasi-stable edges flanked by corners, danger cells or the border
//! - Region 2: cells next to a quasi-stable edge
//! - Region 1: everything else
//!
//! The classification passes run in a fixed column-major order and later
//! passes only see what earlier ones marked, so the result is deterministic
//! for a given board size.

use crate::board::{Board, Piece, Pos};

use super::weights::{RegionWeights, Score};

/// The 4 axes; each is examined in both its directions
const AXES: [(i32, i32); 4] = [(1, 0), (1, 1), (0, 1), (-1, 1)];

/// Neighbour directions used when marking cells around a corner or edge
const NEIGHBOURS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// Edge runs are only extended along the orthogonal directions
const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Stability region of a cell, highest strategic value first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Coordinate outside the grid
    OutOfBound,
    /// Region 5
    Corner,
    /// Region 4
    Danger,
    /// Region 3
    Edge,
    /// Region 2
    Exposure,
    /// Region 1
    Interior,
}

impl Region {
    /// Weight of this region under `weights`
    #[inline]
    pub fn weight(self, weights: &RegionWeights) -> i32 {
        match self {
            Region::OutOfBound => Score::OUT_OF_BOUND,
            Region::Corner => weights.corner,
            Region::Danger => weights.danger,
            Region::Edge => weights.edge,
            Region::Exposure => weights.exposure,
            Region::Interior => weights.interior,
        }
    }

    /// Region number 1-5, 0 for out of bound
    pub fn tier(self) -> u8 {
        match self {
            Region::OutOfBound => 0,
            Region::Interior => 1,
            Region::Exposure => 2,
            Region::Edge => 3,
            Region::Danger => 4,
            Region::Corner => 5,
        }
    }
}

/// Per-cell positional scores for one board geometry.
///
/// Independent of piece placement: build it once per engine and reuse it for
/// every position on boards of the same size.
#[derive(Debug, Clone)]
pub struct HeuristicTable {
    size: usize,
    regions: Vec<Region>,
    weights: Vec<i32>,
    region_weights: RegionWeights,
}

impl HeuristicTable {
    /// Classify every cell of `board`'s geometry and assign its weight.
    #[must_use]
    pub fn new(board: &Board, region_weights: RegionWeights) -> Self {
        let regions = Builder::new(board).build();
        let weights = regions
            .iter()
            .map(|r| r.weight(&region_weights))
            .collect();
        Self {
            size: board.size(),
            regions,
            weights,
            region_weights,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let n = self.size as i32;
        (x >= 0 && y >= 0 && x < n && y < n).then(|| y as usize * self.size + x as usize)
    }

    /// Weight at (x, y); [`Score::OUT_OF_BOUND`] outside the grid
    #[inline]
    pub fn weight(&self, x: i32, y: i32) -> i32 {
        self.index(x, y)
            .map_or(Score::OUT_OF_BOUND, |idx| self.weights[idx])
    }

    #[inline]
    pub fn weight_at(&self, pos: Pos) -> i32 {
        self.weight(i32::from(pos.x), i32::from(pos.y))
    }

    pub fn region(&self, pos: Pos) -> Region {
        self.index(i32::from(pos.x), i32::from(pos.y))
            .map_or(Region::OutOfBound, |idx| self.regions[idx])
    }

    pub fn region_weights(&self) -> &RegionWeights {
        &self.region_weights
    }
}

/// Region classification state; `None` marks a cell not yet classified.
struct Builder<'a> {
    board: &'a Board,
    size: usize,
    cells: Vec<Option<Region>>,
}

impl<'a> Builder<'a> {
    fn new(board: &'a Board) -> Self {
        let size = board.size();
        Self {
            board,
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    fn oob(&self, x: i32, y: i32) -> bool {
        self.board.get(x, y).is_out_of_bound()
    }

    #[inline]
    fn get(&self, x: i32, y: i32) -> Option<Region> {
        if self.oob(x, y) {
            Some(Region::OutOfBound)
        } else {
            self.cells[y as usize * self.size + x as usize]
        }
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, region: Region) {
        self.cells[y as usize * self.size + x as usize] = Some(region);
    }

    /// In-bound columns then rows, outer loop over x
    fn coords(&self) -> impl Iterator<Item = (i32, i32)> {
        let n = self.size as i32;
        (0..n).flat_map(move |x| (0..n).map(move |y| (x, y)))
    }

    /// A corner: on every axis at least one side runs off the board
    fn is_stable_corner(&self, x: i32, y: i32) -> bool {
        AXES.iter()
            .all(|&(dx, dy)| self.oob(x + dx, y + dy) || self.oob(x - dx, y - dy))
    }

    /// On every axis at least one side is the border or a region 4/5 cell
    fn is_quasi_stable(&self, x: i32, y: i32) -> bool {
        let backed = |x, y| {
            matches!(
                self.get(x, y),
                Some(Region::OutOfBound | Region::Danger | Region::Corner)
            )
        };
        AXES.iter()
            .all(|&(dx, dy)| backed(x + dx, y + dy) || backed(x - dx, y - dy))
    }

    /// Mark in-bound neighbours of (x, y) as `region` when `eligible` accepts
    /// their current classification and the cell two steps out is in bound.
    fn mark_neighbours(
        &mut self,
        x: i32,
        y: i32,
        region: Region,
        eligible: impl Fn(Option<Region>) -> bool,
    ) {
        for &(dx, dy) in &NEIGHBOURS {
            let (nx, ny) = (x + dx, y + dy);
            if !self.oob(nx, ny)
                && eligible(self.get(nx, ny))
                && !self.oob(x + 2 * dx, y + 2 * dy)
            {
                self.set(nx, ny, region);
            }
        }
    }

    fn build(mut self) -> Vec<Region> {
        let coords: Vec<(i32, i32)> = self.coords().collect();

        // Corners and their danger cells
        for &(x, y) in &coords {
            if self.is_stable_corner(x, y) {
                self.set(x, y, Region::Corner);
                self.mark_neighbours(x, y, Region::Danger, |r| r != Some(Region::Corner));
            }
        }

        // Quasi-stable edges and the cells that expose them
        for &(x, y) in &coords {
            if self.get(x, y).is_none() && self.is_quasi_stable(x, y) {
                self.set(x, y, Region::Edge);
                self.mark_neighbours(x, y, Region::Exposure, |r| r.is_none());
            }
        }

        // Interior fill, and whole edge runs: two edge cells 3 apart with
        // exposure cells between them make the two middle cells edges too
        let mut promoted = Vec::new();
        for &(x, y) in &coords {
            match self.get(x, y) {
                None => self.set(x, y, Region::Interior),
                Some(Region::Edge) => {
                    for &(dx, dy) in &ORTHOGONAL {
                        let (fx, fy) = (x + 3 * dx, y + 3 * dy);
                        if !self.oob(fx, fy)
                            && self.get(fx, fy) == Some(Region::Edge)
                            && self.get(x + dx, y + dy) == Some(Region::Exposure)
                            && self.get(x + 2 * dx, y + 2 * dy) == Some(Region::Exposure)
                        {
                            promoted.push((x + dx, y + dy));
                            promoted.push((x + 2 * dx, y + 2 * dy));
                        }
                    }
                }
                Some(_) => {}
            }
        }
        for (x, y) in promoted {
            self.set(x, y, Region::Edge);
        }

        self.cells
            .into_iter()
            .map(|r| r.unwrap_or(Region::Interior))
            .collect()
    }
}

/// Evaluate the board from the perspective of `piece`.
///
/// Sum of the weights of cells `piece` occupies minus the sum over cells the
/// opponent occupies. Empty cells contribute nothing, so
/// `evaluate(b, t, Black) == -evaluate(b, t, White)`.
///
/// # Arguments
/// * `board` - The current board state
/// * `table` - Heuristic table built for this board's geometry
/// * `piece` - The piece to evaluate for
#[must_use]
pub fn evaluate(board: &Board, table: &HeuristicTable, piece: Piece) -> i32 {
    let n = board.size() as i32;
    let mut score = 0;
    for y in 0..n {
        for x in 0..n {
            match board.get(x, y).piece() {
                Some(p) if p == piece => score += table.weight(x, y),
                Some(_) => score -= table.weight(x, y),
                None => {}
            }
        }
    }
    score
}
