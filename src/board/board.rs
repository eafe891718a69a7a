//! Board structure with move history for exact undo

use super::{Cell, Piece, Pos, DIRECTIONS, DEFAULT_SIZE, MAX_BOARD_SIZE};
use crate::error::BoardError;
use crate::rules::{capture_run, has_legal_move, legal_moves};

/// One direction in which a move flipped pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flip {
    pub dx: i8,
    pub dy: i8,
    /// Number of opponent pieces flipped, counted outward from the placed cell
    pub run: u8,
}

impl Flip {
    /// Cells flipped along this direction, nearest to `origin` first
    pub fn cells(self, origin: Pos) -> impl Iterator<Item = Pos> {
        let dir = (i32::from(self.dx), i32::from(self.dy));
        (1..=i32::from(self.run)).map(move |k| {
            let (x, y) = origin.offset(dir, k);
            Pos::new(x as u8, y as u8)
        })
    }
}

/// Record of an applied move. Undo replays it in reverse without rescanning the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub piece: Piece,
    flips: [Flip; 8],
    count: u8,
}

impl MoveRecord {
    fn new(pos: Pos, piece: Piece) -> Self {
        Self {
            pos,
            piece,
            flips: [Flip::default(); 8],
            count: 0,
        }
    }

    #[inline]
    fn push(&mut self, (dx, dy): (i32, i32), run: u8) {
        self.flips[self.count as usize] = Flip {
            dx: dx as i8,
            dy: dy as i8,
            run,
        };
        self.count += 1;
    }

    /// Directions that captured, in scan order
    #[inline]
    pub fn flips(&self) -> &[Flip] {
        &self.flips[..self.count as usize]
    }

    /// Total number of opponent pieces flipped
    pub fn flipped(&self) -> u32 {
        self.flips().iter().map(|f| u32::from(f.run)).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Square Othello board with running piece counts and an undo stack.
///
/// Cells outside `[0, size)` read as [`Cell::OutOfBound`]. The only mutators
/// are move application, undo, and direct seeding through
/// [`place`](Board::place) / [`remove`](Board::remove); each keeps the counts
/// equal to the number of cells holding each piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Piece>>,
    counts: [u32; 2],
    history: Vec<MoveRecord>,
}

impl Board {
    /// Create an empty board of dimension `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0 or greater than [`MAX_BOARD_SIZE`]. Use
    /// [`try_new`](Board::try_new) for sizes that come from user input.
    #[must_use]
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(board) => board,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create an empty board, rejecting unsupported sizes.
    pub fn try_new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            counts: [0; 2],
            history: Vec::with_capacity(size * size),
        })
    }

    /// Create a board seeded with the standard 4-piece opening in the centre.
    ///
    /// # Arguments
    /// * `size` - Board dimension; must be even and at least 4
    pub fn standard(size: usize) -> Result<Self, BoardError> {
        if size < 4 || size % 2 != 0 {
            return Err(BoardError::InvalidSize(size));
        }
        let mut board = Self::try_new(size)?;
        let c = (size / 2) as u8;
        board.place(Piece::White, Pos::new(c - 1, c - 1));
        board.place(Piece::White, Pos::new(c, c));
        board.place(Piece::Black, Pos::new(c, c - 1));
        board.place(Piece::Black, Pos::new(c - 1, c));
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Get the cell at (x, y); `OutOfBound` for any coordinate outside the grid
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if self.in_bounds(x, y) {
            Cell::from(self.cells[y as usize * self.size + x as usize])
        } else {
            Cell::OutOfBound
        }
    }

    #[inline]
    pub fn at(&self, pos: Pos) -> Cell {
        self.get(i32::from(pos.x), i32::from(pos.y))
    }

    /// The other playable piece
    #[inline]
    pub fn opposite(&self, piece: Piece) -> Piece {
        piece.opponent()
    }

    /// Number of cells currently holding `piece`
    #[inline]
    pub fn count(&self, piece: Piece) -> u32 {
        self.counts[piece.index()]
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> u32 {
        (self.size * self.size) as u32 - self.counts[0] - self.counts[1]
    }

    /// Write a cell, keeping the counts exact
    #[inline]
    fn set(&mut self, pos: Pos, value: Option<Piece>) {
        let idx = pos.to_index(self.size);
        if let Some(old) = self.cells[idx] {
            self.counts[old.index()] -= 1;
        }
        if let Some(new) = value {
            self.counts[new.index()] += 1;
        }
        self.cells[idx] = value;
    }

    /// Put a piece on a cell directly, without capture and without history.
    /// Used to seed positions before play.
    pub fn place(&mut self, piece: Piece, pos: Pos) {
        assert!(self.at(pos) != Cell::OutOfBound, "{pos} is outside the board");
        self.set(pos, Some(piece));
    }

    /// Clear a cell directly, without history. Does nothing on an empty cell.
    pub fn remove(&mut self, pos: Pos) {
        assert!(self.at(pos) != Cell::OutOfBound, "{pos} is outside the board");
        self.set(pos, None);
    }

    /// Check whether `piece` may be played at `pos`.
    ///
    /// The cell must be empty and at least one direction must hold a run of
    /// opponent pieces closed by one of the mover's own pieces.
    pub fn is_legal_move(&self, piece: Piece, pos: Pos) -> bool {
        self.at(pos).is_empty()
            && DIRECTIONS
                .iter()
                .any(|&dir| capture_run(self, piece, pos, dir) > 0)
    }

    /// All legal moves for `piece`, in row-major order
    pub fn legal_moves(&self, piece: Piece) -> Vec<Pos> {
        legal_moves(self, piece)
    }

    /// True when neither piece has a legal move anywhere on the board
    pub fn game_over(&self) -> bool {
        !has_legal_move(self, Piece::Black) && !has_legal_move(self, Piece::White)
    }

    /// Scan every direction from `pos` and collect the runs a move there would flip
    fn capture_record(&self, piece: Piece, pos: Pos) -> MoveRecord {
        let mut record = MoveRecord::new(pos, piece);
        for &dir in &DIRECTIONS {
            let run = capture_run(self, piece, pos, dir);
            if run > 0 {
                record.push(dir, run);
            }
        }
        record
    }

    fn apply(&mut self, record: MoveRecord) -> &MoveRecord {
        self.set(record.pos, Some(record.piece));
        for flip in record.flips() {
            // Farthest first; each cell is written exactly once
            let dir = (i32::from(flip.dx), i32::from(flip.dy));
            for k in (1..=i32::from(flip.run)).rev() {
                let (x, y) = record.pos.offset(dir, k);
                self.set(Pos::new(x as u8, y as u8), Some(record.piece));
            }
        }
        self.history.push(record);
        &self.history[self.history.len() - 1]
    }

    /// Play `piece` at `pos`, flipping every captured run.
    ///
    /// The move must be legal; it is not re-validated outside debug builds.
    /// A move that would flip nothing leaves the board and history untouched.
    pub fn make_move(&mut self, piece: Piece, pos: Pos) {
        debug_assert!(
            self.is_legal_move(piece, pos),
            "illegal move {piece:?} at {pos}"
        );
        let record = self.capture_record(piece, pos);
        if !record.is_empty() {
            self.apply(record);
        }
    }

    /// Validated counterpart of [`make_move`](Board::make_move) for external drivers.
    ///
    /// # Returns
    /// The record of the applied move
    pub fn play(&mut self, piece: Piece, pos: Pos) -> Result<&MoveRecord, BoardError> {
        match self.at(pos) {
            Cell::OutOfBound => {
                return Err(BoardError::OutOfBounds {
                    x: i32::from(pos.x),
                    y: i32::from(pos.y),
                })
            }
            Cell::Piece(_) => return Err(BoardError::Occupied(pos)),
            Cell::Empty => {}
        }
        let record = self.capture_record(piece, pos);
        if record.is_empty() {
            return Err(BoardError::IllegalMove { piece, pos });
        }
        Ok(self.apply(record))
    }

    /// Revert the most recent move exactly.
    ///
    /// # Panics
    ///
    /// Panics if no move has been made. Callers must balance every
    /// `make_move` with one `undo`.
    pub fn undo(&mut self) {
        if self.try_undo().is_err() {
            panic!("undo called with empty move history");
        }
    }

    /// Revert the most recent move, or report that there is none.
    pub fn try_undo(&mut self) -> Result<MoveRecord, BoardError> {
        let record = self.history.pop().ok_or(BoardError::EmptyHistory)?;
        let opponent = record.piece.opponent();
        for flip in record.flips() {
            for cell in flip.cells(record.pos) {
                self.set(cell, Some(opponent));
            }
        }
        self.set(record.pos, None);
        Ok(record)
    }

    /// Applied moves not yet undone, oldest first
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}
