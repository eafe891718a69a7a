//! Sandwich capture rules
//!
//! Capture pattern: P-O-...-O-P where P is the mover's piece and O the
//! opponent's. Any number of contiguous O cells is captured, in each of the
//! 8 directions independently.

use crate::board::{Board, Cell, Piece, Pos};

/// Length of the run `piece` would capture from `pos` along `dir`.
///
/// Walks outward from the cell next to `pos` while it sees opponent pieces.
/// The run counts only if the walk then lands on one of the mover's own
/// pieces; hitting `Empty` or `OutOfBound` first yields 0. The target cell
/// itself is not inspected.
///
/// # Arguments
/// * `board` - Current board state
/// * `piece` - Piece being placed
/// * `pos` - Position where it would be placed
/// * `dir` - Direction vector `(dx, dy)`
#[inline]
pub fn capture_run(board: &Board, piece: Piece, pos: Pos, dir: (i32, i32)) -> u8 {
    let opponent = Cell::Piece(piece.opponent());
    let mut steps = 1;
    loop {
        let (x, y) = pos.offset(dir, steps);
        match board.get(x, y) {
            cell if cell == opponent => steps += 1,
            Cell::Piece(p) if p == piece && steps > 1 => return (steps - 1) as u8,
            _ => return 0,
        }
    }
}

/// All legal moves for `piece`, in row-major order.
pub fn legal_moves(board: &Board, piece: Piece) -> Vec<Pos> {
    let size = board.size() as u8;
    let mut moves = Vec::new();
    for y in 0..size {
        for x in 0..size {
            let pos = Pos::new(x, y);
            if board.is_legal_move(piece, pos) {
                moves.push(pos);
            }
        }
    }
    moves
}

/// Check if `piece` has at least one legal move, stopping at the first found.
pub fn has_legal_move(board: &Board, piece: Piece) -> bool {
    let size = board.size() as u8;
    (0..size).any(|y| (0..size).any(|x| board.is_legal_move(piece, Pos::new(x, y))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_run_single() {
        let mut board = Board::new(8);
        // B W _  (B places at _, captures W)
        board.place(Piece::Black, Pos::new(2, 3));
        board.place(Piece::White, Pos::new(3, 3));

        assert_eq!(capture_run(&board, Piece::Black, Pos::new(4, 3), (-1, 0)), 1);
        assert_eq!(capture_run(&board, Piece::Black, Pos::new(4, 3), (1, 0)), 0);
    }

    #[test]
    fn test_capture_run_long() {
        let mut board = Board::new(8);
        board.place(Piece::White, Pos::new(0, 0));
        for k in 1..6 {
            board.place(Piece::Black, Pos::new(k, k));
        }

        assert_eq!(capture_run(&board, Piece::White, Pos::new(6, 6), (-1, -1)), 5);
    }

    #[test]
    fn test_capture_run_open_end() {
        let mut board = Board::new(8);
        // W W W up to the edge with no closing piece
        board.place(Piece::White, Pos::new(5, 0));
        board.place(Piece::White, Pos::new(6, 0));
        board.place(Piece::White, Pos::new(7, 0));

        assert_eq!(capture_run(&board, Piece::Black, Pos::new(4, 0), (1, 0)), 0);
    }

    #[test]
    fn test_capture_run_gap() {
        let mut board = Board::new(8);
        // B _ W _ : the empty cell breaks the run
        board.place(Piece::Black, Pos::new(0, 4));
        board.place(Piece::White, Pos::new(2, 4));

        assert_eq!(capture_run(&board, Piece::Black, Pos::new(3, 4), (-1, 0)), 0);
    }

    #[test]
    fn test_adjacent_own_piece_captures_nothing() {
        let mut board = Board::new(8);
        board.place(Piece::Black, Pos::new(3, 3));

        assert_eq!(capture_run(&board, Piece::Black, Pos::new(4, 3), (-1, 0)), 0);
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::standard(8).unwrap();
        let moves = legal_moves(&board, Piece::Black);

        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_has_legal_move_matches_legal_moves() {
        let board = Board::standard(8).unwrap();
        assert!(has_legal_move(&board, Piece::Black));
        assert!(has_legal_move(&board, Piece::White));

        let empty = Board::new(8);
        assert!(!has_legal_move(&empty, Piece::Black));
        assert!(legal_moves(&empty, Piece::Black).is_empty());
    }
}
