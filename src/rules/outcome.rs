//! End of game classification

use crate::board::{Board, Piece};

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Piece),
    Draw,
}

/// Result of the game, or `None` while either side can still move.
///
/// The piece with more cells on the board wins; equal counts are a draw.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if !board.game_over() {
        return None;
    }
    let black = board.count(Piece::Black);
    let white = board.count(Piece::White);
    Some(match black.cmp(&white) {
        std::cmp::Ordering::Greater => Outcome::Winner(Piece::Black),
        std::cmp::Ordering::Less => Outcome::Winner(Piece::White),
        std::cmp::Ordering::Equal => Outcome::Draw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_outcome_in_progress() {
        let board = Board::standard(8).unwrap();
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_outcome_winner() {
        let mut board = Board::new(4);
        board.place(Piece::White, Pos::new(0, 0));
        board.place(Piece::White, Pos::new(1, 0));
        board.place(Piece::Black, Pos::new(3, 3));

        assert_eq!(outcome(&board), Some(Outcome::Winner(Piece::White)));
    }

    #[test]
    fn test_outcome_draw() {
        let board = Board::new(4);
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }
}
