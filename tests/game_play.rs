//! Driver-level scenarios: the query and command surface an embedding
//! application uses to run a game.

use reversi::board::Cell;
use reversi::eval::Score;
use reversi::rules::outcome;
use reversi::{AIEngine, Board, Outcome, Piece, Pos, SearchConfig};

fn engine(board: &Board, piece: Piece, depth: u8) -> AIEngine {
    AIEngine::with_config(board, piece, SearchConfig::default().with_depth(depth)).unwrap()
}

/// Run a game between two engines, passing when a side has no move.
fn self_play(board: &mut Board, black: &AIEngine, white: &AIEngine) -> usize {
    let mut side = Piece::Black;
    let mut moves = 0;
    while !board.game_over() {
        let player = if side == Piece::Black { black } else { white };
        if let Some(pos) = player.get_next_move(board) {
            board.play(side, pos).expect("engine chose an illegal move");
            moves += 1;
        }
        side = side.opponent();
    }
    moves
}

#[test]
fn test_full_game_8x8() {
    let mut board = Board::standard(8).unwrap();
    let black = engine(&board, Piece::Black, 3);
    let white = engine(&board, Piece::White, 2);

    let moves = self_play(&mut board, &black, &white);

    assert!(board.game_over());
    assert_eq!(board.history().len(), moves);
    assert_eq!(
        board.count(Piece::Black) + board.count(Piece::White),
        4 + moves as u32
    );
    assert!(outcome(&board).is_some());

    // The whole game unwinds back to the opening
    for _ in 0..moves {
        board.undo();
    }
    assert_eq!(board, Board::standard(8).unwrap());
}

#[test]
fn test_full_game_default_depth_4x4() {
    let mut board = Board::standard(4).unwrap();
    let black = AIEngine::new(&board, Piece::Black);
    let white = AIEngine::new(&board, Piece::White);
    assert_eq!(black.config().depth, 9);

    self_play(&mut board, &black, &white);

    let result = outcome(&board).unwrap();
    match result {
        Outcome::Winner(p) => assert!(board.count(p) > board.count(p.opponent())),
        Outcome::Draw => assert_eq!(board.count(Piece::Black), board.count(Piece::White)),
    }
}

#[test]
fn test_engine_takes_available_corner() {
    let mut board = Board::new(8);
    board.place(Piece::White, Pos::new(2, 2));
    board.place(Piece::Black, Pos::new(1, 1));
    board.place(Piece::Black, Pos::new(5, 4));
    board.place(Piece::White, Pos::new(6, 4));
    let white = engine(&board, Piece::White, 1);

    assert_eq!(white.get_next_move(&mut board), Some(Pos::new(0, 0)));
}

#[test]
fn test_engine_finds_forced_win_through_pass() {
    let mut board = Board::new(8);
    board.place(Piece::Black, Pos::new(0, 0));
    board.place(Piece::White, Pos::new(1, 0));
    board.place(Piece::White, Pos::new(0, 1));
    let black = engine(&board, Piece::Black, 2);

    let result = black.get_move_with_stats(&mut board);
    assert_eq!(result.score, Score::WIN);
    assert_eq!(result.best_move, Some(Pos::new(2, 0)));
}

#[test]
fn test_human_move_then_engine_reply() {
    let mut board = Board::standard(8).unwrap();
    let white = engine(&board, Piece::White, 3);

    let record = board.play(Piece::Black, Pos::new(4, 5)).unwrap();
    assert_eq!(record.flipped(), 1);
    assert_eq!(board.get(4, 4), Cell::Piece(Piece::Black));

    let reply = white.get_next_move(&mut board).unwrap();
    assert!(board.is_legal_move(Piece::White, reply));
    board.make_move(Piece::White, reply);
    assert_eq!(board.history().len(), 2);

    // Driver-side retraction of both moves
    board.undo();
    board.undo();
    assert_eq!(board, Board::standard(8).unwrap());
}
