//! Edge case tests for special chess positions and moves.

use super::{play, sq};
use crate::board::search::generate_action_list;
use crate::board::{Board, BoardBuilder, Color, PieceKind};

#[test]
fn test_stalemate_position() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.checkmate());
    assert!(!board.in_check());
    assert!(board.is_stalemate());
    assert!(board.legal_moves().is_empty());
    assert!(board.escape_squares().is_empty());
}

#[test]
fn test_scholars_mate() {
    let mut board = Board::new();
    play(
        &mut board,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
            ("h5", "f7"),
        ],
    );
    assert_eq!(board.turn(), Color::Black);
    assert!(board.checkmate());
    assert_eq!(board.checkers().len(), 1);
    assert!(board.escape_squares().is_empty());
    assert!(board.saviors().is_empty());
    assert!(board.legal_moves().is_empty());
    assert!(!board.is_stalemate());
}

#[test]
fn test_fools_mate() {
    let mut board = Board::new();
    play(
        &mut board,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );
    assert_eq!(board.turn(), Color::White);
    assert!(board.checkmate());
    assert!(generate_action_list(&board).is_empty());
}

#[test]
fn test_check_that_can_be_blocked_is_not_mate() {
    let mut board = Board::new();
    play(&mut board, &[("e2", "e4"), ("f7", "f6"), ("d1", "h5")]);
    assert!(board.in_check());
    assert!(!board.checkmate());
    // g7-g6 is the only block; the king has no escape
    let moves = board.legal_moves();
    assert_eq!(moves, vec![(sq("g7"), sq("g6"))]);
}

#[test]
fn test_smothered_mate() {
    let board = Board::from_fen("6rk/5Npp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(board.checkmate());
    assert_eq!(
        board.piece(board.checkers()[0]).kind,
        PieceKind::Knight
    );
}

#[test]
fn test_capturing_the_checker_saves_the_king() {
    let board = Board::from_fen("5qrk/5Npp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(!board.checkmate());
    assert!(board.check_move(sq("f8"), sq("f7")).is_ok());
    assert_eq!(board.legal_moves(), vec![(sq("f8"), sq("f7"))]);
}

#[test]
fn test_king_may_capture_an_undefended_checker() {
    let board = Board::from_fen("7k/6Q1/8/8/8/8/8/K7 b - - 0 1");
    assert!(board.in_check());
    assert!(!board.checkmate());
    assert!(board.check_move(sq("h8"), sq("g7")).is_ok());

    let board = Board::from_fen("7k/6Q1/5B2/8/8/8/8/K7 b - - 0 1");
    assert!(board.checkmate());
}

#[test]
fn test_lone_kings_have_moves() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .build()
        .unwrap();
    assert_eq!(board.legal_moves().len(), 3);
    assert!(!board.is_stalemate());
}

#[test]
fn test_doubled_pawns_block_each_other() {
    let board = Board::from_fen("4k3/8/8/8/8/P7/P7/4K3 w - - 0 1");
    let moves = board.legal_moves();
    assert!(!moves.contains(&(sq("a2"), sq("a3"))));
    assert!(!moves.contains(&(sq("a2"), sq("a4"))));
    assert!(moves.contains(&(sq("a3"), sq("a4"))));
}

#[test]
fn test_display_marks_check_and_mate() {
    let board = Board::from_fen("4r2k/8/8/8/8/8/8/4K3 w - - 0 1");
    assert!(board.to_string().contains("(check)"));
    let board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(board.to_string().contains("(checkmate)"));
}

#[test]
fn test_integrity_after_a_long_game() {
    let mut board = Board::new();
    play(
        &mut board,
        &[
            ("e2", "e4"),
            ("d7", "d5"),
            ("e4", "d5"),
            ("d8", "d5"),
            ("b1", "c3"),
            ("d5", "a5"),
            ("d2", "d4"),
            ("c7", "c6"),
            ("g1", "f3"),
            ("g8", "f6"),
            ("f1", "c4"),
            ("c8", "f5"),
            ("e1", "g1"),
            ("e7", "e6"),
        ],
    );
    assert!(board.verify_integrity().is_ok());
    assert_eq!(board.piece_at(sq("g1")).unwrap().kind, PieceKind::King);
    assert_eq!(board.piece_at(sq("f1")).unwrap().kind, PieceKind::Rook);
    assert_eq!(board.count(Color::White, PieceKind::Pawn), 7);
    assert_eq!(board.count(Color::Black, PieceKind::Pawn), 7);
    assert_eq!(board.clone(), board);
}
