//! Legality gates, in the order they are applied.

use super::{play, sq};
use crate::board::{Board, Color, MoveError, MoveMode, PieceKind};

#[test]
fn test_preconditions() {
    let board = Board::new();
    assert_eq!(
        board.check_move(sq("e4"), sq("e5")),
        Err(MoveError::NoPiece { square: sq("e4") })
    );
    assert_eq!(
        board.check_move(sq("e7"), sq("e5")),
        Err(MoveError::WrongTurn {
            color: Color::Black
        })
    );

    let mated = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert_eq!(
        mated.check_move(sq("g8"), sq("h8")),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_shape_gate() {
    let board = Board::new();
    assert_eq!(
        board.check_move(sq("e2"), sq("e5")),
        Err(MoveError::IllegalShape {
            kind: PieceKind::Pawn
        })
    );
    assert_eq!(
        board.check_move(sq("g1"), sq("g3")),
        Err(MoveError::IllegalShape {
            kind: PieceKind::Knight
        })
    );
}

#[test]
fn test_friendly_fire_gate() {
    let board = Board::new();
    assert_eq!(
        board.check_move(sq("a1"), sq("a2")),
        Err(MoveError::FriendlyFire)
    );
    assert_eq!(
        board.check_move(sq("g1"), sq("e2")),
        Err(MoveError::FriendlyFire)
    );
}

#[test]
fn test_path_gate() {
    let mut board = Board::new();
    assert_eq!(
        board.check_move(sq("a1"), sq("a3")),
        Err(MoveError::PathBlocked)
    );
    assert_eq!(
        board.check_move(sq("c1"), sq("e3")),
        Err(MoveError::PathBlocked)
    );
    // knights jump
    assert!(board.check_move(sq("g1"), sq("f3")).is_ok());

    play(&mut board, &[("e2", "e4"), ("e7", "e5")]);
    assert_eq!(
        board.check_move(sq("e4"), sq("e5")),
        Err(MoveError::PathBlocked)
    );

    let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert_eq!(
        board.check_move(sq("e2"), sq("e4")),
        Err(MoveError::PathBlocked)
    );
}

#[test]
fn test_pawn_diagonal_needs_a_victim() {
    let board = Board::new();
    assert_eq!(
        board.check_move(sq("e2"), sq("d3")),
        Err(MoveError::InvalidEnPassant)
    );

    let board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
    assert!(board.check_move(sq("e4"), sq("d5")).is_ok());
    assert_eq!(
        board.check_move(sq("e4"), sq("f5")),
        Err(MoveError::InvalidEnPassant)
    );
}

#[test]
fn test_en_passant_only_right_after_the_double_step() {
    let mut board = Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut board, &[("d7", "d5")]);
    assert!(board.check_move(sq("e5"), sq("d6")).is_ok());

    play(&mut board, &[("e1", "e2"), ("e8", "d8")]);
    assert_eq!(
        board.check_move(sq("e5"), sq("d6")),
        Err(MoveError::InvalidEnPassant)
    );
}

#[test]
fn test_single_step_is_not_en_passant() {
    let mut board = Board::from_fen("4k3/8/3p4/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut board, &[("d6", "d5")]);
    assert_eq!(
        board.check_move(sq("e5"), sq("d6")),
        Err(MoveError::InvalidEnPassant)
    );
}

#[test]
fn test_en_passant_may_not_expose_the_king() {
    let board = Board::from_fen("8/8/8/K2pP2r/8/8/8/4k3 w - d6 0 1");
    assert!(!board.in_check());
    assert_eq!(
        board.check_move(sq("e5"), sq("d6")),
        Err(MoveError::InvalidEnPassant)
    );
    assert!(board.check_move(sq("e5"), sq("e6")).is_ok());
}

#[test]
fn test_castling_gate() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert!(board.check_move(sq("e1"), sq("g1")).is_ok());
    assert!(board.check_move(sq("e1"), sq("c1")).is_ok());

    // f1 attacked
    let board = Board::from_fen("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1");
    assert_eq!(
        board.check_move(sq("e1"), sq("g1")),
        Err(MoveError::InvalidCastle)
    );
    assert!(board.check_move(sq("e1"), sq("c1")).is_ok());

    // b1 may be attacked, only the king's path matters
    let board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(board.check_move(sq("e1"), sq("c1")).is_ok());

    // but it must be empty
    let board = Board::from_fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
    assert_eq!(
        board.check_move(sq("e1"), sq("c1")),
        Err(MoveError::InvalidCastle)
    );
}

#[test]
fn test_no_castling_out_of_check_or_without_rights() {
    let board = Board::from_fen("4k3/8/8/8/4r3/8/8/R3K2R w KQ - 0 1");
    assert!(board.in_check());
    assert_eq!(
        board.check_move(sq("e1"), sq("g1")),
        Err(MoveError::InvalidCastle)
    );

    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1");
    assert_eq!(
        board.check_move(sq("e1"), sq("g1")),
        Err(MoveError::IllegalShape {
            kind: PieceKind::King
        })
    );

    // king may still castle, but the rook has lost its right
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Q - 0 1");
    assert_eq!(
        board.check_move(sq("e1"), sq("g1")),
        Err(MoveError::InvalidCastle)
    );
}

#[test]
fn test_king_into_attack_gate() {
    let board = Board::from_fen("3rk3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(
        board.check_move(sq("e1"), sq("d1")),
        Err(MoveError::KingIntoAttack)
    );
    assert_eq!(
        board.check_move(sq("e1"), sq("d2")),
        Err(MoveError::KingIntoAttack)
    );
    assert!(board.check_move(sq("e1"), sq("f1")).is_ok());

    // kings may not touch
    let board = Board::from_fen("8/8/8/8/8/4k3/8/4K3 w - - 0 1");
    assert_eq!(
        board.check_move(sq("e1"), sq("e2")),
        Err(MoveError::KingIntoAttack)
    );
}

#[test]
fn test_king_cannot_step_back_along_the_check() {
    let board = Board::from_fen("4r2k/8/8/8/8/8/4K3/8 w - - 0 1");
    assert_eq!(
        board.check_move(sq("e2"), sq("e1")),
        Err(MoveError::KingIntoAttack)
    );
    assert!(board.check_move(sq("e2"), sq("d1")).is_ok());
}

#[test]
fn test_check_must_be_resolved() {
    let board = Board::from_fen("4r2k/8/8/8/8/8/P2B4/4K3 w - - 0 1");
    assert_eq!(
        board.check_move(sq("a2"), sq("a3")),
        Err(MoveError::UnresolvedCheck)
    );
    assert!(board.check_move(sq("d2"), sq("e3")).is_ok());
    assert_eq!(
        board.check_move(sq("d2"), sq("c3")),
        Err(MoveError::UnresolvedCheck)
    );
}

#[test]
fn test_double_check_allows_only_king_moves() {
    let board = Board::from_fen("4r2k/8/8/8/1b6/8/R7/4K3 w - - 0 1");
    assert_eq!(
        board.check_move(sq("a2"), sq("e2")),
        Err(MoveError::UnresolvedCheck)
    );
    assert!(board.check_move(sq("e1"), sq("d1")).is_ok());
    let moves = board.legal_moves();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|&(from, _)| from == sq("e1")));
}

#[test]
fn test_pinned_piece_stays_on_its_line() {
    let board = Board::from_fen("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1");
    assert_eq!(
        board.check_move(sq("e2"), sq("d2")),
        Err(MoveError::Pinned)
    );
    assert!(board.check_move(sq("e2"), sq("e5")).is_ok());
    assert!(board.check_move(sq("e2"), sq("e8")).is_ok());
}

#[test]
fn test_pinned_knight_cannot_move() {
    let board = Board::from_fen("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
    for to in ["c1", "c3", "d4", "f4", "g3", "g1"] {
        assert_eq!(
            board.check_move(sq("e2"), sq(to)),
            Err(MoveError::Pinned),
            "e2{to}"
        );
    }
}

#[test]
fn test_probe_never_mutates() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let before = board.clone();
    assert!(board.move_piece(sq("e1"), sq("g1"), MoveMode::Probe));
    assert!(!board.move_piece(sq("e1"), sq("e3"), MoveMode::Probe));
    assert_eq!(board, before);
    assert_eq!(board.turn(), Color::White);
    assert!(board.piece_at(sq("e1")).unwrap().can_castle);
}

#[test]
fn test_candidate_destinations() {
    let board = Board::new();
    let knight = board.id_at(sq("g1")).unwrap();
    assert_eq!(board.candidate_destinations(knight).len(), 3);
    let rook = board.id_at(sq("a1")).unwrap();
    // stops on the first occupied square
    assert_eq!(board.candidate_destinations(rook).len(), 2);
    let pawn = board.id_at(sq("a2")).unwrap();
    assert_eq!(board.candidate_destinations(pawn).len(), 3);
}

#[test]
fn test_legal_moves_in_start_position() {
    let board = Board::new();
    assert_eq!(board.legal_moves().len(), 20);
    assert!(!board.is_stalemate());
}
