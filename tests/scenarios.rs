//! End-to-end scenarios: special moves, terminal positions and whole games.

use chess_tree::board::search::generate_action_list;
use chess_tree::board::{
    Board, Color, GameTree, LeafSign, MoveError, MoveMode, PieceKind, SearchConfig, SearchLimits,
    Square,
};
use chess_tree::AiPlayer;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn config(depth: u32) -> SearchConfig {
    SearchConfig::with_depth(depth).leaf_sign(LeafSign::SideToMove)
}

#[test]
fn en_passant_right_after_the_double_step() {
    let start = Board::from_fen("4k3/1p6/8/P7/8/8/8/4K3 b - - 0 1");

    let mut board = start.clone();
    assert!(board.move_piece(sq("b7"), sq("b5"), MoveMode::Execute));
    assert!(board.move_piece(sq("a5"), sq("b6"), MoveMode::Execute));
    assert!(board.is_empty(sq("b5")));
    assert_eq!(board.count(Color::Black, PieceKind::Pawn), 0);

    let mut board = start.clone();
    assert!(board.move_piece(sq("b7"), sq("b5"), MoveMode::Execute));
    assert!(board.move_piece(sq("e1"), sq("d2"), MoveMode::Execute));
    assert!(board.move_piece(sq("e8"), sq("d8"), MoveMode::Execute));
    assert_eq!(
        board.check_move(sq("a5"), sq("b6")),
        Err(MoveError::InvalidEnPassant)
    );

    // a single step twice is not a double step
    let mut board = start;
    assert!(board.move_piece(sq("b7"), sq("b6"), MoveMode::Execute));
    assert!(board.move_piece(sq("e1"), sq("d2"), MoveMode::Execute));
    assert!(board.move_piece(sq("b6"), sq("b5"), MoveMode::Execute));
    assert!(!board.move_piece(sq("a5"), sq("b6"), MoveMode::Execute));
}

#[test]
fn castling_through_the_tree() {
    let fen = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1";
    let mut tree = GameTree::new(Board::from_fen(fen), config(1)).unwrap();
    assert!(tree.signal_squares(sq("e1"), sq("g1")));
    let board = tree.current_board();
    assert_eq!(board.piece_at(sq("g1")).unwrap().kind, PieceKind::King);
    assert_eq!(board.piece_at(sq("f1")).unwrap().kind, PieceKind::Rook);
    assert!(board.is_empty(sq("h1")));

    // f1 covered by a bishop on a6
    let fen = "r3k2r/pppppppp/b7/8/8/8/PPPP1PPP/R3K2R w KQkq - 0 1";
    let mut tree = GameTree::new(Board::from_fen(fen), config(1)).unwrap();
    assert!(!tree.signal_squares(sq("e1"), sq("g1")));
    assert_eq!(tree.current_id(), tree.root_id());
    assert!(tree.signal_squares(sq("e1"), sq("c1")));
}

#[test]
fn stalemate_is_a_draw() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let actions = generate_action_list(&board);
    assert_eq!(actions.len(), 1);
    assert!(actions[0].is_draw());
    assert_eq!(actions[0].to_string(), "draw");

    let mut tree = GameTree::new(board.clone(), config(3)).unwrap();
    let result = tree
        .find_best_move_with_limits(false, SearchLimits::default())
        .unwrap();
    assert_eq!(result.score, 0);

    let mut black = AiPlayer::new(board, Color::Black, config(3)).unwrap();
    assert!(black.think().is_none());
}

#[test]
fn white_avoids_stalemating_with_a_won_position() {
    // Qf7 would stalemate; anything keeping a legal reply is better than a draw
    let board = Board::from_fen("7k/8/6K1/5Q2/8/8/8/8 w - - 0 1");
    let mut tree = GameTree::new(board, config(2)).unwrap();
    let best = tree.find_best_move(true).unwrap();
    assert!(tree.signal_move(&best));
    let after = tree.current_board();
    assert!(!after.is_stalemate(), "{best} stalemates\n{after}");
}

#[test]
fn search_is_deterministic() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    let mut a = GameTree::new(Board::from_fen(fen), config(3)).unwrap();
    let mut b = GameTree::new(Board::from_fen(fen), config(3)).unwrap();

    let first = a.find_best_move(true);
    assert!(first.is_some());
    assert_eq!(a.find_best_move(true), first);
    assert_eq!(b.find_best_move(true), first);
    assert_eq!(a.last_stats(), b.last_stats());
}

#[test]
fn promotion_keeps_lookup_in_sync() {
    let mut board = Board::from_fen("4k3/PP6/8/8/8/8/8/Q3K3 w - - 0 1");
    assert!(board.move_piece(sq("a7"), sq("a8"), MoveMode::Execute));
    assert!(board.move_piece(sq("e8"), sq("f7"), MoveMode::Execute));
    assert!(board.move_piece(sq("b7"), sq("b8"), MoveMode::Execute));
    assert!(board.move_piece(sq("f7"), sq("g6"), MoveMode::Execute));
    assert!(board.move_piece(sq("a1"), sq("a4"), MoveMode::Execute));

    for copy in [board.clone(), board.clone().clone()] {
        let queens: Vec<_> = copy.piece_ids(Color::White, PieceKind::Queen).collect();
        assert_eq!(queens.len(), 3);
        for id in queens {
            let piece = copy.piece(id);
            assert_eq!(copy.id_at(piece.square), Some(id));
            assert_eq!(piece.kind, PieceKind::Queen);
        }
        assert!(copy.verify_integrity().is_ok());
    }
    assert!(board.verify_integrity().is_ok());
    assert_eq!(board.count(Color::White, PieceKind::Pawn), 0);
}

#[test]
fn two_players_play_a_game() {
    let mut white = AiPlayer::new(Board::new(), Color::White, config(2)).unwrap();
    let mut black = AiPlayer::new(Board::new(), Color::Black, config(2)).unwrap();

    let mut plies = 0;
    while plies < 12 && !white.board().checkmate() && !white.board().is_stalemate() {
        let (mover, watcher) = if white.on_move() {
            (&mut white, &mut black)
        } else {
            (&mut black, &mut white)
        };
        let action = mover.think_and_play().expect("a move");
        assert!(watcher.play(&action), "{action} rejected");
        assert_eq!(white.board(), black.board());
        plies += 1;
    }

    assert_eq!(white.tree().move_history().len(), plies);
    assert_eq!(white.tree().move_history(), black.tree().move_history());
    assert!(white.board().verify_integrity().is_ok());
    assert_eq!(white.tree().live_nodes(), plies + 1);
}

#[test]
fn opponent_moves_can_be_forwarded_by_square() {
    let mut black = AiPlayer::new(Board::new(), Color::Black, config(1)).unwrap();
    assert!(!black.on_move());
    assert!(!black.signal(sq("e2"), sq("e5")));
    assert!(black.signal(sq("d2"), sq("d4")));
    assert!(black.on_move());
    assert!(black.think().is_some());
    assert_eq!(black.tree().move_history().len(), 1);
}
