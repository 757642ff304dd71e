//! Serialization of the value types behind the `serde` feature.
#![cfg(feature = "serde")]

use chess_tree::board::search::generate_action_list;
use chess_tree::board::{Action, Board, Piece, Square};

#[test]
fn actions_survive_json() {
    let board = Board::new();
    let actions = generate_action_list(&board);
    let json = serde_json::to_string(&actions).unwrap();
    let back: Vec<Action> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, actions);
}

#[test]
fn piece_json_shape() {
    let board = Board::new();
    let piece: Piece = *board.piece_at(Square(4, 0)).unwrap();
    let value = serde_json::to_value(piece).unwrap();
    assert_eq!(value["kind"], "King");
    assert_eq!(value["color"], "White");
    assert_eq!(value["can_castle"], true);
    let back: Piece = serde_json::from_value(value).unwrap();
    assert_eq!(back, piece);
}
