//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `shape.rs` - Context-free movement geometry
//! - `scan.rs` - Attack scans and derived check state
//! - `legality.rs` - One test group per legality gate
//! - `make_move.rs` - Move execution, castling, en passant and promotion
//! - `edge_cases.rs` - Mates, stalemates and special positions
//! - `search.rs` - Tree search statistics and invariants
//! - `proptest.rs` - Property-based tests over random playouts

mod edge_cases;
mod legality;

use crate::board::{Board, Square};

/// Parse a square in algebraic notation; test positions only.
pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Play a sequence of moves given as `(from, to)` in algebraic notation.
pub(super) fn play(board: &mut Board, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        if let Err(err) = board.try_move(sq(from), sq(to), Default::default()) {
            panic!("{from}{to} rejected: {err}\n{board}");
        }
    }
}
