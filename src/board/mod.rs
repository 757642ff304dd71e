//! Chess board representation and game logic.
//!
//! Pieces live in an arena addressed by [`PieceId`]; an 8×8 lookup table maps
//! squares to handles. After every move the board rebuilds the tactical state
//! of the side to move (checkers, pins, escape squares, interposition squares
//! and saviors), and legality is judged against that state.
//!
//! # Example
//! ```
//! use chess_tree::board::{Board, MoveMode, Square};
//!
//! let mut board = Board::new();
//! assert!(board.move_piece(Square(4, 1), Square(4, 3), MoveMode::Execute));
//! assert!(!board.move_piece(Square(4, 3), Square(4, 5), MoveMode::Probe));
//! println!("{board}");
//! ```

mod attack_tables;
mod builder;
mod debug;
mod error;
mod fen;
mod legality;
mod make_move;
mod scan;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, ConfigError, FenError, MoveError, SquareError};
pub use make_move::MoveMode;
pub use state::{Board, DerivedState, Pin};
pub use types::{Color, Direction, Piece, PieceId, PieceKind, PromotionChoice, Square};

pub use search::{
    Action, GameTree, GameTreeNode, HistoryDirection, LeafSign, MoveCategory, NodeId,
    SearchConfig, SearchLimits, SearchResult, SearchStats, MATE_SCORE, MAX_SEARCH_DEPTH,
};
