pub mod board;
pub mod engine;

pub use board::{Action, Board, Color, GameTree, Piece, PieceKind, Square};
pub use engine::AiPlayer;
