//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `Piece`, `PieceKind`, `Color` and `PieceId` - pieces and their arena handles
//! - `Square` - (column, row) board coordinates
//! - `Direction` - the eight scan rays
//! - `PromotionChoice` - what a pawn becomes on the far rank

mod direction;
mod piece;
mod square;

pub use direction::Direction;
pub use piece::{Color, Piece, PieceId, PieceKind, PromotionChoice};
pub use square::Square;
