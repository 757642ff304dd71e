//! Engine-side players driving a [`GameTree`](crate::board::GameTree).
//!
//! An [`AiPlayer`] owns its own tree, searches for its color and is told
//! about every move played in the game, its own and the opponent's.

mod player;

pub use player::AiPlayer;
