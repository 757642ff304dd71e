//! Static evaluation of leaf positions.

use super::constants::{ENDGAME_PIECE_LIMIT, MATE_SCORE};
use super::pst::{pst_value, GamePhase};
use crate::board::{Board, Color, PieceKind};

impl GamePhase {
    /// Endgame when queens remain but every knight, bishop and rook is
    /// gone, or when no queens remain and each side keeps at most two of them.
    #[must_use]
    pub fn of(board: &Board) -> GamePhase {
        let officers = |color: Color| -> usize {
            PieceKind::MINOR_AND_ROOK
                .into_iter()
                .map(|kind| board.count(color, kind))
                .sum()
        };
        let queens: usize = Color::BOTH
            .into_iter()
            .map(|color| board.count(color, PieceKind::Queen))
            .sum();
        let (white, black) = (officers(Color::White), officers(Color::Black));

        let endgame = if queens > 0 {
            white == 0 && black == 0
        } else {
            white <= ENDGAME_PIECE_LIMIT && black <= ENDGAME_PIECE_LIMIT
        };
        if endgame {
            GamePhase::Endgame
        } else {
            GamePhase::Midgame
        }
    }
}

/// Material and piece-square score from the side to move's point of view.
///
/// A checkmated side to move scores [`MATE_SCORE`].
#[must_use]
pub fn evaluate_position(board: &Board) -> i32 {
    if board.checkmate() {
        return MATE_SCORE;
    }
    let phase = GamePhase::of(board);
    let mut white_minus_black = 0;
    for color in Color::BOTH {
        for kind in PieceKind::ALL {
            for piece in board.pieces(color, kind) {
                let material = if kind == PieceKind::King { 0 } else { kind.value() };
                let positional = pst_value(kind, color, piece.square, phase);
                white_minus_black += color.sign() * (material + positional);
            }
        }
    }
    board.turn().sign() * white_minus_black
}
