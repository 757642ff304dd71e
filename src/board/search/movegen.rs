//! Legal action generation for a tree node.

use super::action::Action;
use super::move_order::{evaluate_heuristic, order_actions};
use crate::board::{Board, PieceId, PieceKind, Square};

/// Append every legal action of one piece, scored.
pub fn build_actions(board: &Board, id: PieceId, out: &mut Vec<Action>) {
    let piece = *board.piece(id);
    let checkers = board.checkers().len();
    let is_king = piece.kind == PieceKind::King;

    if !is_king && (checkers > 1 || (checkers == 1 && !board.is_savior(id))) {
        return;
    }
    if piece.kind == PieceKind::Knight && board.pin_of(id).is_some() {
        return;
    }

    // pawns keep their own targets in check so en-passant rescues are seen
    let candidates: Vec<Square> = if checkers == 0 || piece.kind == PieceKind::Pawn {
        board.candidate_destinations(id)
    } else if is_king {
        board.escape_squares().to_vec()
    } else {
        board.interposition_squares().to_vec()
    };

    for dest in candidates {
        if board.check_move(piece.square, dest).is_ok() {
            let mut action = Action::new(piece, dest);
            evaluate_heuristic(board, &mut action);
            out.push(action);
        }
    }
}

/// All legal actions for the side to move, ordered with the best last.
///
/// With nothing to play and no escape square for a king that is not in
/// check, the list holds only the stalemate sentinel. A checkmated side gets
/// an empty list.
#[must_use]
pub fn generate_action_list(board: &Board) -> Vec<Action> {
    let mut actions = Vec::new();
    for kind in PieceKind::ALL {
        for id in board.piece_ids(board.turn(), kind) {
            build_actions(board, id, &mut actions);
        }
    }

    if actions.is_empty() && !board.in_check() && board.escape_squares().is_empty() {
        return vec![Action::draw()];
    }
    order_actions(actions)
}
