//! Move ordering heuristic for search.
//!
//! A cheap score used only to order actions; leaves are scored by
//! [`evaluate_position`](super::eval::evaluate_position).

use super::action::{Action, MoveCategory};
use super::constants::{
    ADVANCED_PAWN_ROWS, CASTLE_DEFENSE_MULTIPLIER, CHECK_BONUS, DOUBLE_CHECK_BONUS,
    KING_CAPTURER_DIVISOR, KING_DEFENSE_WEIGHT,
};
use super::pst::{pst_value, GamePhase};
use crate::board::{Board, Color, Piece, PieceKind};

/// Value of a piece as a capture victim.
///
/// Pawns close to promotion count as several pawns.
#[must_use]
pub fn victim_value(victim: &Piece) -> i32 {
    if victim.kind != PieceKind::Pawn {
        return victim.kind.value();
    }
    let advanced = match victim.color {
        Color::White => victim.row(),
        Color::Black => 7 - victim.row(),
    };
    ADVANCED_PAWN_ROWS
        .iter()
        .find(|&&(row, _)| row == advanced)
        .map_or(PieceKind::Pawn.value(), |&(_, pawns)| {
            pawns * PieceKind::Pawn.value()
        })
}

/// Value the capturer puts at stake; the king's is scaled down.
#[must_use]
pub fn capturer_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::King => kind.value() / KING_CAPTURER_DIVISOR,
        _ => kind.value(),
    }
}

/// Score `action` for ordering, tagging its categories along the way.
///
/// Sets `heuristic`, `categories` and `best_category`, and returns the score.
pub fn evaluate_heuristic(board: &Board, action: &mut Action) -> i32 {
    let Some(mover) = action.piece else {
        return 0;
    };
    let (from, to) = (action.from, action.to);

    let victim = board.piece_at(to).copied().or_else(|| {
        let en_passant = mover.kind == PieceKind::Pawn && from.col() != to.col();
        en_passant
            .then(|| board.square_contents(to.col() as i32, from.row() as i32))
            .flatten()
            .filter(|p| p.kind == PieceKind::Pawn && p.en_passant)
            .copied()
    });
    let capture = victim
        .filter(|v| v.color != mover.color)
        .map(|v| victim_value(&v) - capturer_value(mover.kind));
    if capture.is_some() {
        action.categories.insert(MoveCategory::Capture);
    }

    let mut after = board.clone();
    after.force_move(from, to, action.promotion);
    let check = match after.checkers().len() {
        0 => 0,
        1 => {
            action.categories.insert(MoveCategory::Check);
            CHECK_BONUS
        }
        _ => {
            action.categories.insert(MoveCategory::DoubleCheck);
            DOUBLE_CHECK_BONUS
        }
    };

    if let Some(capture) = capture.filter(|&c| c >= 0) {
        if check > 0 {
            return finish(action, capture + check);
        }
    }

    let advance = from.delta_to(to).1 * mover.color.pawn_direction();
    action.categories.insert(if advance >= 0 {
        MoveCategory::Forward
    } else {
        MoveCategory::Backward
    });

    let castling = mover.kind == PieceKind::King && from.delta_to(to).0.abs() == 2;
    let multiplier = if castling {
        action.categories.insert(MoveCategory::Castle);
        CASTLE_DEFENSE_MULTIPLIER
    } else {
        1
    };
    let before = board.defenders().len() as i32;
    let defended = after.scan_for_defenders(mover.color).len() as i32;
    let defense = KING_DEFENSE_WEIGHT * multiplier * (defended - before) / 8;

    let promoting = mover.kind == PieceKind::Pawn && to.row() == mover.color.promotion_row();
    let promotion = if promoting {
        action.categories.insert(MoveCategory::Promotion);
        action.promotion.kind().value() - PieceKind::Pawn.value()
    } else {
        0
    };

    let phase = GamePhase::of(board);
    let positional = pst_value(mover.kind, mover.color, to, phase)
        - pst_value(mover.kind, mover.color, from, phase);

    finish(
        action,
        capture.unwrap_or(0) + check + defense + promotion + positional,
    )
}

fn finish(action: &mut Action, score: i32) -> i32 {
    action.heuristic = score;
    action.best_category = action.categories.best();
    score
}

/// Bucket actions by best category and sort each bucket by heuristic.
///
/// The result is ordered worst first so the most promising action is at
/// the end, ready to be popped. Ties keep generation order.
#[must_use]
pub fn order_actions(actions: Vec<Action>) -> Vec<Action> {
    let mut buckets: Vec<Vec<Action>> = vec![Vec::new(); MoveCategory::ORDERED.len()];
    for action in actions {
        let slot = MoveCategory::ORDERED
            .iter()
            .position(|&c| c == action.best_category)
            .unwrap_or(0);
        buckets[slot].push(action);
    }
    buckets
        .into_iter()
        .flat_map(|mut bucket| {
            bucket.sort_by_key(|a| a.heuristic);
            bucket
        })
        .collect()
}
