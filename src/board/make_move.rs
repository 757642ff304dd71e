use log::error;

use super::error::MoveError;
use super::{Board, Piece, PieceId, PieceKind, PromotionChoice, Square};

/// How [`Board::move_piece`] treats a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MoveMode {
    /// Validate, then apply if legal
    #[default]
    Execute,
    /// Validate only; the board is left untouched
    Probe,
    /// Apply without validation; the caller vouches for legality
    Forced,
}

impl Board {
    /// Move the piece on `from` to `to`, promoting to a queen if a pawn
    /// reaches the far rank.
    ///
    /// Returns whether the move was legal (or, for [`MoveMode::Forced`],
    /// whether there was a piece to move).
    pub fn move_piece(&mut self, from: Square, to: Square, mode: MoveMode) -> bool {
        self.move_piece_promoting(from, to, mode, PromotionChoice::Queen)
    }

    /// [`Board::move_piece`] with an explicit promotion piece.
    pub fn move_piece_promoting(
        &mut self,
        from: Square,
        to: Square,
        mode: MoveMode,
        promotion: PromotionChoice,
    ) -> bool {
        match mode {
            MoveMode::Probe => self.check_move(from, to).is_ok(),
            MoveMode::Execute => self.try_move(from, to, promotion).is_ok(),
            MoveMode::Forced => self.force_move(from, to, promotion),
        }
    }

    /// Validate and apply a move, reporting why it was rejected.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: PromotionChoice,
    ) -> Result<(), MoveError> {
        self.check_move(from, to)?;
        let id = self.id_at(from).ok_or(MoveError::NoPiece { square: from })?;
        self.perform_move(id, to, promotion);
        Ok(())
    }

    /// Apply a move without validation. The turn flips regardless of whose
    /// piece moved.
    pub fn force_move(&mut self, from: Square, to: Square, promotion: PromotionChoice) -> bool {
        let Some(id) = self.id_at(from) else {
            return false;
        };
        self.perform_move(id, to, promotion);
        true
    }

    pub(crate) fn perform_move(&mut self, id: PieceId, dest: Square, promotion: PromotionChoice) {
        let piece = *self.piece(id);
        let from = piece.square;

        let mut victim = self.id_at(dest);
        if piece.kind == PieceKind::Pawn && from.col() != dest.col() && victim.is_none() {
            let passed = Square(dest.col(), from.row());
            victim = self
                .id_at(passed)
                .filter(|&v| self.piece(v).color != piece.color);
            if victim.is_some() {
                self.lookup[passed.col()][passed.row()] = None;
            }
        }

        if piece.kind == PieceKind::King && from.delta_to(dest).0.abs() == 2 {
            let row = from.row();
            let (rook_from, rook_to) = if dest.col() > from.col() {
                (Square(7, row), Square(dest.col() - 1, row))
            } else {
                (Square(0, row), Square(dest.col() + 1, row))
            };
            if let Some(rook) = self.id_at(rook_from) {
                self.relocate(rook, rook_to);
            }
        }

        if let Some(victim) = victim.filter(|&v| v != id) {
            self.piece_mut(victim).captured = true;
        }
        self.relocate(id, dest);

        if piece.kind == PieceKind::Pawn {
            self.piece_mut(id).en_passant = from.delta_to(dest).1.abs() == 2;
            if dest.row() == piece.color.promotion_row() {
                self.promote(id, promotion);
            }
        }

        self.finish_turn();
    }

    fn relocate(&mut self, id: PieceId, dest: Square) {
        let from = self.piece(id).square;
        if self.id_at(from) == Some(id) {
            self.lookup[from.col()][from.row()] = None;
        }
        self.lookup[dest.col()][dest.row()] = Some(id);
        let piece = self.piece_mut(id);
        piece.square = dest;
        piece.can_castle = false;
    }

    /// Replace the pawn with a fresh piece of the chosen kind.
    fn promote(&mut self, pawn: PieceId, choice: PromotionChoice) {
        let old = *self.piece(pawn);
        self.piece_mut(pawn).captured = true;
        let promoted = Piece::new(old.color, choice.kind(), old.square);
        self.add_piece(promoted);
    }

    fn finish_turn(&mut self) {
        self.turn = self.turn.opponent();
        // en-passant eligibility lasts exactly one reply
        let pawns: Vec<PieceId> = self.piece_ids(self.turn, PieceKind::Pawn).collect();
        for id in pawns {
            self.piece_mut(id).en_passant = false;
        }
        self.recompute_derived();

        if cfg!(debug_assertions) {
            if let Err(err) = self.verify_integrity() {
                error!("board integrity check failed after move: {err}");
            }
        }
    }
}
