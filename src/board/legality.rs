//! Move legality.
//!
//! [`Board::check_move`] runs a fixed sequence of gates and reports the first
//! one that fails:
//!
//! 1. movement shape
//! 2. destination not held by a friendly piece
//! 3. clear path
//! 4. pawn and castling specials
//! 5. king not stepping into attack
//! 6. pending check resolved
//! 7. pin axis respected
//!
//! Validation never mutates the board.

use super::attack_tables::{king_targets, knight_targets, ray, squares_between};
use super::error::MoveError;
use super::{Board, Direction, Piece, PieceId, PieceKind, Square};

impl Board {
    /// Validate moving the piece on `from` to `to` for the side to move.
    pub fn check_move(&self, from: Square, to: Square) -> Result<(), MoveError> {
        let id = self.id_at(from).ok_or(MoveError::NoPiece { square: from })?;
        let color = self.piece(id).color;
        if color != self.turn {
            return Err(MoveError::WrongTurn { color });
        }
        if self.checkmate {
            return Err(MoveError::GameOver);
        }
        self.movement_logic(id, to)
    }

    /// The legality gates for one piece and destination.
    pub(crate) fn movement_logic(&self, id: PieceId, dest: Square) -> Result<(), MoveError> {
        let piece = *self.piece(id);

        if !piece.shape_legal_to(dest) {
            return Err(MoveError::IllegalShape { kind: piece.kind });
        }

        let target = self.piece_at(dest);
        if target.is_some_and(|t| t.color == piece.color) {
            return Err(MoveError::FriendlyFire);
        }

        self.check_path(&piece, dest)?;

        let castling = piece.is_castle_shape(dest);
        let en_passant = self.check_special(&piece, dest)?;

        if piece.kind == PieceKind::King
            && !castling
            && !self
                .attackers_ignoring(dest, piece.color, Some(piece.square))
                .is_empty()
        {
            return Err(MoveError::KingIntoAttack);
        }

        self.check_resolves_check(id, &piece, dest, en_passant)?;
        self.check_pin(id, &piece, dest)
    }

    fn check_path(&self, piece: &Piece, dest: Square) -> Result<(), MoveError> {
        let blocked = match piece.kind {
            PieceKind::Knight => false,
            PieceKind::Pawn if piece.is_push_shape(dest) => {
                !self.is_empty(dest)
                    || squares_between(piece.square, dest)
                        .iter()
                        .any(|&sq| !self.is_empty(sq))
            }
            PieceKind::Pawn => false,
            _ => squares_between(piece.square, dest)
                .iter()
                .any(|&sq| !self.is_empty(sq)),
        };
        if blocked {
            Err(MoveError::PathBlocked)
        } else {
            Ok(())
        }
    }

    /// Pawn captures and castling. Returns the en-passant victim, if any.
    fn check_special(&self, piece: &Piece, dest: Square) -> Result<Option<PieceId>, MoveError> {
        if piece.is_capture_shape(dest) && self.is_empty(dest) {
            return self.en_passant_victim(piece, dest).map(Some);
        }
        if piece.is_castle_shape(dest) {
            self.check_castle(piece, dest)?;
        }
        Ok(None)
    }

    fn en_passant_victim(&self, piece: &Piece, dest: Square) -> Result<PieceId, MoveError> {
        let passed = Square(dest.col(), piece.row());
        let victim = self
            .id_at(passed)
            .filter(|&id| {
                let v = self.piece(id);
                v.kind == PieceKind::Pawn && v.color != piece.color && v.en_passant
            })
            .ok_or(MoveError::InvalidEnPassant)?;

        if self.en_passant_exposes_king(piece, dest, passed) {
            return Err(MoveError::InvalidEnPassant);
        }
        Ok(victim)
    }

    /// Both pawns leave the same rank at once; a slider behind them may then
    /// see the king.
    fn en_passant_exposes_king(&self, piece: &Piece, dest: Square, passed: Square) -> bool {
        let mut scratch = self.clone();
        let (Some(mover), Some(victim)) = (scratch.id_at(piece.square), scratch.id_at(passed))
        else {
            return false;
        };
        scratch.lookup[piece.col()][piece.row()] = None;
        scratch.lookup[passed.col()][passed.row()] = None;
        scratch.piece_mut(victim).captured = true;
        scratch.lookup[dest.col()][dest.row()] = Some(mover);
        scratch.piece_mut(mover).square = dest;

        scratch
            .king_square(piece.color)
            .is_some_and(|king| !scratch.attackers_of(king, piece.color).is_empty())
    }

    fn check_castle(&self, king: &Piece, dest: Square) -> Result<(), MoveError> {
        if self.in_check() {
            return Err(MoveError::InvalidCastle);
        }
        let row = king.row();
        let rook_col = if dest.col() > king.col() { 7 } else { 0 };
        let rook_sq = Square(rook_col, row);
        let rook_ok = self.piece_at(rook_sq).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && rook.can_castle
        });
        if !rook_ok {
            return Err(MoveError::InvalidCastle);
        }
        if squares_between(king.square, rook_sq)
            .iter()
            .any(|&sq| !self.is_empty(sq))
        {
            return Err(MoveError::InvalidCastle);
        }
        let transit = squares_between(king.square, dest)
            .into_iter()
            .chain(std::iter::once(dest));
        for sq in transit {
            if !self.is_safe_for_king(sq, king.color) {
                return Err(MoveError::InvalidCastle);
            }
        }
        Ok(())
    }

    fn check_resolves_check(
        &self,
        id: PieceId,
        piece: &Piece,
        dest: Square,
        en_passant: Option<PieceId>,
    ) -> Result<(), MoveError> {
        let checkers = self.checkers();
        if checkers.is_empty() {
            return Ok(());
        }
        if piece.kind == PieceKind::King {
            return if self.escape_squares().contains(&dest) {
                Ok(())
            } else {
                Err(MoveError::UnresolvedCheck)
            };
        }
        if checkers.len() > 1 || !self.is_savior(id) {
            return Err(MoveError::UnresolvedCheck);
        }
        let blocks = self.interposition_squares().contains(&dest);
        let takes_checker = en_passant.is_some_and(|victim| victim == checkers[0]);
        if blocks || takes_checker {
            Ok(())
        } else {
            Err(MoveError::UnresolvedCheck)
        }
    }

    fn check_pin(&self, id: PieceId, piece: &Piece, dest: Square) -> Result<(), MoveError> {
        let Some(pin) = self.pin_of(id) else {
            return Ok(());
        };
        if piece.kind == PieceKind::Knight {
            return Err(MoveError::Pinned);
        }
        let on_axis = self
            .king_square(piece.color)
            .and_then(|king| Direction::between(king, dest))
            == Some(pin.direction);
        if on_axis {
            Ok(())
        } else {
            Err(MoveError::Pinned)
        }
    }

    /// Squares a piece could plausibly reach, before any legality filtering.
    #[must_use]
    pub fn candidate_destinations(&self, id: PieceId) -> Vec<Square> {
        let piece = self.piece(id);
        let from = piece.square;
        match piece.kind {
            PieceKind::Pawn => {
                let forward = piece.color.pawn_direction();
                [(0, forward), (0, 2 * forward), (-1, forward), (1, forward)]
                    .into_iter()
                    .filter_map(|(dc, dr)| from.offset(dc, dr))
                    .collect()
            }
            PieceKind::Knight => knight_targets(from).to_vec(),
            PieceKind::King => {
                let mut squares = king_targets(from).to_vec();
                if piece.can_castle {
                    squares.extend([-2, 2].into_iter().filter_map(|dc| from.offset(dc, 0)));
                }
                squares
            }
            kind => Direction::ALL
                .into_iter()
                .filter(|dir| {
                    if dir.is_diagonal() {
                        kind.attacks_diagonally()
                    } else {
                        kind.attacks_straight()
                    }
                })
                .flat_map(|dir| {
                    let line = ray(from, dir);
                    let reach = line
                        .iter()
                        .position(|&sq| !self.is_empty(sq))
                        .map_or(line.len(), |idx| idx + 1);
                    line[..reach].iter().copied()
                })
                .collect(),
        }
    }

    /// Every legal (from, to) pair for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        if self.checkmate {
            return Vec::new();
        }
        self.pieces_of(self.turn)
            .flat_map(|(id, piece)| {
                self.candidate_destinations(id)
                    .into_iter()
                    .filter(move |&dest| self.movement_logic(id, dest).is_ok())
                    .map(move |dest| (piece.square, dest))
            })
            .collect()
    }

    /// Not in check and nothing to play.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && self.legal_moves().is_empty()
    }
}
