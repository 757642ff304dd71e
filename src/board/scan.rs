//! Attack scans and the per-turn derived state built from them.
//!
//! Every scan reads the lookup table only. The king-aware variants take an
//! `ignore` square that is treated as empty, so a king stepping backwards
//! along a checking ray is still seen as attacked without mutating the board.

use super::attack_tables::{king_targets, knight_targets, ray, squares_between};
use super::state::{DerivedState, Pin};
use super::{Board, Color, Direction, PieceId, PieceKind, Square};

impl Board {
    /// First occupied square along `dir` from `from`, skipping `ignore`.
    ///
    /// Returns the occupant and its distance in steps.
    pub(crate) fn first_along(
        &self,
        from: Square,
        dir: Direction,
        ignore: Option<Square>,
    ) -> Option<(PieceId, usize)> {
        ray(from, dir)
            .iter()
            .enumerate()
            .filter(|&(_, &sq)| Some(sq) != ignore)
            .find_map(|(step, &sq)| self.id_at(sq).map(|id| (id, step + 1)))
    }

    /// Enemy pieces of `defender` attacking `target`.
    #[must_use]
    pub fn attackers_of(&self, target: Square, defender: Color) -> Vec<PieceId> {
        self.attackers_ignoring(target, defender, None)
    }

    /// [`Board::attackers_of`] for a signed coordinate; off-board yields nothing.
    #[must_use]
    pub fn attackers_at(&self, col: i32, row: i32, defender: Color) -> Vec<PieceId> {
        Square::from_coords(col, row)
            .map(|sq| self.attackers_of(sq, defender))
            .unwrap_or_default()
    }

    /// Attackers of `target` with the piece on `ignore` lifted off the board.
    pub(crate) fn attackers_ignoring(
        &self,
        target: Square,
        defender: Color,
        ignore: Option<Square>,
    ) -> Vec<PieceId> {
        let mut attackers = Vec::new();

        for dir in Direction::ALL {
            let Some((id, distance)) = self.first_along(target, dir, ignore) else {
                continue;
            };
            let piece = self.piece(id);
            if piece.color == defender {
                continue;
            }
            let hits = match piece.kind {
                PieceKind::King => distance == 1,
                PieceKind::Pawn => {
                    // a pawn attacks towards its own forward direction
                    distance == 1
                        && dir.is_diagonal()
                        && target.row() as i32 - piece.row() as i32
                            == piece.color.pawn_direction()
                }
                PieceKind::Knight => false,
                kind if dir.is_diagonal() => kind.attacks_diagonally(),
                kind => kind.attacks_straight(),
            };
            if hits {
                attackers.push(id);
            }
        }

        for &sq in knight_targets(target) {
            if Some(sq) == ignore {
                continue;
            }
            if let Some(id) = self.id_at(sq) {
                let piece = self.piece(id);
                if piece.color != defender && piece.kind == PieceKind::Knight {
                    attackers.push(id);
                }
            }
        }

        attackers
    }

    /// Whether the king of `color` could stand on `target` unattacked.
    #[must_use]
    pub fn is_safe_for_king(&self, target: Square, color: Color) -> bool {
        let king = self.king_square(color);
        self.attackers_ignoring(target, color, king).is_empty()
    }

    /// Nearest friendly piece on each of the eight rays from the king.
    #[must_use]
    pub fn scan_for_defenders(&self, color: Color) -> Vec<(PieceId, Direction)> {
        let Some(king) = self.king_square(color) else {
            return Vec::new();
        };
        Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                let (id, _) = self.first_along(king, dir, None)?;
                (self.piece(id).color == color).then_some((id, dir))
            })
            .collect()
    }

    /// Defenders with an enemy slider of matching geometry directly behind them.
    #[must_use]
    pub fn scan_for_pins(&self, color: Color) -> Vec<Pin> {
        self.pins_from_defenders(color, &self.scan_for_defenders(color))
    }

    fn pins_from_defenders(&self, color: Color, defenders: &[(PieceId, Direction)]) -> Vec<Pin> {
        defenders
            .iter()
            .filter_map(|&(pinned, direction)| {
                let (pinner, _) = self.first_along(self.piece(pinned).square, direction, None)?;
                let piece = self.piece(pinner);
                let aligned = if direction.is_diagonal() {
                    piece.kind.attacks_diagonally()
                } else {
                    piece.kind.attacks_straight()
                };
                (piece.color != color && aligned).then_some(Pin {
                    pinned,
                    pinner,
                    direction,
                })
            })
            .collect()
    }

    /// Adjacent squares the king of `color` could move to.
    ///
    /// A square qualifies if it is empty or enemy-held and not attacked once
    /// the king has left its current square.
    #[must_use]
    pub fn scan_for_escape_squares(&self, color: Color) -> Vec<Square> {
        let Some(king) = self.king_square(color) else {
            return Vec::new();
        };
        king_targets(king)
            .iter()
            .copied()
            .filter(|&sq| self.piece_at(sq).map_or(true, |p| p.color != color))
            .filter(|&sq| self.attackers_ignoring(sq, color, Some(king)).is_empty())
            .collect()
    }

    /// Squares that resolve a check from `checker` against the king of `color`.
    ///
    /// The checker's own square comes last; for sliders the squares between
    /// king and checker come first, nearest the king first.
    #[must_use]
    pub fn attack_vector(&self, color: Color, checker: PieceId) -> Vec<Square> {
        let checker_sq = self.piece(checker).square;
        let mut squares = match (self.king_square(color), self.piece(checker).kind.is_slider()) {
            (Some(king), true) => squares_between(king, checker_sq),
            _ => Vec::new(),
        };
        squares.push(checker_sq);
        squares
    }

    /// Friendly non-king pieces that can reach any of `squares`.
    ///
    /// Pinned pieces never qualify. A pawn that can take a checking pawn
    /// en passant counts as well.
    #[must_use]
    pub fn scan_for_saviors(
        &self,
        color: Color,
        squares: &[Square],
        pins: &[Pin],
        checker: Option<PieceId>,
    ) -> Vec<PieceId> {
        let pinned = |id: PieceId| pins.iter().any(|pin| pin.pinned == id);
        let mut saviors: Vec<PieceId> = Vec::new();
        let add = |id: PieceId, saviors: &mut Vec<PieceId>| {
            if !pinned(id) && !saviors.contains(&id) {
                saviors.push(id);
            }
        };

        for &target in squares {
            let occupied = !self.is_empty(target);
            for dir in Direction::ALL {
                let Some((id, _)) = self.first_along(target, dir, None) else {
                    continue;
                };
                let piece = self.piece(id);
                if piece.color != color || piece.kind == PieceKind::King {
                    continue;
                }
                let reaches = match piece.kind {
                    PieceKind::Pawn if occupied => piece.is_capture_shape(target),
                    PieceKind::Pawn => piece.is_push_shape(target),
                    _ => piece.shape_legal_to(target),
                };
                if reaches {
                    add(id, &mut saviors);
                }
            }
            for &sq in knight_targets(target) {
                if let Some(id) = self.id_at(sq) {
                    let piece = self.piece(id);
                    if piece.color == color && piece.kind == PieceKind::Knight {
                        add(id, &mut saviors);
                    }
                }
            }
        }

        if let Some(checker) = checker {
            let victim = self.piece(checker);
            if victim.kind == PieceKind::Pawn && victim.en_passant && victim.color != color {
                for dc in [-1, 1] {
                    let Some(sq) = victim.square.offset(dc, 0) else {
                        continue;
                    };
                    if let Some(id) = self.id_at(sq) {
                        let piece = self.piece(id);
                        if piece.color == color && piece.kind == PieceKind::Pawn {
                            add(id, &mut saviors);
                        }
                    }
                }
            }
        }

        saviors
    }

    /// Rebuild checkers, pins, escapes, interpositions and saviors for the
    /// side to move, then settle the checkmate flag.
    pub(crate) fn recompute_derived(&mut self) {
        let color = self.turn;
        self.derived = DerivedState::default();
        self.checkmate = false;
        let Some(king) = self.king_square(color) else {
            return;
        };

        let checkers = self.attackers_of(king, color);
        let escapes = self.scan_for_escape_squares(color);
        let defenders = self.scan_for_defenders(color);
        let pins = self.pins_from_defenders(color, &defenders);

        let (interpositions, saviors) = match checkers.as_slice() {
            [checker] => {
                let squares = self.attack_vector(color, *checker);
                let saviors = self.scan_for_saviors(color, &squares, &pins, Some(*checker));
                (squares, saviors)
            }
            _ => (Vec::new(), Vec::new()),
        };

        self.checkmate = !checkers.is_empty() && escapes.is_empty() && saviors.is_empty();
        self.derived = DerivedState {
            checkers,
            pins,
            defenders,
            escapes,
            interpositions,
            saviors,
        };
    }
}
