use super::error::BoardError;
use super::{Color, Direction, Piece, PieceId, PieceKind, Square};

/// A piece standing between its own king and an enemy slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    /// The pinned piece
    pub pinned: PieceId,
    /// The enemy slider holding the pin
    pub pinner: PieceId,
    /// Ray from the king through the pinned piece
    pub direction: Direction,
}

/// Per-turn tactical state for the side to move.
///
/// Rebuilt from scratch after every move; never updated incrementally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DerivedState {
    pub(crate) checkers: Vec<PieceId>,
    pub(crate) pins: Vec<Pin>,
    pub(crate) defenders: Vec<(PieceId, Direction)>,
    pub(crate) escapes: Vec<Square>,
    pub(crate) interpositions: Vec<Square>,
    pub(crate) saviors: Vec<PieceId>,
}

/// Complete game position.
///
/// Pieces live in an arena and are referred to by [`PieceId`]. Captured
/// pieces stay in the arena with `captured` set until the board is cloned,
/// which compacts them away.
#[derive(Debug)]
pub struct Board {
    pub(crate) arena: Vec<Piece>,
    pub(crate) rosters: [[Vec<PieceId>; 6]; 2],
    pub(crate) lookup: [[Option<PieceId>; 8]; 8], // [col][row]
    pub(crate) turn: Color,
    pub(crate) checkmate: bool,
    pub(crate) derived: DerivedState,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// The standard initial position with White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.init();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            arena: Vec::with_capacity(32),
            rosters: Default::default(),
            lookup: [[None; 8]; 8],
            turn: Color::White,
            checkmate: false,
            derived: DerivedState::default(),
        }
    }

    /// Clear the board and set up the initial position.
    pub fn init(&mut self) {
        *self = Board::empty();
        for color in Color::BOTH {
            let home = color.home_row();
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                self.add_piece(Piece::unmoved(color, kind, Square(col, home)));
            }
            for col in 0..8 {
                let square = Square(col, color.pawn_start_row());
                self.add_piece(Piece::new(color, PieceKind::Pawn, square));
            }
        }
        self.recompute_derived();
    }

    /// Put a piece into the arena, its roster and the lookup table.
    ///
    /// Does not refresh derived state.
    pub(crate) fn add_piece(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.arena.len());
        self.arena.push(piece);
        self.rosters[piece.color.index()][piece.kind.index()].push(id);
        if !piece.captured {
            self.lookup[piece.col()][piece.row()] = Some(id);
        }
        id
    }

    #[inline]
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.arena[id.0]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.arena[id.0]
    }

    /// Handle of the piece standing on `square`, if any.
    #[inline]
    #[must_use]
    pub fn id_at(&self, square: Square) -> Option<PieceId> {
        self.lookup[square.col()][square.row()]
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.id_at(square).map(|id| self.piece(id))
    }

    /// Occupant of a signed coordinate; off-board coordinates are empty.
    #[must_use]
    pub fn square_contents(&self, col: i32, row: i32) -> Option<&Piece> {
        Square::from_coords(col, row).and_then(|sq| self.piece_at(sq))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.id_at(square).is_none()
    }

    /// Live piece handles of one color and kind, in roster order.
    pub fn piece_ids(&self, color: Color, kind: PieceKind) -> impl Iterator<Item = PieceId> + '_ {
        self.rosters[color.index()][kind.index()]
            .iter()
            .copied()
            .filter(move |&id| !self.arena[id.0].captured)
    }

    /// Live pieces of one color and kind.
    pub fn pieces(&self, color: Color, kind: PieceKind) -> impl Iterator<Item = &Piece> + '_ {
        self.piece_ids(color, kind).map(move |id| self.piece(id))
    }

    /// Every live piece of a color, pawns first and the king last.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        PieceKind::ALL.into_iter().flat_map(move |kind| {
            self.piece_ids(color, kind).map(move |id| (id, self.piece(id)))
        })
    }

    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.piece_ids(color, kind).count()
    }

    #[must_use]
    pub fn king_id(&self, color: Color) -> Option<PieceId> {
        self.piece_ids(color, PieceKind::King).next()
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_id(color).map(|id| self.piece(id).square)
    }

    #[inline]
    #[must_use]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    /// Force the side to move and refresh derived state.
    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
        self.recompute_derived();
    }

    /// True when the side to move is checkmated.
    #[inline]
    #[must_use]
    pub const fn checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        !self.derived.checkers.is_empty()
    }

    /// Enemy pieces giving check to the side to move.
    #[must_use]
    pub fn checkers(&self) -> &[PieceId] {
        &self.derived.checkers
    }

    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.derived.pins
    }

    #[must_use]
    pub fn pin_of(&self, id: PieceId) -> Option<&Pin> {
        self.derived.pins.iter().find(|pin| pin.pinned == id)
    }

    /// Nearest friendly piece on each ray from the side to move's king.
    #[must_use]
    pub fn defenders(&self) -> &[(PieceId, Direction)] {
        &self.derived.defenders
    }

    /// Adjacent squares the king of the side to move can safely reach.
    #[must_use]
    pub fn escape_squares(&self) -> &[Square] {
        &self.derived.escapes
    }

    /// Squares that resolve a single check by interposition or capture.
    #[must_use]
    pub fn interposition_squares(&self) -> &[Square] {
        &self.derived.interpositions
    }

    /// Non-king pieces able to resolve a single check.
    #[must_use]
    pub fn saviors(&self) -> &[PieceId] {
        &self.derived.saviors
    }

    #[must_use]
    pub fn is_savior(&self, id: PieceId) -> bool {
        self.derived.saviors.contains(&id)
    }

    #[must_use]
    pub fn derived(&self) -> &DerivedState {
        &self.derived
    }

    /// Number of arena slots, including captured pieces.
    #[must_use]
    pub fn arena_len(&self) -> usize {
        self.arena.len()
    }

    /// Check that rosters, lookup table and arena agree, and that each side
    /// has exactly one king.
    pub fn verify_integrity(&self) -> Result<(), BoardError> {
        for color in Color::BOTH {
            match self.count(color, PieceKind::King) {
                0 => return Err(BoardError::MissingKing { color }),
                1 => {}
                found => return Err(BoardError::TooManyKings { color, found }),
            }
        }

        let mut seen = 0usize;
        for color in Color::BOTH {
            for (id, piece) in self.pieces_of(color) {
                if self.id_at(piece.square) != Some(id) {
                    return Err(BoardError::LookupDesync {
                        square: piece.square,
                    });
                }
                seen += 1;
            }
        }

        for square in Square::all() {
            if let Some(id) = self.id_at(square) {
                let piece = self.arena.get(id.0);
                if !piece.is_some_and(|p| !p.captured && p.square == square) {
                    return Err(BoardError::LookupDesync { square });
                }
            }
        }

        let occupied = Square::all().filter(|&sq| !self.is_empty(sq)).count();
        if occupied != seen {
            return Err(BoardError::LookupDesync {
                square: Square(0, 0),
            });
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Copies are compacted: captured pieces are dropped and the surviving
/// pieces renumbered, with every handle remapped.
impl Clone for Board {
    fn clone(&self) -> Self {
        let mut remap: Vec<Option<PieceId>> = vec![None; self.arena.len()];
        let mut arena = Vec::with_capacity(self.arena.len());
        for (idx, piece) in self.arena.iter().enumerate() {
            if !piece.captured {
                remap[idx] = Some(PieceId(arena.len()));
                arena.push(*piece);
            }
        }
        let map = |id: PieceId| remap[id.0];

        let mut rosters: [[Vec<PieceId>; 6]; 2] = Default::default();
        for (color_idx, per_color) in self.rosters.iter().enumerate() {
            for (kind_idx, roster) in per_color.iter().enumerate() {
                rosters[color_idx][kind_idx] = roster.iter().filter_map(|&id| map(id)).collect();
            }
        }

        let mut lookup = [[None; 8]; 8];
        for (col, column) in self.lookup.iter().enumerate() {
            for (row, slot) in column.iter().enumerate() {
                lookup[col][row] = slot.and_then(map);
            }
        }

        let derived = DerivedState {
            checkers: self.derived.checkers.iter().filter_map(|&id| map(id)).collect(),
            pins: self
                .derived
                .pins
                .iter()
                .filter_map(|pin| {
                    Some(Pin {
                        pinned: map(pin.pinned)?,
                        pinner: map(pin.pinner)?,
                        direction: pin.direction,
                    })
                })
                .collect(),
            defenders: self
                .derived
                .defenders
                .iter()
                .filter_map(|&(id, dir)| Some((map(id)?, dir)))
                .collect(),
            escapes: self.derived.escapes.clone(),
            interpositions: self.derived.interpositions.clone(),
            saviors: self.derived.saviors.iter().filter_map(|&id| map(id)).collect(),
        };

        Board {
            arena,
            rosters,
            lookup,
            turn: self.turn,
            checkmate: self.checkmate,
            derived,
        }
    }
}

/// Positions compare by side to move and live piece placement.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn
            && Square::all().all(|sq| match (self.piece_at(sq), other.piece_at(sq)) {
                (None, None) => true,
                (Some(a), Some(b)) => a == b,
                _ => false,
            })
    }
}

impl Eq for Board {}
