//! Piece, piece-kind and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Square;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Knights, bishops and rooks: the pieces the phase test counts.
    pub const MINOR_AND_ROOK: [PieceKind; 3] =
        [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Parse a piece kind from a character (case-insensitive: p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Standard material value.
    ///
    /// Pawn=100, Knight=300, Bishop=300, Rook=500, Queen=900, King=100000.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 100_000,
        }
    }

    /// Returns true if this piece slides diagonally (Bishop, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_diagonally(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Queen)
    }

    /// Returns true if this piece slides along ranks/files (Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_straight(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns true if this piece is a slider (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

/// The piece a pawn becomes on the far rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PromotionChoice {
    Knight,
    Bishop,
    Rook,
    #[default]
    Queen,
}

impl PromotionChoice {
    /// Promotion choices in order of typical preference (queen first)
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ];

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Knight => PieceKind::Knight,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Queen => PieceKind::Queen,
        }
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Home row for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn home_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting row (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion row (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Stable handle to a piece in a board's arena.
///
/// Handles are only meaningful for the board that issued them; copying a
/// board compacts its arena and may renumber them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One chess piece.
///
/// `en_passant` is only meaningful for pawns and `can_castle` only for rooks
/// and kings. Equality is structural over color, kind, square and captured
/// flag; the eligibility flags are ignored.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
    pub captured: bool,
    pub en_passant: bool,
    pub can_castle: bool,
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && self.kind == other.kind
            && self.square == other.square
            && self.captured == other.captured
    }
}

impl Eq for Piece {}

impl Piece {
    /// A fresh, uncaptured piece with no eligibility flags set.
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind, square: Square) -> Self {
        Piece {
            color,
            kind,
            square,
            captured: false,
            en_passant: false,
            can_castle: false,
        }
    }

    /// A piece as it stands in the initial position: kings and rooks may castle.
    #[must_use]
    pub const fn unmoved(color: Color, kind: PieceKind, square: Square) -> Self {
        let mut piece = Piece::new(color, kind, square);
        piece.can_castle = matches!(kind, PieceKind::Rook | PieceKind::King);
        piece
    }

    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.square.col()
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.square.row()
    }

    /// Context-free movement geometry test.
    ///
    /// Never consults other pieces. Rejects out-of-bounds destinations and
    /// no-op moves, then applies the piece kind's shape rules. Pawn captures
    /// are accepted as a shape; whether a victim is there is the board's call.
    #[must_use]
    pub fn shape_legal(&self, dest_col: i32, dest_row: i32) -> bool {
        let Some(dest) = Square::from_coords(dest_col, dest_row) else {
            return false;
        };
        self.shape_legal_to(dest)
    }

    /// [`Piece::shape_legal`] for an in-bounds square.
    #[must_use]
    pub fn shape_legal_to(&self, dest: Square) -> bool {
        if dest == self.square {
            return false;
        }
        let (dc, dr) = self.square.delta_to(dest);
        let (adc, adr) = (dc.abs(), dr.abs());

        match self.kind {
            PieceKind::Pawn => self.is_push_shape(dest) || self.is_capture_shape(dest),
            PieceKind::Knight => adc + adr == 3 && adc != 0 && adr != 0,
            PieceKind::Bishop => adc == adr,
            PieceKind::Rook => (dc == 0) != (dr == 0),
            PieceKind::Queen => adc == adr || (dc == 0) != (dr == 0),
            PieceKind::King => adc.max(adr) == 1 || self.is_castle_shape(dest),
        }
    }

    /// Straight-ahead pawn step: one square, or two from the starting row.
    #[must_use]
    pub fn is_push_shape(&self, dest: Square) -> bool {
        if self.kind != PieceKind::Pawn {
            return false;
        }
        let (dc, dr) = self.square.delta_to(dest);
        let forward = self.color.pawn_direction();
        dc == 0
            && (dr == forward
                || (dr == 2 * forward && self.row() == self.color.pawn_start_row()))
    }

    /// Diagonal one-square forward pawn step.
    #[must_use]
    pub fn is_capture_shape(&self, dest: Square) -> bool {
        if self.kind != PieceKind::Pawn {
            return false;
        }
        let (dc, dr) = self.square.delta_to(dest);
        dc.abs() == 1 && dr == self.color.pawn_direction()
    }

    /// Two-square king step along the home row while still castle-eligible.
    #[must_use]
    pub fn is_castle_shape(&self, dest: Square) -> bool {
        if self.kind != PieceKind::King || !self.can_castle {
            return false;
        }
        let (dc, dr) = self.square.delta_to(dest);
        let home = self.color.home_row();
        dr == 0 && dc.abs() == 2 && self.row() == home && self.col() == 4
    }
}
