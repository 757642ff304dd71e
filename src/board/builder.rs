//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than replaying moves.
//!
//! # Example
//! ```
//! use chess_tree::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(4, 0), Color::White, PieceKind::King)
//!     .piece(Square(4, 7), Color::Black, PieceKind::King)
//!     .piece(Square(0, 1), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert!(!board.in_check());
//! ```

use super::error::BoardError;
use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            builder
                .pieces
                .extend(board.pieces_of(color).map(|(_, piece)| *piece));
        }
        builder
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(Piece::new(color, kind, square))
    }

    /// Place a king or rook that has not moved yet and may castle.
    #[must_use]
    pub fn unmoved(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(Piece::unmoved(color, kind, square))
    }

    fn place(mut self, piece: Piece) -> Self {
        self.pieces.retain(|p| p.square != piece.square);
        self.pieces.push(piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.square != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Mark the pawn on `square` as having just advanced two squares.
    #[must_use]
    pub fn en_passant(mut self, square: Square) -> Self {
        for piece in &mut self.pieces {
            if piece.square == square && piece.kind == PieceKind::Pawn {
                piece.en_passant = true;
            }
        }
        self
    }

    /// Allow a color to castle towards the h-file.
    #[must_use]
    pub fn castle_kingside(self, color: Color) -> Self {
        self.allow_castle(color, 7)
    }

    /// Allow a color to castle towards the a-file.
    #[must_use]
    pub fn castle_queenside(self, color: Color) -> Self {
        self.allow_castle(color, 0)
    }

    fn allow_castle(mut self, color: Color, rook_col: usize) -> Self {
        let home = color.home_row();
        for piece in &mut self.pieces {
            let king = piece.kind == PieceKind::King && piece.square == Square(4, home);
            let rook = piece.kind == PieceKind::Rook && piece.square == Square(rook_col, home);
            if piece.color == color && (king || rook) {
                piece.can_castle = true;
            }
        }
        self
    }

    /// Disable castling for both sides.
    #[must_use]
    pub fn no_castling_rights(mut self) -> Self {
        for piece in &mut self.pieces {
            piece.can_castle = false;
        }
        self
    }

    /// Build the board.
    ///
    /// Fails unless each side has exactly one king.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for piece in self.pieces {
            board.add_piece(piece);
        }
        board.turn = self.side_to_move;
        board.verify_integrity()?;
        board.recompute_derived();
        Ok(board)
    }
}
