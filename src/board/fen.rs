use super::error::FenError;
use super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Move counters are accepted and ignored. Castling letters mark the
    /// matching king and rook as castle-eligible; an en-passant target marks
    /// the pawn that just passed it.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let row = 7 - rank_idx;
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: col + 1,
                    });
                }
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.add_piece(Piece::new(color, kind, Square(col, row)));
                col += 1;
            }
            if col > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: col,
                });
            }
        }

        board.turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            let (color, rook_col) = match c {
                'K' => (Color::White, 7),
                'Q' => (Color::White, 0),
                'k' => (Color::Black, 7),
                'q' => (Color::Black, 0),
                '-' => continue,
                _ => return Err(FenError::InvalidCastling { char: c }),
            };
            board.grant_castle(color, rook_col);
        }

        if parts[3] != "-" {
            let target: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            // the pawn that double-stepped belongs to the side that just moved
            let mover = board.turn.opponent();
            let pawn_sq = target
                .offset(0, mover.pawn_direction())
                .and_then(|sq| board.id_at(sq))
                .filter(|&id| {
                    let p = board.piece(id);
                    p.kind == PieceKind::Pawn && p.color == mover
                })
                .ok_or_else(|| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?;
            board.piece_mut(pawn_sq).en_passant = true;
        }

        board.verify_integrity()?;
        board.recompute_derived();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    fn grant_castle(&mut self, color: Color, rook_col: usize) {
        let home = color.home_row();
        for square in [Square(4, home), Square(rook_col, home)] {
            if let Some(id) = self.id_at(square) {
                let piece = self.piece_mut(id);
                if piece.color == color && matches!(piece.kind, PieceKind::King | PieceKind::Rook)
                {
                    piece.can_castle = true;
                }
            }
        }
    }
}
