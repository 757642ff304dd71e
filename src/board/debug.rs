use std::fmt;

use super::{Board, PieceId, Square};

/// Text diagram of the position, White at the bottom.
///
/// ```text
///   +---+---+---+---+---+---+---+---+
/// 8 | r | n | b | q | k | b | n | r |
/// ...
///     a   b   c   d   e   f   g   h
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in (0..8).rev() {
            write!(f, "{} |", row + 1)?;
            for col in 0..8 {
                let ch = self
                    .piece_at(Square(col, row))
                    .map_or(' ', |p| p.kind.to_fen_char(p.color));
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{} to move", self.turn)?;
        if self.checkmate {
            write!(f, " (checkmate)")?;
        } else if self.in_check() {
            write!(f, " (check)")?;
        }
        Ok(())
    }
}

impl Board {
    /// One-line summary of the derived tactical state, for logging.
    #[must_use]
    pub fn describe_derived(&self) -> String {
        let squares = |list: &[Square]| {
            list.iter()
                .map(Square::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };
        let pieces = |ids: &[PieceId]| {
            ids.iter()
                .map(|&id| self.piece(id).square.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        format!(
            "checkers=[{}] pins={} escapes=[{}] interpose=[{}] saviors=[{}]",
            pieces(self.checkers()),
            self.pins().len(),
            squares(self.escape_squares()),
            squares(self.interposition_squares()),
            pieces(self.saviors()),
        )
    }
}
