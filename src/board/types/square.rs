//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (column, row).
///
/// Column 0 is file a, row 0 is White's home row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (col, row)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(col: usize, row: usize) -> Option<Self> {
        if col < 8 && row < 8 {
            Some(Square(col, row))
        } else {
            None
        }
    }

    /// Create a square from signed coordinates; out-of-range yields `None`.
    #[must_use]
    pub fn from_coords(col: i32, row: i32) -> Option<Self> {
        if (0..8).contains(&col) && (0..8).contains(&row) {
            Some(Square(col as usize, row as usize))
        } else {
            None
        }
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0
    }

    /// Get the row (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.1
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.1 * 8 + self.0
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx % 8, idx / 8)
    }

    /// Step by a signed offset, staying on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dc: i32, dr: i32) -> Option<Square> {
        Square::from_coords(self.0 as i32 + dc, self.1 as i32 + dr)
    }

    /// Signed (column, row) displacement from `self` to `other`.
    #[inline]
    #[must_use]
    pub const fn delta_to(self, other: Square) -> (i32, i32) {
        (
            other.0 as i32 - self.0 as i32,
            other.1 as i32 - self.1 as i32,
        )
    }

    /// Mirror the square vertically (a1 <-> a8), used for Black's table lookups.
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(self.0, 7 - self.1)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.0 as u8 + b'a') as char, self.1 + 1)
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = SquareError;

    fn try_from((col, row): (i32, i32)) -> Result<Self, Self::Error> {
        if !(0..8).contains(&col) {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        if !(0..8).contains(&row) {
            return Err(SquareError::RowOutOfBounds { row });
        }
        Ok(Square(col as usize, row as usize))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => rank as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(col, row))
    }
}
