//! The eight ray directions used by the board scans.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Square;

/// A ray direction seen from White's side of the board.
///
/// Also used to record the axis of a pin, measured from the pinned piece's king.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::UpRight => 1,
            Direction::Up => 2,
            Direction::UpLeft => 3,
            Direction::Left => 4,
            Direction::DownLeft => 5,
            Direction::Down => 6,
            Direction::DownRight => 7,
        }
    }

    /// (column, row) step for one square along this direction.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::UpRight => (1, 1),
            Direction::Up => (0, 1),
            Direction::UpLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::DownLeft => (-1, -1),
            Direction::Down => (0, -1),
            Direction::DownRight => (1, -1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpRight | Direction::UpLeft | Direction::DownLeft | Direction::DownRight
        )
    }

    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::UpRight => Direction::DownLeft,
            Direction::Up => Direction::Down,
            Direction::UpLeft => Direction::DownRight,
            Direction::Left => Direction::Right,
            Direction::DownLeft => Direction::UpRight,
            Direction::Down => Direction::Up,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// The direction leading from `from` to `to` if they share a rank, file
    /// or diagonal.
    #[must_use]
    pub fn between(from: Square, to: Square) -> Option<Direction> {
        let (dc, dr) = from.delta_to(to);
        if (dc, dr) == (0, 0) {
            return None;
        }
        if dc != 0 && dr != 0 && dc.abs() != dr.abs() {
            return None;
        }
        let step = (dc.signum(), dr.signum());
        Direction::ALL.into_iter().find(|dir| dir.delta() == step)
    }
}
