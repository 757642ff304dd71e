use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Piece, PromotionChoice, Square};

/// Coarse tag used to bucket actions for ordering.
///
/// Declared from least to most promising; the best category of an action is
/// the greatest tag it carries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveCategory {
    Backward,
    Forward,
    Check,
    DoubleCheck,
    Castle,
    Capture,
    Promotion,
    /// Stalemate sentinel
    Draw,
}

impl MoveCategory {
    /// Ordering buckets, least promising first.
    pub const ORDERED: [MoveCategory; 7] = [
        MoveCategory::Backward,
        MoveCategory::Forward,
        MoveCategory::Check,
        MoveCategory::DoubleCheck,
        MoveCategory::Castle,
        MoveCategory::Capture,
        MoveCategory::Promotion,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of [`MoveCategory`] tags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategorySet(u8);

impl CategorySet {
    #[inline]
    pub fn insert(&mut self, category: MoveCategory) {
        self.0 |= category.bit();
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, category: MoveCategory) -> bool {
        self.0 & category.bit() != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The most promising tag present, `Backward` when empty.
    #[must_use]
    pub fn best(self) -> MoveCategory {
        if self.contains(MoveCategory::Draw) {
            return MoveCategory::Draw;
        }
        MoveCategory::ORDERED
            .into_iter()
            .rev()
            .find(|&c| self.contains(c))
            .unwrap_or(MoveCategory::Backward)
    }
}

/// A candidate move together with its ordering score.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Action {
    /// Snapshot of the moving piece; `None` only for the stalemate sentinel
    pub piece: Option<Piece>,
    pub from: Square,
    pub to: Square,
    pub heuristic: i32,
    pub categories: CategorySet,
    pub best_category: MoveCategory,
    pub promotion: PromotionChoice,
}

impl Action {
    /// An unscored action moving `piece` to `to`.
    #[must_use]
    pub fn new(piece: Piece, to: Square) -> Self {
        Action {
            piece: Some(piece),
            from: piece.square,
            to,
            heuristic: 0,
            categories: CategorySet::default(),
            best_category: MoveCategory::Backward,
            promotion: PromotionChoice::Queen,
        }
    }

    /// The stalemate sentinel.
    #[must_use]
    pub fn draw() -> Self {
        let mut categories = CategorySet::default();
        categories.insert(MoveCategory::Draw);
        Action {
            piece: None,
            from: Square(0, 0),
            to: Square(0, 0),
            heuristic: 0,
            categories,
            best_category: MoveCategory::Draw,
            promotion: PromotionChoice::Queen,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.piece.is_none() || self.best_category == MoveCategory::Draw
    }

    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.categories.contains(MoveCategory::Capture)
    }

    #[inline]
    #[must_use]
    pub fn gives_check(&self) -> bool {
        self.categories.contains(MoveCategory::Check)
            || self.categories.contains(MoveCategory::DoubleCheck)
    }

    /// Whether this action moves the same piece between the same squares.
    #[must_use]
    pub fn same_move(&self, other: &Action) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_draw() {
            return f.write_str("draw");
        }
        write!(f, "{}{}", self.from, self.to)?;
        let promoting = self.piece.is_some_and(|p| {
            p.kind == crate::board::PieceKind::Pawn && self.to.row() == p.color.promotion_row()
        });
        if promoting {
            write!(f, "{}", self.promotion.kind().to_char())?;
        }
        Ok(())
    }
}
