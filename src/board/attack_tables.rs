use once_cell::sync::Lazy;

use super::{Direction, Square};

pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

fn targets_from(sq: Square, deltas: &[(i32, i32)]) -> Vec<Square> {
    deltas
        .iter()
        .filter_map(|&(dc, dr)| sq.offset(dc, dr))
        .collect()
}

/// Squares a knight on each square can jump to.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| std::array::from_fn(|idx| targets_from(Square::from_index(idx), &KNIGHT_OFFSETS)));

/// Squares adjacent to each square.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    let deltas: Vec<(i32, i32)> = Direction::ALL.iter().map(|dir| dir.delta()).collect();
    std::array::from_fn(|idx| targets_from(Square::from_index(idx), &deltas))
});

/// For each square and direction, the squares along that ray ordered
/// outward from (and excluding) the square itself.
pub(crate) static RAYS: Lazy<[[Vec<Square>; 8]; 64]> = Lazy::new(|| {
    std::array::from_fn(|idx| {
        let origin = Square::from_index(idx);
        std::array::from_fn(|dir_idx| {
            let (dc, dr) = Direction::ALL[dir_idx].delta();
            let mut ray = Vec::with_capacity(7);
            let mut current = origin;
            while let Some(next) = current.offset(dc, dr) {
                ray.push(next);
                current = next;
            }
            ray
        })
    })
});

#[inline]
pub(crate) fn ray(from: Square, dir: Direction) -> &'static [Square] {
    &RAYS[from.index()][dir.index()]
}

#[inline]
pub(crate) fn knight_targets(from: Square) -> &'static [Square] {
    &KNIGHT_TARGETS[from.index()]
}

#[inline]
pub(crate) fn king_targets(from: Square) -> &'static [Square] {
    &KING_TARGETS[from.index()]
}

/// Squares strictly between two aligned squares, ordered from `from`.
pub(crate) fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let Some(dir) = Direction::between(from, to) else {
        return Vec::new();
    };
    ray(from, dir)
        .iter()
        .copied()
        .take_while(|&sq| sq != to)
        .collect()
}
