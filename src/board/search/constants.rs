//! Search constants.
//!
//! Contains the scoring and ordering constants used by the game-tree search.

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Window bound wider than any reachable score
pub const INFINITY: i32 = i32::MAX;

/// Score of being checkmated at the root; shallower mates score further from zero
pub const MATE_SCORE: i32 = 1_000_000;

/// Deepest search the tree accepts
pub const MAX_SEARCH_DEPTH: u32 = 12;

/// Default search depth in plies
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

// ============================================================================
// ACTION HEURISTIC
// ============================================================================

/// Bonus for an action that gives check
pub const CHECK_BONUS: i32 = 2;

/// Bonus for an action that gives double check
pub const DOUBLE_CHECK_BONUS: i32 = 5;

/// Weight of the king-defender delta
pub const KING_DEFENSE_WEIGHT: i32 = 100;

/// Multiplier applied to the king-defender delta when castling
pub const CASTLE_DEFENSE_MULTIPLIER: i32 = 10;

/// Divisor applied to the king's value when the king is the capturer
pub const KING_CAPTURER_DIVISOR: i32 = 75;

/// Pawn victims on these relative rows count as this many pawns
pub const ADVANCED_PAWN_ROWS: [(usize, i32); 2] = [(5, 4), (6, 6)];

// ============================================================================
// GAME PHASE
// ============================================================================

/// Without queens, at most this many knights, bishops and rooks per side
/// marks the endgame
pub const ENDGAME_PIECE_LIMIT: usize = 2;
