//! Game-tree search.
//!
//! Features:
//! - Negamax with alpha-beta and fail-hard beta cutoffs
//! - Category-bucketed move ordering from a cheap action heuristic
//! - Material plus piece-square leaf evaluation with a midgame/endgame king table
//! - A persistent game tree whose played line supports undo/redo
//!
//! Every node owns a full board copy; children are created on demand during
//! the search and freed as soon as they have been scored.

mod action;
mod constants;
mod eval;
mod move_order;
mod movegen;
mod negamax;
mod node;
mod params;
mod pst;
mod tree;

pub use action::{Action, CategorySet, MoveCategory};
pub use constants::{DEFAULT_SEARCH_DEPTH, MATE_SCORE, MAX_SEARCH_DEPTH};
pub use eval::evaluate_position;
pub use move_order::{evaluate_heuristic, order_actions};
pub use movegen::{build_actions, generate_action_list};
pub use node::{GameTreeNode, NodeId, NodePool};
pub use params::{LeafSign, SearchConfig, SearchLimits};
pub use pst::{pst_value, GamePhase};
pub use tree::{GameTree, HistoryDirection};

/// Statistics tracked during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, including leaves
    pub nodes: u64,
    /// Nodes scored by the static evaluation
    pub leaves: u64,
    pub beta_cutoffs: u64,
    /// Internal inconsistencies detected and logged
    pub invariant_violations: u64,
    /// Deepest ply reached below the search root
    pub seldepth: u32,
}

/// Result of a search
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// The best action found, `None` when the side to move has nothing to play
    pub best_action: Option<Action>,
    /// Negamax score from the searching side's point of view
    pub score: i32,
    pub stats: SearchStats,
}
