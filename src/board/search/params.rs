use crate::board::error::ConfigError;

use super::constants::{DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};

/// How a depth-zero node turns the static evaluation into a negamax score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LeafSign {
    /// Multiply by the node's color when the configured maximum depth is odd
    /// and by its negation when even. Reference behaviour of the tree;
    /// for White at the root the leaves come out inverted.
    #[default]
    DepthParity,
    /// Use the side-to-move evaluation unchanged (textbook negamax)
    SideToMove,
}

impl LeafSign {
    /// Negamax score of a leaf whose side-to-move evaluation is `eval`.
    ///
    /// `color` is +1 for max nodes and -1 for min nodes.
    #[must_use]
    pub const fn apply(self, eval: i32, color: i32, max_depth: u32) -> i32 {
        match self {
            LeafSign::DepthParity => {
                if max_depth % 2 == 1 {
                    color * eval
                } else {
                    -color * eval
                }
            }
            LeafSign::SideToMove => eval,
        }
    }
}

/// Search configuration for a [`GameTree`](super::GameTree).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the current node
    pub max_depth: u32,
    pub leaf_sign: LeafSign,
    /// Stop expanding after this many nodes; the rest are scored as leaves
    pub node_budget: Option<u64>,
    /// Re-validate every action on the child board before forcing it
    pub verify_actions: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: DEFAULT_SEARCH_DEPTH,
            leaf_sign: LeafSign::default(),
            node_budget: None,
            verify_actions: cfg!(debug_assertions),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn leaf_sign(mut self, leaf_sign: LeafSign) -> Self {
        self.leaf_sign = leaf_sign;
        self
    }

    #[must_use]
    pub const fn node_budget(mut self, nodes: u64) -> Self {
        self.node_budget = Some(nodes);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_depth(self.max_depth)?;
        if self.node_budget == Some(0) {
            return Err(ConfigError::ZeroNodeBudget);
        }
        Ok(())
    }
}

pub(crate) fn validate_depth(depth: u32) -> Result<(), ConfigError> {
    if depth == 0 {
        return Err(ConfigError::ZeroDepth);
    }
    if depth > MAX_SEARCH_DEPTH {
        return Err(ConfigError::DepthTooLarge {
            depth,
            max: MAX_SEARCH_DEPTH,
        });
    }
    Ok(())
}

/// Per-call overrides for a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub depth: Option<u32>,
    pub nodes: Option<u64>,
}

impl SearchLimits {
    #[must_use]
    pub const fn depth(depth: u32) -> Self {
        SearchLimits {
            depth: Some(depth),
            nodes: None,
        }
    }

    #[must_use]
    pub const fn nodes(nodes: u64) -> Self {
        SearchLimits {
            depth: None,
            nodes: Some(nodes),
        }
    }
}
