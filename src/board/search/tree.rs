use std::time::Instant;

use log::{debug, warn};

use super::action::Action;
use super::constants::INFINITY;
use super::negamax::SearchContext;
use super::node::{GameTreeNode, NodeId, NodePool};
use super::params::{validate_depth, SearchConfig, SearchLimits};
use super::{SearchResult, SearchStats};
use crate::board::error::ConfigError;
use crate::board::{Board, Square};

/// Which way to walk the played line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HistoryDirection {
    /// Towards the root (undo)
    Backward,
    /// Towards the most recently realized child (redo)
    Forward,
}

/// A game in progress plus the search that drives it.
///
/// The tree keeps the played line as retained nodes from the root to the
/// current node. Searching creates speculative children below the current
/// node and frees them again before returning.
#[derive(Clone, Debug)]
pub struct GameTree {
    pub(super) pool: NodePool,
    root: NodeId,
    current: NodeId,
    config: SearchConfig,
    last_stats: SearchStats,
}

impl Default for GameTree {
    fn default() -> Self {
        let mut pool = NodePool::default();
        let root = pool.insert(GameTreeNode::root(Board::new()));
        GameTree {
            pool,
            root,
            current: root,
            config: SearchConfig::default(),
            last_stats: SearchStats::default(),
        }
    }
}

impl GameTree {
    /// Root a new tree at `board`. The root is a max node when White is to move.
    pub fn new(board: Board, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut pool = NodePool::default();
        let root = pool.insert(GameTreeNode::root(board));
        Ok(GameTree {
            pool,
            root,
            current: root,
            config,
            last_stats: SearchStats::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_max_depth(&mut self, depth: u32) -> Result<(), ConfigError> {
        validate_depth(depth)?;
        self.config.max_depth = depth;
        Ok(())
    }

    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn current_id(&self) -> NodeId {
        self.current
    }

    #[must_use]
    pub fn root_node(&self) -> &GameTreeNode {
        &self.pool[self.root]
    }

    #[must_use]
    pub fn current_node(&self) -> &GameTreeNode {
        &self.pool[self.current]
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&GameTreeNode> {
        self.pool.get(id)
    }

    #[must_use]
    pub fn current_board(&self) -> &Board {
        &self.current_node().board
    }

    /// Number of nodes alive in the pool.
    #[must_use]
    pub fn live_nodes(&self) -> usize {
        self.pool.len()
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Actions from the root to the current node.
    #[must_use]
    pub fn move_history(&self) -> Vec<Action> {
        self.move_history_of(self.current)
    }

    /// Actions from the root to `id`.
    #[must_use]
    pub fn move_history_of(&self, id: NodeId) -> Vec<Action> {
        let mut history = Vec::new();
        let mut cursor = self.pool.get(id);
        while let Some(node) = cursor {
            if let Some(action) = &node.action {
                history.push(action.clone());
            }
            cursor = node.parent.and_then(|parent| self.pool.get(parent));
        }
        history.reverse();
        history
    }

    /// Best action for the current node at the configured depth.
    ///
    /// Nothing is committed; pass the result to [`GameTree::signal_move`].
    /// Returns `None` when the side to move is mated or stalemated.
    pub fn find_best_move(&mut self, is_max_player: bool) -> Option<Action> {
        let depth = self.config.max_depth;
        let budget = self.config.node_budget;
        self.search(is_max_player, depth, budget).best_action
    }

    /// [`GameTree::find_best_move`] with per-call depth and node overrides.
    pub fn find_best_move_with_limits(
        &mut self,
        is_max_player: bool,
        limits: SearchLimits,
    ) -> Result<SearchResult, ConfigError> {
        let depth = limits.depth.unwrap_or(self.config.max_depth);
        validate_depth(depth)?;
        let budget = match limits.nodes {
            Some(0) => return Err(ConfigError::ZeroNodeBudget),
            Some(nodes) => Some(nodes),
            None => self.config.node_budget,
        };
        Ok(self.search(is_max_player, depth, budget))
    }

    fn search(&mut self, is_max_player: bool, depth: u32, budget: Option<u64>) -> SearchResult {
        let id = self.current;
        let node_is_max = self.pool[id].is_max;
        if node_is_max != is_max_player {
            warn!(
                "search requested for the {} player but the current node belongs to the other side",
                if is_max_player { "max" } else { "min" }
            );
        }
        let color = if node_is_max { 1 } else { -1 };

        self.clear_speculation(id);
        let mut ctx = SearchContext {
            max_depth: depth,
            node_budget: budget,
            leaf_sign: self.config.leaf_sign,
            verify_actions: self.config.verify_actions,
            root_depth: self.pool[id].depth,
            stats: SearchStats::default(),
        };

        let started = Instant::now();
        let score = self.negamax(id, -INFINITY, INFINITY, depth, color, &mut ctx);
        let best_action = self.pool[id].best_action.clone();

        debug!(
            "searched depth {depth}: nodes {} leaves {} cutoffs {} seldepth {} score {score} best {} in {:?}",
            ctx.stats.nodes,
            ctx.stats.leaves,
            ctx.stats.beta_cutoffs,
            ctx.stats.seldepth,
            best_action.as_ref().map_or_else(|| "none".to_string(), Action::to_string),
            started.elapsed(),
        );
        self.last_stats = ctx.stats;

        SearchResult {
            best_action,
            score,
            stats: ctx.stats,
        }
    }

    /// Drop pending actions and speculative children, keeping the played line.
    fn clear_speculation(&mut self, id: NodeId) {
        let node = &mut self.pool[id];
        node.pending.clear();
        node.best_action = None;
        let speculative: Vec<NodeId> = self.pool[id]
            .children
            .iter()
            .copied()
            .filter(|&child| self.pool.get(child).is_some_and(|c| !c.retained))
            .collect();
        for child in speculative {
            self.discard_child(id, child);
        }
    }

    /// Commit `action` at the current node and advance to the resulting position.
    ///
    /// The move is validated first; an illegal action leaves the tree untouched
    /// and returns `false`. On success every existing child of the current
    /// node is freed, including a previously played continuation.
    pub fn signal_move(&mut self, action: &Action) -> bool {
        let id = self.current;
        let mut board = self.pool[id].board.clone();
        if let Err(err) = board.try_move(action.from, action.to, action.promotion) {
            warn!("rejected move {action}: {err}");
            return false;
        }

        let children = std::mem::take(&mut self.pool[id].children);
        for child in children {
            self.pool.release_subtree(child);
        }
        self.pool[id].pending.clear();
        self.pool[id].best_action = Some(action.clone());

        let mut child = GameTreeNode::child_of(id, &self.pool[id], board, action.clone());
        child.retained = true;
        let child = self.pool.insert(child);
        self.pool[id].children.push(child);
        self.current = child;
        debug!("committed {action} at ply {}", self.pool[child].depth);
        true
    }

    /// Build an action from the piece currently on `from` and commit it.
    pub fn signal_squares(&mut self, from: Square, to: Square) -> bool {
        let Some(piece) = self.current_board().piece_at(from).copied() else {
            warn!("rejected move {from}{to}: no piece on {from}");
            return false;
        };
        self.signal_move(&Action::new(piece, to))
    }

    /// Move the current pointer along the played line.
    ///
    /// Returns whether the pointer moved.
    pub fn traverse_game_history(&mut self, direction: HistoryDirection) -> bool {
        let node = &self.pool[self.current];
        let next = match direction {
            HistoryDirection::Backward => node.parent,
            HistoryDirection::Forward => node.retained_child(&self.pool),
        };
        match next {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::search::LeafSign;

    fn tree(depth: u32) -> GameTree {
        GameTree::new(
            Board::new(),
            SearchConfig::with_depth(depth).leaf_sign(LeafSign::SideToMove),
        )
        .unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        assert_eq!(
            GameTree::new(Board::new(), SearchConfig::with_depth(0)).unwrap_err(),
            ConfigError::ZeroDepth
        );
    }

    #[test]
    fn search_leaves_only_the_played_line() {
        let mut tree = tree(2);
        let best = tree.find_best_move(true).unwrap();
        assert_eq!(tree.live_nodes(), 1);
        assert!(tree.current_node().children().is_empty());
        assert!(tree.signal_move(&best));
        assert_eq!(tree.live_nodes(), 2);
        assert_eq!(tree.move_history(), vec![best]);
    }

    #[test]
    fn illegal_signal_is_rejected() {
        let mut tree = tree(1);
        assert!(!tree.signal_squares(Square(4, 1), Square(4, 4)));
        assert!(!tree.signal_squares(Square(4, 3), Square(4, 4)));
        assert_eq!(tree.current_id(), tree.root_id());
        assert_eq!(tree.live_nodes(), 1);
    }

    #[test]
    fn history_walks_both_ways() {
        let mut tree = tree(1);
        assert!(tree.signal_squares(Square(4, 1), Square(4, 3)));
        assert!(tree.signal_squares(Square(4, 6), Square(4, 4)));
        let last = tree.current_id();

        assert!(tree.traverse_game_history(HistoryDirection::Backward));
        assert!(tree.traverse_game_history(HistoryDirection::Backward));
        assert!(!tree.traverse_game_history(HistoryDirection::Backward));
        assert_eq!(tree.current_id(), tree.root_id());

        assert!(tree.traverse_game_history(HistoryDirection::Forward));
        assert!(tree.traverse_game_history(HistoryDirection::Forward));
        assert!(!tree.traverse_game_history(HistoryDirection::Forward));
        assert_eq!(tree.current_id(), last);
    }

    #[test]
    fn new_move_after_undo_replaces_the_line() {
        let mut tree = tree(1);
        assert!(tree.signal_squares(Square(4, 1), Square(4, 3)));
        assert!(tree.traverse_game_history(HistoryDirection::Backward));
        assert!(tree.signal_squares(Square(3, 1), Square(3, 3)));
        assert_eq!(tree.live_nodes(), 2);
        assert_eq!(tree.move_history()[0].to, Square(3, 3));
    }

    #[test]
    fn limits_override_depth() {
        let mut tree = tree(3);
        let result = tree
            .find_best_move_with_limits(true, SearchLimits::depth(1))
            .unwrap();
        assert!(result.best_action.is_some());
        assert_eq!(result.stats.seldepth, 1);
        assert_eq!(
            tree.find_best_move_with_limits(true, SearchLimits::nodes(0)),
            Err(ConfigError::ZeroNodeBudget)
        );
    }
}
