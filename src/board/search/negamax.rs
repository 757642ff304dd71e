//! Negamax with alpha-beta pruning over the node pool.

use log::{error, trace};

use super::action::Action;
use super::constants::MATE_SCORE;
use super::eval::evaluate_position;
use super::movegen::generate_action_list;
use super::node::{GameTreeNode, NodeId};
use super::params::LeafSign;
use super::tree::GameTree;
use super::SearchStats;

/// Search context for a single search
pub(super) struct SearchContext {
    pub max_depth: u32,
    pub node_budget: Option<u64>,
    pub leaf_sign: LeafSign,
    pub verify_actions: bool,
    /// Game depth of the node the search started from
    pub root_depth: u32,
    pub stats: SearchStats,
}

impl SearchContext {
    fn budget_exhausted(&self) -> bool {
        self.node_budget
            .is_some_and(|budget| self.stats.nodes >= budget)
    }
}

impl GameTree {
    /// Score `id` from the point of view of `color` (+1 max, -1 min).
    ///
    /// Records the best action found on the node. Fails hard: a cutoff
    /// returns `beta` itself.
    pub(super) fn negamax(
        &mut self,
        id: NodeId,
        mut alpha: i32,
        beta: i32,
        remaining: u32,
        color: i32,
        ctx: &mut SearchContext,
    ) -> i32 {
        ctx.stats.nodes += 1;
        let node = &self.pool[id];
        let ply = node.depth - ctx.root_depth;
        ctx.stats.seldepth = ctx.stats.seldepth.max(ply);

        if node.board.checkmate() {
            return -(MATE_SCORE - ply as i32);
        }
        if remaining == 0 || (ply > 0 && ctx.budget_exhausted()) {
            return self.leaf_score(id, color, ctx);
        }

        let actions = generate_action_list(&node.board);
        if actions.is_empty() {
            ctx.stats.invariant_violations += 1;
            error!(
                "no actions for {} although it is neither mated nor stalemated: {}",
                node.board.turn(),
                node.board.describe_derived()
            );
            return self.leaf_score(id, color, ctx);
        }
        if actions.iter().any(Action::is_draw) {
            return 0;
        }

        self.pool[id].best_action = None;
        self.pool[id].pending = actions;

        while let Some(action) = self.pool[id].pending.pop() {
            let Some(child) = self.spawn_child(id, &action, ctx) else {
                continue;
            };
            let score = -self.negamax(child, -beta, -alpha, remaining - 1, -color, ctx);
            self.discard_child(id, child);

            if score > alpha {
                alpha = score;
                self.pool[id].best_action = Some(action);
            }
            if score >= beta {
                ctx.stats.beta_cutoffs += 1;
                self.pool[id].pending.clear();
                return beta;
            }
        }

        alpha
    }

    fn leaf_score(&self, id: NodeId, color: i32, ctx: &mut SearchContext) -> i32 {
        ctx.stats.leaves += 1;
        let eval = evaluate_position(&self.pool[id].board);
        ctx.leaf_sign.apply(eval, color, ctx.max_depth)
    }

    /// Materialize the child reached by `action`.
    fn spawn_child(
        &mut self,
        parent: NodeId,
        action: &Action,
        ctx: &mut SearchContext,
    ) -> Option<NodeId> {
        let mut board = self.pool[parent].board.clone();
        if ctx.verify_actions {
            if let Err(err) = board.check_move(action.from, action.to) {
                ctx.stats.invariant_violations += 1;
                error!("generated action {action} failed re-validation: {err}");
                return None;
            }
        }
        board.force_move(action.from, action.to, action.promotion);

        let node = GameTreeNode::child_of(parent, &self.pool[parent], board, action.clone());
        let child = self.pool.insert(node);
        self.pool[parent].children.push(child);
        trace!("created node {child:?} via {action}");
        Some(child)
    }

    pub(super) fn discard_child(&mut self, parent: NodeId, child: NodeId) {
        let children = &mut self.pool[parent].children;
        if children.last() == Some(&child) {
            children.pop();
        } else {
            children.retain(|&c| c != child);
        }
        let freed = self.pool.release_subtree(child);
        trace!("freed {freed} node(s) under {child:?}");
    }
}
