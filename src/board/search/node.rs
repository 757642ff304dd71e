//! Game-tree nodes and the pool that owns them.

use std::ops::{Index, IndexMut};

use super::action::Action;
use crate::board::Board;

/// Handle to a node in a [`GameTree`](super::GameTree).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// One position in the game tree.
#[derive(Clone, Debug)]
pub struct GameTreeNode {
    pub(crate) board: Board,
    pub(crate) parent: Option<NodeId>,
    /// The action that produced this node from its parent
    pub(crate) action: Option<Action>,
    pub(crate) best_action: Option<Action>,
    /// Actions not yet expanded, best last
    pub(crate) pending: Vec<Action>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) depth: u32,
    pub(crate) is_max: bool,
    /// Part of the played game history rather than a speculative child
    pub(crate) retained: bool,
}

impl GameTreeNode {
    pub(crate) fn root(board: Board) -> Self {
        let is_max = board.turn() == crate::board::Color::White;
        GameTreeNode {
            board,
            parent: None,
            action: None,
            best_action: None,
            pending: Vec::new(),
            children: Vec::new(),
            depth: 0,
            is_max,
            retained: true,
        }
    }

    pub(crate) fn child_of(parent: NodeId, node: &GameTreeNode, board: Board, action: Action) -> Self {
        GameTreeNode {
            board,
            parent: Some(parent),
            action: Some(action),
            best_action: None,
            pending: Vec::new(),
            children: Vec::new(),
            depth: node.depth + 1,
            is_max: !node.is_max,
            retained: false,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The action that led to this node.
    #[must_use]
    pub fn last_action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn best_action(&self) -> Option<&Action> {
        self.best_action.as_ref()
    }

    #[must_use]
    pub fn pending_actions(&self) -> &[Action] {
        &self.pending
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Plies from the root of the game.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn is_max_node(&self) -> bool {
        self.is_max
    }

    #[must_use]
    pub fn is_retained(&self) -> bool {
        self.retained
    }

    /// The most recently realized child on the game line.
    #[must_use]
    pub fn retained_child(&self, pool: &NodePool) -> Option<NodeId> {
        self.children
            .iter()
            .rev()
            .copied()
            .find(|&id| pool.get(id).is_some_and(GameTreeNode::is_retained))
    }
}

/// Slot arena for tree nodes with a free list.
#[derive(Clone, Debug, Default)]
pub struct NodePool {
    slots: Vec<Option<GameTreeNode>>,
    free: Vec<usize>,
}

impl NodePool {
    pub(crate) fn insert(&mut self, node: GameTreeNode) -> NodeId {
        if let Some(idx) = self.free.pop() {
            self.slots[idx] = Some(node);
            NodeId(idx)
        } else {
            self.slots.push(Some(node));
            NodeId(self.slots.len() - 1)
        }
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&GameTreeNode> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut GameTreeNode> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn remove(&mut self, id: NodeId) -> Option<GameTreeNode> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        Some(node)
    }

    /// Free a node and everything below it.
    pub(crate) fn release_subtree(&mut self, id: NodeId) -> usize {
        let mut stack = vec![id];
        let mut released = 0;
        while let Some(next) = stack.pop() {
            if let Some(node) = self.remove(next) {
                stack.extend(node.children);
                released += 1;
            }
        }
        released
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Index<NodeId> for NodePool {
    type Output = GameTreeNode;

    fn index(&self, id: NodeId) -> &GameTreeNode {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale node handle {id:?}"),
        }
    }
}

impl IndexMut<NodeId> for NodePool {
    fn index_mut(&mut self, id: NodeId) -> &mut GameTreeNode {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("stale node handle {id:?}"),
        }
    }
}
