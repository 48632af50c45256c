//! Search nodes and the per-search arena that owns them.

use crate::grid::Position;
use rustc_hash::FxHashMap;

/// Index of a node in its [`NodeArena`]. Ids grow in discovery order.
pub(crate) type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeState {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub position: Position,
    pub start_cost: u64, // g
    pub total_cost: u64, // g + h
    pub parent: Option<NodeId>,
    pub state: NodeState,
}

impl SearchNode {
    pub fn open(
        position: Position,
        start_cost: u64,
        total_cost: u64,
        parent: Option<NodeId>,
    ) -> Self {
        SearchNode {
            position,
            start_cost,
            total_cost,
            parent,
            state: NodeState::Open,
        }
    }
}

/// Owns every node discovered by one search. A position maps to at most one
/// node, so cost updates always land on the node already in the open set.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
    index: FxHashMap<Position, NodeId>,
}

impl NodeArena {
    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = self.nodes.len();
        let previous = self.index.insert(node.position, id);
        debug_assert!(
            previous.is_none(),
            "node for {} inserted twice",
            node.position
        );
        self.nodes.push(node);
        id
    }

    pub fn lookup(&self, position: Position) -> Option<NodeId> {
        self.index.get(&position).copied()
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id]
    }

    /// Moves a node to the closed set and returns a copy of it.
    pub fn close(&mut self, id: NodeId) -> SearchNode {
        let node = &mut self.nodes[id];
        node.state = NodeState::Closed;
        *node
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Positions from just after the root up to `id`, in travel order.
    pub fn backtrack(&self, id: NodeId) -> Vec<Position> {
        let mut waypoints = Vec::new();
        let mut current = &self.nodes[id];

        while let Some(parent) = current.parent {
            waypoints.push(current.position);
            // parents are always closed before their children, so the chain
            // cannot revisit a node
            debug_assert!(waypoints.len() <= self.nodes.len());
            current = &self.nodes[parent];
        }

        waypoints.reverse();
        waypoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut arena = NodeArena::default();
        let a = arena.insert(SearchNode::open(Position::new(0, 0), 0, 30, None));
        let b = arena.insert(SearchNode::open(Position::new(1, 0), 10, 30, Some(a)));

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.lookup(Position::new(1, 0)), Some(b));
        assert_eq!(arena.lookup(Position::new(5, 5)), None);
        assert_eq!(arena.get(b).parent, Some(a));
    }

    #[test]
    fn test_close() {
        let mut arena = NodeArena::default();
        let a = arena.insert(SearchNode::open(Position::new(2, 2), 0, 0, None));
        assert_eq!(arena.get(a).state, NodeState::Open);

        let closed = arena.close(a);
        assert_eq!(closed.state, NodeState::Closed);
        assert_eq!(arena.get(a).state, NodeState::Closed);
    }

    #[test]
    fn test_backtrack_excludes_root() {
        let mut arena = NodeArena::default();
        let root = arena.insert(SearchNode::open(Position::new(0, 0), 0, 0, None));
        let mid = arena.insert(SearchNode::open(Position::new(1, 1), 14, 0, Some(root)));
        let end = arena.insert(SearchNode::open(Position::new(2, 1), 24, 0, Some(mid)));

        assert_eq!(
            arena.backtrack(end),
            vec![Position::new(1, 1), Position::new(2, 1)]
        );
        assert!(arena.backtrack(root).is_empty());
    }

    #[test]
    fn test_reparent() {
        let mut arena = NodeArena::default();
        let root = arena.insert(SearchNode::open(Position::new(0, 0), 0, 0, None));
        let detour = arena.insert(SearchNode::open(Position::new(0, 1), 10, 0, Some(root)));
        let leaf = arena.insert(SearchNode::open(Position::new(1, 2), 24, 0, Some(detour)));

        arena.get_mut(leaf).parent = Some(root);
        assert_eq!(arena.backtrack(leaf), vec![Position::new(1, 2)]);
    }
}
