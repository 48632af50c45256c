//! The open set.

use crate::algorithms::node::{NodeArena, NodeId, NodeState};
use crate::algorithms::types::FrontierKind;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Open nodes waiting to be expanded.
///
/// Node ids are handed out in discovery order, which is also the order nodes
/// enter the open set. The heap therefore breaks cost ties on the id and pops
/// exactly what a first-minimum linear scan would.
pub(crate) enum Frontier {
    LinearScan(Vec<NodeId>),
    // Entries whose cost no longer matches the node are stale and skipped.
    BinaryHeap(BinaryHeap<Reverse<(u64, NodeId)>>),
}

impl Frontier {
    pub fn new(kind: FrontierKind) -> Self {
        match kind {
            FrontierKind::LinearScan => Frontier::LinearScan(Vec::new()),
            FrontierKind::BinaryHeap => Frontier::BinaryHeap(BinaryHeap::new()),
        }
    }

    pub fn push(&mut self, id: NodeId, total_cost: u64) {
        match self {
            Frontier::LinearScan(open) => open.push(id),
            Frontier::BinaryHeap(heap) => heap.push(Reverse((total_cost, id))),
        }
    }

    /// Record that an open node's total cost dropped to `total_cost`.
    pub fn decrease(&mut self, id: NodeId, total_cost: u64) {
        match self {
            // the scan reads costs from the arena and the node keeps its slot
            Frontier::LinearScan(_) => {}
            Frontier::BinaryHeap(heap) => heap.push(Reverse((total_cost, id))),
        }
    }

    /// Removes and returns the open node with the lowest total cost.
    pub fn pop(&mut self, arena: &NodeArena) -> Option<NodeId> {
        match self {
            Frontier::LinearScan(open) => {
                // min_by_key keeps the first of equal minima
                let (index, _) = open
                    .iter()
                    .enumerate()
                    .min_by_key(|&(_, &id)| arena.get(id).total_cost)?;
                Some(open.remove(index))
            }
            Frontier::BinaryHeap(heap) => {
                while let Some(Reverse((cost, id))) = heap.pop() {
                    let node = arena.get(id);
                    if node.state == NodeState::Open && node.total_cost == cost {
                        return Some(id);
                    }
                }
                None
            }
        }
    }
}
