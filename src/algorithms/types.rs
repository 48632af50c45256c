//! Search configuration and result types.

use crate::grid::Position;
use clap::ValueEnum;

/// How the open set picks the next node to expand.
///
/// Both strategies return the first node, in open-set insertion order, among
/// those with the lowest total cost, so they produce identical searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FrontierKind {
    /// Scan the whole open list on every pop.
    LinearScan,
    /// Min-heap keyed by (total cost, insertion order).
    #[default]
    BinaryHeap,
}

/// Engine configuration
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Maximum number of nodes to expand before giving up. `None` uses the
    /// field's cell count, which a finished search never exceeds.
    pub max_iterations: Option<usize>,
    /// Open set strategy
    pub frontier: FrontierKind,
}

impl SearchConfig {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }
}

/// A successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Cells from the first step after start up to and including the goal.
    /// Empty when start and goal coincide.
    pub waypoints: Vec<Position>,
    /// Accumulated start-cost of the goal
    pub cost: u64,
    /// Number of nodes moved to the closed set
    pub nodes_expanded: usize,
}

impl Path {
    /// Number of steps taken.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
