//! A* search over an [`ObstacleField`] with octile step costs.

use crate::algorithms::common::{octile_cost, PathfindingAlgorithm};
use crate::algorithms::frontier::Frontier;
use crate::algorithms::node::{NodeArena, NodeState, SearchNode};
use crate::algorithms::types::{Path, SearchConfig};
use crate::error::{Endpoint, Result, SearchError};
use crate::grid::{ObstacleField, Position};
use crate::observer::{NoopObserver, SearchObserver};
use tracing::{debug, trace};

/// A* pathfinder.
///
/// The engine holds configuration only. Every call builds its own node arena
/// and open set, so repeated calls with the same arguments return the same
/// path.
#[derive(Debug, Clone, Default)]
pub struct PathfindingEngine {
    config: SearchConfig,
}

impl PathfindingEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find a path from `start` to `goal`.
    ///
    /// The returned waypoints exclude `start` and end with `goal`. A search
    /// that exhausts the open set fails with [`SearchError::NotReachable`].
    pub fn find_path(
        &self,
        start: Position,
        goal: Position,
        field: &ObstacleField,
        agent_size: Option<u32>,
    ) -> Result<Path> {
        self.find_path_observed(start, goal, field, agent_size, &mut NoopObserver)
    }

    pub fn find_path_observed(
        &self,
        start: Position,
        goal: Position,
        field: &ObstacleField,
        agent_size: Option<u32>,
        observer: &mut dyn SearchObserver,
    ) -> Result<Path> {
        trace!(%start, %goal, ?agent_size, "find_path");

        field.check_endpoint(Endpoint::Start, start)?;
        field.check_endpoint(Endpoint::Goal, goal)?;

        let limit = self
            .config
            .max_iterations
            .unwrap_or_else(|| field.cell_count());

        let mut arena = NodeArena::default();
        let mut frontier = Frontier::new(self.config.frontier);

        let start_id = arena.insert(SearchNode::open(start, 0, octile_cost(start, goal), None));
        frontier.push(start_id, arena.get(start_id).total_cost);
        observer.node_opened(start);

        let mut nodes_expanded = 0;

        while let Some(current_id) = frontier.pop(&arena) {
            if nodes_expanded >= limit {
                debug!(limit, discovered = arena.len(), "iteration limit reached");
                return Err(SearchError::IterationLimit { limit });
            }
            nodes_expanded += 1;

            let current = arena.close(current_id);
            observer.node_closed(current.position);

            if current.position == goal {
                let waypoints = arena.backtrack(current_id);
                observer.path_found(&waypoints);
                debug!(
                    cost = current.start_cost,
                    steps = waypoints.len(),
                    nodes_expanded,
                    "path found"
                );
                return Ok(Path {
                    waypoints,
                    cost: current.start_cost,
                    nodes_expanded,
                });
            }

            for neighbor in current.position.neighbors() {
                if !field.contains(neighbor) || field.is_blocked(neighbor) {
                    continue;
                }

                let existing = arena.lookup(neighbor);
                if let Some(id) = existing {
                    if arena.get(id).state == NodeState::Closed {
                        continue;
                    }
                }

                if let Some(size) = agent_size {
                    if !field.is_clear_for(neighbor, size) {
                        continue;
                    }
                }

                let start_cost = current.start_cost + octile_cost(current.position, neighbor);
                let total_cost = start_cost + octile_cost(neighbor, goal);

                match existing {
                    Some(id) => {
                        let node = arena.get_mut(id);
                        if total_cost < node.total_cost {
                            node.parent = Some(current_id);
                            node.start_cost = start_cost;
                            node.total_cost = total_cost;
                            frontier.decrease(id, total_cost);
                        }
                    }
                    None => {
                        let id = arena.insert(SearchNode::open(
                            neighbor,
                            start_cost,
                            total_cost,
                            Some(current_id),
                        ));
                        frontier.push(id, total_cost);
                        observer.node_opened(neighbor);
                    }
                }
            }
        }

        debug!(nodes_expanded, "goal not reachable");
        Err(SearchError::NotReachable { nodes_expanded })
    }
}

impl PathfindingAlgorithm for PathfindingEngine {
    fn name(&self) -> &'static str {
        "octile"
    }

    fn find_path(
        &self,
        start: Position,
        goal: Position,
        field: &ObstacleField,
        agent_size: Option<u32>,
    ) -> Result<Path> {
        PathfindingEngine::find_path(self, start, goal, field, agent_size)
    }

    fn find_path_observed(
        &self,
        start: Position,
        goal: Position,
        field: &ObstacleField,
        agent_size: Option<u32>,
        observer: &mut dyn SearchObserver,
    ) -> Result<Path> {
        PathfindingEngine::find_path_observed(self, start, goal, field, agent_size, observer)
    }
}

/// Quick search with the default configuration.
pub fn find_path(
    start: Position,
    goal: Position,
    field: &ObstacleField,
    agent_size: Option<u32>,
) -> Result<Path> {
    PathfindingEngine::default().find_path(start, goal, field, agent_size)
}
