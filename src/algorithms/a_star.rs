use crate::algorithms::common::{octile_cost, PathfindingAlgorithm};
use crate::algorithms::types::Path;
use crate::error::{Endpoint, Result, SearchError};
use crate::grid::{ObstacleField, Position};
use pathfinding::prelude::astar;

/// A* from the `pathfinding` crate, run over the same neighbourhood and cost
/// model as [`PathfindingEngine`](crate::algorithms::engine::PathfindingEngine).
///
/// Path costs always agree with the engine. On equal-cost alternatives the
/// chosen waypoints may differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceAStar;

impl ReferenceAStar {
    pub fn new() -> Self {
        ReferenceAStar
    }
}

impl PathfindingAlgorithm for ReferenceAStar {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn find_path(
        &self,
        start: Position,
        goal: Position,
        field: &ObstacleField,
        agent_size: Option<u32>,
    ) -> Result<Path> {
        field.check_endpoint(Endpoint::Start, start)?;
        field.check_endpoint(Endpoint::Goal, goal)?;

        let mut nodes_expanded = 0;
        let result = astar(
            &start,
            |p| {
                nodes_expanded += 1;
                let from = *p;
                from.neighbors()
                    .filter(|&n| field.is_passable(n, agent_size))
                    .map(move |n| (n, octile_cost(from, n)))
                    .collect::<Vec<_>>()
            },
            |p| octile_cost(*p, goal),
            |p| *p == goal,
        );

        match result {
            // the crate's path starts with `start` itself
            Some((path, cost)) => Ok(Path {
                waypoints: path.into_iter().skip(1).collect(),
                cost,
                nodes_expanded,
            }),
            None => Err(SearchError::NotReachable { nodes_expanded }),
        }
    }
}
