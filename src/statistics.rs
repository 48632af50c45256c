use crate::algorithms::{octile_cost, Path};
use crate::error::SearchError;
use crate::grid::{ObstacleField, Position};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Statistics {
    pub algorithm: &'static str,
    pub success: bool,
    pub path_cost: Option<u64>,
    pub path_steps: usize,
    pub nodes_expanded: usize,
    pub blocked_cells: usize,
    pub optimal_cost: u64,
    pub route_efficiency: f64,
    pub elapsed: Duration,
}

impl Statistics {
    /// Summarise one search. `optimal_cost` is the obstacle-free octile
    /// distance between the endpoints.
    pub fn new(
        algorithm: &'static str,
        outcome: &Result<Path, SearchError>,
        field: &ObstacleField,
        start: Position,
        goal: Position,
        elapsed: Duration,
    ) -> Self {
        let (success, path_cost, path_steps, nodes_expanded) = match outcome {
            Ok(path) => (true, Some(path.cost), path.len(), path.nodes_expanded),
            Err(SearchError::NotReachable { nodes_expanded }) => (false, None, 0, *nodes_expanded),
            Err(SearchError::IterationLimit { limit }) => (false, None, 0, *limit),
            Err(SearchError::InvalidInput(_)) => (false, None, 0, 0),
        };

        let mut stats = Statistics {
            algorithm,
            success,
            path_cost,
            path_steps,
            nodes_expanded,
            blocked_cells: field.blocked_count(),
            optimal_cost: octile_cost(start, goal),
            route_efficiency: 0.0,
            elapsed,
        };
        stats.calculate_efficiency();
        stats
    }

    /// Ratio of the found cost to the obstacle-free cost, 1.0 meaning no detour.
    pub fn calculate_efficiency(&mut self) {
        self.route_efficiency = match self.path_cost {
            Some(cost) if self.optimal_cost > 0 => cost as f64 / self.optimal_cost as f64,
            Some(_) => 1.0,
            None => 0.0,
        };
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        match self.path_cost {
            Some(cost) => {
                writeln!(f, "Path Cost: {}", cost)?;
                writeln!(f, "Path Steps: {}", self.path_steps)?;
            }
            None => writeln!(f, "Path: not found")?,
        }
        writeln!(f, "Obstacle-free Cost: {}", self.optimal_cost)?;
        writeln!(f, "Nodes Expanded: {}", self.nodes_expanded)?;
        writeln!(f, "Blocked Cells: {}", self.blocked_cells)?;
        writeln!(f, "Search Time: {:.2?}", self.elapsed)?;

        if self.route_efficiency > 0.0 {
            writeln!(f, "Route Efficiency: {:.3}", self.route_efficiency)?;
            if self.route_efficiency > 1.0 {
                let detour = (self.route_efficiency - 1.0) * 100.0;
                writeln!(
                    f,
                    "Detour: {:.1}% longer than the obstacle-free route",
                    detour
                )?;
            }
        }

        Ok(())
    }
}
