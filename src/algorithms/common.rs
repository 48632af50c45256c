use crate::algorithms::types::Path;
use crate::error::Result;
use crate::grid::{ObstacleField, Position};
use crate::observer::SearchObserver;

/// Cost of a straight (orthogonal) step.
pub const STRAIGHT_COST: u64 = 10;
/// Cost of a diagonal step, 10 * sqrt(2) rounded.
pub const DIAGONAL_COST: u64 = 14;

/// Octile distance scaled by ten. Serves both as the edge cost between
/// neighbours and as the heuristic towards the goal.
pub fn octile_cost(a: Position, b: Position) -> u64 {
    let dx = u64::from(a.x.abs_diff(b.x));
    let dy = u64::from(a.y.abs_diff(b.y));
    let (min, max) = if dx < dy { (dx, dy) } else { (dy, dx) };

    DIAGONAL_COST * min + STRAIGHT_COST * (max - min)
}

pub trait PathfindingAlgorithm {
    /// Short identifier used in reports.
    fn name(&self) -> &'static str;

    /// Finds a path from start to goal over `field`. When `agent_size` is
    /// given, every visited cell must clear the agent's footprint.
    fn find_path(
        &self,
        start: Position,
        goal: Position,
        field: &ObstacleField,
        agent_size: Option<u32>,
    ) -> Result<Path>;

    /// Like [`find_path`](Self::find_path) but reports progress to
    /// `observer`. Algorithms without per-node events only report the path.
    fn find_path_observed(
        &self,
        start: Position,
        goal: Position,
        field: &ObstacleField,
        agent_size: Option<u32>,
        observer: &mut dyn SearchObserver,
    ) -> Result<Path> {
        let path = self.find_path(start, goal, field, agent_size)?;
        observer.path_found(&path.waypoints);
        Ok(path)
    }
}
