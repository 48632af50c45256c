//! Error types for path searches.

use crate::grid::Position;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Why a search produced no path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The open set ran dry before the goal was closed. This is an ordinary
    /// outcome, not a fault.
    #[error("goal is not reachable (expanded {nodes_expanded} nodes)")]
    NotReachable { nodes_expanded: usize },

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("search aborted after expanding {limit} nodes")]
    IterationLimit { limit: usize },
}

/// Input rejected before the search loop starts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("{role} position {position} lies outside the {width}x{height} grid")]
    OutOfBounds {
        role: Endpoint,
        position: Position,
        width: i32,
        height: i32,
    },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    Dimensions { width: i32, height: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SearchError::from(InvalidInput::OutOfBounds {
            role: Endpoint::Goal,
            position: Position::new(12, -1),
            width: 10,
            height: 10,
        });
        assert_eq!(
            err.to_string(),
            "invalid input: goal position (12, -1) lies outside the 10x10 grid"
        );

        let err = SearchError::NotReachable { nodes_expanded: 7 };
        assert_eq!(err.to_string(), "goal is not reachable (expanded 7 nodes)");
    }
}
