//! Lowest-cost paths on a uniform grid with blocked cells.
//!
//! The core is an A* search with octile step costs (10 straight, 14
//! diagonal), optionally constrained by an agent footprint:
//!
//! ```
//! use octile_pathfinder::{find_path, ObstacleField, Position};
//!
//! let field = ObstacleField::new(10, 10, [Position::new(1, 0)]).unwrap();
//! let path = find_path(Position::new(0, 0), Position::new(2, 0), &field, None).unwrap();
//!
//! assert_eq!(path.waypoints, vec![Position::new(1, 1), Position::new(2, 0)]);
//! assert_eq!(path.cost, 28);
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod observer;
pub mod simulation;
pub mod statistics;

pub use algorithms::{
    find_path, FrontierKind, Path, PathfindingAlgorithm, PathfindingEngine, ReferenceAStar,
    SearchConfig,
};
pub use error::{InvalidInput, Result, SearchError};
pub use grid::{ObstacleField, Position};
pub use observer::{NoopObserver, RecordingObserver, SearchEvent, SearchObserver};
