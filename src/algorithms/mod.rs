//! Grid path search.
//!
//! [`PathfindingEngine`] is the A* implementation of this crate.
//! [`ReferenceAStar`] solves the same problem through the `pathfinding` crate
//! and is used to cross-check costs.

pub mod a_star;
pub mod common;
pub mod engine;
mod frontier;
mod node;
pub mod types;

pub use a_star::ReferenceAStar;
pub use common::{octile_cost, PathfindingAlgorithm, DIAGONAL_COST, STRAIGHT_COST};
pub use engine::{find_path, PathfindingEngine};
pub use types::{FrontierKind, Path, SearchConfig};
