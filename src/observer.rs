//! Per-step instrumentation hooks.
//!
//! Observers only watch a search; nothing they do feeds back into it.

use crate::grid::Position;
use tracing::trace;

pub trait SearchObserver {
    /// A position entered the open set for the first time.
    fn node_opened(&mut self, _position: Position) {}

    /// A position moved from the open set to the closed set.
    fn node_closed(&mut self, _position: Position) {}

    /// The search succeeded with these waypoints.
    fn path_found(&mut self, _waypoints: &[Position]) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Opened(Position),
    Closed(Position),
    PathFound(Vec<Position>),
}

/// Keeps every event in order, e.g. for rendering the explored area.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub events: Vec<SearchEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn closed(&self) -> Vec<Position> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::Closed(pos) => Some(*pos),
                _ => None,
            })
            .collect()
    }

    pub fn opened(&self) -> Vec<Position> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::Opened(pos) => Some(*pos),
                _ => None,
            })
            .collect()
    }
}

impl SearchObserver for RecordingObserver {
    fn node_opened(&mut self, position: Position) {
        self.events.push(SearchEvent::Opened(position));
    }

    fn node_closed(&mut self, position: Position) {
        self.events.push(SearchEvent::Closed(position));
    }

    fn path_found(&mut self, waypoints: &[Position]) {
        self.events.push(SearchEvent::PathFound(waypoints.to_vec()));
    }
}

/// Emits every event at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn node_opened(&mut self, position: Position) {
        trace!(%position, "opened");
    }

    fn node_closed(&mut self, position: Position) {
        trace!(%position, "closed");
    }

    fn path_found(&mut self, waypoints: &[Position]) {
        trace!(steps = waypoints.len(), "path found");
    }
}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn node_opened(&mut self, position: Position) {
        (**self).node_opened(position);
    }

    fn node_closed(&mut self, position: Position) {
        (**self).node_closed(position);
    }

    fn path_found(&mut self, waypoints: &[Position]) {
        (**self).path_found(waypoints);
    }
}

/// Fans events out to two observers.
impl<A: SearchObserver, B: SearchObserver> SearchObserver for (A, B) {
    fn node_opened(&mut self, position: Position) {
        self.0.node_opened(position);
        self.1.node_opened(position);
    }

    fn node_closed(&mut self, position: Position) {
        self.0.node_closed(position);
        self.1.node_closed(position);
    }

    fn path_found(&mut self, waypoints: &[Position]) {
        self.0.path_found(waypoints);
        self.1.path_found(waypoints);
    }
}
