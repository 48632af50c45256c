use crate::error::{Endpoint, InvalidInput, Result};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Neighbour offsets in the order they are expanded.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (1, 1),
    (-1, 0),
    (0, -1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The eight surrounding positions, in expansion order.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| self.offset(dx, dy))
    }

    /// True if `other` is one of the eight neighbours of `self`.
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid extent plus the set of impassable cells.
///
/// Blocked positions outside the grid are accepted and simply never match a
/// cell the search visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleField {
    width: i32,
    height: i32,
    blocked: FxHashSet<Position>,
}

impl ObstacleField {
    pub fn new<I>(width: i32, height: i32, blocked: I) -> Result<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        if width <= 0 || height <= 0 {
            return Err(InvalidInput::Dimensions { width, height }.into());
        }

        Ok(ObstacleField {
            width,
            height,
            blocked: blocked.into_iter().collect(),
        })
    }

    pub fn empty(width: i32, height: i32) -> Result<Self> {
        Self::new(width, height, std::iter::empty())
    }

    /// Scatter up to `count` obstacles uniformly over the grid, never on a
    /// position listed in `exclude`.
    pub fn random<R>(
        width: i32,
        height: i32,
        count: usize,
        rng: &mut R,
        exclude: &[Position],
    ) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let mut field = Self::empty(width, height)?;

        // Give up after a bounded number of draws so dense requests terminate.
        let mut placed = 0;
        let mut attempts = 0;
        while placed < count && attempts < count.saturating_mul(3) {
            let pos = Position::new(rng.gen_range(0..width), rng.gen_range(0..height));

            if !exclude.contains(&pos) && field.blocked.insert(pos) {
                placed += 1;
            }
            attempts += 1;
        }

        Ok(field)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    pub fn blocked(&self) -> impl Iterator<Item = &Position> {
        self.blocked.iter()
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }

    /// Returns true if the position was not blocked before.
    pub fn block(&mut self, pos: Position) -> bool {
        self.blocked.insert(pos)
    }

    /// Returns true if the position was blocked before.
    pub fn unblock(&mut self, pos: Position) -> bool {
        self.blocked.remove(&pos)
    }

    pub fn is_blocked(&self, pos: Position) -> bool {
        self.blocked.contains(&pos)
    }

    /// True if `pos` is a cell of the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Interior test used by the footprint check. Row and column zero are
    /// excluded.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x > 0 && pos.x < self.width && pos.y > 0 && pos.y < self.height
    }

    /// Footprint check for an agent of `agent_size` cells centred on `pos`.
    ///
    /// Every cell of the square `[-r, r] x [-r, r]` around `pos` that passes
    /// [`in_bounds`](Self::in_bounds) must be free, where `r` is half the
    /// agent size rounded up.
    pub fn is_clear_for(&self, pos: Position, agent_size: u32) -> bool {
        // Cells beyond the grid extent never pass in_bounds.
        let extent = self.width.max(self.height) as u32;
        let radius = agent_size.div_ceil(2).min(extent) as i32;

        let x_lo = pos.x.saturating_sub(radius).max(1);
        let x_hi = pos.x.saturating_add(radius).min(self.width - 1);
        let y_lo = pos.y.saturating_sub(radius).max(1);
        let y_hi = pos.y.saturating_add(radius).min(self.height - 1);

        for x in x_lo..=x_hi {
            for y in y_lo..=y_hi {
                if self.blocked.contains(&Position::new(x, y)) {
                    return false;
                }
            }
        }
        true
    }

    /// True if the search may step onto `pos`.
    pub fn is_passable(&self, pos: Position, agent_size: Option<u32>) -> bool {
        if !self.contains(pos) || self.is_blocked(pos) {
            return false;
        }
        agent_size.map_or(true, |size| self.is_clear_for(pos, size))
    }

    pub fn check_endpoint(&self, role: Endpoint, position: Position) -> Result<()> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(InvalidInput::OutOfBounds {
                role,
                position,
                width: self.width,
                height: self.height,
            }
            .into())
        }
    }

    pub fn view(&self, start: Position, goal: Position) -> GridView<'_> {
        GridView {
            field: self,
            start,
            goal,
            path: &[],
            explored: &[],
        }
    }
}

/// Text rendering of a field with an optional path and explored cells.
pub struct GridView<'a> {
    field: &'a ObstacleField,
    start: Position,
    goal: Position,
    path: &'a [Position],
    explored: &'a [Position],
}

impl<'a> GridView<'a> {
    pub fn with_path(mut self, path: &'a [Position]) -> Self {
        self.path = path;
        self
    }

    pub fn with_explored(mut self, explored: &'a [Position]) -> Self {
        self.explored = explored;
        self
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Legend: S=Start, G=Goal, #=Blocked, *=Path, o=Explored, .=Empty"
        )?;

        let path: FxHashSet<Position> = self.path.iter().copied().collect();
        let explored: FxHashSet<Position> = self.explored.iter().copied().collect();

        write!(f, "   ")?;
        for x in 0..self.field.width {
            write!(f, "{:2}", x % 10)?;
        }
        writeln!(f)?;

        for y in 0..self.field.height {
            write!(f, "{:2} ", y % 100)?;

            for x in 0..self.field.width {
                let pos = Position::new(x, y);
                let symbol = if pos == self.start {
                    'S'
                } else if pos == self.goal {
                    'G'
                } else if self.field.is_blocked(pos) {
                    '#'
                } else if path.contains(&pos) {
                    '*'
                } else if explored.contains(&pos) {
                    'o'
                } else {
                    '.'
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
