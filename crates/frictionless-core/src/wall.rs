//! Wall segments and the boundary predicate.

use std::fmt;

use crate::cell::Cell;

/// Which way a wall segment runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Runs top to bottom along the left edge of its anchor cell.
    /// Blocks horizontal (left/right) travel.
    Vertical,
    /// Runs left to right along the top edge of its anchor cell.
    /// Blocks vertical (up/down) travel.
    Horizontal,
}

impl Orientation {
    /// The other orientation. A quarter turn of the board swaps them.
    pub fn swapped(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => f.write_str("vertical"),
            Orientation::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// A single unit-length wall segment anchored at cell `(x, y)`.
///
/// - `Vertical` at `(x, y)` separates column `x - 1` from column `x`
///   on row `y`.
/// - `Horizontal` at `(x, y)` separates row `y - 1` from row `y` on
///   column `x`.
///
/// Anchors may reach one past the last cell (`x == n` for vertical,
/// `y == n` for horizontal) to describe the far perimeter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Wall {
    /// Which edge of the anchor cell the wall occupies.
    pub orientation: Orientation,
    /// Anchor column.
    pub x: u32,
    /// Anchor row.
    pub y: u32,
}

impl Wall {
    /// A vertical wall on the left edge of `(x, y)`.
    pub const fn vertical(x: u32, y: u32) -> Self {
        Self {
            orientation: Orientation::Vertical,
            x,
            y,
        }
    }

    /// A horizontal wall on the top edge of `(x, y)`.
    pub const fn horizontal(x: u32, y: u32) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            x,
            y,
        }
    }

    /// Build a wall from its lane and offset, the inverse of
    /// [`lane`](Self::lane) / [`offset`](Self::offset).
    pub fn from_lane(orientation: Orientation, lane: u32, offset: u32) -> Self {
        match orientation {
            Orientation::Vertical => Self::vertical(offset, lane),
            Orientation::Horizontal => Self::horizontal(lane, offset),
        }
    }

    /// The row (vertical walls) or column (horizontal walls) the wall
    /// lies across.
    pub fn lane(self) -> u32 {
        match self.orientation {
            Orientation::Vertical => self.y,
            Orientation::Horizontal => self.x,
        }
    }

    /// The edge index along the lane: the column for vertical walls,
    /// the row for horizontal walls.
    pub fn offset(self) -> u32 {
        match self.orientation {
            Orientation::Vertical => self.x,
            Orientation::Horizontal => self.y,
        }
    }

    /// Whether the anchor is valid on an `n` by `n` grid: the offset may
    /// range over `0..=n`, the lane over `0..n`.
    pub fn in_bounds(self, grid_size: u32) -> bool {
        self.offset() <= grid_size && self.lane() < grid_size
    }

    /// The wall position crossed by a unit step from `from` to `to`.
    ///
    /// Returns `None` if the cells are not orthogonally adjacent.
    pub fn between(from: Cell, to: Cell) -> Option<Self> {
        let direction = from.direction_to(to)?;
        let orientation = direction.blocking();
        let edge = direction.leading_edge(from.position(orientation));
        Some(Self::from_lane(orientation, from.lane(orientation), edge))
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wall at ({}, {})", self.orientation, self.x, self.y)
    }
}

/// Whether `wall` lies on the boundary crossed by a unit step from
/// `from` to `to`.
///
/// False for any pair of cells that are not orthogonally adjacent.
///
/// # Examples
///
/// ```
/// use frictionless_core::{blocks, Cell, Wall};
///
/// // Top edge of (3, 2) separates (3, 1) from (3, 2).
/// let wall = Wall::horizontal(3, 2);
/// assert!(blocks(wall, Cell::new(3, 2), Cell::new(3, 1)));
/// assert!(blocks(wall, Cell::new(3, 1), Cell::new(3, 2)));
/// assert!(!blocks(wall, Cell::new(3, 2), Cell::new(3, 3)));
/// ```
pub fn blocks(wall: Wall, from: Cell, to: Cell) -> bool {
    Wall::between(from, to) == Some(wall)
}
