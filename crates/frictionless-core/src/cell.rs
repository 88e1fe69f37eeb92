//! Grid cells and the four directions of travel.

use std::fmt;
use std::str::FromStr;

use crate::error::CommandError;
use crate::wall::Orientation;

/// A cell on the board, `(x, y)` with `x` the column and `y` the row.
///
/// Row 0 is the top of the board and column 0 the left edge. A cell is
/// only meaningful together with a grid size `n`, where `x < n` and
/// `y < n`; see [`Cell::in_bounds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, counted from the left edge.
    pub x: u32,
    /// Row, counted from the top edge.
    pub y: u32,
}

impl Cell {
    /// Construct a cell from its column and row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies inside an `n` by `n` grid.
    pub fn in_bounds(self, grid_size: u32) -> bool {
        self.x < grid_size && self.y < grid_size
    }

    /// The lane index this cell travels along when blocked by walls of
    /// `orientation`: the column for horizontal walls, the row for
    /// vertical walls.
    pub fn lane(self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// The coordinate along the axis of travel that walls of
    /// `orientation` interrupt: the row for horizontal walls, the column
    /// for vertical walls.
    pub fn position(self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.y,
            Orientation::Vertical => self.x,
        }
    }

    /// A copy of this cell with its [`position`](Self::position) along
    /// `orientation`'s axis replaced.
    pub fn with_position(self, orientation: Orientation, position: u32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.x, position),
            Orientation::Vertical => Self::new(position, self.y),
        }
    }

    /// The neighbouring cell one step in `direction`, or `None` if the
    /// step would leave an `n` by `n` grid.
    pub fn step(self, direction: Direction, grid_size: u32) -> Option<Self> {
        let (dx, dy) = direction.vector();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let next = Self::new(x, y);
        next.in_bounds(grid_size).then_some(next)
    }

    /// The direction of a unit step from `self` to `other`, if the two
    /// cells are orthogonally adjacent.
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        match (
            i64::from(other.x) - i64::from(self.x),
            i64::from(other.y) - i64::from(self.y),
        ) {
            (0, -1) => Some(Direction::Up),
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Cell {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

/// Direction of a slide. There is no diagonal movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last column.
    Right,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
}

impl Direction {
    /// All four directions, clockwise from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Returns the `(dx, dy)` unit vector for this direction.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Orientation of the walls that stop travel in this direction.
    ///
    /// Vertical travel is stopped by horizontal walls and vice versa.
    pub fn blocking(self) -> Orientation {
        match self {
            Direction::Up | Direction::Down => Orientation::Horizontal,
            Direction::Left | Direction::Right => Orientation::Vertical,
        }
    }

    /// Whether travel increases the coordinate along its axis.
    pub fn is_increasing(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// The wall offset of the edge crossed when leaving `position` in
    /// this direction.
    ///
    /// Walls anchor to the top/left edge of their cell, so leaving
    /// upward or leftward crosses the cell's own anchor while leaving
    /// downward or rightward crosses the next cell's anchor.
    pub fn leading_edge(self, position: u32) -> u32 {
        if self.is_increasing() {
            position + 1
        } else {
            position
        }
    }

    /// The position a piece comes to rest at when stopped by the edge
    /// at offset `edge`. Inverse of [`leading_edge`](Self::leading_edge).
    ///
    /// `edge` must be at least 1 for increasing directions, which holds
    /// for every edge returned by `leading_edge`.
    pub fn landing(self, edge: u32) -> u32 {
        if self.is_increasing() {
            edge - 1
        } else {
            edge
        }
    }

    /// Offset of the grid perimeter edge reached by travelling in this
    /// direction on an `n` by `n` grid.
    pub fn perimeter_edge(self, grid_size: u32) -> u32 {
        if self.is_increasing() {
            grid_size
        } else {
            0
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = CommandError;

    /// Parses `up`/`right`/`down`/`left` in any case, plus the DOM
    /// arrow-key names (`ArrowUp`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_ascii_lowercase();
        let name = lowered.strip_prefix("arrow").unwrap_or(&lowered);
        match name {
            "up" => Ok(Direction::Up),
            "right" => Ok(Direction::Right),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            _ => Err(CommandError::UnknownDirection {
                input: trimmed.to_string(),
            }),
        }
    }
}
