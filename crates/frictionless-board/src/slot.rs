//! The four rotational slots and their coordinate transforms.
//!
//! Every template is authored in the top-left quadrant. Because the
//! board side `n` is exactly twice the quadrant side, rotating the whole
//! `n` by `n` frame about its centre carries the top-left quadrant into
//! each of the other three; no separate translation is needed.
//!
//! A quarter turn also swaps wall orientation: a wall that blocked
//! east-west travel blocks north-south travel afterwards. The edge
//! anchors then land on `n - r` for one orientation and `n - 1 - r` for
//! the other, since a vertical wall anchors to the left edge of its cell
//! while a horizontal wall anchors to the top edge.

use std::fmt;

use frictionless_core::{Cell, Orientation, Wall};

/// A quadrant position on the composed board, with its rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// Slot 0: top-left, unrotated.
    TopLeft = 0,
    /// Slot 1: top-right, rotated 90° clockwise.
    TopRight = 1,
    /// Slot 2: bottom-right, rotated 180°.
    BottomRight = 2,
    /// Slot 3: bottom-left, rotated 270° clockwise.
    BottomLeft = 3,
}

impl Slot {
    /// All slots in composition order.
    pub const ALL: [Slot; 4] = [
        Slot::TopLeft,
        Slot::TopRight,
        Slot::BottomRight,
        Slot::BottomLeft,
    ];

    /// The slot with the given index, if it is in `0..4`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Slot index in `0..4`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of clockwise quarter turns applied to a template placed here.
    pub fn quarter_turns(self) -> u8 {
        self as u8
    }

    /// The slot reached by applying `self`'s rotation and then `other`'s.
    pub fn then(self, other: Slot) -> Slot {
        Self::ALL[(self.index() + other.index()) % 4]
    }

    /// The rotation that undoes this one.
    pub fn inverse(self) -> Slot {
        Self::ALL[(4 - self.index()) % 4]
    }

    /// Rotate a wall about the centre of an `n` by `n` board.
    ///
    /// The result is in bounds whenever `wall` is. Quarter turns swap the
    /// wall's orientation.
    ///
    /// # Panics
    ///
    /// Panics if `wall` does not satisfy [`Wall::in_bounds`] for `n`.
    pub fn rotate_wall(self, wall: Wall, grid_size: u32) -> Wall {
        let n = grid_size;
        let (c, r) = (wall.x, wall.y);
        assert!(wall.in_bounds(n), "{wall} outside {n}x{n}");
        match (self, wall.orientation) {
            (Slot::TopLeft, _) => wall,
            (Slot::TopRight, Orientation::Horizontal) => Wall::vertical(n - r, c),
            (Slot::TopRight, Orientation::Vertical) => Wall::horizontal(n - 1 - r, c),
            (Slot::BottomRight, Orientation::Vertical) => Wall::vertical(n - c, n - 1 - r),
            (Slot::BottomRight, Orientation::Horizontal) => Wall::horizontal(n - 1 - c, n - r),
            (Slot::BottomLeft, Orientation::Horizontal) => Wall::vertical(r, n - 1 - c),
            (Slot::BottomLeft, Orientation::Vertical) => Wall::horizontal(r, n - c),
        }
    }

    /// Rotate a cell about the centre of an `n` by `n` board.
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the board.
    pub fn rotate_cell(self, cell: Cell, grid_size: u32) -> Cell {
        let n = grid_size;
        assert!(cell.in_bounds(n), "{cell} outside {n}x{n}");
        match self {
            Slot::TopLeft => cell,
            Slot::TopRight => Cell::new(n - 1 - cell.y, cell.x),
            Slot::BottomRight => Cell::new(n - 1 - cell.x, n - 1 - cell.y),
            Slot::BottomLeft => Cell::new(cell.y, n - 1 - cell.x),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::TopLeft => "top-left",
            Slot::TopRight => "top-right",
            Slot::BottomRight => "bottom-right",
            Slot::BottomLeft => "bottom-left",
        };
        f.write_str(name)
    }
}
