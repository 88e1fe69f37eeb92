//! Immutable quadrant templates.
//!
//! A [`QuadrantTemplate`] is authored in the canonical frame: the
//! top-left quadrant of the board, unrotated, with coordinates running
//! over `0..extent` (wall offsets over `0..=extent`). Templates are
//! never mutated. [`QuadrantTemplate::place`] returns fresh, rotated
//! copies of the data, so one template can sit in several slots or
//! sessions without cross-contamination.

use indexmap::IndexMap;

use frictionless_core::{Cell, Orientation, PieceId, Wall};

use crate::error::BoardError;
use crate::slot::Slot;

/// Which two edges of a goal cell carry the L-shaped wall pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top and left edges.
    NorthWest,
    /// Top and right edges.
    NorthEast,
    /// Bottom and left edges.
    SouthWest,
    /// Bottom and right edges.
    SouthEast,
}

impl Corner {
    /// The two walls enclosing `cell` on this corner.
    pub fn walls(self, cell: Cell) -> [Wall; 2] {
        let (x, y) = (cell.x, cell.y);
        match self {
            Corner::NorthWest => [Wall::vertical(x, y), Wall::horizontal(x, y)],
            Corner::NorthEast => [Wall::vertical(x + 1, y), Wall::horizontal(x, y)],
            Corner::SouthWest => [Wall::vertical(x, y), Wall::horizontal(x, y + 1)],
            Corner::SouthEast => [Wall::vertical(x + 1, y), Wall::horizontal(x, y + 1)],
        }
    }
}

/// One quadrant's worth of walls and goals, in the canonical frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadrantTemplate {
    name: String,
    extent: u32,
    vertical: Vec<Wall>,
    horizontal: Vec<Wall>,
    goals: IndexMap<PieceId, Cell>,
}

/// A template's data carried into the board frame for one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedQuadrant {
    /// The slot the data was placed into.
    pub slot: Slot,
    /// Vertical walls in the board frame.
    pub vertical: Vec<Wall>,
    /// Horizontal walls in the board frame.
    pub horizontal: Vec<Wall>,
    /// Goal cells in the board frame, in template order.
    pub goals: Vec<(PieceId, Cell)>,
}

impl QuadrantTemplate {
    /// Start authoring a template with quadrant side `extent`.
    pub fn builder(name: impl Into<String>, extent: u32) -> TemplateBuilder {
        TemplateBuilder {
            name: name.into(),
            extent,
            walls: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Template identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quadrant side length. A board composed from this template has
    /// side `2 * extent`.
    pub fn extent(&self) -> u32 {
        self.extent
    }

    /// Vertical walls in the canonical frame.
    pub fn vertical_walls(&self) -> &[Wall] {
        &self.vertical
    }

    /// Horizontal walls in the canonical frame.
    pub fn horizontal_walls(&self) -> &[Wall] {
        &self.horizontal
    }

    /// Goal cell for `piece`, if the template defines one.
    pub fn goal_for(&self, piece: &str) -> Option<Cell> {
        self.goals.get(piece).copied()
    }

    /// All goals in authoring order.
    pub fn goals(&self) -> impl Iterator<Item = (&PieceId, Cell)> + '_ {
        self.goals.iter().map(|(id, cell)| (id, *cell))
    }

    /// Rotate a copy of this template's data into `slot` on a board of
    /// side `2 * extent`.
    ///
    /// After a quarter turn the canonical vertical walls come out as
    /// horizontal walls and vice versa; the returned sets are already
    /// sorted by their board-frame orientation.
    pub fn place(&self, slot: Slot) -> PlacedQuadrant {
        let n = self.extent * 2;
        let mut vertical = Vec::with_capacity(self.vertical.len() + self.horizontal.len());
        let mut horizontal = Vec::with_capacity(self.vertical.len() + self.horizontal.len());
        for wall in self.vertical.iter().chain(&self.horizontal) {
            let placed = slot.rotate_wall(*wall, n);
            match placed.orientation {
                Orientation::Vertical => vertical.push(placed),
                Orientation::Horizontal => horizontal.push(placed),
            }
        }
        let goals = self
            .goals
            .iter()
            .map(|(id, cell)| (id.clone(), slot.rotate_cell(*cell, n)))
            .collect();
        PlacedQuadrant {
            slot,
            vertical,
            horizontal,
            goals,
        }
    }
}

/// Builder for [`QuadrantTemplate`].
///
/// Walls and goals are checked against the quadrant extent at
/// [`build`](TemplateBuilder::build) time.
#[derive(Clone, Debug)]
pub struct TemplateBuilder {
    name: String,
    extent: u32,
    walls: Vec<Wall>,
    goals: Vec<(PieceId, Cell)>,
}

impl TemplateBuilder {
    /// Add a vertical wall on the left edge of `(x, y)`.
    pub fn vertical(mut self, x: u32, y: u32) -> Self {
        self.walls.push(Wall::vertical(x, y));
        self
    }

    /// Add a horizontal wall on the top edge of `(x, y)`.
    pub fn horizontal(mut self, x: u32, y: u32) -> Self {
        self.walls.push(Wall::horizontal(x, y));
        self
    }

    /// Add any wall.
    pub fn wall(mut self, wall: Wall) -> Self {
        self.walls.push(wall);
        self
    }

    /// Set `piece`'s goal cell.
    pub fn goal(mut self, piece: impl Into<PieceId>, x: u32, y: u32) -> Self {
        self.goals.push((piece.into(), Cell::new(x, y)));
        self
    }

    /// Set `piece`'s goal cell and wall it in on `corner`.
    pub fn goal_corner(self, piece: impl Into<PieceId>, x: u32, y: u32, corner: Corner) -> Self {
        let [a, b] = corner.walls(Cell::new(x, y));
        self.goal(piece, x, y).wall(a).wall(b)
    }

    /// Validate and freeze the template.
    ///
    /// # Errors
    ///
    /// - [`BoardError::InvalidGridSize`] if `extent` is zero
    /// - [`BoardError::WallOutOfBounds`] for walls outside the quadrant
    /// - [`BoardError::GoalOutOfBounds`] for goals outside the quadrant
    /// - [`BoardError::DuplicateGoal`] if a piece is given two goals
    pub fn build(self) -> Result<QuadrantTemplate, BoardError> {
        if self.extent == 0 {
            return Err(BoardError::InvalidGridSize { size: 0 });
        }
        let mut vertical = Vec::new();
        let mut horizontal = Vec::new();
        for wall in self.walls {
            if !wall.in_bounds(self.extent) {
                return Err(BoardError::WallOutOfBounds {
                    origin: self.name,
                    wall,
                    bound: self.extent,
                });
            }
            let set = match wall.orientation {
                Orientation::Vertical => &mut vertical,
                Orientation::Horizontal => &mut horizontal,
            };
            if !set.contains(&wall) {
                set.push(wall);
            }
        }
        let mut goals = IndexMap::with_capacity(self.goals.len());
        for (piece, cell) in self.goals {
            if !cell.in_bounds(self.extent) {
                return Err(BoardError::GoalOutOfBounds {
                    origin: self.name,
                    piece,
                    cell,
                });
            }
            if goals.contains_key(&piece) {
                return Err(BoardError::DuplicateGoal {
                    template: self.name,
                    piece,
                });
            }
            goals.insert(piece, cell);
        }
        Ok(QuadrantTemplate {
            name: self.name,
            extent: self.extent,
            vertical,
            horizontal,
            goals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuadrantTemplate {
        QuadrantTemplate::builder("sample", 8)
            .vertical(4, 0)
            .horizontal(3, 7)
            .goal("allie", 6, 1)
            .build()
            .unwrap()
    }

    #[test]
    fn build_rejects_out_of_bounds_wall() {
        let err = QuadrantTemplate::builder("bad", 8)
            .vertical(9, 0)
            .build()
            .unwrap_err();
        assert!(matches!(err, BoardError::WallOutOfBounds { bound: 8, .. }));
    }

    #[test]
    fn build_accepts_quadrant_edge_anchors() {
        let t = QuadrantTemplate::builder("edge", 8)
            .vertical(8, 7)
            .horizontal(7, 8)
            .build()
            .unwrap();
        assert_eq!(t.vertical_walls(), &[Wall::vertical(8, 7)]);
        assert_eq!(t.horizontal_walls(), &[Wall::horizontal(7, 8)]);
    }

    #[test]
    fn build_rejects_goal_outside_quadrant() {
        let err = QuadrantTemplate::builder("bad", 8)
            .goal("allie", 8, 0)
            .build()
            .unwrap_err();
        assert!(matches!(err, BoardError::GoalOutOfBounds { .. }));
    }

    #[test]
    fn build_rejects_duplicate_goal() {
        let err = QuadrantTemplate::builder("dup", 8)
            .goal("allie", 1, 1)
            .goal("allie", 2, 2)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BoardError::DuplicateGoal {
                template: "dup".into(),
                piece: "allie".into()
            }
        );
    }

    #[test]
    fn build_rejects_zero_extent() {
        let err = QuadrantTemplate::builder("empty", 0).build().unwrap_err();
        assert_eq!(err, BoardError::InvalidGridSize { size: 0 });
    }

    #[test]
    fn duplicate_walls_collapse() {
        let t = QuadrantTemplate::builder("dup-walls", 8)
            .vertical(1, 1)
            .vertical(1, 1)
            .build()
            .unwrap();
        assert_eq!(t.vertical_walls().len(), 1);
    }

    #[test]
    fn goal_corner_adds_two_walls() {
        let t = QuadrantTemplate::builder("corner", 8)
            .goal_corner("saul", 2, 3, Corner::SouthEast)
            .build()
            .unwrap();
        assert_eq!(t.goal_for("saul"), Some(Cell::new(2, 3)));
        assert_eq!(t.vertical_walls(), &[Wall::vertical(3, 3)]);
        assert_eq!(t.horizontal_walls(), &[Wall::horizontal(2, 4)]);
    }

    #[test]
    fn place_quarter_turn_swaps_sets() {
        let placed = sample().place(Slot::TopRight);
        assert_eq!(placed.horizontal, vec![Wall::horizontal(15, 4)]);
        assert_eq!(placed.vertical, vec![Wall::vertical(9, 3)]);
        assert_eq!(placed.goals, vec![(PieceId::from("allie"), Cell::new(14, 6))]);
    }

    #[test]
    fn place_does_not_touch_template() {
        let t = sample();
        let before = t.clone();
        for slot in Slot::ALL {
            let _ = t.place(slot);
        }
        assert_eq!(t, before);
        assert_eq!(t.place(Slot::TopLeft).vertical, t.vertical_walls());
    }
}
