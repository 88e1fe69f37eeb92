//! The merged, read-only board.

use indexmap::IndexMap;
use smallvec::SmallVec;

use frictionless_core::{Cell, Orientation, PieceId, Wall};

use crate::error::BoardError;
use crate::walls::WallSet;

/// Global walls and goals for one game session.
///
/// Built once, by [`Composer::compose`](crate::Composer::compose) or
/// [`Board::fixed`], and read-only thereafter. Goal candidates keep
/// the order they were contributed in (slot order for composed boards).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid_size: u32,
    vertical: WallSet,
    horizontal: WallSet,
    goals: IndexMap<PieceId, SmallVec<[Cell; 4]>>,
    layout: Vec<String>,
}

impl Board {
    /// An empty board of side `grid_size`; walls and goals are added by
    /// the crate's constructors.
    pub(crate) fn with_size(grid_size: u32, layout: Vec<String>) -> Self {
        Self {
            grid_size,
            vertical: WallSet::new(Orientation::Vertical),
            horizontal: WallSet::new(Orientation::Horizontal),
            goals: IndexMap::new(),
            layout,
        }
    }

    /// Build a board directly from a wall list and goal list, without
    /// quadrant composition.
    ///
    /// A piece may appear in `goals` more than once; each entry becomes
    /// one goal candidate, in order.
    ///
    /// # Errors
    ///
    /// - [`BoardError::InvalidGridSize`] if `grid_size` is zero
    /// - [`BoardError::WallOutOfBounds`] / [`BoardError::GoalOutOfBounds`]
    ///   for anchors outside the grid
    ///
    /// # Examples
    ///
    /// ```
    /// use frictionless_board::Board;
    /// use frictionless_core::{Cell, Wall};
    ///
    /// let board = Board::fixed(8, [Wall::horizontal(3, 2)], [("allie", Cell::new(6, 1))]).unwrap();
    /// assert_eq!(board.grid_size(), 8);
    /// assert_eq!(board.goals_for("allie"), &[Cell::new(6, 1)]);
    /// ```
    pub fn fixed<P: Into<PieceId>>(
        grid_size: u32,
        walls: impl IntoIterator<Item = Wall>,
        goals: impl IntoIterator<Item = (P, Cell)>,
    ) -> Result<Self, BoardError> {
        if grid_size == 0 {
            return Err(BoardError::InvalidGridSize { size: grid_size });
        }
        let mut board = Self::with_size(grid_size, Vec::new());
        for wall in walls {
            if !wall.in_bounds(grid_size) {
                return Err(BoardError::WallOutOfBounds {
                    origin: "fixed".into(),
                    wall,
                    bound: grid_size,
                });
            }
            board.insert_wall(wall);
        }
        for (piece, cell) in goals {
            let piece = piece.into();
            if !cell.in_bounds(grid_size) {
                return Err(BoardError::GoalOutOfBounds {
                    origin: "fixed".into(),
                    piece,
                    cell,
                });
            }
            board.push_goal(piece, cell);
        }
        Ok(board)
    }

    /// A board with no walls and no goals.
    pub fn empty(grid_size: u32) -> Result<Self, BoardError> {
        Self::fixed(grid_size, [], Vec::<(PieceId, Cell)>::new())
    }

    pub(crate) fn insert_wall(&mut self, wall: Wall) -> bool {
        match wall.orientation {
            Orientation::Vertical => self.vertical.insert(wall),
            Orientation::Horizontal => self.horizontal.insert(wall),
        }
    }

    pub(crate) fn push_goal(&mut self, piece: PieceId, cell: Cell) {
        self.goals.entry(piece).or_default().push(cell);
    }

    /// Side length of the square grid.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Whether `cell` lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.grid_size)
    }

    /// The wall set for one orientation.
    pub fn walls(&self, orientation: Orientation) -> &WallSet {
        match orientation {
            Orientation::Vertical => &self.vertical,
            Orientation::Horizontal => &self.horizontal,
        }
    }

    /// All vertical walls.
    pub fn vertical_walls(&self) -> &WallSet {
        &self.vertical
    }

    /// All horizontal walls.
    pub fn horizontal_walls(&self) -> &WallSet {
        &self.horizontal
    }

    /// Whether the board carries `wall`.
    pub fn has_wall(&self, wall: Wall) -> bool {
        self.walls(wall.orientation).contains(&wall)
    }

    /// Ordered goal candidates for `piece`; empty if it has none.
    pub fn goals_for(&self, piece: &str) -> &[Cell] {
        self.goals.get(piece).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Every piece with at least one goal, with its candidates.
    pub fn goals(&self) -> impl Iterator<Item = (&PieceId, &[Cell])> + '_ {
        self.goals.iter().map(|(id, cells)| (id, cells.as_slice()))
    }

    /// Whether `cell` is one of `piece`'s goal candidates.
    pub fn is_goal(&self, piece: &str, cell: Cell) -> bool {
        self.goals_for(piece).contains(&cell)
    }

    /// Template names by slot for a composed board; empty for a fixed one.
    pub fn layout(&self) -> &[String] {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sorts_walls_by_orientation() {
        let board = Board::fixed(
            8,
            [Wall::vertical(6, 5), Wall::horizontal(3, 2)],
            [("allie", Cell::new(1, 1))],
        )
        .unwrap();
        assert_eq!(board.vertical_walls().len(), 1);
        assert_eq!(board.horizontal_walls().len(), 1);
        assert!(board.has_wall(Wall::vertical(6, 5)));
        assert!(!board.has_wall(Wall::horizontal(6, 5)));
        assert!(board.layout().is_empty());
    }

    #[test]
    fn fixed_accumulates_goal_candidates_in_order() {
        let board = Board::fixed(
            8,
            [],
            [
                ("allie", Cell::new(1, 1)),
                ("saul", Cell::new(2, 2)),
                ("allie", Cell::new(3, 3)),
            ],
        )
        .unwrap();
        assert_eq!(board.goals_for("allie"), &[Cell::new(1, 1), Cell::new(3, 3)]);
        assert_eq!(board.goals_for("saul"), &[Cell::new(2, 2)]);
        assert!(board.goals_for("doug").is_empty());
        assert!(board.is_goal("allie", Cell::new(3, 3)));
        assert!(!board.is_goal("saul", Cell::new(3, 3)));
    }

    #[test]
    fn fixed_rejects_out_of_bounds() {
        let err = Board::fixed(8, [Wall::horizontal(8, 0)], Vec::<(PieceId, Cell)>::new())
            .unwrap_err();
        assert!(matches!(err, BoardError::WallOutOfBounds { bound: 8, .. }));

        let err = Board::fixed(8, [], [("allie", Cell::new(0, 8))]).unwrap_err();
        assert!(matches!(err, BoardError::GoalOutOfBounds { .. }));

        assert_eq!(
            Board::empty(0).unwrap_err(),
            BoardError::InvalidGridSize { size: 0 }
        );
    }

    #[test]
    fn perimeter_anchors_are_accepted() {
        let board = Board::fixed(
            8,
            [Wall::vertical(8, 0), Wall::horizontal(0, 8)],
            Vec::<(PieceId, Cell)>::new(),
        )
        .unwrap();
        assert_eq!(board.vertical_walls().offsets_in_lane(0), &[8]);
    }
}
