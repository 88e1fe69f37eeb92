//! Board composition from four quadrant templates.
//!
//! Composition is a pure function of its inputs: identical slot
//! assignments always produce an identical [`Board`], walls and goals
//! in the same order. Choosing the templates (and which face of each
//! tile) is the caller's business; see [`Deck`](crate::Deck).

use frictionless_core::PieceId;

use crate::board::Board;
use crate::error::BoardError;
use crate::slot::Slot;
use crate::template::QuadrantTemplate;

/// Composes quadrant templates into boards of a fixed size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composer {
    grid_size: u32,
    required_goals: Vec<PieceId>,
}

impl Composer {
    /// A composer for boards of side `grid_size`.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidGridSize`] unless `grid_size` is even and at
    /// least 2, since each quadrant spans exactly half the board.
    pub fn new(grid_size: u32) -> Result<Self, BoardError> {
        if grid_size < 2 || grid_size % 2 != 0 {
            return Err(BoardError::InvalidGridSize { size: grid_size });
        }
        Ok(Self {
            grid_size,
            required_goals: Vec::new(),
        })
    }

    /// Require every template to define a goal for each of `pieces`.
    pub fn require_goals<P: Into<PieceId>>(mut self, pieces: impl IntoIterator<Item = P>) -> Self {
        self.required_goals = pieces.into_iter().map(Into::into).collect();
        self
    }

    /// Side length of the boards this composer builds.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Pieces every template must carry a goal for.
    pub fn required_goals(&self) -> &[PieceId] {
        &self.required_goals
    }

    /// Place `slots[i]` into [`Slot`] `i` and merge the results.
    ///
    /// Walls are unioned per orientation in slot order. Each piece's goal
    /// candidates are collected in slot order, one per template that
    /// defines a goal for it.
    ///
    /// # Errors
    ///
    /// - [`BoardError::WrongSlotCount`] unless exactly four templates are given
    /// - [`BoardError::ExtentMismatch`] if a template's quadrant side is not
    ///   half the grid size
    /// - [`BoardError::MissingGoal`] if a template lacks a required goal
    ///
    /// Nothing is composed unless every template passes.
    pub fn compose(&self, slots: &[&QuadrantTemplate]) -> Result<Board, BoardError> {
        if slots.len() != Slot::ALL.len() {
            return Err(BoardError::WrongSlotCount { got: slots.len() });
        }
        let half = self.grid_size / 2;
        for template in slots {
            if template.extent() != half {
                return Err(BoardError::ExtentMismatch {
                    template: template.name().to_string(),
                    extent: template.extent(),
                    expected: half,
                });
            }
            if let Some(piece) = self
                .required_goals
                .iter()
                .find(|piece| template.goal_for(piece.as_str()).is_none())
            {
                return Err(BoardError::MissingGoal {
                    template: template.name().to_string(),
                    piece: piece.clone(),
                });
            }
        }

        let layout = slots.iter().map(|t| t.name().to_string()).collect();
        let mut board = Board::with_size(self.grid_size, layout);
        for (slot, template) in Slot::ALL.into_iter().zip(slots) {
            let placed = template.place(slot);
            for wall in placed.vertical.into_iter().chain(placed.horizontal) {
                board.insert_wall(wall);
            }
            for (piece, cell) in placed.goals {
                board.push_goal(piece, cell);
            }
        }

        log::debug!(
            "composed {n}x{n} board [{}]: {} vertical, {} horizontal walls, {} pieces with goals",
            board.layout().join(", "),
            board.vertical_walls().len(),
            board.horizontal_walls().len(),
            board.goals().count(),
            n = self.grid_size,
        );
        Ok(board)
    }
}

/// Compose a board of side `grid_size` with no goal requirements.
///
/// # Examples
///
/// ```
/// use frictionless_board::{compose_board, QuadrantTemplate};
/// use frictionless_core::{Cell, Wall};
///
/// let quadrant = QuadrantTemplate::builder("q", 8)
///     .vertical(4, 0)
///     .goal("allie", 6, 1)
///     .build()
///     .unwrap();
/// let board = compose_board(16, &[&quadrant; 4]).unwrap();
///
/// // The slot-1 copy of the vertical wall comes out horizontal.
/// assert!(board.has_wall(Wall::horizontal(15, 4)));
/// assert_eq!(
///     board.goals_for("allie"),
///     &[Cell::new(6, 1), Cell::new(14, 6), Cell::new(9, 14), Cell::new(1, 9)]
/// );
/// ```
pub fn compose_board(grid_size: u32, slots: &[&QuadrantTemplate]) -> Result<Board, BoardError> {
    Composer::new(grid_size)?.compose(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use frictionless_core::{Cell, Orientation, Wall};

    fn quadrant(name: &str) -> QuadrantTemplate {
        QuadrantTemplate::builder(name, 8)
            .vertical(4, 0)
            .horizontal(3, 7)
            .goal("allie", 6, 1)
            .build()
            .unwrap()
    }

    #[test]
    fn rejects_wrong_slot_count() {
        let q = quadrant("q");
        assert_eq!(
            compose_board(16, &[&q, &q, &q]).unwrap_err(),
            BoardError::WrongSlotCount { got: 3 }
        );
        assert_eq!(
            compose_board(16, &[&q, &q, &q, &q, &q]).unwrap_err(),
            BoardError::WrongSlotCount { got: 5 }
        );
    }

    #[test]
    fn rejects_odd_or_tiny_grid() {
        assert_eq!(
            Composer::new(15).unwrap_err(),
            BoardError::InvalidGridSize { size: 15 }
        );
        assert_eq!(
            Composer::new(0).unwrap_err(),
            BoardError::InvalidGridSize { size: 0 }
        );
    }

    #[test]
    fn rejects_extent_mismatch() {
        let q = quadrant("q");
        let small = QuadrantTemplate::builder("small", 4).build().unwrap();
        let err = compose_board(16, &[&q, &q, &small, &q]).unwrap_err();
        assert_eq!(
            err,
            BoardError::ExtentMismatch {
                template: "small".into(),
                extent: 4,
                expected: 8
            }
        );
    }

    #[test]
    fn rejects_missing_required_goal() {
        let q = quadrant("q");
        let composer = Composer::new(16).unwrap().require_goals(["allie", "saul"]);
        let err = composer.compose(&[&q, &q, &q, &q]).unwrap_err();
        assert_eq!(
            err,
            BoardError::MissingGoal {
                template: "q".into(),
                piece: "saul".into()
            }
        );
    }

    #[test]
    fn walls_land_in_every_slot() {
        let q = quadrant("q");
        let board = compose_board(16, &[&q, &q, &q, &q]).unwrap();
        let vertical: Vec<Wall> = board.vertical_walls().iter().collect();
        let horizontal: Vec<Wall> = board.horizontal_walls().iter().collect();
        assert_eq!(
            vertical,
            vec![
                Wall::vertical(4, 0),   // slot 0
                Wall::vertical(9, 3),   // slot 1, from horizontal (3, 7)
                Wall::vertical(12, 15), // slot 2
                Wall::vertical(7, 12),  // slot 3, from horizontal (3, 7)
            ]
        );
        assert_eq!(
            horizontal,
            vec![
                Wall::horizontal(3, 7),  // slot 0
                Wall::horizontal(15, 4), // slot 1, from vertical (4, 0)
                Wall::horizontal(12, 9), // slot 2
                Wall::horizontal(0, 12), // slot 3, from vertical (4, 0)
            ]
        );
        assert_eq!(board.layout(), &["q", "q", "q", "q"]);
    }

    #[test]
    fn goals_follow_slot_order() {
        let with_goal = quadrant("with");
        let without = QuadrantTemplate::builder("without", 8).build().unwrap();
        let board = compose_board(16, &[&without, &with_goal, &without, &with_goal]).unwrap();
        assert_eq!(
            board.goals_for("allie"),
            &[Cell::new(14, 6), Cell::new(1, 9)]
        );
    }

    #[test]
    fn piece_without_goals_has_empty_list() {
        let without = QuadrantTemplate::builder("without", 8).build().unwrap();
        let board = compose_board(16, &[&without; 4]).unwrap();
        assert!(board.goals_for("allie").is_empty());
        assert_eq!(board.walls(Orientation::Vertical).len(), 0);
    }

    #[test]
    fn composition_is_deterministic() {
        let a = quadrant("a");
        let b = QuadrantTemplate::builder("b", 8)
            .vertical(2, 2)
            .horizontal(5, 5)
            .goal("saul", 1, 1)
            .build()
            .unwrap();
        let first = compose_board(16, &[&a, &b, &a, &b]).unwrap();
        let second = compose_board(16, &[&a, &b, &a, &b]).unwrap();
        assert_eq!(first, second);
        assert!(first
            .vertical_walls()
            .iter()
            .eq(second.vertical_walls().iter()));
        assert!(first.goals().eq(second.goals()));
    }

    #[test]
    fn shared_template_is_not_mutated() {
        let q = quadrant("q");
        let before = q.clone();
        compose_board(16, &[&q, &q, &q, &q]).unwrap();
        compose_board(16, &[&q, &q, &q, &q]).unwrap();
        assert_eq!(q, before);
    }
}
