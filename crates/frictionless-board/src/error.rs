//! Error types for template authoring and board composition.
//!
//! All of these are configuration errors raised at setup time. Once a
//! [`Board`](crate::Board) exists it cannot fail.

use std::error::Error;
use std::fmt;

use frictionless_core::{Cell, PieceId, Wall};

/// Errors arising from template construction, board construction or
/// composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The board side length cannot be used.
    ///
    /// Composed boards need an even size of at least 2; fixed boards
    /// need at least 1.
    InvalidGridSize {
        /// The rejected size.
        size: u32,
    },
    /// Composition needs exactly one template per slot.
    WrongSlotCount {
        /// Number of templates supplied.
        got: usize,
    },
    /// A template's quadrant side does not match half the board size.
    ExtentMismatch {
        /// Template name.
        template: String,
        /// The template's quadrant side.
        extent: u32,
        /// Half the composer's grid size.
        expected: u32,
    },
    /// A wall anchor lies outside its grid.
    WallOutOfBounds {
        /// Template name, or `"fixed"` for a fixed board.
        origin: String,
        /// The offending wall.
        wall: Wall,
        /// Side length the wall was checked against.
        bound: u32,
    },
    /// A goal cell lies outside its grid.
    GoalOutOfBounds {
        /// Template name, or `"fixed"` for a fixed board.
        origin: String,
        /// Piece the goal belongs to.
        piece: PieceId,
        /// The offending cell.
        cell: Cell,
    },
    /// A template gives the same piece two goals.
    DuplicateGoal {
        /// Template name.
        template: String,
        /// The piece with more than one goal.
        piece: PieceId,
    },
    /// A template lacks a goal the composer was told to require.
    MissingGoal {
        /// Template name.
        template: String,
        /// The piece without a goal.
        piece: PieceId,
    },
    /// A deck needs at least one tile per slot.
    NotEnoughTiles {
        /// Number of tiles supplied.
        got: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSize { size } => write!(f, "invalid grid size {size}"),
            Self::WrongSlotCount { got } => {
                write!(f, "composition needs exactly 4 templates, got {got}")
            }
            Self::ExtentMismatch {
                template,
                extent,
                expected,
            } => write!(
                f,
                "template '{template}' has quadrant side {extent}, expected {expected}"
            ),
            Self::WallOutOfBounds {
                origin,
                wall,
                bound,
            } => write!(f, "{origin}: {wall} out of bounds for side {bound}"),
            Self::GoalOutOfBounds {
                origin,
                piece,
                cell,
            } => write!(f, "{origin}: goal {cell} for '{piece}' out of bounds"),
            Self::DuplicateGoal { template, piece } => {
                write!(f, "template '{template}' defines two goals for '{piece}'")
            }
            Self::MissingGoal { template, piece } => {
                write!(f, "template '{template}' has no goal for '{piece}'")
            }
            Self::NotEnoughTiles { got } => {
                write!(f, "deck needs at least 4 tiles, got {got}")
            }
        }
    }
}

impl Error for BoardError {}
