//! Commands a session accepts and what they produce.
//!
//! [`Command`] is the unit of input for
//! [`GameSession::apply`](crate::GameSession::apply) and for the
//! [`SessionHost`](crate::SessionHost) queue. Input layers translate
//! their events (key presses, network messages) into commands; the
//! session never sees raw input.

use std::fmt;

use frictionless_core::{Cell, Direction, PieceId};

/// A request to change session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Slide a piece.
    Move {
        /// The piece to move. `None` moves the active piece.
        piece: Option<PieceId>,
        /// Direction of travel.
        direction: Direction,
    },
    /// Change the active piece.
    Select(PieceId),
}

impl Command {
    /// Move the active piece.
    pub fn move_active(direction: Direction) -> Self {
        Self::Move {
            piece: None,
            direction,
        }
    }

    /// Move a named piece.
    pub fn move_piece(piece: impl Into<PieceId>, direction: Direction) -> Self {
        Self::Move {
            piece: Some(piece.into()),
            direction,
        }
    }

    /// Select a piece.
    pub fn select(piece: impl Into<PieceId>) -> Self {
        Self::Select(piece.into())
    }
}

/// A resolved move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    /// The piece that was moved.
    pub piece: PieceId,
    /// Direction of travel.
    pub direction: Direction,
    /// Cell before the move.
    pub from: Cell,
    /// Cell after the move.
    pub to: Cell,
}

impl MoveRecord {
    /// Whether the piece changed cells.
    pub fn moved(&self) -> bool {
        self.from != self.to
    }

    /// Number of cells travelled.
    pub fn distance(&self) -> u32 {
        self.from.x.abs_diff(self.to.x) + self.from.y.abs_diff(self.to.y)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} -> {}",
            self.piece, self.direction, self.from, self.to
        )
    }
}

/// The result of an accepted [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A move was resolved. The record's `from` and `to` are equal when
    /// the piece was already blocked.
    Moved(MoveRecord),
    /// The active piece changed.
    Selected {
        /// The piece that was active before.
        previous: PieceId,
        /// The piece that is active now.
        active: PieceId,
    },
}
