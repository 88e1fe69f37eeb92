//! Session configuration, validation, and error types.
//!
//! [`SessionConfig`] lists the pieces that take part in a session and
//! where each one starts. [`validate()`](SessionConfig::validate) checks
//! it against a concrete [`Board`] before
//! [`GameSession::new`](crate::GameSession::new) accepts it.

use std::error::Error;
use std::fmt;

use frictionless_board::catalog::{CLASSIC_PIECES, CLASSIC_STARTS};
use frictionless_board::{Board, BoardError};
use frictionless_core::{Cell, PieceId};

use crate::pieces::PieceTable;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while setting up a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The board itself could not be built.
    Board(BoardError),
    /// The configuration names no pieces.
    NoPieces,
    /// Two piece specs share an identifier.
    DuplicatePiece {
        /// The repeated identifier.
        id: PieceId,
    },
    /// A starting cell lies off the board.
    StartOutOfBounds {
        /// The misplaced piece.
        id: PieceId,
        /// Its starting cell.
        cell: Cell,
        /// The board's side length.
        grid_size: u32,
    },
    /// Two pieces start on the same cell.
    OverlappingStart {
        /// The piece listed first.
        first: PieceId,
        /// The piece listed second.
        second: PieceId,
        /// The shared cell.
        cell: Cell,
    },
    /// The requested active piece is not in the configuration.
    UnknownActivePiece {
        /// The requested identifier.
        id: PieceId,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(e) => write!(f, "board: {e}"),
            Self::NoPieces => write!(f, "session has no pieces"),
            Self::DuplicatePiece { id } => write!(f, "piece '{id}' is configured twice"),
            Self::StartOutOfBounds {
                id,
                cell,
                grid_size,
            } => write!(
                f,
                "piece '{id}' starts at {cell}, outside the {grid_size}x{grid_size} board"
            ),
            Self::OverlappingStart {
                first,
                second,
                cell,
            } => write!(f, "pieces '{first}' and '{second}' both start at {cell}"),
            Self::UnknownActivePiece { id } => {
                write!(f, "active piece '{id}' is not configured")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for ConfigError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

// ── SessionConfig ──────────────────────────────────────────────────

/// One piece and its starting cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceSpec {
    /// Piece identifier.
    pub id: PieceId,
    /// Starting cell.
    pub start: Cell,
}

impl PieceSpec {
    /// A piece starting at `start`.
    pub fn new(id: impl Into<PieceId>, start: Cell) -> Self {
        Self {
            id: id.into(),
            start,
        }
    }
}

/// The pieces of a session and the initially active one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Pieces in selection order.
    pub pieces: Vec<PieceSpec>,
    /// Initially active piece. `None` selects the first listed piece.
    pub active: Option<PieceId>,
}

impl SessionConfig {
    /// A configuration over `pieces`, first piece active.
    pub fn new(pieces: impl IntoIterator<Item = PieceSpec>) -> Self {
        Self {
            pieces: pieces.into_iter().collect(),
            active: None,
        }
    }

    /// Set the initially active piece.
    pub fn with_active(mut self, id: impl Into<PieceId>) -> Self {
        self.active = Some(id.into());
        self
    }

    /// The four classic pieces on their classic starting cells, `allie`
    /// active.
    pub fn classic() -> Self {
        Self::new(
            CLASSIC_STARTS
                .iter()
                .map(|&(id, start)| PieceSpec::new(id, start)),
        )
        .with_active(CLASSIC_PIECES[0])
    }

    /// The piece that starts active.
    pub fn initial_active(&self) -> Option<&PieceId> {
        self.active
            .as_ref()
            .or_else(|| self.pieces.first().map(|p| &p.id))
    }

    /// Check the configuration against `board`.
    ///
    /// Pieces need distinct identifiers and distinct starting cells on
    /// the board. Starting on a goal is allowed.
    pub fn validate(&self, board: &Board) -> Result<(), ConfigError> {
        if self.pieces.is_empty() {
            return Err(ConfigError::NoPieces);
        }
        let table = PieceTable::from_cells(
            self.pieces.iter().map(|spec| (spec.id.clone(), spec.start)),
            board,
        )?;
        if let Some(active) = &self.active {
            if !table.contains(active.as_str()) {
                return Err(ConfigError::UnknownActivePiece { id: active.clone() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::empty(8).unwrap()
    }

    #[test]
    fn classic_config_is_valid() {
        let config = SessionConfig::classic();
        assert_eq!(config.pieces.len(), 4);
        assert_eq!(config.initial_active().unwrap().as_str(), "allie");
        config.validate(&board()).unwrap();
    }

    #[test]
    fn first_piece_is_default_active() {
        let config = SessionConfig::new([
            PieceSpec::new("b", Cell::new(0, 0)),
            PieceSpec::new("a", Cell::new(1, 0)),
        ]);
        assert_eq!(config.initial_active().unwrap().as_str(), "b");
    }

    #[test]
    fn empty_config_rejected() {
        assert_eq!(
            SessionConfig::new([]).validate(&board()),
            Err(ConfigError::NoPieces)
        );
    }

    #[test]
    fn duplicate_piece_rejected() {
        let config = SessionConfig::new([
            PieceSpec::new("a", Cell::new(0, 0)),
            PieceSpec::new("a", Cell::new(1, 0)),
        ]);
        assert_eq!(
            config.validate(&board()),
            Err(ConfigError::DuplicatePiece { id: "a".into() })
        );
    }

    #[test]
    fn out_of_bounds_start_rejected() {
        let config = SessionConfig::new([PieceSpec::new("a", Cell::new(8, 0))]);
        assert_eq!(
            config.validate(&board()),
            Err(ConfigError::StartOutOfBounds {
                id: "a".into(),
                cell: Cell::new(8, 0),
                grid_size: 8
            })
        );
    }

    #[test]
    fn overlapping_start_rejected() {
        let config = SessionConfig::new([
            PieceSpec::new("a", Cell::new(2, 2)),
            PieceSpec::new("b", Cell::new(3, 3)),
            PieceSpec::new("c", Cell::new(2, 2)),
        ]);
        assert_eq!(
            config.validate(&board()),
            Err(ConfigError::OverlappingStart {
                first: "a".into(),
                second: "c".into(),
                cell: Cell::new(2, 2)
            })
        );
    }

    #[test]
    fn unknown_active_rejected() {
        let config = SessionConfig::new([PieceSpec::new("a", Cell::new(0, 0))]).with_active("z");
        assert_eq!(
            config.validate(&board()),
            Err(ConfigError::UnknownActivePiece { id: "z".into() })
        );
    }

    #[test]
    fn board_error_is_the_source() {
        let err = ConfigError::from(BoardError::InvalidGridSize { size: 0 });
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("board: "));
    }
}
