//! Command error taxonomy.
//!
//! Out-of-bounds movement is structurally impossible (a slide always
//! falls back to the perimeter), so the only runtime failures are
//! commands that name something the session does not know about.

use std::error::Error;
use std::fmt;

use crate::id::PieceId;

/// A command was rejected before it touched any state.
///
/// Rejected commands have no side effects and may be retried once the
/// input is corrected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The named piece is not part of this session.
    UnknownPiece {
        /// The identifier that was not found.
        id: PieceId,
    },
    /// The direction could not be parsed.
    UnknownDirection {
        /// The raw input that failed to parse.
        input: String,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPiece { id } => write!(f, "unknown piece '{id}'"),
            Self::UnknownDirection { input } => write!(f, "unknown direction '{input}'"),
        }
    }
}

impl Error for CommandError {}
