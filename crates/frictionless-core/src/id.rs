//! Piece identifiers.

use std::borrow::Borrow;
use std::fmt;

/// Identifies a piece on the board.
///
/// Pieces are named (`"allie"`, `"saul"`, ...) so that quadrant
/// templates authored independently of any session can attach goals to
/// them. Lookups by `&str` work on any map keyed by `PieceId`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(String);

impl PieceId {
    /// Create an identifier from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PieceId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for PieceId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl Borrow<str> for PieceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PieceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
