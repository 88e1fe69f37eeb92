//! The active-piece selector.

use frictionless_core::PieceId;

/// Which piece directional input drives.
///
/// Always names exactly one piece. Whether that piece exists is checked
/// by [`GameSession::select_piece`](crate::GameSession::select_piece)
/// before the selection changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    active: PieceId,
}

impl Selection {
    /// A selection starting on `active`.
    pub fn new(active: PieceId) -> Self {
        Self { active }
    }

    /// The active piece.
    pub fn active(&self) -> &PieceId {
        &self.active
    }

    /// Make `piece` active and return the previously active piece.
    pub fn select(&mut self, piece: PieceId) -> PieceId {
        std::mem::replace(&mut self.active, piece)
    }
}
