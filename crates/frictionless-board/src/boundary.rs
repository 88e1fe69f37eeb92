//! Obstacles as wall-equivalent boundaries.
//!
//! Static walls and occupied cells stop a sliding piece the same way.
//! Both are expressed as boundary offsets along a lane so the movement
//! resolver runs one search over the merged set, whatever produced it.

use smallvec::SmallVec;

use frictionless_core::Orientation;

use crate::board::Board;
use crate::walls::WallSet;

/// Boundary offsets gathered for one lane.
pub type Boundaries = SmallVec<[u32; 16]>;

/// A producer of boundaries for the movement resolver.
///
/// Implementations append the offset of every boundary of
/// `orientation` lying across `lane`, using the same anchor convention
/// as [`Wall`](frictionless_core::Wall): an offset `k` marks the edge
/// between positions `k - 1` and `k`.
pub trait BoundarySource {
    /// Append boundaries of `orientation` across `lane` to `out`.
    fn collect_boundaries(&self, orientation: Orientation, lane: u32, out: &mut Boundaries);
}

impl BoundarySource for WallSet {
    fn collect_boundaries(&self, orientation: Orientation, lane: u32, out: &mut Boundaries) {
        if orientation == self.orientation() {
            out.extend_from_slice(self.offsets_in_lane(lane));
        }
    }
}

impl BoundarySource for Board {
    fn collect_boundaries(&self, orientation: Orientation, lane: u32, out: &mut Boundaries) {
        self.walls(orientation).collect_boundaries(orientation, lane, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frictionless_core::{Cell, PieceId, Wall};

    #[test]
    fn board_reports_walls_by_lane() {
        let board = Board::fixed(
            8,
            [
                Wall::vertical(6, 5),
                Wall::horizontal(3, 2),
                Wall::horizontal(3, 7),
            ],
            Vec::<(PieceId, Cell)>::new(),
        )
        .unwrap();

        let mut out = Boundaries::new();
        board.collect_boundaries(Orientation::Horizontal, 3, &mut out);
        assert_eq!(out.as_slice(), &[2, 7]);

        out.clear();
        board.collect_boundaries(Orientation::Vertical, 5, &mut out);
        assert_eq!(out.as_slice(), &[6]);

        out.clear();
        board.collect_boundaries(Orientation::Vertical, 3, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn wall_set_ignores_other_orientation() {
        let mut set = WallSet::new(Orientation::Vertical);
        set.insert(Wall::vertical(2, 2));
        let mut out = Boundaries::new();
        set.collect_boundaries(Orientation::Horizontal, 2, &mut out);
        assert!(out.is_empty());
    }
}
