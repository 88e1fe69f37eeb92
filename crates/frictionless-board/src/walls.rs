//! Per-orientation wall sets indexed by lane.

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

use frictionless_core::{Orientation, Wall};

/// All walls of one orientation on a board.
///
/// Iteration follows insertion order, so two boards built from the same
/// inputs iterate identically. Walls are also indexed by lane (the
/// column for horizontal walls, the row for vertical walls) so a slide
/// only looks at the walls across its own path.
#[derive(Clone, Debug)]
pub struct WallSet {
    orientation: Orientation,
    walls: IndexSet<Wall>,
    lanes: IndexMap<u32, SmallVec<[u32; 4]>>,
}

impl WallSet {
    /// An empty set for walls of `orientation`.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            walls: IndexSet::new(),
            lanes: IndexMap::new(),
        }
    }

    /// Orientation of every wall in the set.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Add a wall. Returns `false` if it was already present.
    ///
    /// # Panics
    ///
    /// Panics if the wall's orientation differs from the set's.
    pub(crate) fn insert(&mut self, wall: Wall) -> bool {
        assert_eq!(
            wall.orientation, self.orientation,
            "{wall} inserted into {} wall set",
            self.orientation
        );
        if !self.walls.insert(wall) {
            return false;
        }
        self.lanes.entry(wall.lane()).or_default().push(wall.offset());
        true
    }

    /// Whether `wall` is in the set.
    pub fn contains(&self, wall: &Wall) -> bool {
        self.walls.contains(wall)
    }

    /// Number of walls.
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether the set holds no walls.
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Walls in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Wall> + '_ {
        self.walls.iter().copied()
    }

    /// Offsets of every wall lying across `lane`, in insertion order.
    pub fn offsets_in_lane(&self, lane: u32) -> &[u32] {
        self.lanes.get(&lane).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

/// Equality is order-sensitive: two sets are equal only if they hold the
/// same walls inserted in the same order.
impl PartialEq for WallSet {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation && self.walls.iter().eq(other.walls.iter())
    }
}

impl Eq for WallSet {}
