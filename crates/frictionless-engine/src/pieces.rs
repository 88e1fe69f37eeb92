//! Piece positions.

use indexmap::IndexMap;

use frictionless_board::{Board, Boundaries, BoundarySource};
use frictionless_core::{Cell, Orientation, PieceId};

use crate::config::ConfigError;

/// Current cell of every piece, in configuration order.
///
/// The table never holds two pieces on one cell; [`GameSession`]
/// only updates it through the movement resolver.
///
/// [`GameSession`]: crate::GameSession
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PieceTable {
    positions: IndexMap<PieceId, Cell>,
}

impl PieceTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table of `pieces` placed on `board`, in iteration order.
    ///
    /// Use this to call [`resolve_move`](crate::resolve_move) without a
    /// session.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DuplicatePiece`] for a repeated identifier,
    /// [`ConfigError::StartOutOfBounds`] for a cell off the board and
    /// [`ConfigError::OverlappingStart`] for two pieces on one cell.
    pub fn from_cells<I, P>(pieces: I, board: &Board) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (P, Cell)>,
        P: Into<PieceId>,
    {
        let mut table = Self::new();
        for (id, cell) in pieces {
            let id = id.into();
            if table.contains(id.as_str()) {
                return Err(ConfigError::DuplicatePiece { id });
            }
            if !board.contains(cell) {
                return Err(ConfigError::StartOutOfBounds {
                    id,
                    cell,
                    grid_size: board.grid_size(),
                });
            }
            if let Some(first) = table.occupant(cell) {
                return Err(ConfigError::OverlappingStart {
                    first: first.clone(),
                    second: id,
                    cell,
                });
            }
            table.insert(id, cell);
        }
        Ok(table)
    }

    pub(crate) fn insert(&mut self, id: PieceId, cell: Cell) {
        self.positions.insert(id, cell);
    }

    /// Move a known piece. Returns the previous cell.
    pub(crate) fn set(&mut self, id: &str, cell: Cell) -> Option<Cell> {
        self.positions
            .get_mut(id)
            .map(|slot| std::mem::replace(slot, cell))
    }

    /// Cell of `id`, if the piece exists.
    pub fn get(&self, id: &str) -> Option<Cell> {
        self.positions.get(id).copied()
    }

    /// Whether `id` is a known piece.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// The interned identifier for `id`.
    pub fn id(&self, id: &str) -> Option<&PieceId> {
        self.positions.get_key_value(id).map(|(k, _)| k)
    }

    /// The piece standing on `cell`, if any.
    pub fn occupant(&self, cell: Cell) -> Option<&PieceId> {
        self.positions
            .iter()
            .find(|(_, c)| **c == cell)
            .map(|(id, _)| id)
    }

    /// Number of pieces.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Pieces and cells in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&PieceId, Cell)> + '_ {
        self.positions.iter().map(|(id, &cell)| (id, cell))
    }

    /// Identifiers in configuration order.
    pub fn ids(&self) -> impl Iterator<Item = &PieceId> + '_ {
        self.positions.keys()
    }

    /// Every piece except `moving`, as obstacles.
    pub fn obstacles_for<'a>(&'a self, moving: &'a str) -> PieceBoundaries<'a> {
        PieceBoundaries {
            table: self,
            moving,
        }
    }
}

/// Pieces seen as boundaries by one moving piece.
///
/// A piece at position `p` in the moving piece's lane contributes the
/// two edges around its cell, `p` and `p + 1`, so the mover stops on
/// the adjacent cell from either side.
#[derive(Clone, Copy, Debug)]
pub struct PieceBoundaries<'a> {
    table: &'a PieceTable,
    moving: &'a str,
}

impl BoundarySource for PieceBoundaries<'_> {
    fn collect_boundaries(&self, orientation: Orientation, lane: u32, out: &mut Boundaries) {
        for (id, cell) in self.table.iter() {
            if id.as_str() == self.moving || cell.lane(orientation) != lane {
                continue;
            }
            let position = cell.position(orientation);
            out.extend_from_slice(&[position, position + 1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PieceTable {
        let mut table = PieceTable::new();
        table.insert("a".into(), Cell::new(3, 3));
        table.insert("b".into(), Cell::new(3, 6));
        table.insert("c".into(), Cell::new(5, 3));
        table
    }

    #[test]
    fn from_cells_builds_in_order() {
        let board = Board::empty(8).unwrap();
        let table =
            PieceTable::from_cells([("b", Cell::new(0, 0)), ("a", Cell::new(7, 7))], &board)
                .unwrap();
        let ids: Vec<&str> = table.ids().map(PieceId::as_str).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(table.get("a"), Some(Cell::new(7, 7)));
    }

    #[test]
    fn from_cells_rejects_bad_placements() {
        let board = Board::empty(8).unwrap();
        assert_eq!(
            PieceTable::from_cells([("a", Cell::new(0, 0)), ("a", Cell::new(1, 0))], &board),
            Err(ConfigError::DuplicatePiece { id: "a".into() })
        );
        assert_eq!(
            PieceTable::from_cells([("a", Cell::new(0, 8))], &board),
            Err(ConfigError::StartOutOfBounds {
                id: "a".into(),
                cell: Cell::new(0, 8),
                grid_size: 8
            })
        );
        assert_eq!(
            PieceTable::from_cells([("a", Cell::new(2, 2)), ("b", Cell::new(2, 2))], &board),
            Err(ConfigError::OverlappingStart {
                first: "a".into(),
                second: "b".into(),
                cell: Cell::new(2, 2)
            })
        );
    }

    #[test]
    fn keeps_configuration_order() {
        let table = table();
        let ids: Vec<&str> = table.ids().map(PieceId::as_str).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn set_returns_previous_cell() {
        let mut table = table();
        assert_eq!(table.set("a", Cell::new(3, 5)), Some(Cell::new(3, 3)));
        assert_eq!(table.get("a"), Some(Cell::new(3, 5)));
        assert_eq!(table.set("zz", Cell::new(0, 0)), None);
        assert!(!table.contains("zz"));
    }

    #[test]
    fn occupant_lookup() {
        let table = table();
        assert_eq!(table.occupant(Cell::new(5, 3)).unwrap().as_str(), "c");
        assert!(table.occupant(Cell::new(0, 0)).is_none());
    }

    #[test]
    fn column_obstacles_for_vertical_travel() {
        let table = table();
        let mut out = Boundaries::new();
        table
            .obstacles_for("a")
            .collect_boundaries(Orientation::Horizontal, 3, &mut out);
        assert_eq!(out.as_slice(), &[6, 7]);
    }

    #[test]
    fn row_obstacles_for_horizontal_travel() {
        let table = table();
        let mut out = Boundaries::new();
        table
            .obstacles_for("a")
            .collect_boundaries(Orientation::Vertical, 3, &mut out);
        assert_eq!(out.as_slice(), &[5, 6]);
    }

    #[test]
    fn mover_never_blocks_itself() {
        let mut table = PieceTable::new();
        table.insert("solo".into(), Cell::new(2, 2));
        let mut out = Boundaries::new();
        table
            .obstacles_for("solo")
            .collect_boundaries(Orientation::Horizontal, 2, &mut out);
        assert!(out.is_empty());
    }
}
