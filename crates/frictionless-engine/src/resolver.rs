//! Movement resolution.
//!
//! A piece slides in a straight line until the first boundary ahead of
//! it: a wall, the edge of a cell held by another piece, or the board
//! perimeter. All obstacles arrive as boundary offsets along the
//! piece's lane (see [`BoundarySource`]), so resolution is a single
//! nearest-boundary search.
//!
//! Offsets use the wall anchor convention. Moving towards lower
//! positions (up, left) from position `p`, the first edge crossed is
//! `p` itself, and a boundary at `k <= p` lands the piece on `k`.
//! Moving towards higher positions (down, right), the first edge is
//! `p + 1`, and a boundary at `k >= p + 1` lands it on `k - 1`.
//! Without a boundary ahead the perimeter edge (`0` or the grid size)
//! stands in.

use frictionless_board::{Board, Boundaries, BoundarySource};
use frictionless_core::{Cell, CommandError, Direction};

use crate::pieces::PieceTable;

/// Where a piece at `origin` comes to rest sliding in `direction`.
///
/// `sources` are searched together; their order does not matter. The
/// result lies in the same lane as `origin`, never behind it, and is
/// `origin` itself when the first edge ahead is blocked.
///
/// # Examples
///
/// ```
/// use frictionless_board::{Board, BoundarySource};
/// use frictionless_core::{Cell, Direction, PieceId, Wall};
/// use frictionless_engine::resolve_slide;
///
/// let board = Board::fixed(8, [Wall::horizontal(3, 2)], Vec::<(PieceId, Cell)>::new()).unwrap();
/// let sources: [&dyn BoundarySource; 1] = [&board];
/// assert_eq!(resolve_slide(Cell::new(3, 5), Direction::Up, 8, &sources), Cell::new(3, 2));
/// assert_eq!(resolve_slide(Cell::new(3, 5), Direction::Down, 8, &sources), Cell::new(3, 7));
/// ```
pub fn resolve_slide(
    origin: Cell,
    direction: Direction,
    grid_size: u32,
    sources: &[&dyn BoundarySource],
) -> Cell {
    let orientation = direction.blocking();
    let lane = origin.lane(orientation);
    let leading = direction.leading_edge(origin.position(orientation));

    let mut boundaries = Boundaries::new();
    for source in sources {
        source.collect_boundaries(orientation, lane, &mut boundaries);
    }

    let nearest = if direction.is_increasing() {
        boundaries.iter().copied().filter(|&k| k >= leading).min()
    } else {
        boundaries.iter().copied().filter(|&k| k <= leading).max()
    };
    let edge = nearest.unwrap_or_else(|| direction.perimeter_edge(grid_size));
    origin.with_position(orientation, direction.landing(edge))
}

/// Resolve a move of `piece` on `board` among `pieces`.
///
/// Every piece other than the mover is an obstacle. Nothing is
/// modified; the caller commits the returned cell.
///
/// # Errors
///
/// [`CommandError::UnknownPiece`] if `piece` is not in `pieces`.
pub fn resolve_move(
    piece: &str,
    direction: Direction,
    board: &Board,
    pieces: &PieceTable,
) -> Result<Cell, CommandError> {
    let origin = pieces.get(piece).ok_or_else(|| CommandError::UnknownPiece {
        id: piece.into(),
    })?;
    let others = pieces.obstacles_for(piece);
    let sources: [&dyn BoundarySource; 2] = [board, &others];
    Ok(resolve_slide(origin, direction, board.grid_size(), &sources))
}
