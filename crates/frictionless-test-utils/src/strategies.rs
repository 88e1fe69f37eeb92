//! Proptest strategies.

use proptest::prelude::*;

use frictionless_board::Board;
use frictionless_core::{Cell, Direction, Orientation, PieceId, Wall};
use frictionless_engine::{GameSession, PieceSpec, SessionConfig};

pub fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

pub fn orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(vec![Orientation::Vertical, Orientation::Horizontal])
}

/// Any in-bounds wall anchor for a board of side `grid_size`,
/// perimeter edges included.
pub fn wall(grid_size: u32) -> impl Strategy<Value = Wall> {
    (orientation(), 0..grid_size, 0..=grid_size)
        .prop_map(|(orientation, lane, offset)| Wall::from_lane(orientation, lane, offset))
}

pub fn cell(grid_size: u32) -> impl Strategy<Value = Cell> {
    (0..grid_size, 0..grid_size).prop_map(|(x, y)| Cell::new(x, y))
}

/// A fixed board with up to `max_walls` random walls and no goals.
pub fn board(grid_size: u32, max_walls: usize) -> impl Strategy<Value = Board> {
    prop::collection::vec(wall(grid_size), 0..=max_walls).prop_map(move |walls| {
        Board::fixed(grid_size, walls, Vec::<(PieceId, Cell)>::new())
            .expect("generated walls are in bounds")
    })
}

/// A session on a random board with between one and `max_pieces`
/// pieces on distinct cells, named `p0`, `p1`, ...
pub fn session(
    grid_size: u32,
    max_walls: usize,
    max_pieces: usize,
) -> impl Strategy<Value = GameSession> {
    let cells = prop::collection::hash_set(cell(grid_size), 1..=max_pieces);
    (board(grid_size, max_walls), cells).prop_map(|(board, cells)| {
        let mut cells: Vec<Cell> = cells.into_iter().collect();
        cells.sort();
        let pieces = cells
            .into_iter()
            .enumerate()
            .map(|(i, cell)| PieceSpec::new(format!("p{i}"), cell));
        GameSession::new(board, SessionConfig::new(pieces)).expect("generated session is valid")
    })
}
