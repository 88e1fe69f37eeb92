//! Built-in quadrant tiles and the classic fixed board.
//!
//! The four classic pieces are `allie`, `saul`, `doug` and `frida`.
//! Every built-in quadrant face carries one goal for each of them, the
//! two spur walls on its outer perimeter, and its quarter of the
//! walled-off 2x2 centre block.

use frictionless_core::{Cell, Wall};

use crate::board::Board;
use crate::deck::QuadrantTile;
use crate::error::BoardError;
use crate::template::{Corner, QuadrantTemplate};

/// Names of the classic pieces, in selection order.
pub const CLASSIC_PIECES: [&str; 4] = ["allie", "saul", "doug", "frida"];

/// Starting cells of the classic pieces on the fixed 8x8 board.
pub const CLASSIC_STARTS: [(&str, Cell); 4] = [
    ("allie", Cell::new(2, 2)),
    ("saul", Cell::new(3, 3)),
    ("doug", Cell::new(4, 4)),
    ("frida", Cell::new(5, 5)),
];

/// Side of the classic fixed board.
pub const CLASSIC_GRID_SIZE: u32 = 8;

/// Side of a board composed from the built-in tiles.
pub const TILE_GRID_SIZE: u32 = 16;

const CLASSIC_VERTICAL: [(u32, u32); 6] = [(5, 0), (7, 1), (1, 2), (7, 5), (3, 6), (7, 7)];
const CLASSIC_HORIZONTAL: [(u32, u32); 6] = [(0, 6), (1, 2), (3, 7), (6, 2), (6, 5), (7, 7)];
const CLASSIC_GOALS: [(u32, u32); 4] = [(6, 1), (1, 2), (6, 5), (3, 6)];

/// The single hand-authored 8x8 board, one goal per classic piece.
pub fn classic_board() -> Result<Board, BoardError> {
    let walls = CLASSIC_VERTICAL
        .iter()
        .map(|&(x, y)| Wall::vertical(x, y))
        .chain(CLASSIC_HORIZONTAL.iter().map(|&(x, y)| Wall::horizontal(x, y)));
    let goals = CLASSIC_PIECES
        .iter()
        .zip(CLASSIC_GOALS)
        .map(|(&piece, (x, y))| (piece, Cell::new(x, y)));
    Board::fixed(CLASSIC_GRID_SIZE, walls, goals)
}

/// One face of a built-in tile.
struct FaceSpec {
    name: &'static str,
    /// Column of the spur wall hanging from the top perimeter.
    top_spur: u32,
    /// Row of the spur wall sticking out of the left perimeter.
    left_spur: u32,
    /// Goal per classic piece, in [`CLASSIC_PIECES`] order.
    goals: [(u32, u32, Corner); 4],
}

const EXTENT: u32 = TILE_GRID_SIZE / 2;

#[rustfmt::skip]
const TILES: [(&str, FaceSpec, FaceSpec); 4] = [
    (
        "red",
        FaceSpec { name: "red-a", top_spur: 4, left_spur: 5, goals: [
            (6, 1, Corner::NorthEast), (1, 3, Corner::SouthWest),
            (4, 5, Corner::NorthWest), (2, 6, Corner::SouthEast),
        ] },
        FaceSpec { name: "red-b", top_spur: 3, left_spur: 6, goals: [
            (5, 2, Corner::SouthWest), (2, 4, Corner::NorthEast),
            (6, 5, Corner::SouthEast), (3, 6, Corner::NorthWest),
        ] },
    ),
    (
        "green",
        FaceSpec { name: "green-a", top_spur: 5, left_spur: 4, goals: [
            (2, 1, Corner::NorthWest), (6, 3, Corner::SouthEast),
            (1, 5, Corner::NorthEast), (4, 6, Corner::SouthWest),
        ] },
        FaceSpec { name: "green-b", top_spur: 2, left_spur: 3, goals: [
            (4, 2, Corner::SouthEast), (1, 6, Corner::NorthWest),
            (5, 4, Corner::NorthEast), (6, 6, Corner::SouthWest),
        ] },
    ),
    (
        "blue",
        FaceSpec { name: "blue-a", top_spur: 6, left_spur: 2, goals: [
            (3, 3, Corner::NorthEast), (5, 1, Corner::SouthWest),
            (2, 5, Corner::SouthEast), (6, 4, Corner::NorthWest),
        ] },
        FaceSpec { name: "blue-b", top_spur: 4, left_spur: 4, goals: [
            (1, 5, Corner::SouthWest), (4, 3, Corner::NorthWest),
            (6, 2, Corner::NorthEast), (3, 6, Corner::SouthEast),
        ] },
    ),
    (
        "yellow",
        FaceSpec { name: "yellow-a", top_spur: 3, left_spur: 5, goals: [
            (6, 5, Corner::NorthWest), (2, 2, Corner::SouthEast),
            (5, 3, Corner::SouthWest), (1, 4, Corner::NorthEast),
        ] },
        FaceSpec { name: "yellow-b", top_spur: 5, left_spur: 3, goals: [
            (2, 6, Corner::NorthEast), (6, 1, Corner::SouthWest),
            (3, 4, Corner::SouthEast), (5, 6, Corner::NorthWest),
        ] },
    ),
];

fn build_face(spec: &FaceSpec) -> Result<QuadrantTemplate, BoardError> {
    let centre = EXTENT - 1;
    let mut builder = QuadrantTemplate::builder(spec.name, EXTENT)
        .vertical(spec.top_spur, 0)
        .horizontal(0, spec.left_spur)
        .vertical(centre, centre)
        .horizontal(centre, centre);
    for (&piece, &(x, y, corner)) in CLASSIC_PIECES.iter().zip(&spec.goals) {
        builder = builder.goal_corner(piece, x, y, corner);
    }
    builder.build()
}

/// The four built-in double-sided tiles, for a 16x16 board.
pub fn builtin_tiles() -> Result<Vec<QuadrantTile>, BoardError> {
    TILES
        .iter()
        .map(|(name, front, back)| {
            Ok(QuadrantTile::new(*name, build_face(front)?, build_face(back)?))
        })
        .collect()
}
