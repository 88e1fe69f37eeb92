//! Benchmark profiles for the Frictionless sliding puzzle.
//!
//! - [`classic_profile`]: the hand-authored 8x8 board, four pieces
//! - [`tiled_profile`]: a seeded 16x16 board dealt from the built-in tiles
//! - [`init_piece_positions`]: deterministic piece placement via seed
//! - [`command_script`]: a deterministic stream of move and select commands

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use frictionless_board::catalog::{builtin_tiles, CLASSIC_PIECES, TILE_GRID_SIZE};
use frictionless_board::{Composer, Deck};
use frictionless_core::{Cell, Direction};
use frictionless_engine::{Command, ConfigError, GameSession, PieceSpec, SessionConfig};

/// The classic 8x8 session.
pub fn classic_profile() -> Result<GameSession, ConfigError> {
    GameSession::classic()
}

/// A 16x16 session dealt from the built-in tiles with `seed`, the four
/// classic pieces placed by [`init_piece_positions`].
pub fn tiled_profile(seed: u64) -> Result<GameSession, ConfigError> {
    let deck = Deck::new(builtin_tiles()?)?;
    let composer = Composer::new(TILE_GRID_SIZE)?.require_goals(CLASSIC_PIECES);
    let board = deck.deal(seed).compose(&composer)?;
    let cells = init_piece_positions(TILE_GRID_SIZE, CLASSIC_PIECES.len(), seed);
    let pieces = CLASSIC_PIECES
        .iter()
        .zip(cells)
        .map(|(&id, cell)| PieceSpec::new(id, cell));
    GameSession::new(board, SessionConfig::new(pieces))
}

/// Generate `n` distinct deterministic cells on a `grid_size` board.
///
/// Uses a simple hash of the seed with linear probing on collision.
pub fn init_piece_positions(grid_size: u32, n: usize, seed: u64) -> Vec<Cell> {
    let side = u64::from(grid_size);
    let cell_count = side * side;
    let to_cell = |pos: u64| Cell::new((pos % side) as u32, (pos / side) as u32);
    let mut cells: Vec<Cell> = Vec::with_capacity(n);

    for i in 0..n as u64 {
        let mut pos = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407))
            % cell_count;

        // Linear probe to avoid collisions
        while cells.contains(&to_cell(pos)) {
            pos = (pos + 1) % cell_count;
        }
        cells.push(to_cell(pos));
    }

    cells
}

/// A deterministic script of `len` commands over the classic pieces:
/// mostly moves of the active piece, with a selection change every
/// fifth command.
pub fn command_script(len: usize, seed: u64) -> Vec<Command> {
    let mut state = seed;
    (0..len)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let pick = (state >> 33) as usize;
            if i % 5 == 4 {
                Command::select(CLASSIC_PIECES[pick % CLASSIC_PIECES.len()])
            } else {
                Command::move_active(Direction::ALL[pick % Direction::ALL.len()])
            }
        })
        .collect()
}
