//! Frictionless: a sliding-piece grid puzzle.
//!
//! Pieces slide in a straight line until they hit a wall, another piece
//! or the edge of the board. Boards are composed from four quadrant
//! templates, each rotated into its corner of the grid.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Frictionless sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use frictionless::prelude::*;
//!
//! // Deal a 16x16 board from the built-in tiles.
//! let deck = Deck::new(builtin_tiles().unwrap()).unwrap();
//! let composer = Composer::new(TILE_GRID_SIZE).unwrap().require_goals(CLASSIC_PIECES);
//! let board = deck.deal(7).compose(&composer).unwrap();
//! assert_eq!(board.goals_for("allie").len(), 4);
//!
//! // Or play the classic 8x8 board.
//! let mut session = GameSession::classic().unwrap();
//! let direction: Direction = "ArrowUp".parse().unwrap();
//! session.apply(Command::move_active(direction)).unwrap();
//! assert_eq!(session.position_of("allie").unwrap(), Cell::new(2, 0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `frictionless-core` | Cells, directions, walls, piece IDs, the blocking predicate |
//! | [`board`] | `frictionless-board` | Quadrant templates, slot rotation, composition, the tile deck |
//! | [`engine`] | `frictionless-engine` | Movement resolution, sessions and the session host |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core geometry and identifiers (`frictionless-core`).
///
/// [`types::Cell`], [`types::Direction`], [`types::Wall`] and the
/// [`types::blocks`] predicate.
pub use frictionless_core as types;

/// Boards and how they are built (`frictionless-board`).
///
/// Author quadrants with [`board::QuadrantTemplate::builder`], place
/// them with [`board::Composer`], or deal them from a [`board::Deck`].
pub use frictionless_board as board;

/// Movement and game state (`frictionless-engine`).
///
/// [`engine::GameSession`] for single-threaded play,
/// [`engine::SessionHost`] to share one across threads.
pub use frictionless_engine as engine;

/// Common imports for typical Frictionless usage.
pub mod prelude {
    // Core
    pub use frictionless_core::{blocks, Cell, CommandError, Direction, Orientation, PieceId, Wall};

    // Board
    pub use frictionless_board::catalog::{
        builtin_tiles, classic_board, CLASSIC_PIECES, TILE_GRID_SIZE,
    };
    pub use frictionless_board::{
        compose_board, Board, BoardError, Composer, Deck, QuadrantTemplate, Slot,
    };

    // Engine
    pub use frictionless_engine::{
        Command, CommandOutcome, ConfigError, GameSession, HostError, MoveRecord, PieceSpec,
        SessionConfig, SessionHost,
    };
}
