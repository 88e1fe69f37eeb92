//! Test fixtures and proptest strategies for Frictionless development.
//!
//! [`SessionBuilder`] assembles a fixed board and a piece layout in one
//! expression, so tests state exactly the walls and pieces they care
//! about. [`fixtures`] holds ready-made templates and sessions, and
//! [`strategies`] generates random boards and sessions for property
//! tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

use frictionless_board::Board;
use frictionless_core::{Cell, PieceId, Wall};
use frictionless_engine::{GameSession, PieceSpec, SessionConfig};

/// Builder for sessions on a hand-placed board.
///
/// Panics on invalid input; it is meant for tests only.
pub struct SessionBuilder {
    grid_size: u32,
    walls: Vec<Wall>,
    goals: Vec<(PieceId, Cell)>,
    pieces: Vec<PieceSpec>,
    active: Option<PieceId>,
}

impl SessionBuilder {
    pub fn new(grid_size: u32) -> Self {
        Self {
            grid_size,
            walls: Vec::new(),
            goals: Vec::new(),
            pieces: Vec::new(),
            active: None,
        }
    }

    pub fn wall(mut self, wall: Wall) -> Self {
        self.walls.push(wall);
        self
    }

    pub fn walls(mut self, walls: impl IntoIterator<Item = Wall>) -> Self {
        self.walls.extend(walls);
        self
    }

    pub fn goal(mut self, piece: &str, x: u32, y: u32) -> Self {
        self.goals.push((piece.into(), Cell::new(x, y)));
        self
    }

    pub fn piece(mut self, id: &str, x: u32, y: u32) -> Self {
        self.pieces.push(PieceSpec::new(id, Cell::new(x, y)));
        self
    }

    pub fn active(mut self, id: &str) -> Self {
        self.active = Some(id.into());
        self
    }

    /// The board alone.
    pub fn board(&self) -> Board {
        Board::fixed(self.grid_size, self.walls.iter().copied(), self.goals.clone())
            .expect("test board should be valid")
    }

    pub fn build(self) -> GameSession {
        let board = self.board();
        let config = SessionConfig {
            pieces: self.pieces,
            active: self.active,
        };
        GameSession::new(board, config).expect("test session should be valid")
    }
}
