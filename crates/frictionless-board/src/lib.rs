//! Board composition for the Frictionless sliding puzzle.
//!
//! A full board is assembled from four [`QuadrantTemplate`]s, each
//! authored as if it sat in the top-left corner. The [`Composer`] places
//! one template in each [`Slot`], rotating it into position, and merges
//! the walls and goals into a single read-only [`Board`].
//!
//! # Layers
//!
//! - [`slot`]: the four rotational slots and their coordinate transforms
//! - [`template`]: immutable authored quadrant data
//! - [`walls`]: per-orientation wall sets indexed by lane
//! - [`board`]: the merged board, also constructible as a fixed layout
//! - [`compose`]: the pure composition function
//! - [`boundary`]: the obstacle abstraction consumed by the movement resolver
//! - [`catalog`] and [`deck`]: built-in tiles and seeded quadrant selection

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod boundary;
pub mod catalog;
pub mod compose;
pub mod deck;
pub mod error;
pub mod slot;
pub mod template;
pub mod walls;

pub use board::Board;
pub use boundary::{Boundaries, BoundarySource};
pub use compose::{compose_board, Composer};
pub use deck::{Deal, Deck, Face, QuadrantTile};
pub use error::BoardError;
pub use slot::Slot;
pub use template::{Corner, QuadrantTemplate, TemplateBuilder};
pub use walls::WallSet;
