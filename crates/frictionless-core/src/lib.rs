//! Core types for the Frictionless sliding-piece puzzle.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid geometry every other crate builds on: cells, directions,
//! the two wall orientations and their anchor semantics, piece
//! identifiers, and the command error taxonomy.
//!
//! # Anchor convention
//!
//! A [`Wall`] is indexed by the cell it is anchored to. A vertical wall
//! sits on the **left** edge of its anchor cell, a horizontal wall on the
//! **top** edge. [`blocks`] is the single definition of that convention;
//! the movement resolver and the board composer both derive from it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod wall;

pub use cell::{Cell, Direction};
pub use error::CommandError;
pub use id::PieceId;
pub use wall::{blocks, Orientation, Wall};
