//! Game sessions for the Frictionless sliding puzzle.
//!
//! A [`GameSession`] owns one composed [`Board`](frictionless_board::Board),
//! the table of piece positions and the active-piece selector. Every
//! directional command runs through the movement resolver, which folds
//! static walls and the other pieces into one boundary search and
//! updates exactly one piece.
//!
//! Sessions are single-threaded: all mutating methods take `&mut self`.
//! Callers that need to share a session across threads use
//! [`SessionHost`], which serializes commands through a channel.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod config;
pub mod host;
pub mod pieces;
pub mod resolver;
pub mod selection;
pub mod session;

pub use command::{Command, CommandOutcome, MoveRecord};
pub use config::{ConfigError, PieceSpec, SessionConfig};
pub use host::{HostError, SessionHandle, SessionHost, SessionSnapshot};
pub use pieces::{PieceBoundaries, PieceTable};
pub use resolver::{resolve_move, resolve_slide};
pub use selection::Selection;
pub use session::GameSession;
