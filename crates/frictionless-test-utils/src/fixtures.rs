//! Reusable templates and sessions.
//!
//! - [`sample_quadrant`]: one wall of each orientation and one goal,
//!   used by the rotation literals in the board tests.
//! - [`corridor_session`]: a single row with pieces at both ends.
//! - [`classic_session`]: the built-in 8x8 game.

use frictionless_board::QuadrantTemplate;
use frictionless_core::Wall;
use frictionless_engine::GameSession;

use crate::SessionBuilder;

/// An 8x8 quadrant with `V(4,0)`, `H(3,7)` and `allie`'s goal at `(6,1)`.
pub fn sample_quadrant(name: &str) -> QuadrantTemplate {
    QuadrantTemplate::builder(name, 8)
        .vertical(4, 0)
        .horizontal(3, 7)
        .goal("allie", 6, 1)
        .build()
        .expect("sample quadrant should be valid")
}

/// An empty quadrant of side `extent`.
pub fn blank_quadrant(name: &str, extent: u32) -> QuadrantTemplate {
    QuadrantTemplate::builder(name, extent)
        .build()
        .expect("blank quadrant should be valid")
}

/// An 8x8 board whose row 3 is walled above and below, with `left` at
/// `(0, 3)` and `right` at `(7, 3)`.
pub fn corridor_session() -> GameSession {
    SessionBuilder::new(8)
        .walls((0..8).flat_map(|x| [Wall::horizontal(x, 3), Wall::horizontal(x, 4)]))
        .piece("left", 0, 3)
        .piece("right", 7, 3)
        .build()
}

/// The classic 8x8 game.
pub fn classic_session() -> GameSession {
    GameSession::classic().expect("classic session should be valid")
}
