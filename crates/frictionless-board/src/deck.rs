//! Seeded quadrant selection.
//!
//! A physical board is built from double-sided tiles: each tile shows
//! one of two faces, and the four chosen tiles are shuffled into the
//! four slots. [`Deck::deal`] makes those choices from a seed, so a
//! given seed always deals the same layout, and hands the result to the
//! (randomness-free) [`Composer`](crate::Composer).

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::compose::Composer;
use crate::error::BoardError;
use crate::slot::Slot;
use crate::template::QuadrantTemplate;

/// Which side of a tile faces up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// The first face.
    Front,
    /// The second face.
    Back,
}

/// A double-sided quadrant tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadrantTile {
    name: String,
    front: QuadrantTemplate,
    back: QuadrantTemplate,
}

impl QuadrantTile {
    /// A tile with the given faces.
    pub fn new(name: impl Into<String>, front: QuadrantTemplate, back: QuadrantTemplate) -> Self {
        Self {
            name: name.into(),
            front,
            back,
        }
    }

    /// Tile name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The first face.
    pub fn front(&self) -> &QuadrantTemplate {
        &self.front
    }

    /// The second face.
    pub fn back(&self) -> &QuadrantTemplate {
        &self.back
    }

    /// The template showing on `face`.
    pub fn face(&self, face: Face) -> &QuadrantTemplate {
        match face {
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }
}

/// A set of tiles to deal boards from.
#[derive(Clone, Debug)]
pub struct Deck {
    tiles: Vec<QuadrantTile>,
}

impl Deck {
    /// A deck over `tiles`.
    ///
    /// # Errors
    ///
    /// [`BoardError::NotEnoughTiles`] if there are fewer tiles than slots.
    pub fn new(tiles: Vec<QuadrantTile>) -> Result<Self, BoardError> {
        if tiles.len() < Slot::ALL.len() {
            return Err(BoardError::NotEnoughTiles { got: tiles.len() });
        }
        Ok(Self { tiles })
    }

    /// The tiles in the deck.
    pub fn tiles(&self) -> &[QuadrantTile] {
        &self.tiles
    }

    /// Choose four distinct tiles, their slot order and their faces.
    pub fn deal(&self, seed: u64) -> Deal<'_> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut order: Vec<usize> = (0..self.tiles.len()).collect();
        order.shuffle(&mut rng);
        // `new` guarantees at least four tiles.
        let slots = std::array::from_fn(|i| {
            let face = if rng.gen_bool(0.5) {
                Face::Front
            } else {
                Face::Back
            };
            (&self.tiles[order[i]], face)
        });
        Deal { seed, slots }
    }
}

/// The outcome of [`Deck::deal`]: one tile and face per slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deal<'d> {
    seed: u64,
    slots: [(&'d QuadrantTile, Face); 4],
}

impl<'d> Deal<'d> {
    /// The seed this deal was made from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Tile and face for `slot`.
    pub fn slot(&self, slot: Slot) -> (&'d QuadrantTile, Face) {
        self.slots[slot.index()]
    }

    /// The face-up templates in slot order, ready for composition.
    pub fn templates(&self) -> [&'d QuadrantTemplate; 4] {
        self.slots.map(|(tile, face)| tile.face(face))
    }

    /// Compose the dealt templates with `composer`.
    pub fn compose(&self, composer: &Composer) -> Result<Board, BoardError> {
        composer.compose(&self.templates())
    }
}
