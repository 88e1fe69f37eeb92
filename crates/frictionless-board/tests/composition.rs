//! Composition across all four slots.

use proptest::prelude::*;

use frictionless_board::catalog::{builtin_tiles, CLASSIC_PIECES, TILE_GRID_SIZE};
use frictionless_board::{compose_board, Composer, Deck, QuadrantTemplate, Slot};
use frictionless_core::{Cell, Wall};
use frictionless_test_utils::fixtures::{blank_quadrant, sample_quadrant};
use frictionless_test_utils::strategies::wall;

#[test]
fn sample_quadrant_in_every_slot() {
    let q = sample_quadrant("q");
    let board = compose_board(16, &[&q, &q, &q, &q]).unwrap();
    for wall in [
        Wall::vertical(4, 0),
        Wall::horizontal(15, 4),
        Wall::vertical(12, 15),
        Wall::horizontal(0, 12),
        Wall::horizontal(3, 7),
        Wall::vertical(9, 3),
        Wall::horizontal(12, 9),
        Wall::vertical(7, 12),
    ] {
        assert!(board.has_wall(wall), "missing {wall}");
    }
    assert_eq!(board.vertical_walls().len() + board.horizontal_walls().len(), 8);
    assert_eq!(
        board.goals_for("allie"),
        &[
            Cell::new(6, 1),
            Cell::new(14, 6),
            Cell::new(9, 14),
            Cell::new(1, 9)
        ]
    );
}

#[test]
fn single_template_only_touches_its_slot() {
    let q = sample_quadrant("q");
    let blank = blank_quadrant("blank", 8);
    for slot in Slot::ALL {
        let mut slots = [&blank; 4];
        slots[slot.index()] = &q;
        let board = compose_board(16, &slots).unwrap();
        assert_eq!(
            board.goals_for("allie"),
            &[slot.rotate_cell(Cell::new(6, 1), 16)]
        );
        assert!(board.has_wall(slot.rotate_wall(Wall::vertical(4, 0), 16)));
    }
}

#[test]
fn every_seed_deals_a_complete_board() {
    let deck = Deck::new(builtin_tiles().unwrap()).unwrap();
    let composer = Composer::new(TILE_GRID_SIZE)
        .unwrap()
        .require_goals(CLASSIC_PIECES);
    for seed in 0..64 {
        let board = deck.deal(seed).compose(&composer).unwrap();
        for piece in CLASSIC_PIECES {
            let goals = board.goals_for(piece);
            assert_eq!(goals.len(), 4, "seed {seed}, {piece}");
            assert!(goals.iter().all(|&g| board.contains(g)));
        }
        assert_eq!(board, deck.deal(seed).compose(&composer).unwrap());
    }
}

proptest! {
    #[test]
    fn composed_walls_stay_on_board(
        walls in prop::collection::vec(wall(8), 0..12),
    ) {
        let q = walls
            .into_iter()
            .fold(QuadrantTemplate::builder("random", 8), |b, w| b.wall(w))
            .build()
            .unwrap();
        let board = compose_board(16, &[&q, &q, &q, &q]).unwrap();
        for w in board.vertical_walls().iter().chain(board.horizontal_walls().iter()) {
            prop_assert!(w.in_bounds(16), "{}", w);
        }
    }

    #[test]
    fn rotating_by_every_slot_returns_home(
        w in wall(16),
    ) {
        let mut turned = w;
        for _ in 0..4 {
            turned = Slot::TopRight.rotate_wall(turned, 16);
        }
        prop_assert_eq!(turned, w);
    }
}
