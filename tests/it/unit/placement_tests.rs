//! Unit tests for initial placement.

use crate::helpers::{assert_board_valid, loaded_items, test_settings};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::rngs::mock::StepRng;
use scatterboard::Board;
use scatterboard::layout::{PlacementStrategy, PositionGenerator};

fn in_forbidden_zone(pos: (f32, f32), anchor: (f32, f32)) -> bool {
    (pos.0 - anchor.0).abs() <= 100.0 && (pos.1 - anchor.1).abs() <= 100.0
}

#[test]
fn test_second_item_avoids_first() {
    // Canvas 1024x768, footprint 100x100, distance 100, A at (50, 50).
    let bounds = test_settings().bounds();
    let anchor = (50.0, 50.0);

    for seed in 0..200 {
        let mut generator = PositionGenerator::new(bounds, 5_000, StdRng::seed_from_u64(seed));
        let placement = generator.place(&[anchor]);
        assert!(
            !in_forbidden_zone(placement.position, anchor),
            "seed {} placed B at {:?}",
            seed,
            placement.position
        );
        assert!(bounds.contains(placement.position));
    }
}

#[test]
fn test_stuck_sampler_terminates() {
    // Every draw lands on (0, 0), inside A's forbidden zone.
    let bounds = test_settings().bounds();
    let mut generator = PositionGenerator::new(bounds, 10_000, StepRng::new(0, 0));

    let placement = generator.place(&[(50.0, 50.0)]);

    assert_eq!(placement.strategy, PlacementStrategy::Grid);
    assert!(placement.is_fallback());
    assert!(!in_forbidden_zone(placement.position, (50.0, 50.0)));
}

#[test]
fn test_saturated_canvas_uses_best_effort() {
    // Canvas fits exactly one item.
    let settings = scatterboard::Settings {
        canvas_width: 100.0,
        canvas_height: 100.0,
        ..test_settings()
    };
    let mut generator = PositionGenerator::new(settings.bounds(), 50, StdRng::seed_from_u64(9));

    let placements = generator.place_all(3);

    assert_eq!(placements[0].strategy, PlacementStrategy::Sampled { attempts: 1 });
    assert_eq!(placements[1].strategy, PlacementStrategy::BestEffort { conflicts: 1 });
    assert_eq!(placements[2].strategy, PlacementStrategy::BestEffort { conflicts: 2 });
    assert!(placements.iter().all(|p| p.position == (0.0, 0.0)));
}

#[test]
fn test_same_seed_same_layout() {
    let a = Board::from_loaded(test_settings(), loaded_items(5)).unwrap();
    let b = Board::from_loaded(test_settings(), loaded_items(5)).unwrap();

    let pa: Vec<_> = a.items().iter().map(|i| i.position).collect();
    let pb: Vec<_> = b.items().iter().map(|i| i.position).collect();
    assert_eq!(pa, pb);
}

#[test]
fn test_items_keep_loader_order() {
    let board = Board::from_loaded(test_settings(), loaded_items(4)).unwrap();
    let ids: Vec<_> = board.items().iter().map(|i| i.id.to_string()).collect();
    assert_eq!(ids, vec!["item0", "item1", "item2", "item3"]);
    assert_eq!(board.placements().len(), 4);
    assert_board_valid(&board);
}

#[test]
fn test_duplicate_loaded_ids_keep_first() {
    let mut loaded = loaded_items(3);
    loaded[2].descriptor.id = loaded[0].descriptor.id.clone();

    let board = Board::from_loaded(test_settings(), loaded).unwrap();

    assert_eq!(board.len(), 2);
    assert_eq!(board.items()[0].image.source(), "item0");
}

#[test]
fn test_place_does_not_need_item_list() {
    let bounds = test_settings().bounds();
    let mut generator = PositionGenerator::new(bounds, 100, StdRng::seed_from_u64(1));
    let placed = vec![(10.0, 10.0), (700.0, 500.0)];
    let before = placed.clone();

    let _ = generator.place(&placed);

    assert_eq!(placed, before);
}
