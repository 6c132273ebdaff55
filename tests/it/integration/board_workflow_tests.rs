//! End-to-end workflows: load cycle, placement, selection and dragging.

use crate::helpers::{
    TestBoardBuilder, assert_board_valid, loaded_items, position_of, selected_count,
    test_settings, write_png,
};
use rand::rngs::mock::StepRng;
use scatterboard::input::IgnoreReason;
use scatterboard::layout::PlacementStrategy;
use scatterboard::loader::{FsImageResolver, ManifestSource, ResourceLoader};
use scatterboard::{Board, EventOutcome, InputEvent, Settings};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_place_select_drag() {
    let dir = TempDir::new().unwrap();
    for name in ["one.png", "two.png", "three.png"] {
        write_png(dir.path(), name);
    }
    let manifest = dir.path().join("images.json");
    fs::write(
        &manifest,
        r#"[
            {"_id": "one", "number": 1, "url": "one.png"},
            {"_id": "two", "number": 2, "url": "two.png"},
            {"_id": "broken", "number": 3, "url": "nowhere.png"},
            {"_id": "three", "number": 4, "url": "three.png"}
        ]"#,
    )
    .unwrap();

    let source = ManifestSource::from_path(&manifest);
    let loader = ResourceLoader::new(FsImageResolver::with_base_dir(dir.path()), 3);
    let mut board = Board::load(test_settings(), &source, &loader).unwrap();

    let ids: Vec<_> = board.items().iter().map(|i| i.id.as_str().to_string()).collect();
    assert_eq!(ids, vec!["one", "two", "three"]);
    assert_eq!(board.placements().len(), 3);
    assert!(board.selection().is_unselected());
    assert_board_valid(&board);

    assert!(board.handle_event(&InputEvent::click("two")).changed());
    let target = (900.0, 650.0);
    let outcome = board.handle_event(&InputEvent::drag("two", target.0, target.1));
    if outcome.changed() {
        assert_eq!(position_of(&board, "two"), (900.0, 650.0));
    } else {
        assert!(matches!(outcome, EventOutcome::MoveRejected { .. }));
    }
    assert_board_valid(&board);
    assert_eq!(selected_count(&board), 1);
}

#[test]
fn test_stuck_random_source_still_places_everything() {
    // Every draw lands on (0, 0).
    let settings = Settings {
        max_placement_attempts: 10_000,
        ..test_settings()
    };

    let board = Board::from_loaded_with(settings, loaded_items(3), StepRng::new(0, 0)).unwrap();

    let strategies: Vec<_> = board.placements().iter().map(|p| p.strategy).collect();
    assert_eq!(strategies[0], PlacementStrategy::Sampled { attempts: 1 });
    assert_eq!(strategies[1], PlacementStrategy::Grid);
    assert_eq!(strategies[2], PlacementStrategy::Grid);
    assert_eq!(position_of(&board, "item0"), (0.0, 0.0));
    assert_eq!(position_of(&board, "item1"), (150.0, 0.0));
    assert_board_valid(&board);
}

#[test]
fn test_rejected_drag_leaves_board_untouched() {
    let mut board = TestBoardBuilder::new()
        .with_item("a", (50.0, 300.0))
        .with_item("b", (0.0, 0.0))
        .with_item("c", (600.0, 400.0))
        .build();
    assert_board_valid(&board);
    let before: Vec<_> = board.items().iter().map(|i| i.position).collect();

    board.handle_event(&InputEvent::click("c"));
    let outcome = board.handle_event(&InputEvent::drag("c", 5.0, 5.0));

    assert!(matches!(outcome, EventOutcome::MoveRejected { .. }));
    let after: Vec<_> = board.items().iter().map(|i| i.position).collect();
    assert_eq!(before, after);
    assert_eq!(board.selected_id().map(|id| id.as_str()), Some("c"));
}

#[test]
fn test_toggle_off_then_drag_is_dropped() {
    let mut board = TestBoardBuilder::new().with_item("a", (50.0, 50.0)).build();

    board.handle_event(&InputEvent::click("a"));
    board.handle_event(&InputEvent::click("a"));
    let outcome = board.handle_event(&InputEvent::drag("a", 500.0, 500.0));

    assert_eq!(
        outcome,
        EventOutcome::Ignored {
            reason: IgnoreReason::NotSelected
        }
    );
    assert_eq!(position_of(&board, "a"), (50.0, 50.0));
}

#[test]
fn test_reload_resets_selection() {
    let mut board = Board::from_loaded(test_settings(), loaded_items(3)).unwrap();
    board.click(&"item1".into());
    assert_eq!(selected_count(&board), 1);

    board.replace_items(loaded_items(5));

    assert_eq!(board.len(), 5);
    assert_eq!(board.placements().len(), 5);
    assert!(board.selection().is_unselected());
    assert_board_valid(&board);
}

#[test]
fn test_event_script_round_trip() {
    let mut board = TestBoardBuilder::new()
        .with_item("a", (50.0, 50.0))
        .with_item("b", (500.0, 500.0))
        .build();
    let script: Vec<InputEvent> = serde_json::from_str(
        r#"[
            {"type": "item_click", "id": "a"},
            {"type": "item_drag_move", "id": "a", "x": 300, "y": 60},
            {"type": "item_click", "id": "b"},
            {"type": "item_drag_move", "id": "a", "x": 0, "y": 0}
        ]"#,
    )
    .unwrap();

    let outcomes: Vec<_> = script.iter().map(|e| board.handle_event(e)).collect();

    assert!(outcomes[1].changed());
    assert!(matches!(outcomes[2], EventOutcome::Switched { .. }));
    assert!(!outcomes[3].changed());
    assert_eq!(position_of(&board, "a"), (300.0, 60.0));
}

#[test]
fn test_empty_manifest_gives_empty_board() {
    let source = ManifestSource::from_json("[]");
    let loader = ResourceLoader::new(FsImageResolver::new(), 2);
    let board = Board::load(test_settings(), &source, &loader).unwrap();
    assert!(board.is_empty());
    assert!(board.render_items().is_empty());
}
