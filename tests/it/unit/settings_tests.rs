//! Unit tests for settings files.

use scatterboard::Settings;
use scatterboard::error::SettingsError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "min_distance": 40, "seed": 7 }"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.min_distance, 40.0);
    assert_eq!(settings.seed, Some(7));
    assert_eq!(settings.canvas_width, 1024.0);
    assert_eq!(settings.canvas_height, 768.0);
    assert_eq!(settings.item_size(), (100.0, 100.0));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Settings::load_from(dir.path().join("nope.json"));
    assert!(matches!(result, Err(SettingsError::Io { .. })));
}

#[test]
fn test_bad_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Settings::load_from(&path), Err(SettingsError::Json(_))));
}

#[test]
fn test_item_larger_than_canvas_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "canvas_width": 50 }"#).unwrap();

    assert!(matches!(
        Settings::load_from(&path),
        Err(SettingsError::ItemLargerThanCanvas { .. })
    ));
}

#[test]
fn test_invalid_values_rejected() {
    let negative = Settings {
        min_distance: -1.0,
        ..Settings::default()
    };
    assert!(matches!(
        negative.validate(),
        Err(SettingsError::InvalidMinDistance(_))
    ));

    let zero_workers = Settings {
        load_workers: 0,
        ..Settings::default()
    };
    assert!(matches!(zero_workers.validate(), Err(SettingsError::ZeroWorkers)));

    let zero_attempts = Settings {
        max_placement_attempts: 0,
        ..Settings::default()
    };
    assert!(matches!(zero_attempts.validate(), Err(SettingsError::ZeroAttempts)));
}

#[test]
fn test_bounds_from_settings() {
    let bounds = Settings::default().bounds();
    assert_eq!(bounds.max_x(), 924.0);
    assert_eq!(bounds.max_y(), 668.0);
    assert_eq!(bounds.min_distance, 100.0);
}

#[test]
fn test_unset_seed_not_serialized() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(!json.contains("seed"));
}
