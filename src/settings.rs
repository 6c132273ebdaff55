//! User settings: canvas geometry and engine knobs.
//!
//! Settings are stored as JSON. Every field has a default so a file only
//! needs to name what it overrides.

use crate::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_ITEM_SIZE, DEFAULT_LOAD_WORKERS,
    DEFAULT_MAX_PLACEMENT_ATTEMPTS, DEFAULT_MIN_DISTANCE,
};
use crate::error::{SettingsError, SettingsResult};
use crate::types::CanvasBounds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub item_width: f32,
    pub item_height: f32,
    /// Per-axis minimum distance between item anchors
    pub min_distance: f32,
    /// Random draws per item before the deterministic fallback kicks in
    pub max_placement_attempts: u32,
    /// Threads used to resolve image references
    pub load_workers: usize,
    /// Fixed RNG seed for reproducible layouts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            item_width: DEFAULT_ITEM_SIZE.0,
            item_height: DEFAULT_ITEM_SIZE.1,
            min_distance: DEFAULT_MIN_DISTANCE,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            load_workers: DEFAULT_LOAD_WORKERS,
            seed: None,
        }
    }
}

/// `<config dir>/scatterboard/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scatterboard").join("settings.json"))
}

impl Settings {
    /// Load settings from the default location, falling back to defaults
    /// when the file is missing or invalid.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring invalid settings file"
                );
                Self::default()
            }
        }
    }

    /// Read, parse and validate a settings file.
    pub fn load_from(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("item_width", self.item_width),
            ("item_height", self.item_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::InvalidDimension { name, value });
            }
        }

        if self.item_width > self.canvas_width || self.item_height > self.canvas_height {
            return Err(SettingsError::ItemLargerThanCanvas {
                item: (self.item_width, self.item_height),
                canvas: (self.canvas_width, self.canvas_height),
            });
        }

        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(SettingsError::InvalidMinDistance(self.min_distance));
        }
        if self.max_placement_attempts == 0 {
            return Err(SettingsError::ZeroAttempts);
        }
        if self.load_workers == 0 {
            return Err(SettingsError::ZeroWorkers);
        }
        Ok(())
    }

    pub fn bounds(&self) -> CanvasBounds {
        CanvasBounds {
            canvas_size: (self.canvas_width, self.canvas_height),
            item_size: (self.item_width, self.item_height),
            min_distance: self.min_distance,
        }
    }

    pub fn item_size(&self) -> (f32, f32) {
        (self.item_width, self.item_height)
    }
}
