//! Error types for the edges of the engine.
//!
//! Only configuration, item sources, image resolution and board
//! construction (which wraps the first two) can fail. Placement
//! and input handling never return errors; their rejection paths are "no
//! state change" and are described by outcome enums instead.

use crate::types::ItemId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating [`crate::settings::Settings`]
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A dimension that must be a positive finite number
    #[error("{name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("item {item:?} does not fit on canvas {canvas:?}")]
    ItemLargerThanCanvas { item: (f32, f32), canvas: (f32, f32) },

    #[error("min_distance must be finite and >= 0, got {0}")]
    InvalidMinDistance(f32),

    #[error("max_placement_attempts must be at least 1")]
    ZeroAttempts,

    #[error("load_workers must be at least 1")]
    ZeroWorkers,
}

/// Errors raised by an [`crate::loader::ItemSource`]
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two descriptors share an id
    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),
}

/// Errors resolving a single image reference. One failure never blocks the
/// rest of a load cycle.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("malformed data URI: {0}")]
    MalformedDataUri(String),

    /// Remote references are not fetched by this crate
    #[error("unsupported image reference scheme: {0}")]
    UnsupportedScheme(String),

    #[error("resolver panicked while loading {0}")]
    Panicked(String),
}

/// A board state breaking the bounds or separation invariant
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantError {
    #[error("item {id} at {position:?} is outside the canvas")]
    OutOfBounds { id: ItemId, position: (f32, f32) },

    #[error("items {a} and {b} are closer than the minimum distance on both axes")]
    TooClose { a: ItemId, b: ItemId },
}

/// Errors building a [`crate::board::Board`]
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("item source failed: {0}")]
    Source(#[from] SourceError),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type alias for item source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type alias for board construction
pub type BoardResult<T> = Result<T, BoardError>;

/// Result type alias for image resolution
pub type LoadResult<T> = Result<T, LoadError>;
