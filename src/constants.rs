//! Application-wide constants.
//!
//! Defaults for the canvas geometry and the placement/loading knobs. Every
//! value here can be overridden through [`crate::settings::Settings`].

// ============================================================================
// Canvas Geometry
// ============================================================================

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: f32 = 1024.0;

/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: f32 = 768.0;

/// Default item footprint (width, height)
pub const DEFAULT_ITEM_SIZE: (f32, f32) = (100.0, 100.0);

/// Default per-axis minimum distance between item anchors
pub const DEFAULT_MIN_DISTANCE: f32 = 100.0;

// ============================================================================
// Placement
// ============================================================================

/// Random draws tried per item before falling back to deterministic placement
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 5_000;

// ============================================================================
// Loading
// ============================================================================

/// Worker threads used to resolve image references
pub const DEFAULT_LOAD_WORKERS: usize = 4;

// ============================================================================
// Label & Selection Ring
// ============================================================================

/// Vertical offset of the label anchor below the item's top edge
pub const LABEL_OFFSET_Y: f32 = 10.0;

/// Padding around label text
pub const LABEL_PADDING: f32 = 10.0;

/// Label font size
pub const LABEL_FONT_SIZE: f32 = 10.0;

/// Stroke width of the selection ring
pub const SELECTION_RING_STROKE: f32 = 5.0;

/// Selection ring color
pub const SELECTION_RING_COLOR: &str = "#ff0000";

// ============================================================================
// Profiling
// ============================================================================

/// A single drag evaluation slower than this is logged
pub const DRAG_EVAL_WARN_MS: f64 = 1.0;

/// Placing a whole batch slower than this is logged
pub const PLACEMENT_WARN_MS: f64 = 50.0;
