//! Core types for the scatterboard canvas.
//!
//! This module defines the data structures shared by the loader, the layout
//! generator, the input handlers and the render output.

use crate::constants::{
    LABEL_FONT_SIZE, LABEL_OFFSET_Y, LABEL_PADDING, SELECTION_RING_COLOR, SELECTION_RING_STROKE,
};
use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Identity & Labels
// ============================================================================

/// Stable identifier handed out by the item source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Display label of an item. Opaque to the engine; either a JSON number or
/// a string, kept as it arrived.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemLabel {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ItemLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemLabel::Number(n) => write!(f, "{}", n),
            ItemLabel::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemLabel {
    fn from(n: i64) -> Self {
        ItemLabel::Number(n.into())
    }
}

impl From<&str> for ItemLabel {
    fn from(s: &str) -> Self {
        ItemLabel::Text(s.to_string())
    }
}

// ============================================================================
// Source Records
// ============================================================================

/// One entry supplied by an [`crate::loader::ItemSource`].
///
/// Accepts the field names of the image API payload (`_id`, `url`) as well
/// as the plain ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    #[serde(alias = "_id")]
    pub id: ItemId,
    pub number: ItemLabel,
    #[serde(alias = "url", alias = "image")]
    pub image_ref: String,
}

impl ItemDescriptor {
    pub fn new(
        id: impl Into<ItemId>,
        number: impl Into<ItemLabel>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            image_ref: image_ref.into(),
        }
    }
}

// ============================================================================
// Images
// ============================================================================

struct ImageData {
    source: String,
    image: DynamicImage,
}

/// Shared handle to a resolved image. Cloning is cheap; the pixels are owned
/// by whoever resolved them and items only hold a reference.
#[derive(Clone)]
pub struct ImageHandle(Arc<ImageData>);

impl ImageHandle {
    pub fn new(source: impl Into<String>, image: DynamicImage) -> Self {
        Self(Arc::new(ImageData {
            source: source.into(),
            image,
        }))
    }

    /// The reference this image was resolved from
    pub fn source(&self) -> &str {
        &self.0.source
    }

    pub fn image(&self) -> &DynamicImage {
        &self.0.image
    }

    /// Pixel dimensions (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.0.image.dimensions()
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        f.debug_struct("ImageHandle")
            .field("source", &self.0.source)
            .field("dimensions", &format_args!("{}x{}", w, h))
            .finish()
    }
}

/// A descriptor whose image finished resolving, waiting for a position.
#[derive(Clone, Debug)]
pub struct LoadedItem {
    pub descriptor: ItemDescriptor,
    pub image: ImageHandle,
}

// ============================================================================
// Canvas Items
// ============================================================================

/// A placed item on the canvas.
#[derive(Clone, Debug)]
pub struct CanvasItem {
    /// Unique identifier for this item
    pub id: ItemId,
    /// Display label
    pub number: ItemLabel,
    /// Resolved image this item draws
    pub image: ImageHandle,
    /// Top-left position in canvas coordinates (x, y)
    pub position: (f32, f32),
    /// Footprint in canvas units (width, height)
    pub size: (f32, f32),
}

impl CanvasItem {
    pub fn from_loaded(loaded: LoadedItem, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            id: loaded.descriptor.id,
            number: loaded.descriptor.number,
            image: loaded.image,
            position,
            size,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.position.0 + self.size.0 / 2.0,
            self.position.1 + self.size.1 / 2.0,
        )
    }

    /// Build the render view for this item.
    pub fn view(&self, is_selected: bool) -> ItemView {
        let (x, y) = self.position;
        let (width, height) = self.size;
        let ring = is_selected.then(|| {
            let (cx, cy) = self.center();
            SelectionRing {
                cx,
                cy,
                radius: width.min(height) / 2.0,
                stroke_width: SELECTION_RING_STROKE,
                color: SELECTION_RING_COLOR,
            }
        });

        ItemView {
            id: self.id.clone(),
            number: self.number.clone(),
            x,
            y,
            width,
            height,
            is_selected,
            label: LabelView {
                text: self.number.to_string(),
                x,
                y: y + LABEL_OFFSET_Y,
                padding: LABEL_PADDING,
                font_size: LABEL_FONT_SIZE,
            },
            ring,
            image: self.image.clone(),
        }
    }
}

// ============================================================================
// Canvas Bounds
// ============================================================================

/// Canvas size, item footprint and separation distance, as used by the
/// layout generator and the drag evaluator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBounds {
    pub canvas_size: (f32, f32),
    pub item_size: (f32, f32),
    pub min_distance: f32,
}

impl CanvasBounds {
    /// Largest valid x for an item's top-left corner
    #[inline]
    pub fn max_x(&self) -> f32 {
        (self.canvas_size.0 - self.item_size.0).max(0.0)
    }

    /// Largest valid y for an item's top-left corner
    #[inline]
    pub fn max_y(&self) -> f32 {
        (self.canvas_size.1 - self.item_size.1).max(0.0)
    }

    /// Clamp a position so the item stays fully on the canvas.
    #[inline]
    pub fn clamp(&self, position: (f32, f32)) -> (f32, f32) {
        (
            position.0.clamp(0.0, self.max_x()),
            position.1.clamp(0.0, self.max_y()),
        )
    }

    #[inline]
    pub fn contains(&self, position: (f32, f32)) -> bool {
        (0.0..=self.max_x()).contains(&position.0) && (0.0..=self.max_y()).contains(&position.1)
    }
}

// ============================================================================
// Render Output
// ============================================================================

/// Everything a render surface needs to draw one item.
#[derive(Clone, Debug, Serialize)]
pub struct ItemView {
    pub id: ItemId,
    pub number: ItemLabel,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub is_selected: bool,
    pub label: LabelView,
    /// Present only for the selected item
    pub ring: Option<SelectionRing>,
    #[serde(skip)]
    pub image: ImageHandle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelView {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub padding: f32,
    pub font_size: f32,
}

/// Circle drawn around the selected item, centred on its footprint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SelectionRing {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub stroke_width: f32,
    pub color: &'static str,
}
