//! Drag move evaluation - clamp and separation check for one move event.
//!
//! ## Performance Notes
//!
//! Called for every pointer move of a drag gesture (potentially 60+ times
//! per second). The evaluation is a single O(n) pass over the item slice and
//! performs no heap allocation; the outcome refers to a blocking item by
//! index rather than cloning its id.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::layout::separation::blocks_move;
use crate::profile_scope;
use crate::types::{CanvasBounds, CanvasItem, ItemId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Position written to the dragged item
    Moved { from: (f32, f32), to: (f32, f32) },
    /// The item at `blocker` is too close to the clamped candidate
    Rejected { blocker: usize },
    /// Raw coordinates were NaN
    InvalidCoordinates,
    /// No item with the dragged id
    UnknownItem,
}

impl DragOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Clamp `raw` to the canvas and move item `id` there if no other item
/// blocks it. On any other outcome every item is left untouched.
pub fn evaluate_drag(
    items: &mut [CanvasItem],
    id: &ItemId,
    raw: (f32, f32),
    bounds: &CanvasBounds,
) -> DragOutcome {
    profile_scope!("evaluate_drag");

    if raw.0.is_nan() || raw.1.is_nan() {
        return DragOutcome::InvalidCoordinates;
    }

    let Some(index) = items.iter().position(|item| &item.id == id) else {
        return DragOutcome::UnknownItem;
    };

    let candidate = bounds.clamp(raw);
    let blocker = items
        .iter()
        .enumerate()
        .find(|(i, other)| {
            *i != index && blocks_move(other.position, candidate, bounds.min_distance)
        })
        .map(|(i, _)| i);

    if let Some(blocker) = blocker {
        return DragOutcome::Rejected { blocker };
    }

    let item = &mut items[index];
    let from = item.position;
    item.position = candidate;
    DragOutcome::Moved {
        from,
        to: candidate,
    }
}
