//! Input events consumed from a render surface, and what became of them.

use crate::types::ItemId;
use serde::{Deserialize, Serialize};

/// The only two events the engine consumes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    ItemClick { id: ItemId },
    ItemDragMove { id: ItemId, x: f32, y: f32 },
}

impl InputEvent {
    pub fn click(id: impl Into<ItemId>) -> Self {
        Self::ItemClick { id: id.into() }
    }

    pub fn drag(id: impl Into<ItemId>, x: f32, y: f32) -> Self {
        Self::ItemDragMove { id: id.into(), x, y }
    }

    pub fn item_id(&self) -> &ItemId {
        match self {
            Self::ItemClick { id } | Self::ItemDragMove { id, .. } => id,
        }
    }
}

/// Why an event produced no state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// No item with that id on the board
    UnknownItem,
    /// Drag on an item that does not hold the selection
    NotSelected,
    /// Drag coordinates were NaN
    InvalidCoordinates,
}

/// What handling an event did. Rejections are ordinary outcomes, never
/// errors.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventOutcome {
    Selected { id: ItemId },
    Deselected { id: ItemId },
    Switched { from: ItemId, to: ItemId },
    Moved { id: ItemId, from: (f32, f32), to: (f32, f32) },
    MoveRejected { id: ItemId, blocker: ItemId },
    Ignored { reason: IgnoreReason },
}

impl EventOutcome {
    /// True when the item list or the selection changed
    pub fn changed(&self) -> bool {
        !matches!(self, Self::MoveRejected { .. } | Self::Ignored { .. })
    }
}
