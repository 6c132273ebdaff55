//! Selection state machine - which item, if any, holds the drag lock.
//!
//! ## State Transitions
//!
//! ```text
//! Unselected    -> Selected(a)   (click a)
//! Selected(a)   -> Unselected    (click a)
//! Selected(a)   -> Selected(b)   (click b, no intermediate deselect)
//! ```
//!
//! Only `Selected(id)` permits drag moves, and only for `id`.

use crate::types::ItemId;

/// Result of a click on the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(ItemId),
    Deselected(ItemId),
    Switched { from: ItemId, to: ItemId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing selected; every drag is dropped
    #[default]
    Unselected,
    /// One item holds the drag lock
    Selected(ItemId),
}

impl SelectionState {
    /// Apply a click on `id`.
    pub fn click(&mut self, id: &ItemId) -> SelectionChange {
        let previous = std::mem::take(self);
        match previous {
            Self::Unselected => {
                *self = Self::Selected(id.clone());
                SelectionChange::Selected(id.clone())
            }
            Self::Selected(current) if current == *id => SelectionChange::Deselected(current),
            Self::Selected(current) => {
                *self = Self::Selected(id.clone());
                SelectionChange::Switched {
                    from: current,
                    to: id.clone(),
                }
            }
        }
    }

    /// The selected item's id, if any
    pub fn selected(&self) -> Option<&ItemId> {
        match self {
            Self::Selected(id) => Some(id),
            Self::Unselected => None,
        }
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected() == Some(id)
    }

    /// Drag moves are forwarded only for the selected item.
    pub fn permits_drag(&self, id: &ItemId) -> bool {
        self.is_selected(id)
    }

    pub fn is_unselected(&self) -> bool {
        matches!(self, Self::Unselected)
    }

    /// Reset to Unselected
    pub fn clear(&mut self) {
        *self = Self::Unselected;
    }
}
