//! The board: the single owned container of canvas items.
//!
//! All mutation of item positions funnels through two operations: initial
//! placement ([`PositionGenerator`]) when a load cycle completes, and
//! [`evaluate_drag`] for drag moves on the selected item. Both keep the
//! bounds and separation invariants, so every state reachable through the
//! public API satisfies them (up to best-effort placements on a saturated
//! canvas, which are reported in [`Board::placements`]).

use crate::constants::DRAG_EVAL_WARN_MS;
use crate::error::{BoardResult, InvariantError, SettingsResult};
use crate::input::{
    DragOutcome, EventOutcome, IgnoreReason, InputEvent, SelectionChange, SelectionState,
    evaluate_drag,
};
use crate::layout::separation::is_separated;
use crate::layout::{Placement, PositionGenerator};
use crate::loader::{ImageResolver, ItemSource, ResourceLoader};
use crate::perf::{OperationStats, is_profiling_enabled, measure};
use crate::settings::Settings;
use crate::types::{CanvasBounds, CanvasItem, ItemId, ItemView, LoadedItem};
use rand::Rng;
use std::collections::HashSet;

pub struct Board {
    settings: Settings,
    bounds: CanvasBounds,
    items: Vec<CanvasItem>,
    selection: SelectionState,
    placements: Vec<Placement>,
    drag_stats: OperationStats,
}

/// Keep the first entry for each id and drop the rest with a warning.
/// Selection is keyed by id, so two items sharing one would both render as
/// selected.
fn dedupe_by_id<T>(entries: Vec<T>, id_of: impl Fn(&T) -> &ItemId) -> Vec<T> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|entry| {
            let id = id_of(entry);
            let fresh = seen.insert(id.clone());
            if !fresh {
                tracing::warn!(id = %id, "Duplicate item id, keeping first");
            }
            fresh
        })
        .collect()
}

impl Board {
    /// An empty board. Fails if `settings` do not validate.
    pub fn new(settings: Settings) -> SettingsResult<Self> {
        settings.validate()?;
        let bounds = settings.bounds();
        Ok(Self {
            settings,
            bounds,
            items: Vec::new(),
            selection: SelectionState::default(),
            placements: Vec::new(),
            drag_stats: OperationStats::new(),
        })
    }

    /// A board over items that already carry positions. Positions are taken
    /// as given; call [`verify`](Self::verify) to check them. Items with a
    /// repeated id are dropped.
    pub fn with_items(settings: Settings, items: Vec<CanvasItem>) -> SettingsResult<Self> {
        let mut board = Self::new(settings)?;
        board.items = dedupe_by_id(items, |item| &item.id);
        Ok(board)
    }

    /// Place freshly loaded items using a generator seeded from `settings`.
    pub fn from_loaded(settings: Settings, loaded: Vec<LoadedItem>) -> SettingsResult<Self> {
        let mut board = Self::new(settings)?;
        board.replace_items(loaded);
        Ok(board)
    }

    /// Like [`from_loaded`](Self::from_loaded), drawing positions from `rng`.
    pub fn from_loaded_with<R: Rng>(
        settings: Settings,
        loaded: Vec<LoadedItem>,
        rng: R,
    ) -> SettingsResult<Self> {
        let mut board = Self::new(settings)?;
        board.replace_items_with(loaded, rng);
        Ok(board)
    }

    /// Run a full load cycle: fetch descriptors, resolve images, place.
    pub fn load<S, L>(
        settings: Settings,
        source: &S,
        loader: &ResourceLoader<L>,
    ) -> BoardResult<Self>
    where
        S: ItemSource,
        L: ImageResolver,
    {
        let mut board = Self::new(settings)?;
        let descriptors = source.fetch()?;
        let report = loader.load_all(descriptors);
        board.replace_items(report.loaded);
        Ok(board)
    }

    /// Replace the whole item set (a fresh load cycle). Selection is reset.
    pub fn replace_items(&mut self, loaded: Vec<LoadedItem>) {
        let mut generator = PositionGenerator::from_settings(&self.settings);
        self.place_loaded(loaded, &mut generator);
    }

    /// Like [`replace_items`](Self::replace_items), drawing positions from
    /// `rng`. The canvas and attempt budget always come from this board's
    /// settings.
    pub fn replace_items_with<R: Rng>(&mut self, loaded: Vec<LoadedItem>, rng: R) {
        let mut generator = PositionGenerator::with_rng(&self.settings, rng);
        self.place_loaded(loaded, &mut generator);
    }

    fn place_loaded<R: Rng>(
        &mut self,
        loaded: Vec<LoadedItem>,
        generator: &mut PositionGenerator<R>,
    ) {
        let loaded = dedupe_by_id(loaded, |item| &item.descriptor.id);

        let placements = generator.place_all(loaded.len());
        let size = self.settings.item_size();
        self.items = loaded
            .into_iter()
            .zip(&placements)
            .map(|(item, placement)| CanvasItem::from_loaded(item, placement.position, size))
            .collect();
        self.placements = placements;
        self.selection.clear();

        tracing::info!(items = self.items.len(), "Board populated");
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_item(&self, id: &ItemId) -> Option<&CanvasItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn bounds(&self) -> &CanvasBounds {
        &self.bounds
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_id(&self) -> Option<&ItemId> {
        self.selection.selected()
    }

    /// How each item of the current load cycle was placed, in item order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Drag evaluation timings, collected while profiling is enabled.
    pub fn drag_stats(&self) -> &OperationStats {
        &self.drag_stats
    }

    /// Render views in draw order.
    pub fn render_items(&self) -> Vec<ItemView> {
        self.items
            .iter()
            .map(|item| item.view(self.selection.is_selected(&item.id)))
            .collect()
    }

    // ========================================================================
    // Input
    // ========================================================================

    pub fn handle_event(&mut self, event: &InputEvent) -> EventOutcome {
        tracing::trace!(id = %event.item_id(), ?event, "Input event");
        match event {
            InputEvent::ItemClick { id } => self.click(id),
            InputEvent::ItemDragMove { id, x, y } => self.drag_move(id, *x, *y),
        }
    }

    /// Toggle or reassign the selection.
    pub fn click(&mut self, id: &ItemId) -> EventOutcome {
        if self.get_item(id).is_none() {
            tracing::debug!(id = %id, "Click on unknown item ignored");
            return EventOutcome::Ignored {
                reason: IgnoreReason::UnknownItem,
            };
        }

        let outcome = match self.selection.click(id) {
            SelectionChange::Selected(id) => EventOutcome::Selected { id },
            SelectionChange::Deselected(id) => EventOutcome::Deselected { id },
            SelectionChange::Switched { from, to } => EventOutcome::Switched { from, to },
        };
        tracing::debug!(?outcome, "Selection changed");
        outcome
    }

    /// Forward a drag move to the constraint evaluator if `id` holds the
    /// selection; drop it otherwise.
    pub fn drag_move(&mut self, id: &ItemId, x: f32, y: f32) -> EventOutcome {
        if !self.selection.permits_drag(id) {
            let reason = if self.get_item(id).is_some() {
                IgnoreReason::NotSelected
            } else {
                IgnoreReason::UnknownItem
            };
            tracing::trace!(id = %id, ?reason, "Drag move dropped");
            return EventOutcome::Ignored { reason };
        }

        let (outcome, elapsed_ms) =
            measure(|| evaluate_drag(&mut self.items, id, (x, y), &self.bounds));
        if is_profiling_enabled() {
            self.drag_stats.record(elapsed_ms);
        }
        if elapsed_ms > DRAG_EVAL_WARN_MS {
            tracing::warn!(
                elapsed_ms = format!("{:.2}", elapsed_ms),
                items = self.items.len(),
                "Slow drag evaluation"
            );
        }

        match outcome {
            DragOutcome::Moved { from, to } => {
                tracing::trace!(id = %id, x = to.0, y = to.1, "Item moved");
                EventOutcome::Moved {
                    id: id.clone(),
                    from,
                    to,
                }
            }
            DragOutcome::Rejected { blocker } => {
                let blocker = self.items[blocker].id.clone();
                tracing::debug!(id = %id, blocker = %blocker, "Drag move rejected");
                EventOutcome::MoveRejected {
                    id: id.clone(),
                    blocker,
                }
            }
            DragOutcome::InvalidCoordinates => EventOutcome::Ignored {
                reason: IgnoreReason::InvalidCoordinates,
            },
            DragOutcome::UnknownItem => EventOutcome::Ignored {
                reason: IgnoreReason::UnknownItem,
            },
        }
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    /// Check the bounds and separation invariants over the whole board.
    pub fn verify(&self) -> Result<(), InvariantError> {
        for item in &self.items {
            if !self.bounds.contains(item.position) {
                return Err(InvariantError::OutOfBounds {
                    id: item.id.clone(),
                    position: item.position,
                });
            }
        }

        let d = self.bounds.min_distance;
        for (i, a) in self.items.iter().enumerate() {
            for b in &self.items[i + 1..] {
                if !is_separated(a.position, b.position, d) {
                    return Err(InvariantError::TooClose {
                        a: a.id.clone(),
                        b: b.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
