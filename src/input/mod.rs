//! Click and drag input handling for the canvas.
//!
//! ## Architecture
//!
//! Selection uses an explicit two-state machine (`SelectionState`), and drag
//! moves are checked against it before they ever reach the constraint
//! evaluator. [`crate::board::Board::handle_event`] is the single entry point
//! that ties the two together.
//!
//! ## Modules
//!
//! - `state` - Selection state machine
//! - `drag` - Per-move clamp and separation check
//! - `events` - Input events and their outcomes

mod drag;
mod events;
mod state;

pub use drag::{DragOutcome, evaluate_drag};
pub use events::{EventOutcome, IgnoreReason, InputEvent};
pub use state::{SelectionChange, SelectionState};
