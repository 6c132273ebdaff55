//! Scatterboard: numbered images scattered on a fixed canvas.
//!
//! Items are placed so that no two anchors are within a minimum distance on
//! both axes at once, and exactly one selected item at a time can be dragged
//! with the same rule re-checked on every move.
//!
//! ```text
//! ItemSource -> ResourceLoader -> PositionGenerator -> Board -> ItemView
//!                                                        ^
//!                                       InputEvent ------+
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod input;
pub mod layout;
pub mod loader;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod types;

pub use board::Board;
pub use input::{EventOutcome, InputEvent};
pub use settings::Settings;
pub use types::{CanvasItem, ItemId, ItemView};
