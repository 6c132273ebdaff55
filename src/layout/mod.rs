//! Initial item layout.
//!
//! ## Modules
//!
//! - `separation` - Per-axis distance rules shared with drag handling
//! - `generator` - Bounded rejection sampling (`PositionGenerator`)
//! - `fallback` - Deterministic lattice scan and least-overlap scoring

mod fallback;
mod generator;
pub mod separation;

pub use generator::{Placement, PlacementStrategy, PositionGenerator};
