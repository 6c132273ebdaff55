//! Initial layout by bounded rejection sampling.

use super::fallback::{Score, grid_position};
use super::separation::clear_for_placement;
use crate::constants::PLACEMENT_WARN_MS;
use crate::perf::ScopedTimer;
use crate::profile_scope;
use crate::settings::Settings;
use crate::types::CanvasBounds;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// How a position was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementStrategy {
    /// Random draw satisfying the placement rule after `attempts` draws
    Sampled { attempts: u32 },
    /// Sampling exhausted; first free lattice cell
    Grid,
    /// Sampling exhausted and the lattice is full; least-conflicting draw
    BestEffort { conflicts: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Placement {
    pub position: (f32, f32),
    pub strategy: PlacementStrategy,
}

impl Placement {
    pub fn is_fallback(&self) -> bool {
        !matches!(self.strategy, PlacementStrategy::Sampled { .. })
    }
}

/// Draws a coordinate uniformly from `[0, max)`; a zero-width span pins it
/// to 0.
fn sample_axis<R: Rng>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 { rng.gen_range(0.0..max) } else { 0.0 }
}

/// Computes initial positions for items one at a time.
///
/// Each call to [`place`](Self::place) is a total function: it draws at most
/// `max_attempts` random candidates and then falls back to a deterministic
/// lattice scan, and finally to the best candidate it saw.
pub struct PositionGenerator<R: Rng = StdRng> {
    bounds: CanvasBounds,
    max_attempts: u32,
    rng: R,
}

impl PositionGenerator<StdRng> {
    /// Generator seeded from `settings.seed`, or from OS entropy when unset.
    pub fn from_settings(settings: &Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(settings, rng)
    }
}

impl<R: Rng> PositionGenerator<R> {
    pub fn new(bounds: CanvasBounds, max_attempts: u32, rng: R) -> Self {
        Self {
            bounds,
            max_attempts: max_attempts.max(1),
            rng,
        }
    }

    /// Generator for the canvas and attempt budget in `settings`, drawing
    /// from `rng`.
    pub fn with_rng(settings: &Settings, rng: R) -> Self {
        Self::new(settings.bounds(), settings.max_placement_attempts, rng)
    }

    fn sample(&mut self) -> (f32, f32) {
        let x = sample_axis(&mut self.rng, self.bounds.max_x());
        let y = sample_axis(&mut self.rng, self.bounds.max_y());
        (x, y)
    }

    /// Find a position for one new item given the anchors already placed.
    /// Does not touch any item list.
    pub fn place(&mut self, placed: &[(f32, f32)]) -> Placement {
        profile_scope!("place_item");

        let d = self.bounds.min_distance;
        let mut best: Option<((f32, f32), Score)> = None;

        for attempt in 1..=self.max_attempts {
            let candidate = self.sample();
            if placed.iter().all(|p| clear_for_placement(*p, candidate, d)) {
                return Placement {
                    position: candidate,
                    strategy: PlacementStrategy::Sampled { attempts: attempt },
                };
            }

            let score = Score::of(candidate, placed, d);
            if best.is_none_or(|(_, b)| score.better_than(&b)) {
                best = Some((candidate, score));
            }
        }

        if let Some(position) = grid_position(&self.bounds, placed) {
            tracing::warn!(
                attempts = self.max_attempts,
                placed = placed.len(),
                x = position.0,
                y = position.1,
                "Random placement exhausted, using grid fallback"
            );
            return Placement {
                position,
                strategy: PlacementStrategy::Grid,
            };
        }

        let (position, score) =
            best.unwrap_or_else(|| ((0.0, 0.0), Score::of((0.0, 0.0), placed, d)));
        tracing::warn!(
            attempts = self.max_attempts,
            placed = placed.len(),
            conflicts = score.conflicts,
            "Canvas saturated, placing item with least overlap"
        );
        Placement {
            position,
            strategy: PlacementStrategy::BestEffort {
                conflicts: score.conflicts,
            },
        }
    }

    /// Place `count` items in order, each tested against every item placed
    /// before it in the same pass.
    pub fn place_all(&mut self, count: usize) -> Vec<Placement> {
        let _timer = ScopedTimer::new("place_all", PLACEMENT_WARN_MS);

        let mut anchors = Vec::with_capacity(count);
        let mut placements = Vec::with_capacity(count);
        for _ in 0..count {
            let placement = self.place(&anchors);
            anchors.push(placement.position);
            placements.push(placement);
        }

        let fallbacks = placements.iter().filter(|p| p.is_fallback()).count();
        tracing::debug!(count, fallbacks, "Placed items");
        placements
    }
}
