//! Deterministic placement used once random sampling gives up.

use super::separation::chebyshev;
use crate::types::CanvasBounds;

/// Upper bound on lattice points per axis
const GRID_MAX_STEPS: f32 = 256.0;

/// How good a candidate is when no candidate satisfies every constraint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Score {
    /// Placed anchors within `min_distance` on both axes
    pub conflicts: usize,
    /// Chebyshev distance to the nearest placed anchor
    pub nearest: f32,
}

impl Score {
    pub fn of(candidate: (f32, f32), placed: &[(f32, f32)], min_distance: f32) -> Self {
        let mut conflicts = 0;
        let mut nearest = f32::INFINITY;
        for p in placed {
            let d = chebyshev(*p, candidate);
            if d <= min_distance {
                conflicts += 1;
            }
            nearest = nearest.min(d);
        }
        Self { conflicts, nearest }
    }

    /// Fewer conflicts win; ties go to the candidate furthest from its
    /// nearest neighbour.
    pub fn better_than(&self, other: &Score) -> bool {
        self.conflicts < other.conflicts
            || (self.conflicts == other.conflicts && self.nearest > other.nearest)
    }
}

/// Lattice coordinates along one axis: `0, step, 2*step, ...` plus `max`
/// itself so the far edge is always tried.
fn axis_steps(max: f32, step: f32) -> impl Iterator<Item = f32> {
    let count = (max / step).floor() as usize;
    let snap_last = (count as f32 * step) < max;
    (0..=count)
        .map(move |i| i as f32 * step)
        .chain(snap_last.then_some(max))
}

/// Scan a row-major lattice over the valid area and return the first point
/// that keeps `|dx| > d OR |dy| > d` against every placed anchor.
pub(crate) fn grid_position(bounds: &CanvasBounds, placed: &[(f32, f32)]) -> Option<(f32, f32)> {
    let d = bounds.min_distance;
    let (max_x, max_y) = (bounds.max_x(), bounds.max_y());
    let step = (d / 2.0)
        .max(1.0)
        .max(max_x / GRID_MAX_STEPS)
        .max(max_y / GRID_MAX_STEPS);

    axis_steps(max_y, step)
        .flat_map(|y| axis_steps(max_x, step).map(move |x| (x, y)))
        .find(|candidate| placed.iter().all(|p| chebyshev(*p, *candidate) > d))
}
