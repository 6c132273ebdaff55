//! Per-axis separation rules.
//!
//! Distances are measured between item anchors (top-left corners) one axis
//! at a time, never as a Euclidean distance. Three rules share that metric:
//!
//! ```text
//! placement accepts  : |dx| >  d  AND |dy| >  d   (cross-shaped forbidden zone)
//! layout invariant   : |dx| >= d  OR  |dy| >= d
//! drag move rejected : |dx| <  d  AND |dy| <  d   (square forbidden zone)
//! ```
//!
//! The drag rule is the complement of the invariant, so a board can only
//! reach states the invariant allows.

/// Per-axis distance between two anchors (absolute dx, absolute dy).
#[inline]
pub fn axis_distance(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    ((a.0 - b.0).abs(), (a.1 - b.1).abs())
}

/// Larger of the two axis distances.
#[inline]
pub fn chebyshev(a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = axis_distance(a, b);
    dx.max(dy)
}

/// Strict rule used when sampling initial positions.
#[inline]
pub fn clear_for_placement(existing: (f32, f32), candidate: (f32, f32), min_distance: f32) -> bool {
    let (dx, dy) = axis_distance(existing, candidate);
    dx > min_distance && dy > min_distance
}

/// The layout invariant that must hold between every pair of items.
#[inline]
pub fn is_separated(a: (f32, f32), b: (f32, f32), min_distance: f32) -> bool {
    let (dx, dy) = axis_distance(a, b);
    dx >= min_distance || dy >= min_distance
}

/// True when `other` blocks a drag of the moving item to `candidate`.
#[inline]
pub fn blocks_move(other: (f32, f32), candidate: (f32, f32), min_distance: f32) -> bool {
    !is_separated(other, candidate, min_distance)
}

/// First pair of indices violating the invariant, if any.
pub fn find_violation(positions: &[(f32, f32)], min_distance: f32) -> Option<(usize, usize)> {
    for (i, a) in positions.iter().enumerate() {
        for (j, b) in positions.iter().enumerate().skip(i + 1) {
            if !is_separated(*a, *b, min_distance) {
                return Some((i, j));
            }
        }
    }
    None
}
