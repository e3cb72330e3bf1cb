//! Numeric helpers shared by the intersection and shading code.

use crate::DVec3;

/// Values closer to zero than this are treated as exactly zero.
const EPSILON: f64 = 1e-10;

/// Snap near-zero values to exactly 0.0.
///
/// Intersection tie-breaks (tangency, parallel rays, grazing incidence)
/// are all phrased as exact comparisons against the aligned value.
#[inline]
pub fn align_zero(x: f64) -> f64 {
    if x.abs() < EPSILON {
        0.0
    } else {
        x
    }
}

/// True when `x` is within the zero-alignment band.
#[inline]
pub fn is_zero(x: f64) -> bool {
    x.abs() < EPSILON
}

/// Per-channel approximate equality, used by the adaptive sampler to
/// decide whether a cell has converged.
#[inline]
pub fn almost_equal(a: DVec3, b: DVec3, tolerance: f64) -> bool {
    (a - b).abs().max_element() < tolerance
}
