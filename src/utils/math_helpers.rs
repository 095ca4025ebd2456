use std::f64::consts::{PI, TAU};

/// Wraps an angle in radians into `(-π, π]`.
///
/// # Examples
///
/// ```
/// use rs_boids::utils::wrap_angle;
/// use std::f64::consts::PI;
///
/// assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-12);
/// assert!((wrap_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid maps an exact multiple onto the lower edge; keep the upper edge instead
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in `(-π, π]`.
#[inline]
pub fn angle_difference(from: f64, to: f64) -> f64 {
    wrap_angle(to - from)
}

/// Moves `current` toward `target` along the shorter arc by `factor` of the gap.
///
/// A factor of `1.0` lands exactly on `target` (up to wrapping).
#[inline]
pub fn approach_angle(current: f64, target: f64, factor: f64) -> f64 {
    wrap_angle(current + angle_difference(current, target) * factor)
}

/// Wraps `value` into the half-open interval `[min, min + span)`.
#[inline]
pub fn wrap_coordinate(value: f64, min: f64, span: f64) -> f64 {
    let wrapped = min + (value - min).rem_euclid(span);
    // rem_euclid of a tiny negative offset can round up to `span` itself
    if wrapped >= min + span {
        min
    } else {
        wrapped
    }
}
