// math/approach.rs
//
// Exponential-decay interpolation toward a target.
// No dependencies on Entity/World — just math.

use glam::Vec2;

/// Gap below which a value is considered to have arrived at its target.
pub const SNAP_EPSILON: f32 = 0.001;

/// Whether `a` and `b` are within `epsilon` of each other.
#[inline]
pub fn almost_equals(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Move `value` toward `target` by an exponential-decay step of size
/// `1 - 2^(-rate * dt)`.
///
/// The step is frame-rate independent: advancing once by `dt1 + dt2` lands on
/// the same value (within float tolerance) as advancing by `dt1` then `dt2`.
/// Once the remaining gap is within [`SNAP_EPSILON`] the result snaps exactly
/// to `target` and the returned flag is `true`.
#[inline]
pub fn approach(value: f32, target: f32, dt: f32, rate: f32) -> (f32, bool) {
    let next = value + (target - value) * (1.0 - 2.0_f32.powf(-rate * dt));
    if almost_equals(next, target, SNAP_EPSILON) {
        (target, true)
    } else {
        (next, false)
    }
}

/// Per-axis [`approach`] for 2D vectors.
/// Reports reached only when both axes have reached their targets.
#[inline]
pub fn approach_vec2(value: Vec2, target: Vec2, dt: f32, rate: f32) -> (Vec2, bool) {
    let (x, x_reached) = approach(value.x, target.x, dt, rate);
    let (y, y_reached) = approach(value.y, target.y, dt, rate);
    (Vec2::new(x, y), x_reached && y_reached)
}
