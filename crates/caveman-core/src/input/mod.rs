//! Movement input sampling.

use glam::Vec2;

use crate::host::{Host, Key};

/// Sample the four-way movement axis and normalize it.
///
/// Opposite keys cancel, and a zero-length vector stays zero — diagonal
/// movement is unit speed, no key yields no displacement, never NaN.
pub fn move_axis<H: Host + ?Sized>(host: &H) -> Vec2 {
    let mut axis = Vec2::ZERO;
    if host.key_down(Key::A) {
        axis.x -= 1.0;
    }
    if host.key_down(Key::D) {
        axis.x += 1.0;
    }
    if host.key_down(Key::S) {
        axis.y -= 1.0;
    }
    if host.key_down(Key::W) {
        axis.y += 1.0;
    }
    axis.normalize_or_zero()
}
