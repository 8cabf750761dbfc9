//! Continuous rotation of the wheel stack

use super::wheel::WheelLayer;

/// Advance every layer by `speed * dt` when `spinning`; otherwise do nothing.
///
/// Angles accumulate without wrapping. A negative or non-finite `dt` is
/// treated as zero.
pub fn advance(layers: &mut [WheelLayer], dt: f32, spinning: bool) {
    if !spinning {
        return;
    }
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("ignoring invalid frame time {dt}");
        return;
    }
    for layer in layers.iter_mut() {
        layer.rotate(dt);
    }
}
