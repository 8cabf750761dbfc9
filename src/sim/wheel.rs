//! A single rotating wheel in the stack

use rand::Rng;

use super::pattern::{WheelSpec, generate, speed_range_is_finite};
use crate::color::{Color, ColorTable};
use crate::{bucket_index, wrap_degrees};

/// One disc: a fixed color table plus its live rotation
#[derive(Debug, Clone)]
pub struct WheelLayer {
    table: ColorTable,
    /// Accumulated rotation in degrees, never normalized.
    /// f64 so long runs keep sub-degree precision.
    pub(crate) angle: f64,
    /// Degrees per second, fixed at creation
    speed: f32,
    /// Position in the stack (0 = first)
    depth: usize,
}

impl WheelLayer {
    pub fn new(table: ColorTable, speed: f32, depth: usize) -> Self {
        Self {
            table,
            angle: 0.0,
            speed,
            depth,
        }
    }

    /// Paint a table for `spec` and draw a speed from its jitter range.
    ///
    /// `spec` is expected to be sanitized already.
    pub fn from_spec<R: Rng + ?Sized>(spec: &WheelSpec, depth: usize, rng: &mut R) -> Self {
        let table = generate(spec, rng);
        let jitter = spec.speed_jitter.abs();
        let speed = if jitter > 0.0 && speed_range_is_finite(spec.speed, jitter) {
            rng.random_range(spec.speed - jitter..=spec.speed + jitter)
        } else {
            if jitter > 0.0 {
                log::warn!(
                    "wheel {depth}: speed range {} ± {jitter} overflows, using base speed",
                    spec.speed
                );
            }
            spec.speed
        };
        log::debug!(
            "wheel {depth}: {} pattern, {speed:.1} deg/s",
            spec.kind.as_str()
        );
        Self::new(table, speed, depth)
    }

    /// Start from a given angle instead of 0
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Place at stack position `depth`
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    /// Raw accumulated angle in degrees (may lie outside [0, 360))
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Angle wrapped into [0, 360)
    pub fn normalized_angle(&self) -> f64 {
        wrap_degrees(self.angle)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Local table index currently under world-frame angle `world_degrees`
    #[inline]
    pub fn local_index_at(&self, world_degrees: f64) -> usize {
        bucket_index(world_degrees - self.angle)
    }

    /// Color currently under world-frame angle `world_degrees`
    #[inline]
    pub fn color_at_world(&self, world_degrees: f64) -> Color {
        self.table.get(self.local_index_at(world_degrees))
    }

    /// Rotate by `speed * dt`
    #[inline]
    pub(crate) fn rotate(&mut self, dt: f32) {
        self.angle += f64::from(self.speed) * f64::from(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::pattern::PatternKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ramp() -> ColorTable {
        ColorTable::from_fn(|j| Color::gray(j as f32 / 360.0))
    }

    #[test]
    fn test_local_index_follows_rotation() {
        let layer = WheelLayer::new(ramp(), 10.0, 0);
        assert_eq!(layer.local_index_at(90.0), 90);

        let layer = layer.with_angle(30.0);
        assert_eq!(layer.local_index_at(90.0), 60);
        assert_eq!(layer.local_index_at(10.0), 340);
    }

    #[test]
    fn test_unbounded_angle_reads_wrapped() {
        let layer = WheelLayer::new(ramp(), 10.0, 0).with_angle(-3.0 * 360.0 + 45.0);
        assert!((layer.normalized_angle() - 45.0).abs() < 1e-9);
        assert_eq!(layer.local_index_at(90.0), 45);
        assert_eq!(layer.color_at_world(90.0), layer.table()[45]);
    }

    #[test]
    fn test_speed_drawn_within_jitter() {
        let spec = WheelSpec {
            kind: PatternKind::Stripe,
            speed: 100.0,
            speed_jitter: 20.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(42);
        for depth in 0..50 {
            let layer = WheelLayer::from_spec(&spec, depth, &mut rng);
            assert!((80.0..=120.0).contains(&layer.speed()));
            assert_eq!(layer.depth(), depth);
            assert_eq!(layer.angle(), 0.0);
        }
    }

    #[test]
    fn test_overflowing_jitter_falls_back_to_base_speed() {
        let spec = WheelSpec {
            speed: 40.0,
            speed_jitter: f32::MAX,
            ..Default::default()
        };
        let layer = WheelLayer::from_spec(&spec, 0, &mut Pcg32::seed_from_u64(3));
        assert_eq!(layer.speed(), 40.0);
    }

    #[test]
    fn test_zero_jitter_uses_base_speed() {
        let spec = WheelSpec {
            speed: -35.0,
            speed_jitter: 0.0,
            ..Default::default()
        };
        let layer = WheelLayer::from_spec(&spec, 0, &mut Pcg32::seed_from_u64(0));
        assert_eq!(layer.speed(), -35.0);
    }
}
