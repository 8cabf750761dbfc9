//! Layered Wheels - a stack of rotating, additively blended color wheels
//!
//! Core modules:
//! - `color`: RGBA colors and the fixed 360-entry color table
//! - `sim`: Deterministic engine (pattern generation, rotation, scoring, session flow)
//! - `config`: Construction-time wheel parameters
//! - `mesh`: Plain vertex export for a rendering collaborator
//! - `error`: Error taxonomy

pub mod color;
pub mod config;
pub mod error;
pub mod mesh;
pub mod sim;

pub use color::{Color, ColorTable};
pub use config::EngineConfig;
pub use error::WheelError;
pub use sim::{LayeredWheelEngine, Score, ScoreMode, Session};

use glam::Vec2;

/// Engine configuration constants
pub mod consts {
    /// Buckets per wheel, one per degree
    pub const TABLE_SIZE: usize = 360;
    /// Degrees in a full turn
    pub const FULL_TURN: f64 = 360.0;

    /// Local-frame position of the top (12 o'clock) mark.
    /// Geometry angle 0 points along +X, so "up" sits 90° away.
    pub const TOP_MARK_OFFSET: f64 = 90.0;
    /// Top-mark luminance sum is scaled by this for display
    pub const TOP_MARK_SCALE: f32 = 100.0;
    /// Every channel must reach this after clamping to count as white
    pub const OVERLAP_MATCH_THRESHOLD: f32 = 0.99;

    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will simulate in one go
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Distance between stacked wheels along the depth axis
    pub const DEFAULT_LAYER_GAP: f32 = 0.1;
    /// Default wheel radius for mesh export
    pub const DEFAULT_WHEEL_RADIUS: f32 = 5.0;

    /// Default wheel stack
    pub const DEFAULT_WHEEL_COUNT: usize = 5;
    pub const DEFAULT_MIN_SPEED: f32 = 50.0;
    pub const DEFAULT_MAX_SPEED: f32 = 200.0;
}

/// Wrap an angle in degrees into [0, 360)
///
/// `rem_euclid` can return exactly 360.0 for tiny negative inputs, so that
/// case folds back to 0.
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(consts::FULL_TURN);
    if wrapped >= consts::FULL_TURN { 0.0 } else { wrapped }
}

/// Bucket index (0..360) for any real angle in degrees
#[inline]
pub fn bucket_index(angle: f64) -> usize {
    let index = wrap_degrees(angle).floor() as usize;
    index.min(consts::TABLE_SIZE - 1)
}

/// Convert polar (r, theta radians) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert!((wrap_degrees(-90.0) - 270.0).abs() < 1e-9);
        assert!((wrap_degrees(725.5) - 5.5).abs() < 1e-9);
        assert!(wrap_degrees(-1e-20) < 360.0);
    }

    #[test]
    fn test_bucket_index_never_overflows() {
        assert_eq!(bucket_index(-1e-20), 0);
        assert_eq!(bucket_index(359.999), 359);
        assert_eq!(bucket_index(-0.5), 359);
        assert_eq!(bucket_index(90.0 - 450.0), 0);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(2.0, std::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 2.0).abs() < 1e-6);
    }
}
