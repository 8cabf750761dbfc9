//! Engine configuration
//!
//! A plain, serde-friendly description of the wheel stack. Can be loaded from
//! JSON; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::{DEFAULT_LAYER_GAP, DEFAULT_MAX_SPEED, DEFAULT_MIN_SPEED, DEFAULT_WHEEL_COUNT};
use crate::error::WheelError;
use crate::sim::{PatternKind, ScoreMode, WheelSpec};

/// Seed used when a configuration does not name one
pub const DEFAULT_SEED: u64 = 0x5EED_5EED;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// One entry per wheel, first entry at the bottom of the stack
    pub wheels: Vec<WheelSpec>,
    /// Distance between wheels along the depth axis
    pub layer_gap: f32,
    /// Seed for table patterns and speeds
    pub seed: u64,
    /// Algorithm used when a session stops the wheels
    pub score_mode: ScoreMode,
}

impl Default for EngineConfig {
    /// Five grey-on-black stripe wheels with 2..=6 bands, spinning 50-200 deg/s
    fn default() -> Self {
        Self::uniform(
            DEFAULT_WHEEL_COUNT,
            &[(Color::GRAY, Color::BLACK)],
            &[],
            DEFAULT_MIN_SPEED,
            DEFAULT_MAX_SPEED,
        )
    }
}

impl EngineConfig {
    /// Flat stack of `count` Stripe wheels sharing one speed range.
    ///
    /// `colors` and `divisions` cycle when shorter than `count`. With no
    /// colors the wheels are grey on black; with no divisions wheel `i`
    /// gets `i + 2` bands.
    pub fn uniform(
        count: usize,
        colors: &[(Color, Color)],
        divisions: &[i32],
        min_speed: f32,
        max_speed: f32,
    ) -> Self {
        let wheels = (0..count)
            .map(|i| {
                let (primary, secondary) = if colors.is_empty() {
                    (Color::GRAY, Color::BLACK)
                } else {
                    colors[i % colors.len()]
                };
                let divisions = if divisions.is_empty() {
                    i as i32 + 2
                } else {
                    divisions[i % divisions.len()]
                };
                WheelSpec {
                    kind: PatternKind::Stripe,
                    primary,
                    secondary,
                    ratio: 0.5,
                    divisions,
                    ..Default::default()
                }
                .with_speed_range(min_speed, max_speed)
            })
            .collect();

        Self {
            wheels,
            layer_gap: DEFAULT_LAYER_GAP,
            seed: DEFAULT_SEED,
            score_mode: ScoreMode::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, WheelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and parse a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WheelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded {} wheels from {}", config.wheels.len(), path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_stack() {
        let config = EngineConfig::default();
        assert_eq!(config.wheels.len(), 5);
        for (i, wheel) in config.wheels.iter().enumerate() {
            assert_eq!(wheel.kind, PatternKind::Stripe);
            assert_eq!(wheel.divisions, i as i32 + 2);
            assert_eq!(wheel.primary, Color::GRAY);
            assert_eq!(wheel.secondary, Color::BLACK);
            assert_eq!(wheel.speed - wheel.speed_jitter, 50.0);
            assert_eq!(wheel.speed + wheel.speed_jitter, 200.0);
        }
        assert_eq!(config.layer_gap, 0.1);
    }

    #[test]
    fn test_uniform_cycles_lists() {
        let config = EngineConfig::uniform(
            4,
            &[(Color::WHITE, Color::BLACK), (Color::GRAY, Color::TRANSPARENT)],
            &[3],
            10.0,
            20.0,
        );
        assert_eq!(config.wheels[2].primary, Color::WHITE);
        assert_eq!(config.wheels[3].secondary, Color::TRANSPARENT);
        assert!(config.wheels.iter().all(|w| w.divisions == 3));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "wheels": [
                { "kind": "pie_chart", "primary": { "r": 1, "g": 0, "b": 0 }, "ratio": 0.25 },
                { "kind": "random" }
            ],
            "score_mode": "full_overlap"
        }"#;
        let config = EngineConfig::from_json(json).unwrap();
        assert_eq!(config.wheels.len(), 2);
        assert_eq!(config.wheels[0].kind, PatternKind::PieChart);
        assert_eq!(config.wheels[0].primary, Color::rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(config.wheels[0].secondary, Color::BLACK);
        assert_eq!(config.wheels[1].kind, PatternKind::Random);
        assert_eq!(config.score_mode, ScoreMode::FullOverlap);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = EngineConfig::from_json(r#"{ "wheels": 3 }"#).unwrap_err();
        assert!(matches!(err, WheelError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EngineConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, WheelError::Io(_)));
    }
}
