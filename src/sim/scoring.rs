//! Scoring over the current wheel stack
//!
//! Two independent read-only algorithms:
//! - top mark: luminance of the bucket under 12 o'clock, summed over layers
//! - full overlap: number of world buckets where the additive blend is white

use std::fmt;

use serde::{Deserialize, Serialize};

use super::wheel::WheelLayer;
use crate::color::Color;
use crate::consts::{OVERLAP_MATCH_THRESHOLD, TABLE_SIZE, TOP_MARK_OFFSET, TOP_MARK_SCALE};

/// Which scoring algorithm a session reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMode {
    #[default]
    TopMark,
    FullOverlap,
}

impl ScoreMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreMode::TopMark => "top_mark",
            ScoreMode::FullOverlap => "full_overlap",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "top_mark" | "top" => Some(ScoreMode::TopMark),
            "full_overlap" | "overlap" => Some(ScoreMode::FullOverlap),
            _ => None,
        }
    }
}

/// A computed score, tagged by the algorithm that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Score {
    /// Summed luminance x 100, unbounded above by layer count
    TopMark(f32),
    /// Matching buckets in [0, 360]
    FullOverlap(u32),
}

impl Score {
    pub fn value(&self) -> f32 {
        match *self {
            Score::TopMark(v) => v,
            Score::FullOverlap(n) => n as f32,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::TopMark(v) => write!(f, "SCORE: {:.0}", v.round()),
            Score::FullOverlap(n) => write!(f, "SCORE: {n}"),
        }
    }
}

/// Score the stack with the chosen algorithm
pub fn score(layers: &[WheelLayer], mode: ScoreMode) -> Score {
    match mode {
        ScoreMode::TopMark => Score::TopMark(score_at_top_mark(layers)),
        ScoreMode::FullOverlap => Score::FullOverlap(score_full_overlap(layers)),
    }
}

/// Sum of each layer's luminance under the top mark, times 100
pub fn score_at_top_mark(layers: &[WheelLayer]) -> f32 {
    let total: f32 = layers
        .iter()
        .map(|layer| layer.color_at_world(TOP_MARK_OFFSET).grayscale())
        .sum();
    total * TOP_MARK_SCALE
}

/// Clamped additive blend of every layer at world bucket `world_degrees`
pub fn blend_at(layers: &[WheelLayer], world_degrees: f64) -> Color {
    layers
        .iter()
        .fold(Color::TRANSPARENT, |acc, layer| acc + layer.color_at_world(world_degrees))
        .clamp_max(1.0)
}

/// Clamped blend for all 360 world buckets
pub fn overlap_profile(layers: &[WheelLayer]) -> Vec<Color> {
    (0..TABLE_SIZE).map(|j| blend_at(layers, j as f64)).collect()
}

/// Count world buckets whose blend is (near) opaque white
pub fn score_full_overlap(layers: &[WheelLayer]) -> u32 {
    (0..TABLE_SIZE)
        .filter(|&j| blend_at(layers, j as f64).all_channels_at_least(OVERLAP_MATCH_THRESHOLD))
        .count() as u32
}
