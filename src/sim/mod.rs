//! Deterministic wheel simulation
//!
//! All engine logic lives here. This module must stay pure:
//! - Randomness only through an injected generator
//! - Stable iteration order (stack order)
//! - No rendering or platform dependencies

pub mod engine;
pub mod pattern;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod wheel;

pub use engine::{LayerView, LayeredWheelEngine};
pub use pattern::{
    PatternKind, WheelSpec, generate, gradient_stripe_table, pie_chart_table, random_table,
    stripe_table,
};
pub use rotation::advance;
pub use scoring::{
    Score, ScoreMode, blend_at, overlap_profile, score, score_at_top_mark, score_full_overlap,
};
pub use session::{Session, SessionInput, SessionPhase};
pub use wheel::WheelLayer;
