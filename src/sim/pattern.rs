//! Color table generation
//!
//! Four stateless strategies paint a 360-bucket wheel from a primary color `A`,
//! a secondary color `B` and a few shape parameters. Every strategy always
//! returns a fully populated table; bad parameters are corrected and logged.

use std::f32::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorTable};
use crate::consts::{DEFAULT_MAX_SPEED, DEFAULT_MIN_SPEED, TABLE_SIZE};
use crate::error::WheelError;

/// Chance that a Random bucket is lit (1 in 5)
const RANDOM_LIT_ODDS: u32 = 5;
/// Brightness range of a lit Random bucket
const RANDOM_MIN_BRIGHTNESS: f32 = 0.5;
const RANDOM_MAX_BRIGHTNESS: f32 = 1.0;

/// Generation strategy tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Random,
    PieChart,
    GradientStripe,
    #[default]
    Stripe,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Random => "random",
            PatternKind::PieChart => "pie_chart",
            PatternKind::GradientStripe => "gradient_stripe",
            PatternKind::Stripe => "stripe",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "random" => Some(PatternKind::Random),
            "pie_chart" | "pie" => Some(PatternKind::PieChart),
            "gradient_stripe" | "gradient" => Some(PatternKind::GradientStripe),
            "stripe" => Some(PatternKind::Stripe),
            _ => None,
        }
    }
}

/// Parameters for one wheel in the stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelSpec {
    pub kind: PatternKind,
    pub primary: Color,
    pub secondary: Color,
    /// Share of each band (or of the whole wheel for PieChart) painted `primary`
    pub ratio: f32,
    /// Number of repeating bands / blend peaks, at least 1
    pub divisions: i32,
    /// Base angular speed in degrees per second
    pub speed: f32,
    /// Actual speed is drawn from `speed ± speed_jitter`
    pub speed_jitter: f32,
}

impl Default for WheelSpec {
    fn default() -> Self {
        Self {
            kind: PatternKind::Stripe,
            primary: Color::GRAY,
            secondary: Color::BLACK,
            ratio: 0.5,
            divisions: 2,
            speed: (DEFAULT_MIN_SPEED + DEFAULT_MAX_SPEED) / 2.0,
            speed_jitter: (DEFAULT_MAX_SPEED - DEFAULT_MIN_SPEED) / 2.0,
        }
    }
}

impl WheelSpec {
    /// Spec whose speed is drawn uniformly from `[min_speed, max_speed]`
    pub fn with_speed_range(mut self, min_speed: f32, max_speed: f32) -> Self {
        let (lo, hi) = if min_speed <= max_speed {
            (min_speed, max_speed)
        } else {
            (max_speed, min_speed)
        };
        self.speed = (lo + hi) / 2.0;
        self.speed_jitter = (hi - lo) / 2.0;
        self
    }

    /// Copy with every out-of-range parameter replaced, plus one warning per fix
    pub fn sanitized(&self, layer: usize) -> (WheelSpec, Vec<WheelError>) {
        let mut spec = self.clone();
        let mut warnings = Vec::new();
        let mut report = |name: &'static str, value: f64, used: f64| {
            let warning = WheelError::InvalidParameter { layer, name, value, used };
            log::warn!("{warning}");
            warnings.push(warning);
        };

        if spec.divisions <= 0 {
            report("divisions", f64::from(spec.divisions), 1.0);
            spec.divisions = 1;
        }
        if !(0.0..=1.0).contains(&spec.ratio) {
            let used = clamp_ratio(spec.ratio);
            report("ratio", f64::from(spec.ratio), f64::from(used));
            spec.ratio = used;
        }
        if !spec.speed.is_finite() {
            report("speed", f64::from(spec.speed), 0.0);
            spec.speed = 0.0;
        }
        if !spec.speed_jitter.is_finite() || spec.speed_jitter < 0.0 {
            let used = if spec.speed_jitter.is_finite() { spec.speed_jitter.abs() } else { 0.0 };
            report("speed_jitter", f64::from(spec.speed_jitter), f64::from(used));
            spec.speed_jitter = used;
        }
        if !speed_range_is_finite(spec.speed, spec.speed_jitter) {
            report("speed_jitter", f64::from(spec.speed_jitter), 0.0);
            spec.speed_jitter = 0.0;
        }

        (spec, warnings)
    }
}

/// Paint a table for `spec`, drawing from `rng` only for the Random strategy
pub fn generate<R: Rng + ?Sized>(spec: &WheelSpec, rng: &mut R) -> ColorTable {
    match spec.kind {
        PatternKind::Random => random_table(rng),
        PatternKind::PieChart => pie_chart_table(spec.primary, spec.secondary, spec.ratio),
        PatternKind::GradientStripe => {
            gradient_stripe_table(spec.primary, spec.secondary, spec.divisions)
        }
        PatternKind::Stripe => {
            stripe_table(spec.primary, spec.secondary, spec.divisions, spec.ratio)
        }
    }
}

/// Mostly black wheel with roughly one bucket in five lit a random grey
pub fn random_table<R: Rng + ?Sized>(rng: &mut R) -> ColorTable {
    ColorTable::from_fn(|_| {
        if rng.random_range(0..RANDOM_LIT_ODDS) == 0 {
            Color::gray(rng.random_range(RANDOM_MIN_BRIGHTNESS..=RANDOM_MAX_BRIGHTNESS))
        } else {
            Color::BLACK
        }
    })
}

/// `divisions` equal bands, each starting with `round(size * ratio)` buckets of `primary`.
/// Buckets past the last whole band are `secondary`.
pub fn stripe_table(primary: Color, secondary: Color, divisions: i32, ratio: f32) -> ColorTable {
    let divisions = effective_divisions(divisions) as usize;
    let ratio = clamp_ratio(ratio);

    let segment_size = (TABLE_SIZE / divisions).max(1);
    let primary_len = ((segment_size as f32 * ratio).round() as usize).min(segment_size);
    let laid_out = divisions.min(TABLE_SIZE / segment_size) * segment_size;

    ColorTable::from_fn(|j| {
        if j < laid_out && j % segment_size < primary_len {
            primary
        } else {
            secondary
        }
    })
}

/// Two arcs: the first `round(360 * ratio)` buckets `primary`, the rest `secondary`
pub fn pie_chart_table(primary: Color, secondary: Color, ratio: f32) -> ColorTable {
    let split = ((TABLE_SIZE as f32 * clamp_ratio(ratio)).round() as usize).min(TABLE_SIZE);
    ColorTable::from_fn(|j| if j < split { primary } else { secondary })
}

/// Sinusoidal blend with `divisions` peaks of `primary` around the circle
pub fn gradient_stripe_table(primary: Color, secondary: Color, divisions: i32) -> ColorTable {
    let divisions = effective_divisions(divisions) as f32;
    ColorTable::from_fn(|j| {
        let phase = j as f32 * divisions * TAU / TABLE_SIZE as f32;
        let t = (phase.sin() + 1.0) / 2.0;
        secondary.lerp(primary, t)
    })
}

/// Whether `speed ± jitter` and its width are all finite
pub(crate) fn speed_range_is_finite(speed: f32, jitter: f32) -> bool {
    let lo = speed - jitter;
    let hi = speed + jitter;
    lo.is_finite() && hi.is_finite() && (hi - lo).is_finite()
}

/// Division count corrected to at least 1
fn effective_divisions(divisions: i32) -> u32 {
    if divisions <= 0 {
        log::warn!("division count must be at least 1, got {divisions}; using 1");
        1
    } else {
        divisions as u32
    }
}

/// Ratio clamped to [0, 1]; NaN counts as 0
fn clamp_ratio(ratio: f32) -> f32 {
    if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) }
}
