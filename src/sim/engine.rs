//! The layered wheel engine facade
//!
//! Owns the wheel stack and the single spinning flag. The interaction layer
//! calls `spin`/`stop`/`advance`/`score`; a renderer reads `layer_views`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::pattern::WheelSpec;
use super::rotation;
use super::scoring::{self, Score, ScoreMode};
use super::wheel::WheelLayer;
use crate::color::ColorTable;
use crate::config::EngineConfig;
use crate::consts::DEFAULT_LAYER_GAP;
use crate::error::WheelError;

/// What a renderer needs to draw one layer
#[derive(Debug, Clone, Copy)]
pub struct LayerView<'a> {
    pub table: &'a ColorTable,
    /// Raw accumulated angle in degrees
    pub angle_degrees: f64,
    /// Stack position, 0 first
    pub depth: usize,
    /// Offset along the stacking axis (`depth * layer_gap`)
    pub z_offset: f32,
}

#[derive(Debug)]
pub struct LayeredWheelEngine {
    /// Sanitized generation parameters, one per layer, in stack order
    specs: Vec<WheelSpec>,
    /// Layers in stack order (also the scoring order)
    layers: Vec<WheelLayer>,
    /// Shared by all layers; there is no per-layer pause
    spinning: bool,
    layer_gap: f32,
    /// Parameter corrections made while building the stack
    warnings: Vec<WheelError>,
}

impl Default for LayeredWheelEngine {
    fn default() -> Self {
        Self::empty()
    }
}

impl LayeredWheelEngine {
    /// Engine with no wheels. Every score is 0.
    pub fn empty() -> Self {
        Self {
            specs: Vec::new(),
            layers: Vec::new(),
            spinning: true,
            layer_gap: DEFAULT_LAYER_GAP,
            warnings: Vec::new(),
        }
    }

    /// Build the stack using a PCG generator seeded from `config.seed`
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        Self::with_rng(config, &mut rng)
    }

    /// Build the stack drawing randomness from `rng`, one layer at a time in order
    pub fn with_rng<R: Rng + ?Sized>(config: &EngineConfig, rng: &mut R) -> Self {
        let mut specs = Vec::with_capacity(config.wheels.len());
        let mut warnings = Vec::new();
        for (layer, spec) in config.wheels.iter().enumerate() {
            let (spec, fixes) = spec.sanitized(layer);
            specs.push(spec);
            warnings.extend(fixes);
        }

        let layer_gap = if config.layer_gap.is_finite() {
            config.layer_gap
        } else {
            let warning = WheelError::InvalidParameter {
                layer: 0,
                name: "layer_gap",
                value: f64::from(config.layer_gap),
                used: f64::from(DEFAULT_LAYER_GAP),
            };
            log::warn!("{warning}");
            warnings.push(warning);
            DEFAULT_LAYER_GAP
        };

        let layers = build_layers(&specs, rng);
        log::info!(
            "Built {} wheel layers ({} parameter corrections)",
            layers.len(),
            warnings.len()
        );

        Self {
            specs,
            layers,
            spinning: true,
            layer_gap,
            warnings,
        }
    }

    /// Build directly from prepared layers (stack order = slice order).
    ///
    /// Depths are renumbered to match slice position. Without specs such an
    /// engine cannot `regenerate`.
    pub fn from_layers(layers: Vec<WheelLayer>) -> Self {
        let layers = layers
            .into_iter()
            .enumerate()
            .map(|(depth, layer)| layer.with_depth(depth))
            .collect();
        Self {
            layers,
            ..Self::empty()
        }
    }

    /// Resume rotation
    pub fn spin(&mut self) {
        self.spinning = true;
    }

    /// Freeze every layer at its current angle. Idempotent.
    pub fn stop(&mut self) {
        self.spinning = false;
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Progress the simulation by `dt` seconds (no-op while stopped)
    pub fn advance(&mut self, dt: f32) {
        rotation::advance(&mut self.layers, dt, self.spinning);
    }

    pub fn score_at_top_mark(&self) -> f32 {
        scoring::score_at_top_mark(&self.layers)
    }

    pub fn score_full_overlap(&self) -> u32 {
        scoring::score_full_overlap(&self.layers)
    }

    pub fn score(&self, mode: ScoreMode) -> Score {
        scoring::score(&self.layers, mode)
    }

    pub fn layers(&self) -> &[WheelLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer_gap(&self) -> f32 {
        self.layer_gap
    }

    pub fn warnings(&self) -> &[WheelError] {
        &self.warnings
    }

    /// Per-layer render data, in stack order
    pub fn layer_views(&self) -> impl Iterator<Item = LayerView<'_>> {
        self.layers.iter().enumerate().map(|(depth, layer)| LayerView {
            table: layer.table(),
            angle_degrees: layer.angle(),
            depth,
            z_offset: depth as f32 * self.layer_gap,
        })
    }

    /// Repaint every layer and redraw its speed from the stored specs.
    /// Angles restart at 0; the spinning flag is left as is.
    ///
    /// Does nothing when the stack was not built from specs.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.specs.len() != self.layers.len() {
            log::warn!(
                "cannot regenerate: {} layers but {} generation specs",
                self.layers.len(),
                self.specs.len()
            );
            return;
        }
        self.layers = build_layers(&self.specs, rng);
        log::info!("Regenerated {} wheel layers", self.layers.len());
    }
}

fn build_layers<R: Rng + ?Sized>(specs: &[WheelSpec], rng: &mut R) -> Vec<WheelLayer> {
    specs
        .iter()
        .enumerate()
        .map(|(depth, spec)| WheelLayer::from_spec(spec, depth, rng))
        .collect()
}
