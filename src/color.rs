//! Additive RGBA colors and the per-degree color table

use std::ops::Add;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::bucket_index;
use crate::consts::TABLE_SIZE;

/// Additive RGBA color. Channels may exceed 1.0 while blending.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    /// Mid grey, the classic "hit" color
    pub const GRAY: Color = Color::rgba(0.5, 0.5, 0.5, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque grey with R = G = B = `v`
    pub const fn gray(v: f32) -> Self {
        Self::rgba(v, v, v, 1.0)
    }

    /// Luminance as the plain mean of R, G and B
    #[inline]
    pub fn grayscale(&self) -> f32 {
        (self.r + self.g + self.b) / 3.0
    }

    /// Channel-wise `self * (1 - t) + other * t`
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let s = 1.0 - t;
        Color::rgba(
            self.r * s + other.r * t,
            self.g * s + other.g * t,
            self.b * s + other.b * t,
            self.a * s + other.a * t,
        )
    }

    /// Clamp every channel to at most `max`
    pub fn clamp_max(self, max: f32) -> Color {
        Color::rgba(self.r.min(max), self.g.min(max), self.b.min(max), self.a.min(max))
    }

    pub fn all_channels_at_least(&self, threshold: f32) -> bool {
        self.r >= threshold && self.g >= threshold && self.b >= threshold && self.a >= threshold
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::rgba(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Color::rgba(c[0], c[1], c[2], c[3])
    }
}

/// Exactly 360 colors, entry `j` painting degrees `[j, j + 1)` of a wheel's local frame
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    colors: Box<[Color; TABLE_SIZE]>,
}

impl ColorTable {
    /// Table with every bucket set to `color`
    pub fn filled(color: Color) -> Self {
        Self {
            colors: Box::new([color; TABLE_SIZE]),
        }
    }

    /// Build from `f(j)` for each bucket `j`
    pub fn from_fn(mut f: impl FnMut(usize) -> Color) -> Self {
        let mut table = Self::filled(Color::TRANSPARENT);
        for (j, slot) in table.colors.iter_mut().enumerate() {
            *slot = f(j);
        }
        table
    }

    /// Wrap an existing color list.
    ///
    /// # Panics
    /// When `colors` does not hold exactly 360 entries.
    pub fn from_colors(colors: Vec<Color>) -> Self {
        assert_eq!(
            colors.len(),
            TABLE_SIZE,
            "color table must have exactly {TABLE_SIZE} entries, got {}",
            colors.len()
        );
        let boxed: Box<[Color]> = colors.into_boxed_slice();
        match boxed.try_into() {
            Ok(colors) => Self { colors },
            Err(_) => unreachable!("length checked above"),
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Color {
        self.colors[index]
    }

    /// Color under a local-frame angle (any real value, wrapped)
    #[inline]
    pub fn color_at_local(&self, degrees: f64) -> Color {
        self.colors[bucket_index(degrees)]
    }

    pub fn as_slice(&self) -> &[Color] {
        self.colors.as_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        TABLE_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of buckets equal to `color`
    pub fn count_of(&self, color: Color) -> usize {
        self.colors.iter().filter(|c| **c == color).count()
    }
}

impl std::ops::Index<usize> for ColorTable {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}
