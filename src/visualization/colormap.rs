//! Score-to-color mapping.

use crate::math::Real;

/// Number of distinct colors of [`jet`].
pub const JET_BUCKETS: usize = 64;

/// RGBA color with values in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ColorRGBA {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Opacity.
    pub a: f32,
}

impl ColorRGBA {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Opaque mid-gray.
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5, 1.0);

    /// Creates a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// The `bucket`-th color of the 64-color "jet" palette, going from dark blue
/// through cyan, green, and yellow to dark red.
///
/// Buckets past the end of the palette are clamped to its last color.
pub fn jet_bucket(bucket: usize) -> ColorRGBA {
    let t = bucket.min(JET_BUCKETS - 1) as f32 / (JET_BUCKETS - 1) as f32;
    let channel = |center: f32| (1.5 - (4.0 * t - center).abs()).clamp(0.0, 1.0);

    ColorRGBA::new(channel(3.0), channel(2.0), channel(1.0), 1.0)
}

/// The jet color of a score.
///
/// The score selects the bucket `floor(score * 64)`, clamped to the palette,
/// so scores of `1` and above are all dark red. Negative or NaN scores are dark blue.
pub fn jet(score: Real) -> ColorRGBA {
    let bucket = (score * JET_BUCKETS as Real).floor();
    // NOTE: `as usize` saturates negative values and maps NaN to 0.
    jet_bucket(bucket as usize)
}
