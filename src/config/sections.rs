//! Configuration sections.

use super::defaults;
use crate::evaluation::{CastStrategy, ExplorationBounds};
use crate::math::{Point, Real};
use crate::sampling::{SamplingError, SphericalCrownSampler};
use crate::sensor::{PixelGrid, SensorModel};

/// Depth sensor settings.
///
/// Angles are in degrees in the file and converted to radians by
/// [`SensorSection::to_sensor_model`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorSection {
    /// Minimum valid range, in map units.
    #[serde(default = "defaults::min_range")]
    pub min_range: Real,

    /// Maximum valid range, in map units.
    #[serde(default = "defaults::max_range")]
    pub max_range: Real,

    /// Full horizontal field of view, in degrees.
    #[serde(default = "defaults::horizontal_fov_deg")]
    pub horizontal_fov_deg: Real,

    /// Full vertical field of view, in degrees.
    #[serde(default = "defaults::vertical_fov_deg")]
    pub vertical_fov_deg: Real,
}

impl Default for SensorSection {
    fn default() -> Self {
        Self {
            min_range: defaults::min_range(),
            max_range: defaults::max_range(),
            horizontal_fov_deg: defaults::horizontal_fov_deg(),
            vertical_fov_deg: defaults::vertical_fov_deg(),
        }
    }
}

impl SensorSection {
    /// Convert to a `SensorModel`.
    pub fn to_sensor_model(&self) -> SensorModel {
        SensorModel::new(
            self.min_range,
            self.max_range,
            self.horizontal_fov_deg.to_radians(),
            self.vertical_fov_deg.to_radians(),
        )
    }
}

/// Exploration volume used to normalize scores.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundsSection {
    /// Lower corner, as `[x, y, z]`.
    #[serde(default = "defaults::bounds_mins")]
    pub mins: Point<Real>,

    /// Upper corner, as `[x, y, z]`.
    #[serde(default = "defaults::bounds_maxs")]
    pub maxs: Point<Real>,
}

impl Default for BoundsSection {
    fn default() -> Self {
        Self {
            mins: defaults::bounds_mins(),
            maxs: defaults::bounds_maxs(),
        }
    }
}

impl BoundsSection {
    /// Convert to `ExplorationBounds`.
    pub fn to_bounds(&self) -> ExplorationBounds {
        ExplorationBounds::new(self.mins, self.maxs)
    }
}

/// Name of a raycasting strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// See [`CastStrategy::FurthestFirst`].
    #[default]
    FurthestFirst,
    /// See [`CastStrategy::Independent`].
    Independent,
    /// See [`CastStrategy::Pixel`].
    Pixel,
}

/// Raycasting settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaycastSection {
    /// Strategy used to cast rays.
    #[serde(default)]
    pub strategy: StrategyKind,

    /// Image width in pixels (pixel strategy only).
    #[serde(default = "defaults::pixel_width")]
    pub pixel_width: u32,

    /// Image height in pixels (pixel strategy only).
    #[serde(default = "defaults::pixel_height")]
    pub pixel_height: u32,

    /// One ray is cast every `pixel_step` pixels along each image axis.
    #[serde(default = "defaults::pixel_step")]
    pub pixel_step: u32,
}

impl Default for RaycastSection {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            pixel_width: defaults::pixel_width(),
            pixel_height: defaults::pixel_height(),
            pixel_step: defaults::pixel_step(),
        }
    }
}

impl RaycastSection {
    /// Convert to a `CastStrategy`.
    pub fn to_strategy(&self) -> CastStrategy {
        match self.strategy {
            StrategyKind::FurthestFirst => CastStrategy::FurthestFirst,
            StrategyKind::Independent => CastStrategy::Independent,
            StrategyKind::Pixel => CastStrategy::Pixel(PixelGrid::new(
                self.pixel_width,
                self.pixel_height,
                self.pixel_step,
            )),
        }
    }
}

/// Viewpoint sampling settings.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplingSection {
    /// Observation target, as `[x, y, z]`.
    #[serde(default)]
    pub center: Point<Real>,

    /// Inner radius of the spherical crown.
    #[serde(default = "defaults::min_radius")]
    pub min_radius: Real,

    /// Outer radius of the spherical crown.
    #[serde(default = "defaults::max_radius")]
    pub max_radius: Real,

    /// Number of poses drawn per ranking.
    #[serde(default = "defaults::num_poses")]
    pub num_poses: usize,

    /// Seed of the pose generator; random if unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SamplingSection {
    fn default() -> Self {
        Self {
            center: Point::origin(),
            min_radius: defaults::min_radius(),
            max_radius: defaults::max_radius(),
            num_poses: defaults::num_poses(),
            seed: None,
        }
    }
}

impl SamplingSection {
    /// Convert to a `SphericalCrownSampler`.
    pub fn to_crown_sampler(&self) -> Result<SphericalCrownSampler, SamplingError> {
        SphericalCrownSampler::new(self.center, self.min_radius, self.max_radius)
    }
}
