use crate::math::{Real, Vector};
use na::RealField;

/// Errors raised by [`SensorModel::validate`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SensorModelError {
    /// The far clipping distance must be strictly positive.
    #[error("the maximum range {0} is not strictly positive.")]
    NonPositiveMaxRange(Real),
    /// The near clipping distance must not be negative.
    #[error("the minimum range {0} is negative.")]
    NegativeMinRange(Real),
    /// Both clipping distances must be finite.
    #[error("the range [{min_range}, {max_range}] is not finite.")]
    NonFiniteRange {
        /// The near clipping distance.
        min_range: Real,
        /// The far clipping distance.
        max_range: Real,
    },
    /// The near clipping distance must be smaller than the far clipping distance.
    #[error("the minimum range {min_range} is not smaller than the maximum range {max_range}.")]
    EmptyRange {
        /// The near clipping distance.
        min_range: Real,
        /// The far clipping distance.
        max_range: Real,
    },
    /// Both fields of view must be finite and within `(0, π]`.
    #[error("the fields of view ({horizontal}, {vertical}) are not both within (0, π].")]
    InvalidFov {
        /// The horizontal field of view, in radians.
        horizontal: Real,
        /// The vertical field of view, in radians.
        vertical: Real,
    },
}

/// The range and field of view of a depth sensor.
///
/// The sensor looks along the local `+Z` axis of its pose, with `+X` pointing
/// to the right of the image and `+Y` to its bottom.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use vantage3d::sensor::{SensorModel, SensorModelError};
///
/// let sensor = SensorModel::new(0.8, 3.5, 58.0f32.to_radians(), 45.0f32.to_radians());
/// assert!(sensor.validate().is_ok());
///
/// let inverted = SensorModel { min_range: 4.0, ..sensor };
/// assert!(matches!(inverted.validate(), Err(SensorModelError::EmptyRange { .. })));
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SensorModel {
    /// The near clipping distance.
    pub min_range: Real,
    /// The far clipping distance.
    pub max_range: Real,
    /// The horizontal field of view, in radians.
    pub horizontal_fov: Real,
    /// The vertical field of view, in radians.
    pub vertical_fov: Real,
}

impl SensorModel {
    /// Creates a new sensor model.
    ///
    /// No check is performed here. See [`SensorModel::validate`].
    pub fn new(min_range: Real, max_range: Real, horizontal_fov: Real, vertical_fov: Real) -> Self {
        Self {
            min_range,
            max_range,
            horizontal_fov,
            vertical_fov,
        }
    }

    /// Checks that the ranges and fields of view of this model describe a non-empty frustum.
    pub fn validate(&self) -> Result<(), SensorModelError> {
        // NOTE: the negated comparisons also reject NaNs.
        if !(self.max_range > 0.0) {
            return Err(SensorModelError::NonPositiveMaxRange(self.max_range));
        }

        if !(self.min_range >= 0.0) {
            return Err(SensorModelError::NegativeMinRange(self.min_range));
        }

        // Ray traversals are bounded by `max_range`.
        if !self.min_range.is_finite() || !self.max_range.is_finite() {
            return Err(SensorModelError::NonFiniteRange {
                min_range: self.min_range,
                max_range: self.max_range,
            });
        }

        if self.min_range >= self.max_range {
            return Err(SensorModelError::EmptyRange {
                min_range: self.min_range,
                max_range: self.max_range,
            });
        }

        let valid_fov = |fov: Real| fov > 0.0 && fov <= Real::pi();
        if !valid_fov(self.horizontal_fov) || !valid_fov(self.vertical_fov) {
            return Err(SensorModelError::InvalidFov {
                horizontal: self.horizontal_fov,
                vertical: self.vertical_fov,
            });
        }

        Ok(())
    }

    /// Half the horizontal field of view.
    #[inline]
    pub fn half_horizontal_fov(&self) -> Real {
        self.horizontal_fov * 0.5
    }

    /// Half the vertical field of view.
    #[inline]
    pub fn half_vertical_fov(&self) -> Real {
        self.vertical_fov * 0.5
    }

    /// The unit direction, in the sensor frame, making the given angles with the optical axis.
    ///
    /// `azimuth` rotates toward `+X` and `elevation` toward `+Y`.
    #[inline]
    pub fn direction(azimuth: Real, elevation: Real) -> Vector<Real> {
        let (sin_az, cos_az) = azimuth.sin_cos();
        let (sin_el, cos_el) = elevation.sin_cos();
        Vector::new(cos_el * sin_az, sin_el, cos_el * cos_az)
    }
}

/// The sub-sampled pixel grid used to cast one ray per sampled pixel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PixelGrid {
    /// The image width, in pixels.
    pub width: u32,
    /// The image height, in pixels.
    pub height: u32,
    /// Only one pixel every `step` rows and columns casts a ray.
    pub step: u32,
}

impl PixelGrid {
    /// Creates a new pixel grid.
    pub fn new(width: u32, height: u32, step: u32) -> Self {
        Self {
            width,
            height,
            step,
        }
    }

    /// The number of rays cast through this grid.
    pub fn num_rays(&self) -> usize {
        let step = self.step.max(1);
        (self.width.div_ceil(step) * self.height.div_ceil(step)) as usize
    }

    /// The unit directions, in the sensor frame, of the rays cast through this grid.
    ///
    /// Row `0` and column `0` point toward the `-Y`, `-X` corner of the field
    /// of view. Rays are listed row by row.
    pub fn directions<'a>(
        &'a self,
        sensor: &'a SensorModel,
    ) -> impl Iterator<Item = Vector<Real>> + 'a {
        let step = self.step.max(1) as usize;
        let delta_az = sensor.horizontal_fov / self.width.max(1) as Real;
        let delta_el = sensor.vertical_fov / self.height.max(1) as Real;

        (0..self.height).step_by(step).flat_map(move |row| {
            let elevation = -sensor.half_vertical_fov() + row as Real * delta_el;
            (0..self.width).step_by(step).map(move |col| {
                let azimuth = -sensor.half_horizontal_fov() + col as Real * delta_az;
                SensorModel::direction(azimuth, elevation)
            })
        })
    }
}
