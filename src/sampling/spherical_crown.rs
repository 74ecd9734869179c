use super::look_at;
use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use na::RealField;
use rand::Rng;

/// Maximum number of random reference vectors tried to orient a sampled pose.
const MAX_ORIENTATION_ATTEMPTS: usize = 8;

/// Errors raised when building a pose sampler.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SamplingError {
    /// The radii of a spherical crown must satisfy `0 <= min_radius <= max_radius`,
    /// with a finite and strictly positive `max_radius`.
    #[error("invalid spherical crown radii: min {min_radius}, max {max_radius}.")]
    InvalidRadii {
        /// The inner radius.
        min_radius: Real,
        /// The outer radius.
        max_radius: Real,
    },
}

/// A source of candidate sensor poses.
pub trait PoseSampler {
    /// Draws one pose.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Isometry<Real>;

    /// Draws `n` poses.
    fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Isometry<Real>> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

/// Samples viewpoints between two spheres centered at an observation target,
/// each looking at that target.
///
/// Directions are uniformly distributed on the sphere and radii uniformly
/// distributed in `[min_radius, max_radius]`. Each pose is oriented with
/// [`look_at`] using a random reference vector.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SphericalCrownSampler {
    center: Point<Real>,
    min_radius: Real,
    max_radius: Real,
}

impl SphericalCrownSampler {
    /// A sampler around `center` with the given radii.
    pub fn new(
        center: Point<Real>,
        min_radius: Real,
        max_radius: Real,
    ) -> Result<Self, SamplingError> {
        let valid = min_radius >= 0.0
            && max_radius >= min_radius
            && max_radius > 0.0
            && max_radius.is_finite();

        if !valid {
            return Err(SamplingError::InvalidRadii {
                min_radius,
                max_radius,
            });
        }

        Ok(Self {
            center,
            min_radius,
            max_radius,
        })
    }

    /// The observation target.
    pub fn center(&self) -> Point<Real> {
        self.center
    }

    /// The inner radius.
    pub fn min_radius(&self) -> Real {
        self.min_radius
    }

    /// The outer radius.
    pub fn max_radius(&self) -> Real {
        self.max_radius
    }

    /// Moves the observation target.
    pub fn set_center(&mut self, center: Point<Real>) {
        self.center = center;
    }

    fn orientation<R: Rng + ?Sized>(&self, eye: &Point<Real>, rng: &mut R) -> Rotation<Real> {
        for _ in 0..MAX_ORIENTATION_ATTEMPTS {
            let reference = Vector::new(rng.gen(), rng.gen(), rng.gen());
            if let Some(rot) = look_at(eye, &self.center, &reference) {
                return rot;
            }
        }

        // Only reached if the eye is at the center, or with a pathological rng.
        [Vector::x(), Vector::y(), Vector::z()]
            .iter()
            .find_map(|reference| look_at(eye, &self.center, reference))
            .unwrap_or_else(Rotation::identity)
    }
}

impl PoseSampler for SphericalCrownSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Isometry<Real> {
        let cos_theta: Real = rng.gen_range(-1.0..=1.0);
        let phi: Real = rng.gen_range(0.0..Real::two_pi());
        let radius: Real = rng.gen_range(self.min_radius..=self.max_radius);

        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
        let dir = Vector::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta);
        let eye = self.center + dir * radius;

        Isometry::from_parts(Translation::from(eye.coords), self.orientation(&eye, rng))
    }
}
