use super::{EvaluationError, VisibilitySets};
use crate::bounding_volume::Aabb;
use crate::map::OccupancyMap;
use crate::math::{Point, Real, Vector};
use crate::visualization::{jet, ColorRGBA};

/// The weight of a subsequent-hit voxel, relative to a first-hit voxel.
pub const SUBSEQUENT_HIT_WEIGHT: Real = 0.5;

/// The volume being explored, used to normalize scores.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ExplorationBounds {
    /// The box enclosing the explored volume.
    pub aabb: Aabb,
}

impl ExplorationBounds {
    /// The exploration bounds spanning from `mins` to `maxs`.
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Self {
        Self {
            aabb: Aabb::new(mins, maxs),
        }
    }

    /// The exploration bounds with the given center and extents.
    pub fn centered(center: Point<Real>, extents: Vector<Real>) -> Self {
        Self {
            aabb: Aabb::from_half_extents(center, extents * 0.5),
        }
    }

    /// The dimensions of the explored volume along each axis.
    pub fn extents(&self) -> Vector<Real> {
        self.aabb.extents()
    }

    /// The normalization volume of scores.
    ///
    /// The box is split into an outer shell, one voxel thick, counted at full
    /// weight, and an inner core counted at [`SUBSEQUENT_HIT_WEIGHT`].
    pub fn weighted_volume(&self, resolution: Real) -> Result<Real, EvaluationError> {
        let extents = self.extents();
        let degenerate = EvaluationError::DegenerateBounds {
            extents,
            resolution,
        };

        if extents.iter().any(|e| !(*e > resolution * 2.0)) {
            return Err(degenerate);
        }

        let total = extents.product();
        let inner = extents.add_scalar(-resolution * 2.0).product();
        let outer = total - inner;
        let denominator = outer + inner * SUBSEQUENT_HIT_WEIGHT;

        if !(denominator > 0.0) || !denominator.is_finite() {
            return Err(degenerate);
        }

        Ok(denominator)
    }
}

impl From<Aabb> for ExplorationBounds {
    fn from(aabb: Aabb) -> Self {
        Self { aabb }
    }
}

/// The information score of a pose and its display color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Score {
    /// The discovered volume, normalized by [`ExplorationBounds::weighted_volume`].
    pub value: Real,
    /// The jet color of the score.
    pub color: ColorRGBA,
}

impl Score {
    /// Creates a score, computing its color.
    pub fn from_value(value: Real) -> Self {
        Self {
            value,
            color: jet(value),
        }
    }
}

/// The normalized volume revealed by `num_first_hits` fully visible voxels and
/// `num_subsequent_hits` partially visible voxels of edge length `resolution`.
pub fn information_score(
    resolution: Real,
    num_first_hits: usize,
    num_subsequent_hits: usize,
    bounds: &ExplorationBounds,
) -> Result<Real, EvaluationError> {
    let denominator = bounds.weighted_volume(resolution)?;
    let unit_volume = resolution * resolution * resolution;
    let discovered = (num_first_hits as Real
        + num_subsequent_hits as Real * SUBSEQUENT_HIT_WEIGHT)
        * unit_volume;

    Ok(discovered / denominator)
}

/// Scores the voxels revealed by a pose.
///
/// Voxels are assumed to have the resolution of the `known` map.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use vantage3d::evaluation::{score, ExplorationBounds, VisibilitySets};
/// use vantage3d::map::VoxelMap;
/// use nalgebra::{Point3, Vector3};
///
/// let known = VoxelMap::new(0.1);
/// let bounds = ExplorationBounds::centered(Point3::origin(), Vector3::repeat(2.0));
/// let mut visibility = VisibilitySets::new();
/// let _ = visibility.insert_first_hit(Point3::new(0, 0, 10));
///
/// let score = score(&known, &visibility, &bounds).unwrap();
/// assert!((score.value - 0.001 / 5.084).abs() < 1.0e-7);
/// # }
/// ```
pub fn score<K: OccupancyMap>(
    known: &K,
    visibility: &VisibilitySets,
    bounds: &ExplorationBounds,
) -> Result<Score, EvaluationError> {
    information_score(
        known.resolution(),
        visibility.first_hit().len(),
        visibility.subsequent_hit().len(),
        bounds,
    )
    .map(Score::from_value)
}
