use crate::map::MapKind;
use crate::math::{Real, Vector};
use crate::sensor::SensorModelError;

/// Errors preventing a pose from being evaluated.
///
/// They are all detected before any ray is cast, so no partial result is
/// ever produced.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum EvaluationError {
    /// One of the maps has not been provided yet.
    #[error("the {0} map is not available yet.")]
    MissingMap(MapKind),
    /// The exploration bounds are not larger than twice the map resolution along every axis.
    #[error("the exploration bounds with extents {extents:?} are too small for the resolution {resolution}.")]
    DegenerateBounds {
        /// The extents of the exploration bounds.
        extents: Vector<Real>,
        /// The resolution of the known map.
        resolution: Real,
    },
    /// The sensor model does not describe a valid frustum.
    #[error("malformed sensor model: {0}")]
    MalformedSensorModel(#[from] SensorModelError),
}
