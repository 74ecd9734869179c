mod casting_properties;
#[cfg(feature = "serde-serialize")]
mod config_files;
mod evaluator_errors;
mod frustum_selection;
mod occlusion;
mod pixel_casting;
mod scenario;
mod snapshots;

use vantage3d::map::VoxelMap;
use vantage3d::na::Point3;
use vantage3d::sensor::SensorModel;

pub const RESOLUTION: f32 = 0.1;

/// A 60x60 degrees sensor seeing from 0.2 to 3.0.
pub fn sensor() -> SensorModel {
    SensorModel::new(0.2, 3.0, 60f32.to_radians(), 60f32.to_radians())
}

/// A map whose only occupied voxels contain `points`.
pub fn occupied(points: &[Point3<f32>]) -> VoxelMap {
    VoxelMap::from_occupied_points(RESOLUTION, points)
}
