use crate::math::{Point, Real, Vector};

/// Integer coordinates of a cell of a uniform voxel grid.
///
/// Cell `k` spans `[k * resolution, (k + 1) * resolution)` along each axis.
pub type VoxelKey = Point<i32>;

/// The key of the grid cell containing `point`.
#[inline]
pub fn key_at(resolution: Real, point: &Point<Real>) -> VoxelKey {
    (point.coords / resolution).map(|x| x.floor() as i32).into()
}

/// The center of the grid cell identified by `key`.
#[inline]
pub fn key_center(resolution: Real, key: &VoxelKey) -> Point<Real> {
    ((key.coords.cast::<Real>() + Vector::repeat(0.5)) * resolution).into()
}
