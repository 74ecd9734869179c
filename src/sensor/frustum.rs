use super::SensorModel;
use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use na::RealField;

/// The volume seen by a [`SensorModel`] placed at a given pose.
///
/// A point is inside the frustum if, expressed in the sensor frame, its depth
/// `z` lies in `[min_range, max_range]`, and its horizontal and vertical angles
/// `atan2(x, z)` and `atan2(y, z)` do not exceed half the corresponding field of view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frustum {
    /// The pose of the sensor, mapping the sensor frame to the map frame.
    pub pose: Isometry<Real>,
    /// The sensor model.
    pub sensor: SensorModel,
}

impl Frustum {
    /// The frustum of `sensor` placed at `pose`.
    pub fn new(pose: Isometry<Real>, sensor: SensorModel) -> Self {
        Self { pose, sensor }
    }

    /// The viewpoint, i.e., the apex of this frustum.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        self.pose.translation.vector.into()
    }

    /// The unit viewing direction, in the map frame.
    #[inline]
    pub fn forward(&self) -> Vector<Real> {
        self.pose * Vector::z()
    }

    /// Does this frustum contain the given map-frame point?
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        self.contains_local_point(&self.pose.inverse_transform_point(point))
    }

    /// Does this frustum contain the given point, expressed in the sensor frame?
    pub fn contains_local_point(&self, local: &Point<Real>) -> bool {
        let sensor = &self.sensor;

        local.z >= sensor.min_range
            && local.z <= sensor.max_range
            && local.x.atan2(local.z).abs() <= sensor.half_horizontal_fov()
            && local.y.atan2(local.z).abs() <= sensor.half_vertical_fov()
    }

    /// An AABB, in the sensor frame, containing this frustum.
    ///
    /// Returns `None` if one of the fields of view is so close to `π` that the
    /// frustum is not bounded laterally.
    pub fn local_aabb(&self) -> Option<Aabb> {
        let sensor = &self.sensor;
        let (h, v) = (sensor.half_horizontal_fov(), sensor.half_vertical_fov());

        if h.max(v) >= Real::frac_pi_2() - 1.0e-4 {
            return None;
        }

        let half_width = sensor.max_range * h.tan();
        let half_height = sensor.max_range * v.tan();

        Some(Aabb::new(
            Point::new(-half_width, -half_height, sensor.min_range),
            Point::new(half_width, half_height, sensor.max_range),
        ))
    }

    /// An AABB, in the map frame, containing this frustum.
    ///
    /// See [`Frustum::local_aabb`] for the case where `None` is returned.
    pub fn aabb(&self) -> Option<Aabb> {
        self.local_aabb().map(|aabb| aabb.transform_by(&self.pose))
    }

    /// The eight corners of the wireframe of this frustum, in the map frame.
    ///
    /// The first four corners lie on the sphere of radius `min_range` centered at
    /// the viewpoint, the last four on the sphere of radius `max_range`. Each group
    /// is ordered `(-x, -y)`, `(+x, -y)`, `(+x, +y)`, `(-x, +y)` in the sensor frame.
    pub fn corners(&self) -> [Point<Real>; 8] {
        let sensor = &self.sensor;
        let (h, v) = (sensor.half_horizontal_fov(), sensor.half_vertical_fov());
        let dirs = [
            SensorModel::direction(-h, -v),
            SensorModel::direction(h, -v),
            SensorModel::direction(h, v),
            SensorModel::direction(-h, v),
        ];

        core::array::from_fn(|i| {
            let range = if i < 4 {
                sensor.min_range
            } else {
                sensor.max_range
            };
            self.pose * Point::from(dirs[i % 4] * range)
        })
    }

    /// The twelve edges of the wireframe of this frustum, in the map frame.
    ///
    /// The four edges joining the near and far rectangles come first, followed by
    /// the edges of the near rectangle, then those of the far rectangle.
    pub fn edges(&self) -> [[Point<Real>; 2]; 12] {
        let pts = self.corners();
        let mut result = [[Point::origin(); 2]; 12];

        for i in 0..4 {
            let j = (i + 1) % 4;
            result[i] = [pts[i], pts[i + 4]];
            result[4 + i] = [pts[i], pts[j]];
            result[8 + i] = [pts[i + 4], pts[j + 4]];
        }

        result
    }
}
