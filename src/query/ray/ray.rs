//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// infinitely in a direction.
///
/// # Direction Vector
///
/// The direction can be any non-zero vector and does **not** need to be
/// normalized. Visibility queries cast rays from a sensor viewpoint toward a
/// voxel center using the raw difference `center - origin`; the distance
/// bounds of those queries (e.g. the sensor's maximum range) are always
/// expressed in world units, independently of the direction's norm.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use vantage3d::query::Ray;
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 2.0));
///
/// assert_eq!(ray.point_at(0.5), Point3::new(0.0, 0.0, 2.0));
/// assert_eq!(ray.point_at_distance(3.0), Some(Point3::new(0.0, 0.0, 4.0)));
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction vector of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Creates the ray starting at `from` and passing through `to`.
    ///
    /// The direction is `to - from`, so `self.point_at(1.0) == to`.
    pub fn through(from: Point<Real>, to: Point<Real>) -> Ray {
        Ray::new(from, to - from)
    }

    /// Computes the point `origin + dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }

    /// Computes the point located `distance` world units away from the origin
    /// along this ray.
    ///
    /// Returns `None` if the direction of this ray is zero.
    #[inline]
    pub fn point_at_distance(&self, distance: Real) -> Option<Point<Real>> {
        let dir = self.dir.try_normalize(Real::EPSILON)?;
        Some(self.origin + dir * distance)
    }
}
