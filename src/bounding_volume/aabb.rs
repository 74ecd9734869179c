//! Axis Aligned Bounding Box.

use crate::math::{Isometry, Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its edges are
/// always parallel to the coordinate axes of the map frame.
///
/// Within this crate AABBs are used for:
///
/// - **Exploration bounds**: the volume the scorer normalizes against
///   (see [`ExplorationBounds`](crate::evaluation::ExplorationBounds));
/// - **Frustum pre-filtering**: frontier leaves outside the box enclosing a
///   sensor frustum are rejected before the exact frustum test;
/// - **Map extents**: the region covered by a [`VoxelMap`](crate::map::VoxelMap).
///
/// # Invariant
///
/// `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`, except for the
/// value returned by [`Aabb::new_invalid`].
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use vantage3d::bounding_volume::Aabb;
/// use nalgebra::{Point3, Vector3};
///
/// // A 2x2x2 exploration volume centered at the origin.
/// let aabb = Aabb::from_half_extents(Point3::origin(), Vector3::repeat(1.0));
///
/// assert!(aabb.contains_local_point(&Point3::new(0.5, -0.5, 0.9)));
/// assert_eq!(aabb.extents(), Vector3::new(2.0, 2.0, 2.0));
/// # }
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates (bottom-left-back corner).
    pub mins: Point<Real>,
    /// The point with maximum coordinates (top-right-front corner).
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// This is the neutral element of [`Aabb::take_point`]:
    /// growing it by any point yields the degenerate box around that point.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates the smallest AABB enclosing all the given points.
    ///
    /// Returns [`Aabb::new_invalid`] if `pts` is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(pt);
        }
        result
    }

    /// Is this AABB well-formed, i.e., are its `mins` lower or equal to its `maxs`?
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// The center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Half the dimensions of this AABB along each axis.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The dimensions of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Enlarges this AABB by `amount` on every side.
    #[inline]
    #[must_use]
    pub fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// Computes the AABB bounding `self` transformed by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let center = m * self.center();
        let ws_half_extents = m.rotation.to_rotation_matrix().matrix().abs() * self.half_extents();

        Aabb::new(center - ws_half_extents, center + ws_half_extents)
    }

    /// Does this AABB contain a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// The eight corners of this AABB.
    ///
    /// Corner `i` takes `maxs` on the axes whose bit is set in `i`
    /// (bit 0 for `x`, bit 1 for `y`, bit 2 for `z`).
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        core::array::from_fn(|i| {
            Point::new(
                if i & 1 == 0 { self.mins.x } else { self.maxs.x },
                if i & 2 == 0 { self.mins.y } else { self.maxs.y },
                if i & 4 == 0 { self.mins.z } else { self.maxs.z },
            )
        })
    }
}
