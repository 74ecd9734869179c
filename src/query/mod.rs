//! Non-persistent geometric queries.
//!
//! * [`Ray`] describes a half-line used for every visibility query.
//! * [`VoxelTraversal`] enumerates, in order, the grid cells crossed by a ray or a
//!   segment. It is the primitive behind
//!   [`OccupancyMap::traverse_ray`](crate::map::OccupancyMap::traverse_ray) and
//!   [`OccupancyMap::cast_nearest_surface`](crate::map::OccupancyMap::cast_nearest_surface).

pub use self::ray::{Ray, VoxelTraversal};

mod ray;
