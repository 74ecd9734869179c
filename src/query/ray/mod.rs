//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::Ray;
pub use self::ray_voxels::VoxelTraversal;

#[doc(hidden)]
pub mod ray;
mod ray_voxels;
