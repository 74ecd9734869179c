/*!
vantage
=======

**vantage** scores candidate sensor viewpoints for next-best-view
exploration. Given a *known* occupancy map, a *frontier* map whose occupied
cells mark space that is free-but-unobserved, and a proposed sensor pose, it
estimates how much unobserved volume the pose would reveal.

An evaluation runs in four stages:

1. [`evaluation::select`] keeps the frontier voxels inside the sensor frustum;
2. [`evaluation::cast`] raycasts from the viewpoint, furthest candidate first,
   and splits the frontier voxels it reaches into *first-hit* and
   *subsequent-hit* sets;
3. [`evaluation::score`] turns both sets into a normalized information score;
4. [`visualization`] projects the result into renderable geometry.

[`evaluation::PoseEvaluator`] wires the stages together over a pair of
reference-counted map snapshots.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
#[cfg(feature = "serde-serialize")]
pub mod config;
pub mod evaluation;
pub mod map;
pub mod query;
pub mod sampling;
pub mod sensor;
pub mod utils;
pub mod visualization;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, Translation3, UnitQuaternion, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The transformation matrix type.
    ///
    /// Sensor poses are expressed with this type: the translation is the
    /// viewpoint and the local `+Z` axis is the viewing direction.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
