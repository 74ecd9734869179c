//! Default value functions for serde deserialization.

use crate::math::{Point, Real};

pub fn min_range() -> Real {
    0.8
}

pub fn max_range() -> Real {
    3.5
}

pub fn horizontal_fov_deg() -> Real {
    58.0
}

pub fn vertical_fov_deg() -> Real {
    45.0
}

pub fn bounds_mins() -> Point<Real> {
    Point::new(-1.0, -1.0, -1.0)
}

pub fn bounds_maxs() -> Point<Real> {
    Point::new(1.0, 1.0, 1.0)
}

pub fn pixel_width() -> u32 {
    640
}

pub fn pixel_height() -> u32 {
    480
}

pub fn pixel_step() -> u32 {
    8
}

pub fn min_radius() -> Real {
    0.5
}

pub fn max_radius() -> Real {
    1.5
}

pub fn num_poses() -> usize {
    50
}
