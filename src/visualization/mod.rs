//! Renderable geometry describing an evaluation.
//!
//! Nothing here affects scores. These functions only project evaluation
//! results into primitives (cube lists, line lists, text) that a viewer can draw.

pub use self::colormap::{jet, jet_bucket, ColorRGBA, JET_BUCKETS};
pub use self::markers::{
    discovered_centers, discovered_cubes, frustum_lines, ray_lines, score_label, CubeList,
    LineList, MarkerAction, TextLabel,
};

mod colormap;
mod markers;
