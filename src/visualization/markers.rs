use super::ColorRGBA;
use crate::evaluation::{Score, VisibilitySets};
use crate::map::OccupancyMap;
use crate::math::{Isometry, Point, Real, Vector};
use crate::sensor::{Frustum, SensorModel};

/// Width of the lines drawn for rays.
const RAY_LINE_WIDTH: Real = 0.001;
/// Width of the lines drawn for frustum edges.
const FRUSTUM_LINE_WIDTH: Real = 0.01;
/// Height of the score text.
const SCORE_TEXT_HEIGHT: Real = 0.05;
/// Offset, along every axis, between the viewpoint and the score text.
const SCORE_TEXT_OFFSET: Real = -0.1;

/// What a viewer should do with a marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkerAction {
    /// Draw the marker, replacing any previous marker with the same identifier.
    Add,
    /// Remove any previous marker with the same identifier.
    Delete,
}

/// Cubes of identical size.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeList {
    /// The tree depth shared by all the cubes.
    pub depth: u32,
    /// The edge length of all the cubes.
    pub size: Real,
    /// The cube centers.
    pub centers: Vec<Point<Real>>,
    /// The color of all the cubes.
    pub color: ColorRGBA,
    /// [`MarkerAction::Delete`] if there is no cube to draw.
    pub action: MarkerAction,
}

/// Line segments of identical width and color.
#[derive(Clone, Debug, PartialEq)]
pub struct LineList {
    /// The endpoints of each segment.
    pub segments: Vec<[Point<Real>; 2]>,
    /// The width of all the lines.
    pub width: Real,
    /// The color of all the lines.
    pub color: ColorRGBA,
}

/// A text facing the viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    /// The anchor of the text.
    pub position: Point<Real>,
    /// The text.
    pub text: String,
    /// The height of an uppercase letter.
    pub height: Real,
    /// The color of the text.
    pub color: ColorRGBA,
}

/// The frontier leaves classified by `visibility`, as one cube list per tree depth.
///
/// The returned vector is indexed by depth, from `0` to `frontier.tree_depth()`
/// included. Lists without cubes are flagged with [`MarkerAction::Delete`].
pub fn discovered_cubes<F: OccupancyMap>(
    frontier: &F,
    visibility: &VisibilitySets,
) -> Vec<CubeList> {
    let mut result: Vec<_> = (0..=frontier.tree_depth())
        .map(|depth| CubeList {
            depth,
            size: frontier.node_size(depth),
            centers: vec![],
            color: ColorRGBA::BLUE,
            action: MarkerAction::Delete,
        })
        .collect();

    for leaf in frontier.leaves() {
        if !visibility.contains(&leaf.key) {
            continue;
        }

        if let Some(list) = result.get_mut(leaf.depth as usize) {
            list.centers.push(leaf.center);
            list.action = MarkerAction::Add;
        }
    }

    result
}

/// The centers of the frontier voxels only seen behind another frontier voxel.
pub fn discovered_centers<F: OccupancyMap>(
    frontier: &F,
    visibility: &VisibilitySets,
) -> Vec<Point<Real>> {
    visibility
        .subsequent_hit()
        .iter()
        .map(|key| frontier.key_to_coord(key))
        .collect()
}

/// The segments of the rays that revealed frontier voxels.
pub fn ray_lines(visibility: &VisibilitySets) -> LineList {
    LineList {
        segments: visibility.ray_segments().to_vec(),
        width: RAY_LINE_WIDTH,
        color: ColorRGBA::GRAY,
    }
}

/// The twelve edges of the frustum of `sensor` placed at `pose`.
///
/// See [`Frustum::edges`] for the order of the edges.
pub fn frustum_lines(pose: &Isometry<Real>, sensor: &SensorModel, color: ColorRGBA) -> LineList {
    LineList {
        segments: Frustum::new(*pose, *sensor).edges().to_vec(),
        width: FRUSTUM_LINE_WIDTH,
        color,
    }
}

/// The text displaying `score`, placed slightly below the viewpoint of `pose`.
pub fn score_label(pose: &Isometry<Real>, score: &Score) -> TextLabel {
    let viewpoint = Point::from(pose.translation.vector);

    TextLabel {
        position: viewpoint + Vector::repeat(SCORE_TEXT_OFFSET),
        text: format!("Score: {:.6}", score.value),
        height: SCORE_TEXT_HEIGHT,
        color: ColorRGBA::BLACK,
    }
}
