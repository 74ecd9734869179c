use super::CandidateSet;
use crate::map::OccupancyMap;
use crate::math::{Isometry, Point, Real};
use crate::sensor::{Frustum, SensorModel};

/// Selects the occupied leaves of `frontier` lying inside the frustum of `sensor` placed at `pose`.
///
/// Each selected leaf yields one candidate, keyed by the leaf key, with its
/// center as centroid.
pub fn select<F: OccupancyMap>(
    frontier: &F,
    pose: &Isometry<Real>,
    sensor: &SensorModel,
) -> CandidateSet {
    let frustum = Frustum::new(*pose, *sensor);
    let viewpoint = frustum.origin();
    let aabb = frustum.aabb();
    let mut result = CandidateSet::new();

    for leaf in frontier.occupied_leaves() {
        if aabb.is_some_and(|aabb| !aabb.contains_local_point(&leaf.center)) {
            continue;
        }

        if frustum.contains_point(&leaf.center) {
            let _ = result.insert(leaf.key, leaf.center, &viewpoint);
        }
    }

    log::trace!("Selected {} frontier leaves inside the frustum.", result.len());
    result
}

/// Selects the frontier centroids lying inside the frustum of `sensor` placed at `pose`.
///
/// Centroids are keyed with `frontier`. Centroids falling into the same voxel
/// collapse into a single candidate carrying the last of them.
pub fn select_points<F: OccupancyMap>(
    frontier: &F,
    centroids: &[Point<Real>],
    pose: &Isometry<Real>,
    sensor: &SensorModel,
) -> CandidateSet {
    let frustum = Frustum::new(*pose, *sensor);
    let viewpoint = frustum.origin();
    let aabb = frustum.aabb();
    let mut result = CandidateSet::new();

    for centroid in centroids {
        if aabb.is_some_and(|aabb| !aabb.contains_local_point(centroid)) {
            continue;
        }

        if frustum.contains_point(centroid) {
            let _ = result.insert(frontier.coord_to_key(centroid), *centroid, &viewpoint);
        }
    }

    log::trace!(
        "Selected {} of {} frontier centroids inside the frustum.",
        result.len(),
        centroids.len()
    );
    result
}
