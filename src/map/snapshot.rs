use super::{MapKind, OccupancyMap};
use crate::math::{Point, Real};
use parking_lot::RwLock;
use std::sync::Arc;

/// The maps read by one evaluation.
///
/// Cloning a `MapPair` only clones the reference-counted handles.
#[derive(Debug)]
pub struct MapPair<M> {
    /// The map of observed obstacles, if any was provided yet.
    pub known: Option<Arc<M>>,
    /// The frontier map, if any was provided yet.
    pub frontier: Option<Arc<M>>,
    /// Frontier centroids supplied independently from the frontier map.
    ///
    /// When set, candidates are selected among these points instead of the
    /// occupied leaves of the frontier map.
    pub centroids: Option<Arc<Vec<Point<Real>>>>,
}

impl<M> Clone for MapPair<M> {
    fn clone(&self) -> Self {
        Self {
            known: self.known.clone(),
            frontier: self.frontier.clone(),
            centroids: self.centroids.clone(),
        }
    }
}

impl<M> Default for MapPair<M> {
    fn default() -> Self {
        Self {
            known: None,
            frontier: None,
            centroids: None,
        }
    }
}

impl<M> MapPair<M> {
    /// The first map missing from this pair, if any.
    pub fn missing(&self) -> Option<MapKind> {
        if self.known.is_none() {
            Some(MapKind::Known)
        } else if self.frontier.is_none() {
            Some(MapKind::Frontier)
        } else {
            None
        }
    }
}

/// Shared handle on the latest known map, frontier map, and frontier centroids.
///
/// Each refresh swaps in a new immutable snapshot. Evaluations clone the
/// handles of both maps under a single read lock, so they always read a
/// consistent pair, and a replaced map is only dropped once the last
/// evaluation that was reading it completes.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use vantage3d::map::{MapKind, MapSnapshots, VoxelMap};
///
/// let snapshots = MapSnapshots::<VoxelMap>::new();
/// assert_eq!(snapshots.snapshot().missing(), Some(MapKind::Known));
///
/// let _ = snapshots.replace_known(VoxelMap::new(0.1));
/// let _ = snapshots.replace_frontier(VoxelMap::new(0.1));
/// assert_eq!(snapshots.snapshot().missing(), None);
/// # }
/// ```
pub struct MapSnapshots<M> {
    maps: RwLock<MapPair<M>>,
}

impl<M> Default for MapSnapshots<M> {
    fn default() -> Self {
        Self {
            maps: RwLock::new(MapPair::default()),
        }
    }
}

impl<M: OccupancyMap> MapSnapshots<M> {
    /// Creates a handle with no map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle already holding both maps.
    pub fn with_maps(known: M, frontier: M) -> Self {
        Self {
            maps: RwLock::new(MapPair {
                known: Some(Arc::new(known)),
                frontier: Some(Arc::new(frontier)),
                centroids: None,
            }),
        }
    }

    /// Replaces the known map and returns the previous one.
    pub fn replace_known(&self, map: impl Into<Arc<M>>) -> Option<Arc<M>> {
        let map = map.into();
        log::debug!(
            "Replacing the known map (resolution: {}).",
            map.resolution()
        );
        self.maps.write().known.replace(map)
    }

    /// Replaces the frontier map and returns the previous one.
    pub fn replace_frontier(&self, map: impl Into<Arc<M>>) -> Option<Arc<M>> {
        let map = map.into();
        log::debug!(
            "Replacing the frontier map (resolution: {}).",
            map.resolution()
        );
        self.maps.write().frontier.replace(map)
    }

    /// Replaces both maps at once and returns the previous pair.
    ///
    /// No evaluation can observe the new known map together with the old frontier map.
    pub fn replace_both(
        &self,
        known: impl Into<Arc<M>>,
        frontier: impl Into<Arc<M>>,
    ) -> (Option<Arc<M>>, Option<Arc<M>>) {
        let (known, frontier) = (known.into(), frontier.into());
        let mut maps = self.maps.write();
        (maps.known.replace(known), maps.frontier.replace(frontier))
    }

    /// Replaces the frontier centroid cloud and returns the previous one.
    ///
    /// Passing `None` makes evaluations select candidates among the occupied
    /// leaves of the frontier map again.
    pub fn replace_centroids(
        &self,
        centroids: Option<Vec<Point<Real>>>,
    ) -> Option<Arc<Vec<Point<Real>>>> {
        log::debug!(
            "Replacing the frontier centroids ({} points).",
            centroids.as_ref().map(|pts| pts.len()).unwrap_or(0)
        );
        let mut maps = self.maps.write();
        core::mem::replace(&mut maps.centroids, centroids.map(Arc::new))
    }

    /// A consistent copy of the current handles.
    pub fn snapshot(&self) -> MapPair<M> {
        self.maps.read().clone()
    }
}
