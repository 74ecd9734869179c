use crate::map::VoxelKey;
use crate::math::{Point, Real};
use crate::utils::hashset::{self, VoxelKeySet};

/// The frontier voxels a pose would reveal, split by how they are seen.
///
/// * `first_hit` voxels are the first frontier voxel met by some ray;
/// * `subsequent_hit` voxels are only met by rays that already met another
///   frontier voxel before them.
///
/// Both sets are always disjoint: inserting a key in `first_hit` removes it from
/// `subsequent_hit`, and a key already in `first_hit` is never added to
/// `subsequent_hit`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilitySets {
    first_hit: VoxelKeySet,
    subsequent_hit: VoxelKeySet,
    ray_segments: Vec<[Point<Real>; 2]>,
}

impl VisibilitySets {
    /// Empty visibility sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// The voxels met first along some ray.
    pub fn first_hit(&self) -> &VoxelKeySet {
        &self.first_hit
    }

    /// The voxels only met behind another frontier voxel.
    pub fn subsequent_hit(&self) -> &VoxelKeySet {
        &self.subsequent_hit
    }

    /// The segments of the rays that met at least one frontier voxel.
    pub fn ray_segments(&self) -> &[[Point<Real>; 2]] {
        &self.ray_segments
    }

    /// Does either set contain `key`?
    pub fn contains(&self, key: &VoxelKey) -> bool {
        self.first_hit.contains(key) || self.subsequent_hit.contains(key)
    }

    /// The total number of voxels in both sets.
    pub fn len(&self) -> usize {
        self.first_hit.len() + self.subsequent_hit.len()
    }

    /// Are both sets empty?
    pub fn is_empty(&self) -> bool {
        self.first_hit.is_empty() && self.subsequent_hit.is_empty()
    }

    /// Adds `key` to the first-hit set, removing it from the subsequent-hit set.
    ///
    /// Returns `true` if `key` was not in the first-hit set already.
    pub fn insert_first_hit(&mut self, key: VoxelKey) -> bool {
        let _ = hashset::remove(&mut self.subsequent_hit, &key);
        self.first_hit.insert(key)
    }

    /// Adds `key` to the subsequent-hit set, unless it is a first-hit voxel.
    ///
    /// Returns `true` if `key` was added.
    pub fn insert_subsequent_hit(&mut self, key: VoxelKey) -> bool {
        !self.first_hit.contains(&key) && self.subsequent_hit.insert(key)
    }

    /// Records the segment of a ray for display.
    pub fn record_segment(&mut self, start: Point<Real>, end: Point<Real>) {
        self.ray_segments.push([start, end]);
    }

    /// Appends the hits of one ray without reconciling both sets.
    ///
    /// The sets may overlap afterward, until [`VisibilitySets::remove_overlaps`] is called.
    pub(crate) fn append_ray(&mut self, hits: RayHits) {
        if let Some(first) = hits.first {
            let _ = self.first_hit.insert(first);
        }
        self.subsequent_hit.extend(hits.subsequent);
        if let Some(segment) = hits.segment {
            self.ray_segments.push(segment);
        }
    }

    /// Removes from the subsequent-hit set every key that is also a first-hit key.
    ///
    /// Returns the number of keys removed.
    pub fn remove_overlaps(&mut self) -> usize {
        let before = self.subsequent_hit.len();
        let first_hit = &self.first_hit;
        self.subsequent_hit.retain(|key| !first_hit.contains(key));
        before - self.subsequent_hit.len()
    }

    /// Empties both sets and the recorded segments.
    pub fn clear(&mut self) {
        self.first_hit.clear();
        self.subsequent_hit.clear();
        self.ray_segments.clear();
    }
}

/// The frontier voxels met by a single ray.
#[derive(Clone, Debug, Default)]
pub(crate) struct RayHits {
    pub first: Option<VoxelKey>,
    pub subsequent: Vec<VoxelKey>,
    pub segment: Option<[Point<Real>; 2]>,
}
