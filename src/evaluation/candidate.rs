use crate::map::VoxelKey;
use crate::math::{Point, Real};
use crate::utils::hashmap::{Entry, VoxelKeyMap};
use core::cmp::Reverse;
use ordered_float::OrderedFloat;

/// A frontier voxel that may be revealed by the evaluated pose.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CandidateVoxel {
    /// The key of the frontier voxel.
    pub key: VoxelKey,
    /// The frontier centroid this candidate was created from.
    pub centroid: Point<Real>,
    /// The distance between the centroid and the viewpoint.
    pub distance: Real,
    /// Set once a ray already accounted for this voxel.
    pub visited: bool,
}

/// The candidates of one evaluation, deduplicated by voxel key.
///
/// Candidates are stored contiguously, in insertion order, and addressed
/// through a key-to-index map.
#[derive(Clone, Debug, Default)]
pub struct CandidateSet {
    candidates: Vec<CandidateVoxel>,
    index: VoxelKeyMap<usize>,
}

impl CandidateSet {
    /// An empty candidate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the candidate of the given voxel, seen from `viewpoint`.
    ///
    /// If the voxel already has a candidate, its centroid and distance are
    /// overwritten and `false` is returned.
    pub fn insert(&mut self, key: VoxelKey, centroid: Point<Real>, viewpoint: &Point<Real>) -> bool {
        let candidate = CandidateVoxel {
            key,
            centroid,
            distance: na::distance(&centroid, viewpoint),
            visited: false,
        };

        match self.index.entry(key) {
            Entry::Occupied(entry) => {
                self.candidates[*entry.get()] = candidate;
                false
            }
            Entry::Vacant(entry) => {
                let _ = entry.insert(self.candidates.len());
                self.candidates.push(candidate);
                true
            }
        }
    }

    /// The number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The candidates, in insertion order.
    pub fn as_slice(&self) -> &[CandidateVoxel] {
        &self.candidates
    }

    /// Iterates through the candidates, in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &CandidateVoxel> {
        self.candidates.iter()
    }

    /// The candidate of the given voxel, if any.
    pub fn get(&self, key: &VoxelKey) -> Option<&CandidateVoxel> {
        self.index.get(key).map(|id| &self.candidates[*id])
    }

    /// Does the given voxel have a candidate?
    pub fn contains(&self, key: &VoxelKey) -> bool {
        self.index.contains_key(key)
    }

    /// Marks the candidate of the given voxel as visited.
    ///
    /// Returns `true` if the voxel had a candidate that was not visited yet.
    pub fn mark_visited(&mut self, key: &VoxelKey) -> bool {
        match self.index.get(key) {
            Some(id) => !core::mem::replace(&mut self.candidates[*id].visited, true),
            None => false,
        }
    }

    /// Clears the visited flag of every candidate.
    pub fn reset_visited(&mut self) {
        for candidate in &mut self.candidates {
            candidate.visited = false;
        }
    }

    /// Indices of the candidates, sorted by decreasing distance to the viewpoint.
    ///
    /// Candidates at the same distance are sorted by key so the order is the
    /// same on every run.
    pub fn furthest_first(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.candidates.len()).collect();
        order.sort_unstable_by_key(|id| {
            let candidate = &self.candidates[*id];
            let key = candidate.key;
            (Reverse(OrderedFloat(candidate.distance)), (key.x, key.y, key.z))
        });
        order
    }
}
