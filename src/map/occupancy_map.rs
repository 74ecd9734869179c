use super::{key_at, key_center, VoxelKey};
use crate::math::{Point, Real};
use crate::query::{Ray, VoxelTraversal};

/// Depth of the finest leaves of a map that does not say otherwise.
///
/// This matches the usual 16-level octree layout: a leaf at depth `d` has an
/// edge length of `resolution * 2^(16 - d)`.
pub const DEFAULT_TREE_DEPTH: u32 = 16;

/// The state of a grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Occupancy {
    /// The cell is occupied.
    Occupied,
    /// The cell has been observed and is empty.
    Free,
    /// Nothing is known about the cell.
    Unknown,
}

/// Identifies one of the two maps an evaluation reads.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum MapKind {
    /// The map of observed obstacles.
    Known,
    /// The map whose occupied cells are unobserved free space.
    Frontier,
}

impl core::fmt::Display for MapKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MapKind::Known => f.write_str("known"),
            MapKind::Frontier => f.write_str("frontier"),
        }
    }
}

/// A leaf of an occupancy map, at its native depth.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LeafVoxel {
    /// The key of the leaf.
    pub key: VoxelKey,
    /// The tree depth of the leaf. Finest leaves have depth [`OccupancyMap::tree_depth`].
    pub depth: u32,
    /// The world-space center of the leaf.
    pub center: Point<Real>,
    /// The edge length of the leaf.
    pub size: Real,
    /// The state of the leaf.
    pub occupancy: Occupancy,
}

/// Read-only access to a sparse occupancy grid of fixed resolution.
///
/// Only [`OccupancyMap::resolution`], [`OccupancyMap::occupancy`] and
/// [`OccupancyMap::leaves`] must be provided. Every other query has a default
/// implementation based on a uniform grid walk, which implementors backed by a
/// hierarchical structure may override.
///
/// Implementations must not change while an evaluation reads them. This is
/// guaranteed by [`MapSnapshots`](super::MapSnapshots), which only ever hands
/// out shared references to immutable maps.
pub trait OccupancyMap: Send + Sync {
    /// The edge length of the finest cells.
    fn resolution(&self) -> Real;

    /// The depth of the finest leaves.
    fn tree_depth(&self) -> u32 {
        DEFAULT_TREE_DEPTH
    }

    /// The edge length of a node located at the given tree depth.
    fn node_size(&self, depth: u32) -> Real {
        let levels = self.tree_depth().saturating_sub(depth);
        self.resolution() * (2.0 as Real).powi(levels as i32)
    }

    /// The key of the finest cell containing `point`.
    fn coord_to_key(&self, point: &Point<Real>) -> VoxelKey {
        key_at(self.resolution(), point)
    }

    /// The center of the finest cell identified by `key`.
    fn key_to_coord(&self, key: &VoxelKey) -> Point<Real> {
        key_center(self.resolution(), key)
    }

    /// The state of the cell identified by `key`.
    fn occupancy(&self, key: &VoxelKey) -> Occupancy;

    /// Is the cell identified by `key` occupied?
    fn has_occupied_voxel(&self, key: &VoxelKey) -> bool {
        self.occupancy(key) == Occupancy::Occupied
    }

    /// Walks `ray` from its origin and returns the center of the first occupied cell.
    ///
    /// The cell containing the ray origin is tested too. Unknown cells are
    /// traversed as if they were free. Cells entered further than `max_range`
    /// world units from the origin are not tested, in which case `None` is returned.
    fn cast_nearest_surface(&self, ray: &Ray, max_range: Real) -> Option<Point<Real>> {
        VoxelTraversal::ray(self.resolution(), ray, max_range)
            .find(|key| self.has_occupied_voxel(key))
            .map(|key| self.key_to_coord(&key))
    }

    /// The keys of the cells crossed by the segment `[from, to)`, in traversal order.
    ///
    /// The cell containing `from` is included while the cell containing `to` is not.
    fn traverse_ray(&self, from: &Point<Real>, to: &Point<Real>) -> Vec<VoxelKey> {
        VoxelTraversal::segment(self.resolution(), from, to).collect()
    }

    /// Iterates through every leaf of this map, whatever its state.
    fn leaves(&self) -> impl Iterator<Item = LeafVoxel> + '_;

    /// Iterates through the occupied leaves of this map.
    fn occupied_leaves(&self) -> impl Iterator<Item = LeafVoxel> + '_ {
        self.leaves().filter(|leaf| leaf.occupancy == Occupancy::Occupied)
    }
}
