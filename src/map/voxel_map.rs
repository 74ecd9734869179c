use super::{key_at, key_center, LeafVoxel, Occupancy, OccupancyMap, VoxelKey, DEFAULT_TREE_DEPTH};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::utils::hashmap::{self, VoxelKeyMap};

/// A sparse occupancy grid storing every known cell in a hash map.
///
/// All the cells of a `VoxelMap` are leaves of the finest depth. Cells that were never
/// set are [`Occupancy::Unknown`].
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use vantage3d::map::{Occupancy, OccupancyMap, VoxelMap};
/// use nalgebra::Point3;
///
/// let mut map = VoxelMap::new(0.1);
/// let key = map.set_occupied(&Point3::new(0.05, 0.05, 1.05));
///
/// assert_eq!(key, Point3::new(0, 0, 10));
/// assert!(map.has_occupied_voxel(&key));
/// assert_eq!(map.occupancy(&Point3::new(0, 0, 9)), Occupancy::Unknown);
/// # }
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelMap {
    resolution: Real,
    tree_depth: u32,
    cells: VoxelKeyMap<Occupancy>,
}

impl VoxelMap {
    /// Creates an empty map with cells of edge length `resolution`.
    ///
    /// # Panics
    ///
    /// Panics if `resolution` is not strictly positive.
    pub fn new(resolution: Real) -> Self {
        assert!(resolution > 0.0, "The map resolution must be positive.");
        Self {
            resolution,
            tree_depth: DEFAULT_TREE_DEPTH,
            cells: VoxelKeyMap::default(),
        }
    }

    /// Creates a map where the cells containing each of the given points are occupied.
    pub fn from_occupied_points<'a>(
        resolution: Real,
        points: impl IntoIterator<Item = &'a Point<Real>>,
    ) -> Self {
        let mut result = Self::new(resolution);
        for pt in points {
            let _ = result.set_occupied(pt);
        }
        result
    }

    /// Sets the depth reported for the leaves of this map.
    #[must_use]
    pub fn with_tree_depth(mut self, tree_depth: u32) -> Self {
        self.tree_depth = tree_depth;
        self
    }

    /// Sets the state of the cell identified by `key` and returns its previous state.
    ///
    /// Setting a cell to [`Occupancy::Unknown`] removes it from the map.
    pub fn set_occupancy(&mut self, key: VoxelKey, occupancy: Occupancy) -> Occupancy {
        let previous = match occupancy {
            Occupancy::Unknown => hashmap::remove(&mut self.cells, &key),
            _ => self.cells.insert(key, occupancy),
        };
        previous.unwrap_or(Occupancy::Unknown)
    }

    /// Marks the cell containing `point` as occupied and returns its key.
    pub fn set_occupied(&mut self, point: &Point<Real>) -> VoxelKey {
        let key = key_at(self.resolution, point);
        let _ = self.set_occupancy(key, Occupancy::Occupied);
        key
    }

    /// Marks the cell containing `point` as free and returns its key.
    pub fn set_free(&mut self, point: &Point<Real>) -> VoxelKey {
        let key = key_at(self.resolution, point);
        let _ = self.set_occupancy(key, Occupancy::Free);
        key
    }

    /// Marks every cell whose center lies inside `aabb` with the given state.
    pub fn fill_aabb(&mut self, aabb: &Aabb, occupancy: Occupancy) {
        let half_cell = Vector::repeat(self.resolution * 0.5);
        let mins = key_at(self.resolution, &(aabb.mins - half_cell));
        let maxs = key_at(self.resolution, &(aabb.maxs - half_cell));

        for i in mins.x..=maxs.x {
            for j in mins.y..=maxs.y {
                for k in mins.z..=maxs.z {
                    let key = Point::new(i, j, k);
                    if aabb.contains_local_point(&key_center(self.resolution, &key)) {
                        let _ = self.set_occupancy(key, occupancy);
                    }
                }
            }
        }
    }

    /// The number of cells that are not unknown.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Is every cell of this map unknown?
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The smallest AABB enclosing every cell that is not unknown.
    ///
    /// Returns [`Aabb::new_invalid`] if the map is empty.
    pub fn local_aabb(&self) -> Aabb {
        let half_cell = Vector::repeat(self.resolution * 0.5);
        Aabb::from_points(self.cells.keys().flat_map(|key| {
            let center = key_center(self.resolution, key);
            [center - half_cell, center + half_cell]
        }))
    }
}

impl OccupancyMap for VoxelMap {
    fn resolution(&self) -> Real {
        self.resolution
    }

    fn tree_depth(&self) -> u32 {
        self.tree_depth
    }

    fn occupancy(&self, key: &VoxelKey) -> Occupancy {
        self.cells.get(key).copied().unwrap_or(Occupancy::Unknown)
    }

    fn leaves(&self) -> impl Iterator<Item = LeafVoxel> + '_ {
        self.cells.iter().map(|(key, occupancy)| LeafVoxel {
            key: *key,
            depth: self.tree_depth,
            center: key_center(self.resolution, key),
            size: self.resolution,
            occupancy: *occupancy,
        })
    }
}
