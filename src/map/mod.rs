//! Read-only views over the occupancy maps an evaluation runs against.
//!
//! An evaluation always reads two maps sharing the same [`OccupancyMap`] interface:
//!
//! * the **known** map, whose occupied cells are obstacles that stop rays;
//! * the **frontier** map, whose occupied cells mark free-but-unobserved space.
//!
//! [`VoxelMap`] is a small hash-backed implementation of that interface and
//! [`MapSnapshots`] holds the reference-counted pair handed to each evaluation.

pub use self::occupancy_map::{LeafVoxel, MapKind, Occupancy, OccupancyMap, DEFAULT_TREE_DEPTH};
pub use self::snapshot::{MapPair, MapSnapshots};
pub use self::voxel_key::{key_at, key_center, VoxelKey};
pub use self::voxel_map::VoxelMap;

mod occupancy_map;
mod snapshot;
mod voxel_key;
mod voxel_map;
