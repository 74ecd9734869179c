//! Hash-sets of voxels, iterated in insertion order when the
//! `enhanced-determinism` feature is enabled.

use crate::map::VoxelKey;

/// Deterministic hashset using [`indexmap::IndexSet`]
#[cfg(feature = "enhanced-determinism")]
pub type FxHashSet32<K> =
    indexmap::IndexSet<K, core::hash::BuildHasherDefault<super::fx_hasher::FxHasher32>>;
#[cfg(feature = "enhanced-determinism")]
pub use self::FxHashSet32 as HashSet;
/// Hashset using [`hashbrown::HashSet`]
#[cfg(not(feature = "enhanced-determinism"))]
pub type HashSet<K> = hashbrown::hash_set::HashSet<K>;

/// A set of voxel keys.
pub type VoxelKeySet = HashSet<VoxelKey>;

/// Removes `key` from `set`, preserving the iteration order of the other keys.
#[cfg(feature = "enhanced-determinism")]
#[inline]
pub fn remove(set: &mut VoxelKeySet, key: &VoxelKey) -> bool {
    set.shift_remove(key)
}

/// Removes `key` from `set`.
#[cfg(not(feature = "enhanced-determinism"))]
#[inline]
pub fn remove(set: &mut VoxelKeySet, key: &VoxelKey) -> bool {
    set.remove(key)
}
