//! Hash-maps keyed by voxels, iterated in insertion order when the
//! `enhanced-determinism` feature is enabled.

use crate::map::VoxelKey;

/// Deterministic hashmap using [`indexmap::IndexMap`]
#[cfg(feature = "enhanced-determinism")]
pub type FxHashMap32<K, V> =
    indexmap::IndexMap<K, V, core::hash::BuildHasherDefault<super::fx_hasher::FxHasher32>>;
#[cfg(feature = "enhanced-determinism")]
pub use {self::FxHashMap32 as HashMap, indexmap::map::Entry};

#[cfg(not(feature = "enhanced-determinism"))]
pub use hashbrown::hash_map::Entry;
/// Hashmap using [`hashbrown::HashMap`]
#[cfg(not(feature = "enhanced-determinism"))]
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V>;

/// A map from voxel keys to `V`.
pub type VoxelKeyMap<V> = HashMap<VoxelKey, V>;

/// Removes `key` from `map`, returning its value.
///
/// The last entry takes the place of the removed one, so the iteration order
/// of the other entries may change.
#[cfg(feature = "enhanced-determinism")]
#[inline]
pub fn remove<V>(map: &mut VoxelKeyMap<V>, key: &VoxelKey) -> Option<V> {
    map.swap_remove(key)
}

/// Removes `key` from `map`, returning its value.
#[cfg(not(feature = "enhanced-determinism"))]
#[inline]
pub fn remove<V>(map: &mut VoxelKeyMap<V>, key: &VoxelKey) -> Option<V> {
    map.remove(key)
}
