//! Hashing helpers and other small utilities shared by the evaluation stages.

pub use self::fx_hasher::FxHasher32;

mod fx_hasher;
pub mod hashmap;
pub mod hashset;
