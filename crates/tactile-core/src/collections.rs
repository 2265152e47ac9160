//! Hash collections shared by the Tactile runtime crates.

/// Fx-hashed map for lookups keyed by pointer and timer ids.
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
