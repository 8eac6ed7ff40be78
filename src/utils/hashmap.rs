//! The hash-map used for every proxy lookup.

/// Hashmap using [`hashbrown::HashMap`] with its default hasher.
pub use hashbrown::hash_map::HashMap;

/// An insertion-ordered hash-map, used where iteration order must be deterministic.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, hashbrown::DefaultHashBuilder>;
