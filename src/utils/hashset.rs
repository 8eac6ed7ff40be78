//! The hash-set used for pair deduplication and tree validation.

/// Hashset using [`hashbrown::HashSet`] with its default hasher.
pub use hashbrown::HashSet;
