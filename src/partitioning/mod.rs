//! Spatial partitioning tools.

pub use self::aabb_tree::{AabbTree, AabbTreeIter, Node, NodeIndex, NodeKind};
pub use self::proxy_error::ProxyError;

mod aabb_tree;
mod proxy_error;
