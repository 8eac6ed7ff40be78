pub use aabb_tree::{AabbTree, Node, NodeIndex, NodeKind};
pub use aabb_tree_iter::AabbTreeIter;

mod aabb_tree;
mod aabb_tree_insert;
mod aabb_tree_iter;
mod aabb_tree_queries;
mod aabb_tree_remove;
mod aabb_tree_validation;
