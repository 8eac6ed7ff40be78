use super::{AabbTree, Node, NodeIndex, NodeKind};
use crate::bounding_volume::Aabb;
use alloc::vec;
use alloc::vec::Vec;

/// Depth-first iterator over the nodes of an [`AabbTree`], see [`AabbTree::iter`].
pub struct AabbTreeIter<'a> {
    tree: &'a AabbTree,
    stack: Vec<(usize, NodeIndex)>,
}

impl<'a> Iterator for AabbTreeIter<'a> {
    type Item = (usize, NodeIndex, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, id) = self.stack.pop()?;
        let node = &self.tree[id];

        if let NodeKind::Branch { left, right } = node.kind {
            self.stack.push((depth + 1, right));
            self.stack.push((depth + 1, left));
        }

        Some((depth, id, node))
    }
}

impl AabbTree {
    /// Iterates through all the nodes reachable from the root, in depth-first order.
    ///
    /// Each node is yielded with its depth (`0` for the root) and its index. Pooled slots are
    /// never yielded. Left children are visited before right children.
    pub fn iter(&self) -> AabbTreeIter<'_> {
        AabbTreeIter {
            tree: self,
            stack: self.root.map(|root| vec![(0, root)]).unwrap_or_default(),
        }
    }

    /// Iterates through the leaves of this tree, yielding each proxy with its stored AABB.
    pub fn leaf_aabbs(&self) -> impl Iterator<Item = (u32, &Aabb)> + '_ {
        self.iter()
            .filter_map(|(_, _, node)| node.proxy().map(|proxy| (proxy, &node.aabb)))
    }
}
