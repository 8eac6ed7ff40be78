use super::{AabbTree, Node, NodeKind};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::partitioning::ProxyError;

impl AabbTree {
    /// Inserts a new leaf for `proxy`, bounded by `aabb`.
    ///
    /// The leaf is routed from the root toward the child whose area grows the least when
    /// merged with `aabb` (the left child wins ties). Every branch crossed on the way is
    /// enlarged to include `aabb`. Once a leaf is reached, it is replaced by a new branch
    /// holding that leaf on its left and the new leaf on its right.
    ///
    /// Returns [`ProxyError::DuplicateInsert`] without modifying the tree if `proxy` already
    /// has a leaf.
    pub fn insert(&mut self, aabb: Aabb, proxy: u32) -> Result<(), ProxyError> {
        if self.leaves.contains_key(&proxy) {
            return Err(ProxyError::DuplicateInsert(proxy));
        }

        let new_leaf = self.alloc(Node::leaf(aabb, proxy));
        let _ = self.leaves.insert(proxy, new_leaf);

        let Some(mut curr) = self.root else {
            self.root = Some(new_leaf);
            return Ok(());
        };

        while let NodeKind::Branch { left, right } = self[curr].kind {
            let left_aabb = self[left].aabb;
            let right_aabb = self[right].aabb;
            self[curr].aabb = left_aabb.merged(&right_aabb).merged(&aabb);

            let left_cost = left_aabb.volume_increase(&aabb);
            let right_cost = right_aabb.volume_increase(&aabb);
            curr = if left_cost <= right_cost { left } else { right };
        }

        let sibling = curr;
        let parent = self[sibling].parent;
        let branch_aabb = self[sibling].aabb.merged(&aabb);
        let new_branch = self.alloc(Node {
            aabb: branch_aabb,
            parent,
            kind: NodeKind::Branch {
                left: sibling,
                right: new_leaf,
            },
        });
        self[sibling].parent = Some(new_branch);
        self[new_leaf].parent = Some(new_branch);

        if let Some(parent) = parent {
            self.replace_child(parent, sibling, new_branch);
        } else {
            self.root = Some(new_branch);
        }

        Ok(())
    }
}
