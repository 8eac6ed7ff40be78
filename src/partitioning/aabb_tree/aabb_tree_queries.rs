use super::{AabbTree, NodeIndex, NodeKind};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::partitioning::ProxyError;
use alloc::vec::Vec;

impl AabbTree {
    /// The proxies whose leaf AABB overlaps the leaf AABB of `proxy`, excluding `proxy` itself.
    ///
    /// An empty tree yields an empty result rather than an error. Otherwise, returns
    /// [`ProxyError::InvalidProxyId`] if `proxy` has no leaf.
    ///
    /// Leaves only touching the AABB of `proxy` along an edge may or may not be reported
    /// depending on their position in the tree. Such pairs must be confirmed by an exact test
    /// anyway.
    pub fn get_potentials(&self, proxy: u32) -> Result<Vec<u32>, ProxyError> {
        let mut result = Vec::new();
        self.for_each_potential(proxy, |other| result.push(other))?;
        Ok(result)
    }

    /// Calls `f` on each proxy that [`Self::get_potentials`] would return.
    pub fn for_each_potential(
        &self,
        proxy: u32,
        mut f: impl FnMut(u32),
    ) -> Result<(), ProxyError> {
        let Some(root) = self.root else {
            log::trace!("Querying the potentials of {} on an empty tree.", proxy);
            return Ok(());
        };

        let leaf = self.leaf(proxy).ok_or(ProxyError::InvalidProxyId(proxy))?;
        let query = self[leaf].aabb;

        if self[root].is_leaf() {
            return Ok(());
        }

        self.traverse_overlaps(root, &query, |other| {
            if other != proxy {
                f(other)
            }
        });

        Ok(())
    }

    /// Visits the leaves overlapping `query` without recursion nor auxiliary stack.
    ///
    /// The left children are entered with an inclusive overlap test, and the right children
    /// with a strict one. Going back up relies on the parent links: a node reached from the
    /// right child of its parent has no more subtree to visit.
    fn traverse_overlaps(&self, root: NodeIndex, query: &Aabb, mut f: impl FnMut(u32)) {
        let mut curr = root;
        let mut traverse_left = true;

        loop {
            if traverse_left {
                while let NodeKind::Branch { left, .. } = self[curr].kind {
                    if !self[left].aabb.intersects(query) {
                        break;
                    }
                    curr = left;
                }
            }

            match self[curr].kind {
                NodeKind::Branch { right, .. } if self[right].aabb.intersects_strictly(query) => {
                    curr = right;
                    traverse_left = true;
                    continue;
                }
                NodeKind::Leaf { proxy } => f(proxy),
                NodeKind::Branch { .. } => {}
            }

            // Climb until `curr` is a left child, then resume from the right child of its
            // parent.
            loop {
                let Some(parent) = self[curr].parent else {
                    return;
                };
                let came_from_right =
                    matches!(self[parent].kind, NodeKind::Branch { right, .. } if right == curr);
                curr = parent;
                if !came_from_right {
                    break;
                }
            }

            traverse_left = false;
        }
    }
}
