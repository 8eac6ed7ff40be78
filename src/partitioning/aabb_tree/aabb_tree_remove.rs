use super::AabbTree;
use crate::partitioning::ProxyError;

impl AabbTree {
    /// Removes the leaf representing `proxy`.
    ///
    /// The sibling of the removed leaf takes the place of their common parent, which is
    /// recycled together with the leaf. The AABBs of all the ancestors are then recomputed
    /// from their children.
    ///
    /// Removing anything from an empty tree is a no-op. Otherwise, returns
    /// [`ProxyError::InvalidProxyId`] without modifying the tree if `proxy` has no leaf.
    pub fn remove(&mut self, proxy: u32) -> Result<(), ProxyError> {
        if self.is_empty() {
            log::trace!("Ignoring the removal of proxy {} from an empty tree.", proxy);
            return Ok(());
        }

        let leaf = self.leaf(proxy).ok_or(ProxyError::InvalidProxyId(proxy))?;

        let Some(parent) = self[leaf].parent else {
            // The leaf is the root: the tree becomes empty.
            self.clear();
            return Ok(());
        };

        let _ = self.leaves.remove(&proxy);
        let Some(sibling) = self.sibling(parent, leaf) else {
            unreachable!("the parent of a node is always a branch")
        };
        let grandparent = self[parent].parent;

        self[sibling].parent = grandparent;
        if let Some(grandparent) = grandparent {
            self.replace_child(grandparent, parent, sibling);
        } else {
            self.root = Some(sibling);
        }

        // Free in the reverse order of allocation so a reinsertion gets the same slots back.
        self.free(parent);
        self.free(leaf);

        if let Some(grandparent) = grandparent {
            self.refit_from(grandparent);
        }

        Ok(())
    }
}
