use super::{AabbTree, NodeIndex, NodeKind};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::utils::hashset::HashSet;

impl AabbTree {
    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if it is topologically correct (every branch has two children
    /// pointing back to it, no node is reachable twice, every leaf is registered for its
    /// proxy, pooled slots are unreachable) and geometrically correct (the AABB of every
    /// branch is exactly the union of the AABBs of its children).
    ///
    /// This is mostly a utility for debugging.
    pub fn assert_well_formed(&self) {
        let Some(root) = self.root else {
            assert!(self.leaves.is_empty());
            assert!(self.nodes.is_empty());
            assert!(self.free_list.is_empty());
            return;
        };

        assert_eq!(self[root].parent, None, "The root must not have a parent.");

        let mut loop_detection = HashSet::new();
        let leaf_count = self.assert_well_formed_recurse(root, &mut loop_detection);

        assert_eq!(leaf_count, self.leaves.len());
        assert_eq!(
            loop_detection.len() + self.free_list.len(),
            self.nodes.len(),
            "Every slot must be either reachable or pooled."
        );
        assert_eq!(self.branch_count(), leaf_count - 1);

        for free in &self.free_list {
            assert!(
                !loop_detection.contains(free),
                "Pooled node {} is still reachable.",
                free.0
            );
        }
    }

    fn assert_well_formed_recurse(
        &self,
        id: NodeIndex,
        loop_detection: &mut HashSet<NodeIndex>,
    ) -> usize {
        if !loop_detection.insert(id) {
            panic!("Detected loop. Node {} visited twice.", id.0);
        }

        let node = &self[id];

        match node.kind {
            NodeKind::Leaf { proxy } => {
                assert_eq!(self.leaves.get(&proxy), Some(&id));
                1
            }
            NodeKind::Branch { left, right } => {
                assert_ne!(left, right);
                assert_eq!(self[left].parent, Some(id));
                assert_eq!(self[right].parent, Some(id));

                let union: Aabb = self[left].aabb.merged(&self[right].aabb);
                assert_eq!(
                    node.aabb, union,
                    "The AABB of branch {} isn't the union of its children.",
                    id.0
                );

                self.assert_well_formed_recurse(left, loop_detection)
                    + self.assert_well_formed_recurse(right, loop_detection)
            }
        }
    }
}
