use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::utils::hashmap::HashMap;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

/// The index of a node in the arena of an [`AabbTree`].
///
/// Indices are only meaningful for the tree that produced them, and only until the node they
/// designate is removed: freed slots are recycled by later insertions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[repr(transparent)]
pub struct NodeIndex(pub(super) u32);

impl NodeIndex {
    #[inline(always)]
    pub(super) fn new(index: usize) -> Self {
        debug_assert!(
            index <= u32::MAX as usize,
            "The node arena cannot hold more than u32::MAX nodes."
        );
        Self(index as u32)
    }

    /// The position of this node in the arena.
    #[inline(always)]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

/// Whether a node of an [`AabbTree`] is a leaf or a branch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A node wrapping exactly one proxy.
    Leaf {
        /// The identifier of the proxy this leaf represents.
        proxy: u32,
    },
    /// An internal node with exactly two children.
    Branch {
        /// The first child, favored when routing an insertion on a cost tie.
        left: NodeIndex,
        /// The second child.
        right: NodeIndex,
    },
}

/// A node of an [`AabbTree`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Node {
    pub(super) aabb: Aabb,
    pub(super) parent: Option<NodeIndex>,
    pub(super) kind: NodeKind,
}

impl Node {
    #[inline]
    pub(super) fn leaf(aabb: Aabb, proxy: u32) -> Self {
        Self {
            aabb,
            parent: None,
            kind: NodeKind::Leaf { proxy },
        }
    }

    /// The AABB stored on this node.
    ///
    /// For a leaf, this is the bound of its proxy given at insertion. For a branch, this is the
    /// union of the AABBs of its two children.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The parent of this node, or `None` if this is the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Is this node a leaf or a branch?
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// The proxy wrapped by this node if it is a leaf.
    #[inline]
    pub fn proxy(&self) -> Option<u32> {
        match self.kind {
            NodeKind::Leaf { proxy } => Some(proxy),
            NodeKind::Branch { .. } => None,
        }
    }

    /// The `[left, right]` children of this node if it is a branch.
    #[inline]
    pub fn children(&self) -> Option<[NodeIndex; 2]> {
        match self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Branch { left, right } => Some([left, right]),
        }
    }
}

/// A dynamic bounding-volume hierarchy of AABBs, where each leaf represents one proxy.
///
/// Every branch has exactly two children and its AABB is the exact union of the AABBs of
/// its children. Nodes are stored in a flat arena: slots freed by removals are pooled and
/// reused by subsequent insertions.
///
/// The tree only knows about proxy identifiers and their AABBs. The proxies themselves are
/// owned by the caller, typically a [`CircleBroadPhase`](crate::broad_phase::CircleBroadPhase).
#[derive(Clone, Debug, Default)]
pub struct AabbTree {
    pub(super) nodes: Vec<Node>,
    pub(super) free_list: Vec<NodeIndex>,
    pub(super) root: Option<NodeIndex>,
    pub(super) leaves: HashMap<u32, NodeIndex>,
}

impl Index<NodeIndex> for AabbTree {
    type Output = Node;

    #[inline(always)]
    fn index(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.get()]
    }
}

impl IndexMut<NodeIndex> for AabbTree {
    #[inline(always)]
    fn index_mut(&mut self, index: NodeIndex) -> &mut Node {
        &mut self.nodes[index.get()]
    }
}

impl AabbTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Is this tree empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node from this tree, including the pooled ones.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.leaves.clear();
        self.root = None;
    }

    /// The index of the root node, if the tree isn't empty.
    #[inline]
    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    /// The AABB bounding every leaf of this tree.
    #[inline]
    pub fn root_aabb(&self) -> Option<Aabb> {
        self.root.map(|root| self[root].aabb)
    }

    /// The node at index `id`, if it is currently part of the tree.
    pub fn node(&self, id: NodeIndex) -> Option<&Node> {
        if id.get() < self.nodes.len() && !self.free_list.contains(&id) {
            Some(&self[id])
        } else {
            None
        }
    }

    /// Is the given proxy represented by a leaf of this tree?
    #[inline]
    pub fn contains(&self, proxy: u32) -> bool {
        self.leaves.contains_key(&proxy)
    }

    /// The index of the leaf representing the given proxy.
    #[inline]
    pub fn leaf(&self, proxy: u32) -> Option<NodeIndex> {
        self.leaves.get(&proxy).copied()
    }

    /// The AABB stored on the leaf representing the given proxy.
    #[inline]
    pub fn leaf_aabb(&self, proxy: u32) -> Option<&Aabb> {
        self.leaves.get(&proxy).map(|leaf| &self[*leaf].aabb)
    }

    /// The number of leaves (i.e. proxies) of this tree.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// The number of branches of this tree.
    ///
    /// A tree with `n >= 1` leaves always has `n - 1` branches.
    #[inline]
    pub fn branch_count(&self) -> usize {
        self.nodes.len() - self.free_list.len() - self.leaves.len()
    }

    /// The number of freed arena slots waiting to be reused.
    #[inline]
    pub fn pooled_node_count(&self) -> usize {
        self.free_list.len()
    }

    /// The number of nodes on the longest path from the root to a leaf.
    ///
    /// This is `0` for an empty tree and `1` for a tree with a single leaf.
    pub fn depth(&self) -> usize {
        self.iter().map(|(depth, _, _)| depth + 1).max().unwrap_or(0)
    }

    /// Stores `node` into a pooled slot if there is one, or at the end of the arena.
    pub(super) fn alloc(&mut self, node: Node) -> NodeIndex {
        if let Some(id) = self.free_list.pop() {
            self[id] = node;
            id
        } else {
            self.nodes.push(node);
            NodeIndex::new(self.nodes.len() - 1)
        }
    }

    /// Returns the slot `id` to the pool.
    ///
    /// The last slot of the arena is never pooled: freed slots at the end of the arena are
    /// truncated instead.
    #[inline]
    pub(super) fn free(&mut self, id: NodeIndex) {
        self[id].parent = None;
        self.free_list.push(id);
        self.shrink_arena();
    }

    fn shrink_arena(&mut self) {
        while let Some(last) = self.nodes.len().checked_sub(1).map(NodeIndex::new) {
            let Some(pos) = self.free_list.iter().rposition(|id| *id == last) else {
                break;
            };
            let _ = self.free_list.remove(pos);
            let _ = self.nodes.pop();
        }
    }

    /// Makes `new_child` take the place of `old_child` among the children of `parent`.
    pub(super) fn replace_child(
        &mut self,
        parent: NodeIndex,
        old_child: NodeIndex,
        new_child: NodeIndex,
    ) {
        if let NodeKind::Branch { left, right } = &mut self[parent].kind {
            if *left == old_child {
                *left = new_child;
            } else {
                debug_assert_eq!(*right, old_child);
                *right = new_child;
            }
        }
    }

    /// The other child of `parent`.
    pub(super) fn sibling(&self, parent: NodeIndex, child: NodeIndex) -> Option<NodeIndex> {
        match self[parent].kind {
            NodeKind::Branch { left, right } => Some(if left == child { right } else { left }),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Recomputes the AABBs of `start` and all its ancestors as the union of their children.
    pub(super) fn refit_from(&mut self, start: NodeIndex) {
        let mut curr = Some(start);

        while let Some(id) = curr {
            if let NodeKind::Branch { left, right } = self[id].kind {
                self[id].aabb = self[left].aabb.merged(&self[right].aabb);
            }
            curr = self[id].parent;
        }
    }
}
