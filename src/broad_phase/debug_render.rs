//! Debug visualization of a broad phase.
//!
//! Implement [`DebugRenderBackend`] for your graphics backend, then call
//! [`CircleBroadPhase::debug_render`] each frame.

use crate::bounding_volume::Aabb;
use crate::broad_phase::{CircleBroadPhase, Proxy};

/// A sink for the geometry emitted by [`CircleBroadPhase::debug_render`].
pub trait DebugRenderBackend {
    /// Draws the AABB of a tree node.
    ///
    /// `depth` is `0` for the root. `is_leaf` tells whether the node wraps a proxy.
    fn draw_node(&mut self, aabb: &Aabb, depth: usize, is_leaf: bool);

    /// Draws a circle, with its scale applied.
    fn draw_circle(&mut self, proxy: &Proxy);
}

impl CircleBroadPhase {
    /// Emits every node of the tree, then every proxy, to the given backend.
    ///
    /// Nodes are emitted in depth-first order, parents before children. Proxies are emitted
    /// in insertion order, including the ones not currently in the tree.
    pub fn debug_render(&self, backend: &mut impl DebugRenderBackend) {
        for (depth, _, node) in self.tree.iter() {
            backend.draw_node(node.aabb(), depth, node.is_leaf());
        }

        for proxy in self.proxies.iter() {
            backend.draw_circle(proxy);
        }
    }
}

#[cfg(test)]
mod test {
    use super::DebugRenderBackend;
    use crate::bounding_volume::Aabb;
    use crate::broad_phase::{CircleBroadPhase, Proxy};
    use crate::math::{Point, Real};
    use std::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        nodes: Vec<(usize, bool)>,
        circles: Vec<(u32, Real)>,
    }

    impl DebugRenderBackend for Recorder {
        fn draw_node(&mut self, _aabb: &Aabb, depth: usize, is_leaf: bool) {
            self.nodes.push((depth, is_leaf));
        }

        fn draw_circle(&mut self, proxy: &Proxy) {
            self.circles.push((proxy.id(), proxy.scaled_radius()));
        }
    }

    #[test]
    fn render_emits_nodes_and_circles() {
        let mut broad_phase = CircleBroadPhase::new();
        broad_phase
            .add_circle(0, Point::new(0.0, 0.0), 1.0)
            .unwrap();
        broad_phase
            .add_proxy(Proxy::new(1, Point::new(5.0, 0.0), 1.0).with_scale(2.0))
            .unwrap();

        let mut recorder = Recorder::default();
        broad_phase.debug_render(&mut recorder);

        assert_eq!(recorder.nodes, [(0, false), (1, true), (1, true)]);
        assert_eq!(recorder.circles, [(0, 1.0), (1, 2.0)]);
    }
}
