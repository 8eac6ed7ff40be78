use crate::bounding_volume::BoundingVolume;
use crate::broad_phase::{Proxy, ProxyStore};
use crate::math::{Point, Real};
use crate::partitioning::{AabbTree, ProxyError};
use crate::query::{contact_ball_ball, Penetration};
use crate::utils::hashset::HashSet;
use crate::utils::SortedPair;
use alloc::vec::Vec;

/// A broad phase for circles, based on a dynamic [`AabbTree`].
///
/// The broad phase owns the proxies. A proxy is created with [`Self::add_circle`] and
/// immediately inserted into the tree. It can then be moved by the caller through
/// [`Self::set_center`] (or [`Self::proxy_mut`]), after which [`Self::update`] brings the tree
/// back in sync before the next queries.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use bumper2d::broad_phase::CircleBroadPhase;
/// use bumper2d::math::Point;
///
/// let mut broad_phase = CircleBroadPhase::new();
/// broad_phase.add_circle(0, Point::new(0.0, 0.0), 1.0).unwrap();
/// broad_phase.add_circle(1, Point::new(10.0, 0.0), 1.0).unwrap();
/// assert!(broad_phase.get_potentials(0).unwrap().is_empty());
///
/// broad_phase.set_center(1, Point::new(1.5, 0.0)).unwrap();
/// broad_phase.update();
/// assert_eq!(broad_phase.get_potentials(0).unwrap(), vec![1]);
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct CircleBroadPhase {
    pub(super) proxies: ProxyStore,
    pub(super) tree: AabbTree,
    pub(super) change_detection_margin: Real,
    pub(super) reinserted_last_update: usize,
}

impl CircleBroadPhase {
    /// Creates an empty broad phase, with a zero change-detection margin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the change-detection margin of this broad phase.
    ///
    /// Leaves reinserted by [`Self::update`] are enlarged by this margin, so small motions do not
    /// trigger a reinsertion on every frame. With the default margin of `0`, leaves always hold
    /// the exact AABB of their proxy after an update.
    ///
    /// # Panics
    ///
    /// Panics if `margin` is negative.
    #[must_use]
    pub fn with_change_detection_margin(mut self, margin: Real) -> Self {
        assert!(
            margin >= 0.0,
            "The change-detection margin must not be negative."
        );
        self.change_detection_margin = margin;
        self
    }

    /// The change-detection margin of this broad phase.
    #[inline]
    pub fn change_detection_margin(&self) -> Real {
        self.change_detection_margin
    }

    /// The proxies owned by this broad phase.
    #[inline]
    pub fn proxies(&self) -> &ProxyStore {
        &self.proxies
    }

    /// The tree of proxy bounds.
    #[inline]
    pub fn tree(&self) -> &AabbTree {
        &self.tree
    }

    /// The proxy with the given identifier.
    #[inline]
    pub fn proxy(&self, id: u32) -> Option<&Proxy> {
        self.proxies.get(id)
    }

    /// A mutable reference to the proxy with the given identifier.
    ///
    /// Changes to its geometry are taken into account by the next call to [`Self::update`].
    #[inline]
    pub fn proxy_mut(&mut self, id: u32) -> Option<&mut Proxy> {
        self.proxies.get_mut(id)
    }

    /// Creates a circle with a scale of `1` and a tag of `0`, and inserts it into the tree.
    ///
    /// To give the circle another scale or tag, build it with [`Proxy::new`],
    /// [`Proxy::with_scale`] and [`Proxy::with_tag`], then pass it to [`Self::add_proxy`].
    ///
    /// Fails with [`ProxyError::DuplicateInsert`] if `id` is already used.
    pub fn add_circle(
        &mut self,
        id: u32,
        center: Point<Real>,
        radius: Real,
    ) -> Result<(), ProxyError> {
        self.add_proxy(Proxy::new(id, center, radius))
    }

    /// Adds the given proxy to this broad phase and inserts it into the tree.
    ///
    /// Fails with [`ProxyError::DuplicateInsert`] if its identifier is already used.
    pub fn add_proxy(&mut self, mut proxy: Proxy) -> Result<(), ProxyError> {
        let id = proxy.id();
        if self.proxies.contains(id) {
            return Err(ProxyError::DuplicateInsert(id));
        }

        proxy.refresh_aabb();
        self.tree.insert(*proxy.aabb(), id)?;
        self.proxies.insert(proxy)
    }

    /// Removes a circle from the tree (if it is in there) and from this broad phase.
    pub fn remove_circle(&mut self, id: u32) -> Result<Proxy, ProxyError> {
        if self.tree.contains(id) {
            self.tree.remove(id)?;
        }
        self.proxies.remove(id)
    }

    /// Inserts a stored proxy into the tree, using its current exact AABB.
    ///
    /// Fails with [`ProxyError::InvalidProxyId`] if the proxy doesn't exist, and
    /// [`ProxyError::DuplicateInsert`] if it is already in the tree.
    pub fn insert(&mut self, id: u32) -> Result<(), ProxyError> {
        let proxy = self.proxies.try_get_mut(id)?;
        if self.tree.contains(id) {
            return Err(ProxyError::DuplicateInsert(id));
        }

        proxy.refresh_aabb();
        self.tree.insert(*proxy.aabb(), id)
    }

    /// Removes a proxy from the tree, without removing it from this broad phase.
    ///
    /// A detached proxy is ignored by [`Self::update`] and by queries until it is inserted
    /// again. Removing anything while the tree is empty is a no-op.
    pub fn remove(&mut self, id: u32) -> Result<(), ProxyError> {
        if !self.tree.is_empty() && !self.proxies.contains(id) {
            return Err(ProxyError::InvalidProxyId(id));
        }
        self.tree.remove(id)
    }

    /// Moves the center of a circle.
    pub fn set_center(&mut self, id: u32, center: Point<Real>) -> Result<(), ProxyError> {
        self.proxies.try_get_mut(id)?.center = center;
        Ok(())
    }

    /// Changes the unscaled radius of a circle.
    pub fn set_radius(&mut self, id: u32, radius: Real) -> Result<(), ProxyError> {
        self.proxies.try_get_mut(id)?.radius = radius;
        Ok(())
    }

    /// Changes the scale of a circle.
    pub fn set_scale(&mut self, id: u32, scale: Real) -> Result<(), ProxyError> {
        self.proxies.try_get_mut(id)?.scale = scale;
        Ok(())
    }

    /// Changes the tag of a circle.
    pub fn set_tag(&mut self, id: u32, tag: u32) -> Result<(), ProxyError> {
        self.proxies.try_get_mut(id)?.tag = tag;
        Ok(())
    }

    /// The identifiers of the proxies whose leaf overlaps the leaf of `id`.
    ///
    /// Returns an empty list if the tree is empty or if `id` is not in the tree but still
    /// owned by this broad phase. Fails with [`ProxyError::InvalidProxyId`] if `id` is
    /// unknown.
    pub fn get_potentials(&self, id: u32) -> Result<Vec<u32>, ProxyError> {
        let _ = self.proxies.try_get(id)?;
        if !self.tree.contains(id) {
            return Ok(Vec::new());
        }
        self.tree.get_potentials(id)
    }

    /// Exact test between two circles, using their current center and scaled radius.
    ///
    /// Returns the penetration of the second circle into the first one if they overlap or
    /// touch, and `None` otherwise.
    pub fn are_circles_colliding(&self, a: u32, b: u32) -> Result<Option<Penetration>, ProxyError> {
        let a = self.proxies.try_get(a)?;
        let b = self.proxies.try_get(b)?;
        Ok(contact_ball_ball(&a.center, &a.ball(), &b.center, &b.ball()))
    }

    /// All the distinct pairs of proxies whose leaves overlap.
    ///
    /// Each pair is reported once, in the order in which it is first discovered while
    /// iterating through the proxies in insertion order.
    pub fn potential_pairs(&self) -> Vec<SortedPair<u32>> {
        let mut seen = HashSet::new();
        let mut pairs = Vec::new();

        for id in self.proxies.ids() {
            // Proxies not in the tree have no potentials.
            let _ = self.tree.for_each_potential(id, |other| {
                let pair = SortedPair::new(id, other);
                if seen.insert(pair) {
                    pairs.push(pair);
                }
            });
        }

        pairs
    }

    /// The potential pairs confirmed by the exact circle test, with their penetration.
    pub fn collisions(&self) -> Vec<(SortedPair<u32>, Penetration)> {
        self.potential_pairs()
            .into_iter()
            .filter_map(|pair| {
                let (a, b) = pair.as_tuple();
                let penetration = self.are_circles_colliding(a, b).ok().flatten()?;
                Some((pair, penetration))
            })
            .collect()
    }

    /// Does the leaf of `id` still contain the exact AABB of its proxy?
    ///
    /// Returns `None` if the proxy is unknown or not in the tree.
    pub fn is_leaf_up_to_date(&self, id: u32) -> Option<bool> {
        let proxy = self.proxies.get(id)?;
        let leaf_aabb = self.tree.leaf_aabb(id)?;
        Some(leaf_aabb.contains(&proxy.compute_aabb()))
    }
}

#[cfg(test)]
mod test {
    use crate::broad_phase::{CircleBroadPhase, Proxy};
    use crate::math::Point;
    use crate::partitioning::ProxyError;
    use crate::utils::SortedPair;
    use std::vec;

    fn three_circles() -> CircleBroadPhase {
        let mut broad_phase = CircleBroadPhase::new();
        broad_phase.add_circle(0, Point::new(0.0, 0.0), 5.0).unwrap();
        broad_phase.add_circle(1, Point::new(6.0, 0.0), 5.0).unwrap();
        broad_phase.add_circle(2, Point::new(20.0, 20.0), 5.0).unwrap();
        broad_phase
    }

    #[test]
    fn potentials_and_exact_test() {
        let broad_phase = three_circles();
        assert_eq!(broad_phase.get_potentials(0), Ok(vec![1]));
        assert_eq!(broad_phase.get_potentials(2), Ok(vec![]));

        let penetration = broad_phase.are_circles_colliding(0, 1).unwrap().unwrap();
        assert_eq!(penetration.depth, 4.0);
        assert_eq!(broad_phase.are_circles_colliding(0, 2), Ok(None));
        assert_eq!(
            broad_phase.are_circles_colliding(0, 9),
            Err(ProxyError::InvalidProxyId(9))
        );
    }

    #[test]
    fn misuse_leaves_everything_untouched() {
        let mut broad_phase = three_circles();
        assert_eq!(
            broad_phase.add_circle(1, Point::new(100.0, 0.0), 1.0),
            Err(ProxyError::DuplicateInsert(1))
        );
        assert_eq!(broad_phase.insert(1), Err(ProxyError::DuplicateInsert(1)));
        assert_eq!(broad_phase.insert(7), Err(ProxyError::InvalidProxyId(7)));
        assert_eq!(broad_phase.remove(7), Err(ProxyError::InvalidProxyId(7)));
        assert_eq!(broad_phase.get_potentials(7), Err(ProxyError::InvalidProxyId(7)));
        assert_eq!(broad_phase.set_center(7, Point::origin()), Err(ProxyError::InvalidProxyId(7)));

        assert_eq!(broad_phase.proxies().len(), 3);
        assert_eq!(broad_phase.proxy(1).unwrap().center, Point::new(6.0, 0.0));
        broad_phase.tree().assert_well_formed();
        assert_eq!(broad_phase.tree().leaf_count(), 3);
    }

    #[test]
    fn remove_circle_forgets_the_proxy() {
        let mut broad_phase = three_circles();
        let removed = broad_phase.remove_circle(1).unwrap();
        assert_eq!(removed.id(), 1);
        assert_eq!(broad_phase.get_potentials(0), Ok(vec![]));
        assert_eq!(broad_phase.remove_circle(1), Err(ProxyError::InvalidProxyId(1)));

        // Detached proxies can be removed as well.
        broad_phase.remove(2).unwrap();
        assert!(broad_phase.remove_circle(2).is_ok());
        assert_eq!(broad_phase.proxies().len(), 1);
        broad_phase.tree().assert_well_formed();
    }

    #[test]
    fn detached_proxies_have_no_potentials() {
        let mut broad_phase = three_circles();
        broad_phase.remove(1).unwrap();
        assert_eq!(broad_phase.get_potentials(1), Ok(vec![]));
        assert_eq!(broad_phase.get_potentials(0), Ok(vec![]));
        assert_eq!(broad_phase.potential_pairs(), vec![]);

        broad_phase.insert(1).unwrap();
        assert_eq!(broad_phase.potential_pairs(), vec![SortedPair::new(0, 1)]);
    }

    #[test]
    fn empty_broad_phase() {
        let mut broad_phase = CircleBroadPhase::new();
        broad_phase.add_proxy(Proxy::new(0, Point::origin(), 1.0)).unwrap();
        broad_phase.remove(0).unwrap();
        assert!(broad_phase.tree().is_empty());
        // Removing from an empty tree is a no-op.
        assert_eq!(broad_phase.remove(0), Ok(()));
        assert_eq!(broad_phase.remove(42), Ok(()));
        assert_eq!(broad_phase.get_potentials(0), Ok(vec![]));
    }

    #[test]
    fn pairs_and_collisions_are_deduplicated() {
        let mut broad_phase = three_circles();
        // Its AABB overlaps the one of 2, but not its circle.
        broad_phase.add_circle(3, Point::new(28.0, 28.0), 5.0).unwrap();
        broad_phase.add_circle(4, Point::new(8.0, 3.0), 1.0).unwrap();

        let mut pairs = broad_phase.potential_pairs();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                SortedPair::new(0, 1),
                SortedPair::new(1, 4),
                SortedPair::new(2, 3),
            ]
        );

        let mut collisions: vec::Vec<_> = broad_phase
            .collisions()
            .into_iter()
            .map(|(pair, _)| pair)
            .collect();
        collisions.sort();
        assert_eq!(collisions, vec![SortedPair::new(0, 1), SortedPair::new(1, 4)]);
    }

    #[test]
    fn touching_circles_are_paired_once() {
        let mut broad_phase = CircleBroadPhase::new();
        broad_phase.add_circle(0, Point::new(5.0, 5.0), 5.0).unwrap();
        broad_phase.add_circle(1, Point::new(15.0, 5.0), 5.0).unwrap();

        // The two leaves share the edge `x = 10`.
        assert_eq!(broad_phase.get_potentials(0), Ok(vec![]));
        assert_eq!(broad_phase.get_potentials(1), Ok(vec![0]));
        assert_eq!(broad_phase.potential_pairs(), vec![SortedPair::new(0, 1)]);

        let collisions = broad_phase.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].0, SortedPair::new(0, 1));
        assert_eq!(collisions[0].1.depth, 0.0);
    }
}
