use crate::bounding_volume::BoundingVolume;
use crate::broad_phase::CircleBroadPhase;

impl CircleBroadPhase {
    /// Brings the tree in sync with the current geometry of the proxies.
    ///
    /// The exact AABB of every proxy is recomputed. Each proxy in the tree whose new AABB
    /// escapes the AABB stored on its leaf is removed and reinserted. Proxies detached with
    /// [`Self::remove`] are skipped.
    ///
    /// With a zero change-detection margin, every leaf holds the exact AABB of its proxy once
    /// this returns. A proxy that shrank is then reinserted too, so its leaf stays tight.
    pub fn update(&mut self) {
        let margin = self.change_detection_margin;
        let mut reinserted = 0;

        for proxy in self.proxies.iter_mut() {
            proxy.refresh_aabb();
            let id = proxy.id();
            let aabb = *proxy.aabb();

            let Some(leaf_aabb) = self.tree.leaf_aabb(id) else {
                continue;
            };

            let moved = if margin > 0.0 {
                !leaf_aabb.contains(&aabb)
            } else {
                *leaf_aabb != aabb
            };

            if moved {
                log::trace!("Reinserting proxy {} with bounds {:?}.", id, aabb);
                // Both calls succeed: `id` was found in the tree above.
                let _ = self.tree.remove(id);
                let _ = self.tree.insert(aabb.loosened(margin), id);
                reinserted += 1;
            }
        }

        log::debug!(
            "Broad-phase update: {} proxies scanned, {} reinserted.",
            self.proxies.len(),
            reinserted
        );

        self.reinserted_last_update = reinserted;
    }

    /// The number of proxies reinserted by the last call to [`Self::update`].
    #[inline]
    pub fn reinserted_last_update(&self) -> usize {
        self.reinserted_last_update
    }
}

#[cfg(test)]
mod test {
    use crate::broad_phase::CircleBroadPhase;
    use crate::math::{Point, Real};

    fn crowd() -> CircleBroadPhase {
        let mut broad_phase = CircleBroadPhase::new();
        for i in 0..10 {
            broad_phase
                .add_circle(i, Point::new(i as Real * 10.0, 0.0), 2.0)
                .unwrap();
        }
        broad_phase
    }

    #[test]
    fn moving_proxy_is_reinserted_every_frame() {
        let mut broad_phase = crowd();
        broad_phase.add_circle(100, Point::new(0.0, 50.0), 3.0).unwrap();

        for frame in 1..=100 {
            let center = Point::new(frame as Real, 50.0);
            broad_phase.set_center(100, center).unwrap();
            broad_phase.update();
            assert_eq!(broad_phase.reinserted_last_update(), 1);
            broad_phase.tree().assert_well_formed();
        }

        let proxy = broad_phase.proxy(100).unwrap();
        assert_eq!(proxy.center, Point::new(100.0, 50.0));
        assert_eq!(
            broad_phase.tree().leaf_aabb(100),
            Some(&proxy.compute_aabb())
        );
        assert_eq!(broad_phase.is_leaf_up_to_date(100), Some(true));
    }

    #[test]
    fn static_proxies_are_left_alone() {
        let mut broad_phase = crowd();
        broad_phase.update();
        assert_eq!(broad_phase.reinserted_last_update(), 0);
    }

    #[test]
    fn shrinking_and_scaling_refresh_the_leaf() {
        let mut broad_phase = crowd();

        broad_phase.set_radius(3, 1.0).unwrap();
        broad_phase.update();
        assert_eq!(broad_phase.reinserted_last_update(), 1);

        broad_phase.set_scale(4, 3.0).unwrap();
        broad_phase.update();
        assert_eq!(broad_phase.reinserted_last_update(), 1);

        for proxy in broad_phase.proxies().iter() {
            assert_eq!(
                broad_phase.tree().leaf_aabb(proxy.id()),
                Some(&proxy.compute_aabb())
            );
        }
        broad_phase.tree().assert_well_formed();
    }

    #[test]
    fn margin_absorbs_small_motions() {
        let mut broad_phase = crowd().with_change_detection_margin(1.0);

        // The first move escapes the exact leaf and gets a loosened one.
        broad_phase.set_center(0, Point::new(0.5, 0.0)).unwrap();
        broad_phase.update();
        assert_eq!(broad_phase.reinserted_last_update(), 1);

        // Moves within the margin are absorbed.
        broad_phase.set_center(0, Point::new(1.2, 0.0)).unwrap();
        broad_phase.update();
        assert_eq!(broad_phase.reinserted_last_update(), 0);
        assert_eq!(broad_phase.is_leaf_up_to_date(0), Some(true));

        broad_phase.set_center(0, Point::new(3.0, 0.0)).unwrap();
        broad_phase.update();
        assert_eq!(broad_phase.reinserted_last_update(), 1);
        broad_phase.tree().assert_well_formed();
    }

    #[test]
    #[should_panic]
    fn negative_margin_is_rejected() {
        let _ = CircleBroadPhase::new().with_change_detection_margin(-1.0);
    }

    #[test]
    fn detached_proxies_are_skipped() {
        let mut broad_phase = crowd();
        broad_phase.remove(2).unwrap();
        broad_phase.set_center(2, Point::new(500.0, 500.0)).unwrap();
        broad_phase.update();

        assert_eq!(broad_phase.reinserted_last_update(), 0);
        assert!(!broad_phase.tree().contains(2));
        assert_eq!(broad_phase.tree().leaf_count(), 9);

        broad_phase.insert(2).unwrap();
        assert_eq!(
            broad_phase.tree().leaf_aabb(2),
            Some(&broad_phase.proxy(2).unwrap().compute_aabb())
        );
    }
}
