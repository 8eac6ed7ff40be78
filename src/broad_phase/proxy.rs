use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Ball;

/// A circular body tracked by the broad phase.
///
/// The effective radius of the circle is `radius * |scale|`. The AABB returned by
/// [`Proxy::aabb`] is the one computed when the proxy was created or last refreshed by
/// [`CircleBroadPhase::update`](crate::broad_phase::CircleBroadPhase::update), while
/// [`Proxy::compute_aabb`] always reflects the current geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Proxy {
    id: u32,
    /// The position of the center of the circle.
    pub center: Point<Real>,
    /// The unscaled radius of the circle.
    pub radius: Real,
    /// The uniform scale applied to the radius.
    pub scale: Real,
    /// Arbitrary user data, ignored by the broad phase.
    pub tag: u32,
    aabb: Aabb,
}

impl Proxy {
    /// Creates a new proxy with a scale of `1` and a tag of `0`.
    pub fn new(id: u32, center: Point<Real>, radius: Real) -> Self {
        let mut result = Self {
            id,
            center,
            radius,
            scale: 1.0,
            tag: 0,
            aabb: Aabb::new_invalid(),
        };
        result.refresh_aabb();
        result
    }

    /// Sets the scale of this proxy.
    #[must_use]
    pub fn with_scale(mut self, scale: Real) -> Self {
        self.scale = scale;
        self.refresh_aabb();
        self
    }

    /// Sets the tag of this proxy.
    #[must_use]
    pub fn with_tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }

    /// The identifier of this proxy.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The radius of the circle once scaled.
    #[inline]
    pub fn scaled_radius(&self) -> Real {
        self.ball().radius
    }

    /// The circle represented by this proxy, with its scale applied.
    #[inline]
    pub fn ball(&self) -> Ball {
        Ball::new(self.radius).scaled(self.scale)
    }

    /// The exact AABB of the circle in its current state.
    #[inline]
    pub fn compute_aabb(&self) -> Aabb {
        self.ball().aabb(&self.center)
    }

    /// The AABB computed during the last refresh of this proxy.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    pub(crate) fn refresh_aabb(&mut self) {
        self.aabb = self.compute_aabb();
    }
}
