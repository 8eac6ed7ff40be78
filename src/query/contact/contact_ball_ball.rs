use crate::bounding_volume::ball_aabb;
use crate::math::{Point, Real, Vector};
use crate::query::Penetration;
use crate::shape::Ball;
use na::{ComplexField, Unit};
use num::Zero;

/// Penetration between two circles.
///
/// The test runs in two stages: the AABBs of both balls are first compared axis by axis
/// (rejecting on the first separating axis), then the squared distance between the centers
/// is compared to the squared sum of the radii. Circles that exactly touch are colliding with
/// a zero `depth`.
///
/// If both centers coincide the normal is undefined; the `+X` axis is returned instead.
#[inline]
pub fn contact_ball_ball(
    center1: &Point<Real>,
    b1: &Ball,
    center2: &Point<Real>,
    b2: &Ball,
) -> Option<Penetration> {
    let r1 = b1.radius;
    let r2 = b2.radius;
    let aabb1 = ball_aabb(center1, r1);
    let aabb2 = ball_aabb(center2, r2);

    if aabb1.mins.x > aabb2.maxs.x
        || aabb1.mins.y > aabb2.maxs.y
        || aabb1.maxs.x < aabb2.mins.x
        || aabb1.maxs.y < aabb2.mins.y
    {
        return None;
    }

    let center2_1 = center2 - center1;
    let distance_squared = center2_1.norm_squared();
    let sum_radius = r1 + r2;

    if distance_squared > sum_radius * sum_radius {
        return None;
    }

    let distance = ComplexField::sqrt(distance_squared);
    let normal = if !distance_squared.is_zero() {
        Unit::new_unchecked(center2_1 / distance)
    } else {
        log::debug!("Concentric circles: falling back to the +X contact normal.");
        Vector::x_axis()
    };

    Some(Penetration::new(sum_radius - distance, normal))
}
