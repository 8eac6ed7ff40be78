//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector};
use na;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is the simplest bounding volume, defined by its minimum and maximum corners.
/// Its edges are always parallel to the coordinate axes, which makes it very cheap to test
/// and to merge.
///
/// With screen coordinates (`y` pointing down) the two corners read as:
///
/// - **mins**: the `[left, top]` corner,
/// - **maxs**: the `[right, bottom]` corner.
///
/// Each component of `mins` should be less than or equal to the corresponding component
/// of `maxs`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use bumper2d::bounding_volume::{Aabb, BoundingVolume};
/// use bumper2d::math::Point;
///
/// let a = Aabb::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
/// let b = Aabb::new(Point::new(2.0, 0.0), Point::new(4.0, 2.0));
///
/// // Touching edges count as an intersection, but not as a strict one.
/// assert!(a.intersects(&b));
/// assert!(!a.intersects_strictly(&b));
/// assert_eq!(a.merged(&b).volume(), 8.0);
/// # }
/// ```
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates (the left/top corner).
    pub mins: Point<Real>,

    /// The point with maximum coordinates (the right/bottom corner).
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// The resulting AABB has `mins` set to maximum values and `maxs` set to
    /// minimum values. This is useful as an initial value for AABB merging.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The left boundary (minimum `x`) of this AABB.
    #[inline]
    pub fn left(&self) -> Real {
        self.mins.x
    }

    /// The top boundary (minimum `y`) of this AABB.
    #[inline]
    pub fn top(&self) -> Real {
        self.mins.y
    }

    /// The right boundary (maximum `x`) of this AABB.
    #[inline]
    pub fn right(&self) -> Real {
        self.maxs.x
    }

    /// The bottom boundary (maximum `y`) of this AABB.
    #[inline]
    pub fn bottom(&self) -> Real {
        self.maxs.y
    }

    /// Returns the center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Returns the area (width × height) of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y
    }

    /// Calculates the area of the AABB resulting from the merge of `self` and `other`.
    #[inline]
    pub fn merged_volume(&self, other: &Aabb) -> Real {
        self.merged(other).volume()
    }

    /// By how much the area of `self` would grow if it were merged with `other`.
    ///
    /// This is the cost used to route new leaves while descending an [`AabbTree`].
    ///
    /// [`AabbTree`]: crate::partitioning::AabbTree
    #[inline]
    pub fn volume_increase(&self, other: &Aabb) -> Real {
        self.merged_volume(other) - self.volume()
    }

    /// Checks if the interiors of `self` and `other` overlap.
    ///
    /// Unlike [`BoundingVolume::intersects`], two boxes only sharing an edge (or a corner)
    /// are **not** considered intersecting.
    #[inline]
    pub fn intersects_strictly(&self, other: &Aabb) -> bool {
        na::partial_lt(&self.mins, &other.maxs) && na::partial_gt(&self.maxs, &other.mins)
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }


    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Aabb;
    use crate::bounding_volume::BoundingVolume;
    use crate::math::{Point, Vector};

    fn aabb(l: f32, t: f32, r: f32, b: f32) -> Aabb {
        Aabb::new(Point::new(l as _, t as _), Point::new(r as _, b as _))
    }

    #[test]
    fn inclusive_and_strict_overlap_differ_on_shared_edges() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let right_neighbor = aabb(10.0, 0.0, 20.0, 10.0);
        let bottom_neighbor = aabb(0.0, 10.0, 10.0, 20.0);
        let overlapping = aabb(5.0, 5.0, 15.0, 15.0);
        let far = aabb(30.0, 30.0, 40.0, 40.0);

        assert!(a.intersects(&right_neighbor));
        assert!(a.intersects(&bottom_neighbor));
        assert!(!a.intersects_strictly(&right_neighbor));
        assert!(!a.intersects_strictly(&bottom_neighbor));

        assert!(a.intersects(&overlapping) && a.intersects_strictly(&overlapping));
        assert!(!a.intersects(&far) && !a.intersects_strictly(&far));
    }

    #[test]
    fn containment_is_checked_on_all_four_sides() {
        let outer = aabb(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains(&outer));
        assert!(outer.contains(&aabb(1.0, 1.0, 9.0, 9.0)));
        assert!(!outer.contains(&aabb(-1.0, 1.0, 9.0, 9.0)));
        assert!(!outer.contains(&aabb(1.0, -1.0, 9.0, 9.0)));
        assert!(!outer.contains(&aabb(1.0, 1.0, 11.0, 9.0)));
        assert!(!outer.contains(&aabb(1.0, 1.0, 9.0, 11.0)));
    }

    #[test]
    fn volume_increase_of_merge() {
        let a = aabb(0.0, 0.0, 2.0, 2.0);
        let b = aabb(2.0, 0.0, 4.0, 2.0);
        assert_eq!(a.volume(), 4.0);
        assert_eq!(a.merged_volume(&b), 8.0);
        assert_eq!(a.volume_increase(&b), 4.0);
        assert_eq!(a.volume_increase(&aabb(0.5, 0.5, 1.0, 1.0)), 0.0);
    }

    #[test]
    fn merge_and_loosen() {
        let mut a = aabb(0.0, 0.0, 1.0, 1.0);
        a.merge(&aabb(-1.0, 2.0, 0.5, 3.0));
        assert_eq!(a, aabb(-1.0, 0.0, 1.0, 3.0));
        assert_eq!(a.loosened(1.0), aabb(-2.0, -1.0, 2.0, 4.0));
        assert_eq!(
            Aabb::from_half_extents(Point::new(1.0, 1.0), Vector::new(1.0, 2.0)),
            aabb(0.0, -1.0, 2.0, 3.0)
        );
        assert_eq!(a.left(), -1.0);
        assert_eq!(a.bottom(), 3.0);
    }

    #[test]
    fn invalid_aabb_is_neutral_for_merge() {
        let a = aabb(3.0, 4.0, 5.0, 6.0);
        assert_eq!(Aabb::new_invalid().merged(&a), a);
        let mut b = Aabb::new_invalid();
        b.merge(&a);
        assert_eq!(b, a);
    }
}
