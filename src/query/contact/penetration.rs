use crate::math::{Real, UnitVector, Vector};

/// Geometric description of the overlap between two circles.
///
/// How far each body should be pushed along [`Self::normal`] is left to the caller.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Penetration {
    /// How deep the two circles overlap: the sum of their radii minus the distance between
    /// their centers.
    ///
    /// This is zero if the circles are exactly touching and positive otherwise.
    pub depth: Real,

    /// Unit vector pointing from the center of the first circle toward the center of the
    /// second one.
    pub normal: UnitVector<Real>,
}

impl Penetration {
    /// Creates a new penetration description.
    #[inline]
    pub fn new(depth: Real, normal: UnitVector<Real>) -> Self {
        Penetration { depth, normal }
    }

    /// Returns the same penetration, seen from the second circle.
    #[inline]
    pub fn flipped(self) -> Self {
        Penetration {
            depth: self.depth,
            normal: -self.normal,
        }
    }

    /// The translation to apply to the second circle to separate both circles entirely.
    #[inline]
    pub fn separation(&self) -> Vector<Real> {
        *self.normal * self.depth
    }
}
