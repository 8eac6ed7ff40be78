use crate::math::Real;

/// A Ball shape: a circle, in 2D.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }

    /// Computes a scaled version of this ball.
    ///
    /// Only uniform scaling is supported, so the scaled shape is always a ball. The sign of
    /// `scale` is ignored.
    #[inline]
    pub fn scaled(self, scale: Real) -> Self {
        Self::new(self.radius * scale.abs())
    }
}

#[cfg(test)]
mod test {
    use super::Ball;

    #[test]
    fn scaling_ignores_sign() {
        assert_eq!(Ball::new(2.0).scaled(3.0), Ball::new(6.0));
        assert_eq!(Ball::new(2.0).scaled(-0.5), Ball::new(1.0));
    }
}
