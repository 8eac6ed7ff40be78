/*!
bumper
======

**bumper** is a 2-dimensional broad-phase collision detection library for large
populations of moving circles, written with the rust programming language.

It maintains a dynamic bounding-volume hierarchy (an [`AabbTree`](partitioning::AabbTree))
of axis-aligned bounding boxes, keeps it up-to-date as bodies move, enumerates the
pairs of bodies that may be colliding, and confirms them with an exact
circle-circle test.

```
# #[cfg(feature = "f32")] {
use bumper2d::broad_phase::CircleBroadPhase;
use bumper2d::math::Point;

let mut broad_phase = CircleBroadPhase::new();
broad_phase.add_circle(0, Point::new(0.0, 0.0), 5.0).unwrap();
broad_phase.add_circle(1, Point::new(6.0, 0.0), 5.0).unwrap();
broad_phase.add_circle(2, Point::new(20.0, 20.0), 5.0).unwrap();

assert_eq!(broad_phase.get_potentials(0).unwrap(), vec![1]);

let penetration = broad_phase.are_circles_colliding(0, 1).unwrap().unwrap();
assert_eq!(penetration.depth, 4.0);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![no_std]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive. Use the `bumper2d` or `bumper2d-f64` crate instead.");

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod broad_phase;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, UnitVector2, Vector2};

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;
}
