//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;

pub use crate::bounding_volume::aabb_ball::{ball_aabb, local_ball_aabb};

#[doc(hidden)]
pub mod aabb;
mod aabb_ball;
#[doc(hidden)]
pub mod bounding_volume;
