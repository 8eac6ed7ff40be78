//! Implementation details of the penetration computation between two circles.

pub use self::contact_ball_ball::contact_ball_ball;
pub use self::penetration::Penetration;

mod contact_ball_ball;
mod penetration;
