//! Shapes supported by bumper.

pub use self::ball::Ball;

mod ball;
