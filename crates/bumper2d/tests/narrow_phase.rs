use approx::assert_relative_eq;
use bumper2d::broad_phase::{CircleBroadPhase, Proxy};
use bumper2d::math::{Point, Vector};
use bumper2d::query::contact_ball_ball;
use bumper2d::shape::Ball;

#[test]
fn scaled_radii_are_used() {
    let mut broad_phase = CircleBroadPhase::new();
    broad_phase
        .add_proxy(Proxy::new(0, Point::new(0.0, 0.0), 1.0).with_scale(3.0))
        .unwrap();
    broad_phase
        .add_proxy(Proxy::new(1, Point::new(0.0, 5.0), 2.0).with_scale(0.5))
        .unwrap();

    let penetration = broad_phase.are_circles_colliding(0, 1).unwrap();
    assert!(penetration.is_none());

    broad_phase.set_scale(1, 1.5).unwrap();
    let penetration = broad_phase.are_circles_colliding(0, 1).unwrap().unwrap();
    assert_relative_eq!(penetration.depth, 1.0);
    assert_relative_eq!(*penetration.normal, Vector::y());
}

#[test]
fn separation_resolves_the_overlap() {
    let c1 = Point::new(1.0, 1.0);
    let c2 = Point::new(2.0, 3.0);
    let b1 = Ball::new(2.0);
    let b2 = Ball::new(1.0);

    let penetration = contact_ball_ball(&c1, &b1, &c2, &b2).unwrap();
    assert!(penetration.depth > 0.0);

    let moved = c2 + penetration.separation();
    let after = contact_ball_ball(&c1, &b1, &moved, &b2).unwrap();
    assert_relative_eq!(after.depth, 0.0, epsilon = 1.0e-5);
}

#[test]
fn distance_threshold() {
    let b = Ball::new(1.0);
    let origin = Point::origin();

    assert!(contact_ball_ball(&origin, &b, &Point::new(2.001, 0.0), &b).is_none());
    assert_relative_eq!(
        contact_ball_ball(&origin, &b, &Point::new(2.0, 0.0), &b)
            .unwrap()
            .depth,
        0.0
    );
    assert_relative_eq!(
        contact_ball_ball(&origin, &b, &Point::new(1.0, 1.0), &b)
            .unwrap()
            .depth,
        2.0 - 2.0f32.sqrt()
    );
}

#[test]
fn concentric_circles_do_not_produce_nan() {
    let mut broad_phase = CircleBroadPhase::new();
    broad_phase.add_circle(0, Point::new(4.0, 4.0), 1.0).unwrap();
    broad_phase.add_circle(1, Point::new(4.0, 4.0), 1.0).unwrap();

    let penetration = broad_phase.are_circles_colliding(0, 1).unwrap().unwrap();
    assert_relative_eq!(penetration.depth, 2.0);
    assert_eq!(*penetration.normal, Vector::x());
}
