use bumper2d::broad_phase::CircleBroadPhase;
use bumper2d::math::{Point, Vector};
use oorandom::Rand32;

const WORLD_SIZE: f32 = 800.0;
const NUM_CIRCLES: u32 = 2000;
const NUM_FRAMES: usize = 200;

fn main() {
    let mut rng = Rand32::new(42);
    let mut broad_phase = CircleBroadPhase::new();
    let mut velocities = Vec::new();

    /*
     * Spawn the circles.
     */
    for id in 0..NUM_CIRCLES {
        let radius = 1.0 + rng.rand_float() * 3.0;
        let center = Point::new(
            radius + rng.rand_float() * (WORLD_SIZE - 2.0 * radius),
            radius + rng.rand_float() * (WORLD_SIZE - 2.0 * radius),
        );
        broad_phase.add_circle(id, center, radius).unwrap();
        velocities.push(Vector::new(
            rng.rand_float() * 4.0 - 2.0,
            rng.rand_float() * 4.0 - 2.0,
        ));
    }

    let mut total_potentials = 0;
    let mut total_collisions = 0;

    for _ in 0..NUM_FRAMES {
        /*
         * Move the circles and bounce them off the edges of the world.
         */
        for (id, velocity) in velocities.iter_mut().enumerate() {
            let proxy = broad_phase.proxy_mut(id as u32).unwrap();
            let radius = proxy.scaled_radius();
            proxy.center += *velocity;

            for i in 0..2 {
                if proxy.center[i] < radius || proxy.center[i] > WORLD_SIZE - radius {
                    velocity[i] = -velocity[i];
                    proxy.center[i] = proxy.center[i].clamp(radius, WORLD_SIZE - radius);
                }
            }
        }

        /*
         * Refresh the tree, then find and resolve the collisions.
         */
        broad_phase.update();
        total_potentials += broad_phase.potential_pairs().len();

        let collisions = broad_phase.collisions();
        total_collisions += collisions.len();

        for (pair, penetration) in collisions {
            // Push both circles apart by half the penetration depth each.
            let (a, b) = pair.as_tuple();
            let half = penetration.separation() * 0.5;
            broad_phase.proxy_mut(a).unwrap().center -= half;
            broad_phase.proxy_mut(b).unwrap().center += half;
        }
    }

    println!(
        "{} circles, {} frames: {} potential pairs, {} collisions resolved.",
        NUM_CIRCLES, NUM_FRAMES, total_potentials, total_collisions
    );
    println!(
        "Final tree: {} leaves, {} branches, depth {}.",
        broad_phase.tree().leaf_count(),
        broad_phase.tree().branch_count(),
        broad_phase.tree().depth()
    );
}
