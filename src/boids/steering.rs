//! The flocking rules and the per-tick velocity update.
//!
//! Rule functions return unweighted contributions; [`steering_force`] applies the configured
//! weights, subtracts the jitter vector and clamps the sum to `max_force`. Every function
//! here only reads the flock, so the whole update can be evaluated for all boids in
//! parallel.
use crate::boids::Boid;
use crate::models::Vec2;
use crate::spatial::BoidId;
use crate::utils::{approach_angle, FlockConfig};

/// The state a boid will have after one tick, before boundary handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub position: Vec2,
    pub velocity: Vec2,
    pub heading: f64,
}

/// Average neighbor velocity minus the boid's own velocity.
///
/// Returns `Vec2::ZERO` for an empty snapshot.
pub fn alignment(boid: &Boid, flock: &[Boid], neighbors: &[BoidId]) -> Vec2 {
    if neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let mut sum = Vec2::ZERO;
    for &id in neighbors {
        sum += flock[id].velocity;
    }
    sum / neighbors.len() as f64 - boid.velocity
}

/// Vector from the boid to the average neighbor position.
///
/// Returns `Vec2::ZERO` for an empty snapshot.
pub fn cohesion(boid: &Boid, flock: &[Boid], neighbors: &[BoidId]) -> Vec2 {
    if neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let mut sum = Vec2::ZERO;
    for &id in neighbors {
        sum += flock[id].position;
    }
    sum / neighbors.len() as f64 - boid.position
}

/// Sum of pushes away from every neighbor strictly closer than the separation distance.
///
/// Each push has magnitude `1 / d²`, so halving the distance to a neighbor quadruples its
/// push. Neighbors at distance zero give no direction and are skipped.
///
/// # Examples
///
/// ```
/// use rs_boids::boids::{separation, Boid};
/// use rs_boids::models::Vec2;
///
/// let flock = vec![
///     Boid::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)),
///     Boid::new(Vec2::new(2.0, 0.0), Vec2::new(1.0, 0.0)),
/// ];
/// let push = separation(&flock[0], &flock, &[1], 9.0);
/// assert_eq!(push, Vec2::new(-0.25, 0.0));
/// ```
pub fn separation(boid: &Boid, flock: &[Boid], neighbors: &[BoidId], separation_distance_squared: f64) -> Vec2 {
    let mut push = Vec2::ZERO;
    for &id in neighbors {
        let offset = boid.position - flock[id].position;
        let dist_sq = offset.magnitude_squared();
        if dist_sq > 0.0 && dist_sq < separation_distance_squared {
            push += offset / (dist_sq * dist_sq.sqrt());
        }
    }
    push
}

/// Push away from an external repulsion point.
///
/// Zero when no point is set or the boid is at least `touch_distance` away; otherwise points
/// away from the point with a length of `touch_distance - d`, growing as the boid gets closer.
pub fn touch_avoidance(boid: &Boid, repulsion_point: Option<Vec2>, touch_distance: f64) -> Vec2 {
    let Some(point) = repulsion_point else {
        return Vec2::ZERO;
    };
    let offset = boid.position - point;
    let dist_sq = offset.magnitude_squared();
    if dist_sq >= touch_distance * touch_distance {
        return Vec2::ZERO;
    }
    offset.normalize() * (touch_distance - dist_sq.sqrt())
}

/// Weighted sum of all rules, minus `jitter`, clamped to `max_force`.
pub fn steering_force(
    boid: &Boid,
    flock: &[Boid],
    config: &FlockConfig,
    repulsion_point: Option<Vec2>,
    jitter: Vec2,
) -> Vec2 {
    let neighbors = boid.neighbors();
    let sum = alignment(boid, flock, neighbors) * config.alignment_weight
        + cohesion(boid, flock, neighbors) * config.cohesion_weight
        + separation(boid, flock, neighbors, config.separation_distance_squared()) * config.separation_weight
        + touch_avoidance(boid, repulsion_point, config.touch_distance) * config.touch_weight
        - jitter;
    sum.limit(config.max_force)
}

/// Applies `steering` to the boid's velocity and integrates one time step.
///
/// The new velocity is clamped into `[min_speed, max_speed]` and then scaled by
/// `passive_acceleration`. If the result is exactly zero, the boid moves at `min_speed`
/// along its old velocity, or along its heading when it had none.
pub fn integrate(boid: &Boid, steering: Vec2, config: &FlockConfig) -> Kinematics {
    let mut velocity = (boid.velocity + steering).clamp_magnitude(config.min_speed, config.max_speed);
    if velocity == Vec2::ZERO {
        velocity = if boid.velocity == Vec2::ZERO {
            Vec2::from_angle(boid.heading, config.min_speed)
        } else {
            boid.velocity.normalize() * config.min_speed
        };
    }
    velocity *= config.passive_acceleration;

    let heading = if velocity == Vec2::ZERO {
        boid.heading
    } else {
        approach_angle(boid.heading, velocity.angle(), config.heading_smoothing)
    };

    Kinematics {
        position: boid.position + velocity * config.time_step,
        velocity,
        heading,
    }
}

/// One full rule evaluation and integration step for `boid`.
pub fn advance(
    boid: &Boid,
    flock: &[Boid],
    config: &FlockConfig,
    repulsion_point: Option<Vec2>,
    jitter: Vec2,
) -> Kinematics {
    let steering = steering_force(boid, flock, config, repulsion_point, jitter);
    integrate(boid, steering, config)
}
