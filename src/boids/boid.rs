use std::f64::consts::TAU;

use rand::Rng;

use crate::models::{Rect, Vec2};
use crate::spatial::BoidId;

/// Kinematic state of one boid plus its cached neighbor snapshot.
///
/// `heading` is exposed for renderers; the simulation itself steers from the velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Facing angle in radians.
    pub heading: f64,
    pub(crate) neighbors: Vec<BoidId>,
    pub(crate) search_radius: f64,
}

impl Boid {
    /// Creates a boid facing along its velocity, with an empty neighbor snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_boids::boids::Boid;
    /// use rs_boids::models::Vec2;
    ///
    /// let boid = Boid::new(Vec2::new(1.0, 2.0), Vec2::new(0.0, 3.0));
    /// assert!((boid.heading - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// assert!(boid.neighbors().is_empty());
    /// ```
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Boid {
            position,
            velocity,
            heading: velocity.angle(),
            neighbors: Vec::new(),
            search_radius: 0.0,
        }
    }

    /// Creates a boid at a uniformly random position inside `bounds`, moving in a random
    /// direction at a speed drawn from `[min_speed, max_speed]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: &Rect, min_speed: f64, max_speed: f64) -> Self {
        let position = Vec2::new(
            rng.random_range(bounds.min.x..bounds.max.x),
            rng.random_range(bounds.min.y..bounds.max.y),
        );
        let angle = rng.random_range(0.0..TAU);
        let speed = rng.random_range(min_speed..=max_speed);
        Boid::new(position, Vec2::from_angle(angle, speed))
    }

    /// Neighbors found at the last index rebuild.
    pub fn neighbors(&self) -> &[BoidId] {
        &self.neighbors
    }

    /// Radius used for this boid's next neighbor query.
    pub fn search_radius(&self) -> f64 {
        self.search_radius
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}
