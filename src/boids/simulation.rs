//! The flock orchestrator.
//!
//! A [`Simulation`] owns the boids and two spatial indices. Every `rebuild_cadence` ticks it
//! refills the *current* index from live positions, re-queries every boid's neighbors from
//! the *previous* index (built one cadence earlier), and swaps the two. Every tick, rebuild
//! or not, it evaluates the flocking rules for all boids in parallel against an immutable
//! view of the flock and writes the results back.
//!
//! # Example
//!
//! ```
//! use rs_boids::boids::Simulation;
//! use rs_boids::models::Rect;
//! use rs_boids::utils::FlockConfig;
//!
//! let config = FlockConfig { seed: Some(42), ..FlockConfig::default() };
//! let bounds = Rect::from_origin_size(0.0, 0.0, 800.0, 600.0);
//! let mut sim = Simulation::new(config, bounds, 200).expect("valid configuration");
//!
//! let report = sim.tick();
//! assert_eq!(report.tick, 1);
//! for boid in sim.boids() {
//!     assert!(bounds.contains(boid.position));
//! }
//! ```
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::boids::{advance, Boid, Kinematics};
use crate::errors::FlockError;
use crate::models::{Rect, Vec2};
use crate::spatial::{BoidId, IndexBackend, SpatialIndex};
use crate::utils::{wrap_coordinate, AdaptiveRange, BoundaryPolicy, FlockConfig};

/// A boid whose position was corrected at the world edge during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryCrossing {
    pub boid: BoidId,
    /// Position after wrapping or reflecting.
    pub position: Vec2,
}

/// What happened during one call to [`Simulation::tick`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickReport {
    /// 1-based number of the tick just completed.
    pub tick: u64,
    /// Whether neighbor snapshots were recomputed on this tick.
    pub rebuilt: bool,
    pub boundary_crossings: Vec<BoundaryCrossing>,
}

pub struct Simulation {
    config: FlockConfig,
    bounds: Rect,
    boids: Vec<Boid>,
    current: IndexBackend,
    previous: IndexBackend,
    repulsion_point: Option<Vec2>,
    rng: StdRng,
    tick: u64,
}

impl Simulation {
    /// Creates a simulation with `count` randomly placed boids.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`FlockConfig::validate`] or `bounds` has no area.
    pub fn new(config: FlockConfig, bounds: Rect, count: usize) -> Result<Self, FlockError> {
        config.validate()?;
        if !bounds.is_valid() {
            return Err(FlockError::InvalidBounds);
        }
        let mut rng = Self::make_rng(&config);
        let boids = (0..count)
            .map(|_| Boid::random(&mut rng, &bounds, config.min_speed, config.max_speed))
            .collect();
        Self::assemble(config, bounds, boids, rng)
    }

    /// Creates a simulation from an explicit population. Boid ids are positions in `boids`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`FlockConfig::validate`] or `bounds` has no area.
    pub fn with_boids(config: FlockConfig, bounds: Rect, boids: Vec<Boid>) -> Result<Self, FlockError> {
        config.validate()?;
        if !bounds.is_valid() {
            return Err(FlockError::InvalidBounds);
        }
        let rng = Self::make_rng(&config);
        Self::assemble(config, bounds, boids, rng)
    }

    fn make_rng(config: &FlockConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn assemble(config: FlockConfig, bounds: Rect, mut boids: Vec<Boid>, rng: StdRng) -> Result<Self, FlockError> {
        for boid in &mut boids {
            boid.search_radius = config.detection_range;
            boid.neighbors.clear();
            // Explicit populations may start outside the world; indices only see in-bounds boids.
            let (position, velocity, _) = apply_boundary(boid.position, boid.velocity, &bounds, config.boundary);
            boid.position = position;
            boid.velocity = velocity;
        }

        // The first rebuild queries `previous`, so seed it with the starting positions.
        let current = IndexBackend::new(config.index, bounds);
        let mut previous = IndexBackend::new(config.index, bounds);
        for (id, boid) in boids.iter().enumerate() {
            previous.insert(id, boid.position);
        }

        info!(
            "flock simulation ready: {} boids, {} index, rebuild every {} ticks",
            boids.len(),
            previous.name(),
            config.rebuild_cadence
        );

        Ok(Simulation {
            config,
            bounds,
            boids,
            current,
            previous,
            repulsion_point: None,
            rng,
            tick: 0,
        })
    }

    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// All boids, indexed by [`BoidId`].
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    /// # Errors
    ///
    /// Returns [`FlockError::UnknownBoid`] if `id` is out of range.
    pub fn boid(&self, id: BoidId) -> Result<&Boid, FlockError> {
        self.boids.get(id).ok_or(FlockError::UnknownBoid(id))
    }

    /// Number of ticks completed so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// The index the next rebuild will query.
    pub fn neighbor_index(&self) -> &IndexBackend {
        &self.previous
    }

    pub fn repulsion_point(&self) -> Option<Vec2> {
        self.repulsion_point
    }

    /// Sets the point the flock steers away from, e.g. a pointer or touch position.
    pub fn set_repulsion_point(&mut self, point: Vec2) {
        self.repulsion_point = Some(point);
    }

    pub fn clear_repulsion_point(&mut self) {
        self.repulsion_point = None;
    }

    /// Advances the flock by one tick.
    pub fn tick(&mut self) -> TickReport {
        self.tick += 1;
        let rebuilt = self.tick % u64::from(self.config.rebuild_cadence) == 0;
        if rebuilt {
            self.rebuild();
        }

        let jitter = self.draw_jitter();
        let config = &self.config;
        let flock = &self.boids;
        let repulsion_point = self.repulsion_point;
        let updates: Vec<Kinematics> = flock
            .par_iter()
            .zip(jitter.par_iter())
            .map(|(boid, &jitter)| advance(boid, flock, config, repulsion_point, jitter))
            .collect();

        let mut boundary_crossings = Vec::new();
        for (id, (boid, update)) in self.boids.iter_mut().zip(updates).enumerate() {
            let (position, velocity, crossed) =
                apply_boundary(update.position, update.velocity, &self.bounds, self.config.boundary);
            boid.position = position;
            boid.velocity = velocity;
            boid.heading = update.heading;
            if crossed {
                boundary_crossings.push(BoundaryCrossing { boid: id, position });
            }
        }

        TickReport { tick: self.tick, rebuilt, boundary_crossings }
    }

    /// Runs `steps` ticks back to back.
    pub fn simulate(&mut self, steps: usize) {
        for _ in 0..steps {
            self.tick();
        }
    }

    /// Neighbors of an arbitrary point according to the index the next rebuild will query.
    pub fn query_neighbors(&self, center: Vec2, radius: f64) -> Vec<BoidId> {
        self.previous.query_radius(center, radius)
    }

    fn rebuild(&mut self) {
        self.current.clear();
        for (id, boid) in self.boids.iter().enumerate() {
            self.current.insert(id, boid.position);
        }

        // All inserts are done; `previous` is only read from here on.
        let previous = &self.previous;
        let config = &self.config;
        let snapshots: Vec<Vec<BoidId>> = self
            .boids
            .par_iter()
            .enumerate()
            .map(|(id, boid)| find_neighbors(previous, config, id, boid))
            .collect();

        let mut total_neighbors = 0;
        let mut saturated = 0;
        for (boid, neighbors) in self.boids.iter_mut().zip(snapshots) {
            total_neighbors += neighbors.len();
            boid.neighbors = neighbors;
            if let Some(adaptive) = self.config.adaptive_range {
                if adapt_search_radius(boid, &adaptive, self.config.detection_range) {
                    saturated += 1;
                }
            }
        }

        std::mem::swap(&mut self.current, &mut self.previous);

        debug!(
            "tick {}: rebuilt {} index with {} boids, mean snapshot {:.2}, {} search radii at maximum",
            self.tick,
            self.previous.name(),
            self.previous.len(),
            total_neighbors as f64 / self.boids.len().max(1) as f64,
            saturated
        );
    }

    fn draw_jitter(&mut self) -> Vec<Vec2> {
        let magnitude = self.config.randomness;
        if magnitude <= 0.0 {
            return vec![Vec2::ZERO; self.boids.len()];
        }
        (0..self.boids.len())
            .map(|_| {
                let angle = self.rng.random_range(0.0..std::f64::consts::TAU);
                Vec2::from_angle(angle, self.rng.random_range(0.0..=magnitude))
            })
            .collect()
    }
}

/// Queries `index` around `boid`, through the vision cone when one is configured.
///
/// The index holds positions from when it was built, so the boid's own stale entry is
/// filtered out by id.
fn find_neighbors(index: &IndexBackend, config: &FlockConfig, id: BoidId, boid: &Boid) -> Vec<BoidId> {
    let mut neighbors = match config.vision_half_angle {
        Some(half_angle) => index.query_sector(boid.position, boid.heading, half_angle, boid.search_radius),
        None => index.query_radius(boid.position, boid.search_radius),
    };
    neighbors.retain(|&other| other != id);
    neighbors
}

/// Widens a sparse boid's search radius or resets it. Returns true if the radius hit the cap.
fn adapt_search_radius(boid: &mut Boid, adaptive: &AdaptiveRange, detection_range: f64) -> bool {
    let count = boid.neighbors.len();
    if count >= adaptive.min_neighbors {
        boid.search_radius = detection_range;
        return false;
    }
    let grown = boid.search_radius + 1.0 / (adaptive.min_neighbors - count) as f64;
    if grown >= adaptive.max_radius {
        boid.search_radius = adaptive.max_radius;
        true
    } else {
        boid.search_radius = grown;
        false
    }
}

/// Brings a position back inside `bounds`. Returns the corrected position and velocity and
/// whether anything changed.
///
/// # Examples
///
/// ```
/// use rs_boids::boids::apply_boundary;
/// use rs_boids::models::{Rect, Vec2};
/// use rs_boids::utils::BoundaryPolicy;
///
/// let bounds = Rect::from_origin_size(0.0, 0.0, 100.0, 100.0);
/// let velocity = Vec2::new(5.0, 0.0);
///
/// let (p, v, crossed) = apply_boundary(Vec2::new(103.0, 50.0), velocity, &bounds, BoundaryPolicy::Wrap);
/// assert_eq!((p, v, crossed), (Vec2::new(3.0, 50.0), velocity, true));
///
/// let (p, v, crossed) = apply_boundary(Vec2::new(103.0, 50.0), velocity, &bounds, BoundaryPolicy::Reflect);
/// assert_eq!((p, v, crossed), (Vec2::new(97.0, 50.0), Vec2::new(-5.0, 0.0), true));
/// ```
pub fn apply_boundary(position: Vec2, velocity: Vec2, bounds: &Rect, policy: BoundaryPolicy) -> (Vec2, Vec2, bool) {
    match policy {
        BoundaryPolicy::Wrap => {
            if bounds.contains(position) {
                return (position, velocity, false);
            }
            let wrapped = Vec2::new(
                wrap_coordinate(position.x, bounds.min.x, bounds.width()),
                wrap_coordinate(position.y, bounds.min.y, bounds.height()),
            );
            (wrapped, velocity, true)
        }
        BoundaryPolicy::Reflect => {
            if bounds.contains_closed(position) {
                return (position, velocity, false);
            }
            let (x, vx) = reflect_axis(position.x, velocity.x, bounds.min.x, bounds.max.x);
            let (y, vy) = reflect_axis(position.y, velocity.y, bounds.min.y, bounds.max.y);
            (Vec2::new(x, y), Vec2::new(vx, vy), true)
        }
    }
}

fn reflect_axis(value: f64, speed: f64, min: f64, max: f64) -> (f64, f64) {
    if value < min {
        ((min + (min - value)).min(max), speed.abs())
    } else if value > max {
        ((max - (value - max)).max(min), -speed.abs())
    } else {
        (value, speed)
    }
}
