use std::f64::consts::PI;

use crate::errors::FlockError;

/// Which spatial index backs the neighbor search, with its tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexKind {
    /// Adaptive quad-tree. A node splits once it holds `subdivision_threshold` boids, as long
    /// as both sides are still larger than `min_cell_size`.
    QuadTree {
        subdivision_threshold: usize,
        min_cell_size: f64,
    },
    /// Uniform hash grid keyed by `floor(position / cell_size)`.
    SpatialHash { cell_size: f64 },
}

/// What happens to a boid that leaves the world bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Toroidal world: leaving one edge re-enters at the opposite edge, velocity unchanged.
    #[default]
    Wrap,
    /// Position is mirrored back inside and the offending velocity component is negated.
    Reflect,
}

/// Lets a boid with too few neighbors widen its own search radius.
///
/// While the snapshot holds fewer than `min_neighbors` boids the radius grows by
/// `1 / (min_neighbors - count)` per rebuild, up to `max_radius`; otherwise it snaps back to
/// the configured detection range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveRange {
    pub min_neighbors: usize,
    pub max_radius: f64,
}

/// Read-only tuning for a simulation run.
///
/// Speeds are in world units per second, distances in world units and angles in radians.
///
/// # Examples
///
/// ```
/// use rs_boids::utils::{FlockConfig, IndexKind};
///
/// let config = FlockConfig {
///     rebuild_cadence: 5,
///     index: IndexKind::QuadTree { subdivision_threshold: 16, min_cell_size: 20.0 },
///     ..FlockConfig::default()
/// };
/// assert!(config.validate().is_ok());
///
/// let broken = FlockConfig { min_speed: 10.0, max_speed: 5.0, ..FlockConfig::default() };
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockConfig {
    pub max_speed: f64,
    pub min_speed: f64,
    pub max_force: f64,
    pub detection_range: f64,
    pub separation_distance: f64,
    /// Half-width of the forward vision cone. `None` means omnidirectional sensing.
    pub vision_half_angle: Option<f64>,
    pub cohesion_weight: f64,
    pub separation_weight: f64,
    pub alignment_weight: f64,
    pub touch_weight: f64,
    /// The repulsion point only affects boids closer than this.
    pub touch_distance: f64,
    /// Upper bound on the magnitude of the per-tick jitter vector.
    pub randomness: f64,
    /// Number of ticks between index rebuilds.
    pub rebuild_cadence: u32,
    pub index: IndexKind,
    /// Seconds advanced per tick.
    pub time_step: f64,
    /// Multiplier applied to the velocity after the speed clamp. Values above 1 let boids
    /// exceed `max_speed` by that factor; values below 1 let them drop under `min_speed`.
    pub passive_acceleration: f64,
    /// Fraction of the angular gap the heading closes per tick.
    pub heading_smoothing: f64,
    pub boundary: BoundaryPolicy,
    pub adaptive_range: Option<AdaptiveRange>,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

pub const DEFAULT_FLOCK_CONFIG: FlockConfig = FlockConfig {
    max_speed: 80.0,
    min_speed: 60.0,
    max_force: 100.0,
    detection_range: 40.0,
    separation_distance: 7.745_966_692_414_834,
    vision_half_angle: None,
    cohesion_weight: 0.3,
    separation_weight: 0.4,
    alignment_weight: 0.3,
    touch_weight: 0.8,
    touch_distance: 89.442_719_099_991_59,
    randomness: 0.0,
    rebuild_cadence: 3,
    index: IndexKind::SpatialHash { cell_size: 40.0 },
    time_step: 1.0 / 60.0,
    passive_acceleration: 1.0,
    heading_smoothing: 1.0,
    boundary: BoundaryPolicy::Wrap,
    adaptive_range: None,
    seed: None,
};

impl Default for FlockConfig {
    fn default() -> Self {
        DEFAULT_FLOCK_CONFIG
    }
}

impl FlockConfig {
    /// Checks every parameter, returning the first problem found.
    ///
    /// # Errors
    ///
    /// Returns a [`FlockError`] describing the offending parameter.
    pub fn validate(&self) -> Result<(), FlockError> {
        if !self.min_speed.is_finite()
            || !self.max_speed.is_finite()
            || self.min_speed < 0.0
            || self.min_speed > self.max_speed
        {
            return Err(FlockError::InvalidSpeedRange { min: self.min_speed, max: self.max_speed });
        }
        if !self.max_force.is_finite() || self.max_force < 0.0 {
            return Err(FlockError::InvalidWeight("max_force"));
        }

        let weights = [
            ("cohesion_weight", self.cohesion_weight),
            ("separation_weight", self.separation_weight),
            ("alignment_weight", self.alignment_weight),
            ("touch_weight", self.touch_weight),
            ("randomness", self.randomness),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(FlockError::InvalidWeight(name));
            }
        }

        if !self.detection_range.is_finite() || self.detection_range <= 0.0 {
            return Err(FlockError::InvalidDistance("detection_range"));
        }
        if !self.separation_distance.is_finite() || self.separation_distance < 0.0 {
            return Err(FlockError::InvalidDistance("separation_distance"));
        }
        if !self.touch_distance.is_finite() || self.touch_distance < 0.0 {
            return Err(FlockError::InvalidDistance("touch_distance"));
        }

        if let Some(half_angle) = self.vision_half_angle {
            if !(half_angle > 0.0 && half_angle <= PI) {
                return Err(FlockError::InvalidAngle);
            }
        }

        if self.rebuild_cadence == 0 {
            return Err(FlockError::InvalidCadence);
        }

        match self.index {
            IndexKind::QuadTree { subdivision_threshold, min_cell_size } => {
                if subdivision_threshold == 0 {
                    return Err(FlockError::InvalidIndexParameters(
                        "subdivision threshold must be at least 1".to_string(),
                    ));
                }
                if !min_cell_size.is_finite() || min_cell_size <= 0.0 {
                    return Err(FlockError::InvalidIndexParameters(format!(
                        "minimum cell size must be positive, got {}",
                        min_cell_size
                    )));
                }
            }
            IndexKind::SpatialHash { cell_size } => {
                if !cell_size.is_finite() || cell_size <= 0.0 {
                    return Err(FlockError::InvalidIndexParameters(format!(
                        "cell size must be positive, got {}",
                        cell_size
                    )));
                }
            }
        }

        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(FlockError::InvalidTimeStep);
        }
        if !self.passive_acceleration.is_finite() || self.passive_acceleration <= 0.0 {
            return Err(FlockError::InvalidWeight("passive_acceleration"));
        }
        if !(self.heading_smoothing > 0.0 && self.heading_smoothing <= 1.0) {
            return Err(FlockError::InvalidSmoothing);
        }

        if let Some(adaptive) = self.adaptive_range {
            if adaptive.min_neighbors == 0 {
                return Err(FlockError::InvalidIndexParameters(
                    "adaptive range needs at least one wanted neighbor".to_string(),
                ));
            }
            if !adaptive.max_radius.is_finite() || adaptive.max_radius < self.detection_range {
                return Err(FlockError::InvalidDistance("adaptive_range.max_radius"));
            }
        }

        Ok(())
    }

    /// Squared separation distance, compared against squared neighbor distances.
    #[inline]
    pub fn separation_distance_squared(&self) -> f64 {
        self.separation_distance * self.separation_distance
    }

    #[inline]
    pub fn touch_distance_squared(&self) -> f64 {
        self.touch_distance * self.touch_distance
    }
}
