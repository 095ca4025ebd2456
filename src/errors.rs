use std::error::Error;
use std::fmt;

/// Represents errors that can occur while configuring or driving a flock simulation.
///
/// The per-tick update itself never fails: degenerate numeric input (zero vectors, empty
/// neighborhoods, out-of-bounds inserts) is handled by policy. Everything in this enum is a
/// construction-time rejection.
#[derive(Debug, Clone, PartialEq)]
pub enum FlockError {
    /// Indicates a speed range where `min > max` or a bound is negative.
    InvalidSpeedRange { min: f64, max: f64 },
    /// Indicates a negative or non-finite rule weight. Carries the field name.
    InvalidWeight(&'static str),
    /// Indicates a negative, zero or non-finite distance. Carries the field name.
    InvalidDistance(&'static str),
    /// Indicates a vision half-angle outside `(0, π]`.
    InvalidAngle,
    /// Indicates a rebuild cadence of zero ticks.
    InvalidCadence,
    /// Indicates unusable spatial index parameters.
    InvalidIndexParameters(String),
    /// Indicates world bounds with no area or non-finite corners.
    InvalidBounds,
    /// Indicates a non-positive or non-finite time step.
    InvalidTimeStep,
    /// Indicates a heading smoothing factor outside `(0, 1]`.
    InvalidSmoothing,
    /// Indicates a boid id that is not part of the population.
    UnknownBoid(usize),
}

impl fmt::Display for FlockError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlockError::InvalidSpeedRange { min, max } => {
                write!(f, "Invalid speed range: min {} / max {}", min, max)
            }
            FlockError::InvalidWeight(name) => write!(f, "Invalid weight value for {}", name),
            FlockError::InvalidDistance(name) => write!(f, "Invalid distance value for {}", name),
            FlockError::InvalidAngle => write!(f, "Vision half-angle must be in (0, pi]"),
            FlockError::InvalidCadence => write!(f, "Rebuild cadence must be at least one tick"),
            FlockError::InvalidIndexParameters(msg) => {
                write!(f, "Invalid spatial index parameters: {}", msg)
            }
            FlockError::InvalidBounds => write!(f, "World bounds must have a positive, finite area"),
            FlockError::InvalidTimeStep => write!(f, "Invalid time step value"),
            FlockError::InvalidSmoothing => write!(f, "Heading smoothing must be in (0, 1]"),
            FlockError::UnknownBoid(id) => write!(f, "No boid with id {}", id),
        }
    }
}

impl Error for FlockError {}
