mod boid;
mod simulation;
mod steering;

pub use boid::*;
pub use simulation::*;
pub use steering::*;
