//! Boids flocking with pluggable neighbor search.
//!
//! - [`models`]: `Vec2` and `Rect` geometry.
//! - [`spatial`]: the [`spatial::SpatialIndex`] trait with quad-tree and spatial hash backends.
//! - [`boids`]: the boid state, steering rules and the [`boids::Simulation`] orchestrator.
//! - [`utils`]: configuration and angle helpers.
//! - [`errors`]: [`errors::FlockError`], returned by every fallible constructor.
pub mod errors;
pub mod utils;
pub mod models;
pub mod spatial;
pub mod boids;
