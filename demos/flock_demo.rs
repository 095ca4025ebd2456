// demos/flock_demo.rs

use log::info;
use rs_boids::boids::Simulation;
use rs_boids::models::{Rect, Vec2};
use rs_boids::spatial::SpatialIndex;
use rs_boids::errors::FlockError;
use rs_boids::utils::{AdaptiveRange, FlockConfig, IndexKind};

fn main() -> Result<(), FlockError> {
    env_logger::init();

    let bounds = Rect::from_origin_size(0.0, 0.0, 1280.0, 720.0);
    let config = FlockConfig {
        index: IndexKind::QuadTree { subdivision_threshold: 20, min_cell_size: 40.0 },
        vision_half_angle: Some(2.0),
        randomness: 2.0,
        adaptive_range: Some(AdaptiveRange { min_neighbors: 4, max_radius: 80.0 }),
        seed: Some(2024),
        ..FlockConfig::default()
    };
    let mut sim = Simulation::new(config, bounds, 1_000)?;

    println!("Initial state:");
    print_summary(&sim);

    // Pretend a pointer hovers in the middle of the screen for the first two seconds
    sim.set_repulsion_point(bounds.center());
    let mut crossings = 0;
    for _ in 0..120 {
        crossings += sim.tick().boundary_crossings.len();
    }
    sim.clear_repulsion_point();
    for _ in 0..180 {
        crossings += sim.tick().boundary_crossings.len();
    }
    info!("{} edge crossings over {} ticks", crossings, sim.tick_count());

    println!("\nAfter {} ticks:", sim.tick_count());
    print_summary(&sim);

    let near_center = sim.query_neighbors(bounds.center(), 50.0);
    println!("Boids within 50 units of the centre: {}", near_center.len());
    println!("Entries in the neighbor index: {}", sim.neighbor_index().len());

    Ok(())
}

fn print_summary(sim: &Simulation) {
    let count = sim.boids().len().max(1) as f64;
    let mut mean_velocity = Vec2::ZERO;
    let mut neighbors = 0;
    for boid in sim.boids() {
        mean_velocity += boid.velocity;
        neighbors += boid.neighbors().len();
    }
    mean_velocity /= count;

    // Close to 1 when the whole flock flies the same way
    let mean_speed: f64 = sim.boids().iter().map(|b| b.speed()).sum::<f64>() / count;
    let polarization = if mean_speed > 0.0 { mean_velocity.magnitude() / mean_speed } else { 0.0 };

    println!("Mean speed: {:.2}", mean_speed);
    println!("Polarization: {:.3}", polarization);
    println!("Mean neighbors per boid: {:.2}", neighbors as f64 / count);
}
