// rs_boids_wasm/src/lib.rs
// Browser-facing wrapper around the flock simulation.

use js_sys::Float64Array;
use rs_boids::boids::Simulation;
use rs_boids::models::{Rect, Vec2};
use rs_boids::utils::{FlockConfig, IndexKind};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmFlock {
    simulation: Simulation,
}

#[wasm_bindgen]
impl WasmFlock {
    /// Creates a flock of `count` boids in a `width` x `height` world using the default tuning.
    /// `use_quad_tree` picks the quad-tree index instead of the spatial hash.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, count: usize, use_quad_tree: bool, seed: Option<u64>) -> Result<WasmFlock, JsValue> {
        let index = if use_quad_tree {
            IndexKind::QuadTree { subdivision_threshold: 20, min_cell_size: 40.0 }
        } else {
            IndexKind::SpatialHash { cell_size: 40.0 }
        };
        let config = FlockConfig { index, seed, ..FlockConfig::default() };
        let bounds = Rect::from_origin_size(0.0, 0.0, width, height);
        let simulation = Simulation::new(config, bounds, count).map_err(|e| JsValue::from_str(&e.to_string()))?;
        web_sys::console::log_1(&format!("flock ready with {} boids", count).into());
        Ok(WasmFlock { simulation })
    }

    /// Advances one tick. Returns true if neighbor snapshots were rebuilt.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.simulation.tick().rebuilt
    }

    #[wasm_bindgen]
    pub fn simulate(&mut self, steps: usize) {
        self.simulation.simulate(steps);
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.simulation.boids().len()
    }

    /// Interleaved `[x0, y0, x1, y1, ...]` positions.
    #[wasm_bindgen]
    pub fn positions(&self) -> Float64Array {
        let flat: Vec<f64> = self.simulation.boids().iter().flat_map(|b| [b.position.x, b.position.y]).collect();
        Float64Array::from(flat.as_slice())
    }

    /// Interleaved `[vx0, vy0, vx1, vy1, ...]` velocities.
    #[wasm_bindgen]
    pub fn velocities(&self) -> Float64Array {
        let flat: Vec<f64> = self.simulation.boids().iter().flat_map(|b| [b.velocity.x, b.velocity.y]).collect();
        Float64Array::from(flat.as_slice())
    }

    #[wasm_bindgen]
    pub fn headings(&self) -> Float64Array {
        let flat: Vec<f64> = self.simulation.boids().iter().map(|b| b.heading).collect();
        Float64Array::from(flat.as_slice())
    }

    #[wasm_bindgen]
    pub fn set_repulsion_point(&mut self, x: f64, y: f64) {
        self.simulation.set_repulsion_point(Vec2::new(x, y));
    }

    #[wasm_bindgen]
    pub fn clear_repulsion_point(&mut self) {
        self.simulation.clear_repulsion_point();
    }
}
