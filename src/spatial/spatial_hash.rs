use std::collections::HashMap;

use crate::models::{Rect, Vec2};
use crate::spatial::spatial_index::{within_radius, within_rect};
use crate::spatial::{BoidId, IndexEntry, SpatialIndex};

/// Integer cell coordinates: `(floor(x / cell_size), floor(y / cell_size))`.
pub type CellKey = (i64, i64);

/// Uniform spatial hash grid.
///
/// Unbounded: any finite position maps to a cell, so inserts never fail. A radius query
/// scans `ceil(radius / cell_size)` rings of cells around the centre cell, which is exactly
/// the 3×3 block whenever `radius <= cell_size`. Sizing the cell to the detection range keeps
/// queries at nine cell lookups.
///
/// # Examples
///
/// ```
/// use rs_boids::models::Vec2;
/// use rs_boids::spatial::{SpatialHash, SpatialIndex};
///
/// let mut grid = SpatialHash::new(10.0);
/// grid.insert(0, Vec2::new(-0.5, 3.0));
/// grid.insert(1, Vec2::new(9.5, 3.0));
/// assert_eq!(grid.cell_key(Vec2::new(-0.5, 3.0)), (-1, 0));
/// assert_eq!(grid.query_radius(Vec2::new(0.0, 3.0), 10.0), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SpatialHash {
    cell_size: f64,
    cells: HashMap<CellKey, Vec<IndexEntry>>,
    len: usize,
}

impl SpatialHash {
    pub fn new(cell_size: f64) -> Self {
        SpatialHash { cell_size, cells: HashMap::new(), len: 0 }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    #[inline]
    pub fn cell_key(&self, position: Vec2) -> CellKey {
        (
            (position.x / self.cell_size).floor() as i64,
            (position.y / self.cell_size).floor() as i64,
        )
    }

    /// Entries stored in the cell that contains `position`.
    pub fn cell_entries(&self, position: Vec2) -> &[IndexEntry] {
        self.cells
            .get(&self.cell_key(position))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of non-empty cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// How many rings of neighbouring cells a query of `radius` has to scan.
    #[inline]
    fn radius_in_cells(&self, radius: f64) -> i64 {
        ((radius / self.cell_size).ceil() as i64).max(1)
    }

    fn visit_cells(&self, min: CellKey, max: CellKey, mut visit: impl FnMut(&IndexEntry)) {
        for cx in min.0..=max.0 {
            for cy in min.1..=max.1 {
                if let Some(entries) = self.cells.get(&(cx, cy)) {
                    entries.iter().for_each(&mut visit);
                }
            }
        }
    }
}

impl SpatialIndex for SpatialHash {
    fn clear(&mut self) {
        self.cells.clear();
        self.len = 0;
    }

    fn insert(&mut self, id: BoidId, position: Vec2) -> bool {
        let key = self.cell_key(position);
        self.cells.entry(key).or_default().push(IndexEntry { id, position });
        self.len += 1;
        true
    }

    fn len(&self) -> usize {
        self.len
    }

    fn visit_radius(&self, center: Vec2, radius: f64, visit: &mut dyn FnMut(IndexEntry)) {
        let (cx, cy) = self.cell_key(center);
        let rings = self.radius_in_cells(radius);
        let radius_squared = radius * radius;
        self.visit_cells((cx - rings, cy - rings), (cx + rings, cy + rings), |entry| {
            if within_radius(center, entry.position, radius_squared) {
                visit(*entry);
            }
        });
    }

    fn visit_rect(&self, rect: &Rect, visit: &mut dyn FnMut(IndexEntry)) {
        let min = self.cell_key(rect.min);
        let max = self.cell_key(rect.max);
        self.visit_cells(min, max, |entry| {
            if within_rect(rect, entry.position) {
                visit(*entry);
            }
        });
    }
}
