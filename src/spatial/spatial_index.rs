use crate::models::{Rect, Vec2};
use crate::spatial::{QuadTree, SpatialHash};
use crate::utils::{angle_difference, IndexKind};

/// Handle of a boid: its position in the simulation's boid arena.
pub type BoidId = usize;

/// One stored reference: the boid handle plus the position it was inserted at.
///
/// The index never owns boid state. The stored position is the one the boid had when the
/// index was built, which is what makes a previous-frame index a frozen view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexEntry {
    pub id: BoidId,
    pub position: Vec2,
}

/// Neighbor search over a set of boid positions.
///
/// Implementors only provide storage and the two raw visitors; the id-returning queries and
/// the vision-cone filter are shared.
///
/// Radius queries include entries at distance `<= radius` and always exclude entries at
/// distance zero from the centre, so a boid never finds itself, and two coincident boids
/// never find each other.
pub trait SpatialIndex {
    /// Drops every stored reference.
    fn clear(&mut self);

    /// Stores `id` at `position`. Returns `false` when the position cannot be stored (outside
    /// a bounded index); that case is a silent no-op, not an error.
    fn insert(&mut self, id: BoidId, position: Vec2) -> bool;

    /// Number of stored references.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `visit` for every entry with `0 < distance <= radius` from `center`.
    fn visit_radius(&self, center: Vec2, radius: f64, visit: &mut dyn FnMut(IndexEntry));

    /// Calls `visit` for every entry inside `rect` (edges included), except an entry lying
    /// exactly on the rectangle centre.
    fn visit_rect(&self, rect: &Rect, visit: &mut dyn FnMut(IndexEntry));

    fn query_radius(&self, center: Vec2, radius: f64) -> Vec<BoidId> {
        let mut found = Vec::new();
        self.visit_radius(center, radius, &mut |entry| found.push(entry.id));
        found
    }

    /// Radius query restricted to a vision cone of `half_angle` around `heading`.
    ///
    /// Bearings are compared along the shorter arc, so cones that straddle the ±π seam work.
    fn query_sector(&self, center: Vec2, heading: f64, half_angle: f64, radius: f64) -> Vec<BoidId> {
        let mut found = Vec::new();
        self.visit_radius(center, radius, &mut |entry| {
            let bearing = (entry.position - center).angle();
            if angle_difference(heading, bearing).abs() <= half_angle {
                found.push(entry.id);
            }
        });
        found
    }

    fn query_rect(&self, rect: &Rect) -> Vec<BoidId> {
        let mut found = Vec::new();
        self.visit_rect(rect, &mut |entry| found.push(entry.id));
        found
    }
}

/// The spatial index selected by [`IndexKind`].
///
/// # Examples
///
/// ```
/// use rs_boids::models::{Rect, Vec2};
/// use rs_boids::spatial::{IndexBackend, SpatialIndex};
/// use rs_boids::utils::IndexKind;
///
/// let bounds = Rect::from_origin_size(-50.0, -50.0, 200.0, 200.0);
/// let mut index = IndexBackend::new(IndexKind::SpatialHash { cell_size: 5.0 }, bounds);
/// index.insert(0, Vec2::new(0.0, 0.0));
/// index.insert(1, Vec2::new(1.0, 0.0));
/// index.insert(2, Vec2::new(0.0, 1.0));
/// index.insert(3, Vec2::new(100.0, 100.0));
///
/// let mut found = index.query_radius(Vec2::new(0.0, 0.0), 5.0);
/// found.sort();
/// assert_eq!(found, vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub enum IndexBackend {
    QuadTree(QuadTree),
    SpatialHash(SpatialHash),
}

impl IndexBackend {
    /// Builds an empty index. `bounds` is the root rectangle of a quad-tree and is ignored by
    /// the unbounded hash grid.
    pub fn new(kind: IndexKind, bounds: Rect) -> Self {
        match kind {
            IndexKind::QuadTree { subdivision_threshold, min_cell_size } => {
                IndexBackend::QuadTree(QuadTree::new(bounds, subdivision_threshold, min_cell_size))
            }
            IndexKind::SpatialHash { cell_size } => IndexBackend::SpatialHash(SpatialHash::new(cell_size)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IndexBackend::QuadTree(_) => "quad-tree",
            IndexBackend::SpatialHash(_) => "spatial-hash",
        }
    }
}

impl SpatialIndex for IndexBackend {
    fn clear(&mut self) {
        match self {
            IndexBackend::QuadTree(tree) => tree.clear(),
            IndexBackend::SpatialHash(grid) => grid.clear(),
        }
    }

    fn insert(&mut self, id: BoidId, position: Vec2) -> bool {
        match self {
            IndexBackend::QuadTree(tree) => tree.insert(id, position),
            IndexBackend::SpatialHash(grid) => grid.insert(id, position),
        }
    }

    fn len(&self) -> usize {
        match self {
            IndexBackend::QuadTree(tree) => tree.len(),
            IndexBackend::SpatialHash(grid) => grid.len(),
        }
    }

    fn visit_radius(&self, center: Vec2, radius: f64, visit: &mut dyn FnMut(IndexEntry)) {
        match self {
            IndexBackend::QuadTree(tree) => tree.visit_radius(center, radius, visit),
            IndexBackend::SpatialHash(grid) => grid.visit_radius(center, radius, visit),
        }
    }

    fn visit_rect(&self, rect: &Rect, visit: &mut dyn FnMut(IndexEntry)) {
        match self {
            IndexBackend::QuadTree(tree) => tree.visit_rect(rect, visit),
            IndexBackend::SpatialHash(grid) => grid.visit_rect(rect, visit),
        }
    }
}

/// True when `candidate` counts as a radius hit: inside the circle but not on its centre.
#[inline]
pub(crate) fn within_radius(center: Vec2, candidate: Vec2, radius_squared: f64) -> bool {
    let dist_sq = center.distance_squared(candidate);
    dist_sq > 0.0 && dist_sq <= radius_squared
}

/// True when `candidate` is inside `rect` (edges included) but not on its centre.
#[inline]
pub(crate) fn within_rect(rect: &Rect, candidate: Vec2) -> bool {
    rect.contains_closed(candidate) && candidate != rect.center()
}
