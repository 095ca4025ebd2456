use log::trace;

use crate::models::{Rect, Vec2};
use crate::spatial::spatial_index::{within_radius, within_rect};
use crate::spatial::{BoidId, IndexEntry, SpatialIndex};

/// A node of the quad-tree.
///
/// Nodes live in the tree's arena (`QuadTree::nodes`); children are referenced by the index
/// of the first of four consecutive slots, ordered NW, NE, SW, SE as in [`Rect::subdivide`].
#[derive(Debug, Clone)]
struct QuadNode {
    bounds: Rect,
    entries: Vec<IndexEntry>,
    first_child: Option<usize>,
}

impl QuadNode {
    fn new(bounds: Rect) -> Self {
        QuadNode { bounds, entries: Vec::new(), first_child: None }
    }
}

/// Adaptive region quad-tree over boid positions.
///
/// A node keeps the first `subdivision_threshold` boids that reach it. The next insert
/// splits it into four quadrants, provided both of its sides are still larger than
/// `min_cell_size`, and every later insert descends into the matching quadrant. A node at
/// the size floor keeps absorbing boids, so clusters of coincident points cannot cause
/// unbounded subdivision.
///
/// # Examples
///
/// ```
/// use rs_boids::models::{Rect, Vec2};
/// use rs_boids::spatial::{QuadTree, SpatialIndex};
///
/// let mut tree = QuadTree::new(Rect::from_origin_size(0.0, 0.0, 100.0, 100.0), 2, 10.0);
/// assert!(tree.insert(0, Vec2::new(10.0, 10.0)));
/// assert!(tree.insert(1, Vec2::new(12.0, 10.0)));
/// assert!(tree.insert(2, Vec2::new(90.0, 90.0)));
/// assert!(!tree.insert(3, Vec2::new(150.0, 10.0))); // outside the root, dropped
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.query_radius(Vec2::new(10.0, 10.0), 5.0), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct QuadTree {
    bounds: Rect,
    subdivision_threshold: usize,
    min_cell_size: f64,
    nodes: Vec<QuadNode>,
    len: usize,
}

impl QuadTree {
    pub fn new(bounds: Rect, subdivision_threshold: usize, min_cell_size: f64) -> Self {
        QuadTree {
            bounds,
            subdivision_threshold: subdivision_threshold.max(1),
            min_cell_size,
            nodes: vec![QuadNode::new(bounds)],
            len: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of nodes currently allocated, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest node; a tree that never split has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(0usize, 0usize)];
        while let Some((idx, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some(first) = self.nodes[idx].first_child {
                for child in first..first + 4 {
                    stack.push((child, depth + 1));
                }
            }
        }
        deepest
    }

    fn can_subdivide(&self, bounds: &Rect) -> bool {
        bounds.width() > self.min_cell_size && bounds.height() > self.min_cell_size
    }

    fn subdivide(&mut self, idx: usize) -> usize {
        let first = self.nodes.len();
        for quadrant in self.nodes[idx].bounds.subdivide() {
            self.nodes.push(QuadNode::new(quadrant));
        }
        self.nodes[idx].first_child = Some(first);
        first
    }
}

impl SpatialIndex for QuadTree {
    fn clear(&mut self) {
        self.nodes.truncate(1);
        let root = &mut self.nodes[0];
        root.entries.clear();
        root.first_child = None;
        self.len = 0;
    }

    fn insert(&mut self, id: BoidId, position: Vec2) -> bool {
        // The root accepts its upper edges too; below the root the quadrant is picked by
        // comparing against the midlines, so no point can fall between children.
        if !self.bounds.contains_closed(position) {
            trace!("quad-tree dropped boid {} at ({}, {}) outside the root", id, position.x, position.y);
            return false;
        }

        let mut idx = 0;
        loop {
            let node = &self.nodes[idx];
            if let Some(first) = node.first_child {
                idx = first + node.bounds.quadrant_of(position);
                continue;
            }
            if node.entries.len() < self.subdivision_threshold || !self.can_subdivide(&node.bounds) {
                self.nodes[idx].entries.push(IndexEntry { id, position });
                self.len += 1;
                return true;
            }
            let quadrant = node.bounds.quadrant_of(position);
            idx = self.subdivide(idx) + quadrant;
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn visit_radius(&self, center: Vec2, radius: f64, visit: &mut dyn FnMut(IndexEntry)) {
        let radius_squared = radius * radius;
        let mut stack = vec![0usize];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            if !node.bounds.intersects_circle(center, radius) {
                continue;
            }
            for entry in &node.entries {
                if within_radius(center, entry.position, radius_squared) {
                    visit(*entry);
                }
            }
            if let Some(first) = node.first_child {
                stack.extend(first..first + 4);
            }
        }
    }

    fn visit_rect(&self, rect: &Rect, visit: &mut dyn FnMut(IndexEntry)) {
        let mut stack = vec![0usize];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            if !node.bounds.intersects(rect) {
                continue;
            }
            for entry in &node.entries {
                if within_rect(rect, entry.position) {
                    visit(*entry);
                }
            }
            if let Some(first) = node.first_child {
                stack.extend(first..first + 4);
            }
        }
    }
}
