use crate::models::Vec2;

/// An axis-aligned rectangle.
///
/// Used for the world bounds, for quad-tree cells and for rectangle queries. Containment is
/// half-open (inclusive lower bound, exclusive upper bound) so that points lying on a shared
/// edge belong to exactly one of two neighbouring cells.
///
/// # Examples
///
/// ```
/// use rs_boids::models::{Rect, Vec2};
///
/// let rect = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
/// assert!(rect.contains(Vec2::new(0.0, 5.0)));
/// assert!(!rect.contains(Vec2::new(10.0, 5.0))); // upper edge is exclusive
/// assert!(rect.contains_closed(Vec2::new(10.0, 5.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Rect { min, max }
    }

    /// Builds a rectangle from its lower corner and size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect::new(Vec2::new(x, y), Vec2::new(x + width, y + height))
    }

    /// Builds the square of half-side `half_extent` centred on `center`.
    pub fn around(center: Vec2, half_extent: f64) -> Self {
        Rect::new(
            Vec2::new(center.x - half_extent, center.y - half_extent),
            Vec2::new(center.x + half_extent, center.y + half_extent),
        )
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }

    /// True for rectangles with a positive, finite extent on both axes.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.width() > 0.0 && self.height() > 0.0
    }

    /// Half-open containment test.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Closed containment test; includes the upper edges.
    #[inline]
    pub fn contains_closed(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns true if the circle of `radius` around `center` can overlap this rectangle.
    ///
    /// Compares the squared distance from the circle centre to the closest point of the
    /// rectangle, so no square root is taken.
    #[inline]
    pub fn intersects_circle(&self, center: Vec2, radius: f64) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        closest.distance_squared(center) <= radius * radius
    }

    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Splits the rectangle into four equal quadrants (NW, NE, SW, SE), with north being
    /// the positive y direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_boids::models::{Rect, Vec2};
    ///
    /// let rect = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
    /// let [nw, ne, sw, se] = rect.subdivide();
    /// assert!(nw.contains(Vec2::new(0.5, 1.5)));
    /// assert!(ne.contains(Vec2::new(1.5, 1.5)));
    /// assert!(sw.contains(Vec2::new(0.5, 0.5)));
    /// assert!(se.contains(Vec2::new(1.5, 0.5)));
    /// ```
    pub fn subdivide(&self) -> [Rect; 4] {
        let c = self.center();
        [
            Rect::new(Vec2::new(self.min.x, c.y), Vec2::new(c.x, self.max.y)), // NW
            Rect::new(c, self.max),                                            // NE
            Rect::new(self.min, c),                                            // SW
            Rect::new(Vec2::new(c.x, self.min.y), Vec2::new(self.max.x, c.y)), // SE
        ]
    }

    /// Index into [`Rect::subdivide`] of the quadrant that owns `p`.
    ///
    /// Points on the vertical or horizontal midline go to the east or north quadrant, which
    /// matches the half-open rule of the quadrants themselves.
    #[inline]
    pub fn quadrant_of(&self, p: Vec2) -> usize {
        let c = self.center();
        match (p.x >= c.x, p.y >= c.y) {
            (false, true) => 0,
            (true, true) => 1,
            (false, false) => 2,
            (true, false) => 3,
        }
    }
}
