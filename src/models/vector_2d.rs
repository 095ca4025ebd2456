use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

/// A 2D vector used for both positions and velocities.
///
/// All operations are pure; normalizing or clamping a zero vector yields the zero vector
/// instead of dividing by zero.
///
/// # Examples
///
/// ```
/// use rs_boids::models::Vec2;
///
/// let v = Vec2::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v.magnitude_squared(), 25.0);
/// assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Builds a vector of the given length pointing at `angle` radians.
    #[inline]
    pub fn from_angle(angle: f64, length: f64) -> Self {
        Vec2::new(angle.cos() * length, angle.sin() * length)
    }

    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns the unit vector pointing in the same direction, or `Vec2::ZERO` when the
    /// vector has no length.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_boids::models::Vec2;
    ///
    /// let n = Vec2::new(0.0, -2.5).normalize();
    /// assert_eq!(n, Vec2::new(0.0, -1.0));
    /// ```
    #[inline]
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Vec2::new(self.x / mag, self.y / mag)
        } else {
            Vec2::ZERO
        }
    }

    /// Component-wise product.
    #[inline]
    pub fn component_mul(self, other: Vec2) -> Self {
        Vec2::new(self.x * other.x, self.y * other.y)
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn distance_squared(self, other: Vec2) -> f64 {
        (self - other).magnitude_squared()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Angle of the vector in radians, measured from the positive x axis.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Caps the magnitude at `max`, keeping the direction.
    #[inline]
    pub fn limit(self, max: f64) -> Self {
        if self.magnitude_squared() > max * max {
            self.normalize() * max
        } else {
            self
        }
    }

    /// Rescales the vector so its magnitude lies in `[min, max]`.
    ///
    /// Vectors already inside the range are returned unchanged, which makes the operation
    /// idempotent. A zero vector stays zero since it has no direction to rescale along.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_boids::models::Vec2;
    ///
    /// let fast = Vec2::new(10.0, 0.0).clamp_magnitude(1.0, 5.0);
    /// assert_eq!(fast, Vec2::new(5.0, 0.0));
    ///
    /// let slow = Vec2::new(0.0, 0.5).clamp_magnitude(1.0, 5.0);
    /// assert_eq!(slow, Vec2::new(0.0, 1.0));
    /// ```
    pub fn clamp_magnitude(self, min: f64, max: f64) -> Self {
        let mag_sq = self.magnitude_squared();
        if mag_sq > max * max {
            self.normalize() * max
        } else if mag_sq < min * min {
            self.normalize() * min
        } else {
            self
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f64> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl DivAssign<f64> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from(coords: (f64, f64)) -> Self {
        Vec2::new(coords.0, coords.1)
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

impl AbsDiffEq for Vec2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon) && f64::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl RelativeEq for Vec2 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}
