use approx::assert_relative_eq;

use crate::models::Vec2;

#[test]
fn test_arithmetic() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(3.0, -1.0);
    assert_eq!(a + b, Vec2::new(4.0, 1.0));
    assert_eq!(a - b, Vec2::new(-2.0, 3.0));
    assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    assert_eq!(b / 2.0, Vec2::new(1.5, -0.5));
    assert_eq!(-a, Vec2::new(-1.0, -2.0));
    assert_eq!(a.component_mul(b), Vec2::new(3.0, -2.0));
    assert_eq!(a.dot(b), 1.0);

    let mut c = a;
    c += b;
    c -= Vec2::new(1.0, 1.0);
    c *= 3.0;
    c /= 3.0;
    assert_eq!(c, Vec2::new(3.0, 0.0));
}

#[test]
fn test_normalize_has_unit_length_and_same_direction() {
    let samples = [
        Vec2::new(3.0, 4.0),
        Vec2::new(-0.001, 0.0005),
        Vec2::new(1e6, -2e6),
        Vec2::new(0.0, -7.0),
    ];
    for v in samples {
        let n = v.normalize();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        // Parallel and pointing the same way
        assert_relative_eq!(n.x * v.y - n.y * v.x, 0.0, epsilon = 1e-6 * v.magnitude());
        assert!(n.dot(v) > 0.0);
    }
}

#[test]
fn test_normalize_zero_is_zero() {
    assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
}

#[test]
fn test_clamp_magnitude_within_range_is_noop() {
    let v = Vec2::new(3.0, 4.0);
    assert_eq!(v.clamp_magnitude(1.0, 10.0), v);
    assert_eq!(v.clamp_magnitude(5.0, 5.0), v);
}

#[test]
fn test_clamp_magnitude_is_idempotent() {
    let samples = [Vec2::new(30.0, 40.0), Vec2::new(0.1, 0.2), Vec2::new(-7.0, 2.0)];
    for v in samples {
        let once = v.clamp_magnitude(1.0, 5.0);
        let twice = once.clamp_magnitude(1.0, 5.0);
        assert_relative_eq!(once, twice, epsilon = 1e-12);
        assert!(once.magnitude() <= 5.0 + 1e-12 && once.magnitude() >= 1.0 - 1e-12);
    }
}

#[test]
fn test_clamp_magnitude_keeps_direction() {
    let v = Vec2::new(30.0, 40.0).clamp_magnitude(1.0, 5.0);
    assert_relative_eq!(v, Vec2::new(3.0, 4.0), epsilon = 1e-12);
    let w = Vec2::new(0.3, 0.4).clamp_magnitude(1.0, 5.0);
    assert_relative_eq!(w, Vec2::new(0.6, 0.8), epsilon = 1e-12);
}

#[test]
fn test_clamp_zero_vector_stays_zero() {
    assert_eq!(Vec2::ZERO.clamp_magnitude(1.0, 5.0), Vec2::ZERO);
}

#[test]
fn test_limit() {
    assert_relative_eq!(Vec2::new(0.0, 10.0).limit(2.0), Vec2::new(0.0, 2.0));
    assert_eq!(Vec2::new(0.5, 0.0).limit(2.0), Vec2::new(0.5, 0.0));
}

#[test]
fn test_distances() {
    let a = Vec2::new(1.0, 1.0);
    let b = Vec2::new(4.0, 5.0);
    assert_eq!(a.distance_squared(b), 25.0);
    assert_eq!(a.distance(b), 5.0);
    assert_eq!(b.distance_squared(a), 25.0);
}

#[test]
fn test_angle_and_from_angle() {
    let v = Vec2::from_angle(std::f64::consts::FRAC_PI_2, 2.0);
    assert_relative_eq!(v, Vec2::new(0.0, 2.0), epsilon = 1e-12);
    assert_relative_eq!(v.angle(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn test_tuple_conversions() {
    let v: Vec2 = (1.5, -2.0).into();
    assert_eq!(v, Vec2::new(1.5, -2.0));
    let t: (f64, f64) = v.into();
    assert_eq!(t, (1.5, -2.0));
}
