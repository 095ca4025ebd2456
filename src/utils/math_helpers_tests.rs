use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;

use crate::utils::{angle_difference, approach_angle, wrap_angle, wrap_coordinate};

#[test]
fn test_wrap_angle_range() {
    for i in -40..40 {
        let angle = i as f64 * 0.37;
        let wrapped = wrap_angle(angle);
        assert!(wrapped > -PI && wrapped <= PI, "angle {} wrapped to {}", angle, wrapped);
        // Same direction after wrapping
        assert_relative_eq!(wrapped.cos(), angle.cos(), epsilon = 1e-9);
        assert_relative_eq!(wrapped.sin(), angle.sin(), epsilon = 1e-9);
    }
}

#[test]
fn test_wrap_angle_keeps_upper_edge() {
    assert_relative_eq!(wrap_angle(-PI), PI, epsilon = 1e-12);
    assert_relative_eq!(wrap_angle(PI), PI, epsilon = 1e-12);
}

#[test]
fn test_angle_difference_takes_short_way() {
    // From just below +pi to just above -pi is a small positive rotation
    let diff = angle_difference(PI - 0.1, -PI + 0.1);
    assert_relative_eq!(diff, 0.2, epsilon = 1e-9);
    assert_relative_eq!(angle_difference(0.0, FRAC_PI_2), FRAC_PI_2, epsilon = 1e-12);
    assert_relative_eq!(angle_difference(FRAC_PI_2, 0.0), -FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn test_approach_angle() {
    assert_relative_eq!(approach_angle(0.0, 1.0, 1.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(approach_angle(0.0, 1.0, 0.25), 0.25, epsilon = 1e-12);
    // Crosses the seam instead of turning the long way round
    let eased = approach_angle(PI - 0.1, -PI + 0.1, 0.5);
    assert_relative_eq!(eased.abs(), PI, epsilon = 1e-9);
}

#[test]
fn test_wrap_coordinate() {
    assert_eq!(wrap_coordinate(105.0, 0.0, 100.0), 5.0);
    assert_eq!(wrap_coordinate(-5.0, 0.0, 100.0), 95.0);
    assert_eq!(wrap_coordinate(100.0, 0.0, 100.0), 0.0);
    assert_eq!(wrap_coordinate(-50.0, -100.0, 200.0), -50.0);
    assert_eq!(wrap_coordinate(250.0, -100.0, 200.0), 50.0);
    let tiny = wrap_coordinate(-1e-18, 0.0, 100.0);
    assert!(tiny >= 0.0 && tiny < 100.0);
}
