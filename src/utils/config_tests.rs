use std::f64::consts::PI;

use crate::errors::FlockError;
use crate::utils::{AdaptiveRange, FlockConfig, IndexKind, DEFAULT_FLOCK_CONFIG};

#[test]
fn test_default_config_is_valid() {
    assert!(FlockConfig::default().validate().is_ok());
    assert_eq!(FlockConfig::default(), DEFAULT_FLOCK_CONFIG);
}

#[test]
fn test_min_speed_above_max_speed_is_rejected() {
    let config = FlockConfig { min_speed: 90.0, max_speed: 80.0, ..FlockConfig::default() };
    match config.validate() {
        Err(FlockError::InvalidSpeedRange { min, max }) => {
            assert_eq!(min, 90.0);
            assert_eq!(max, 80.0);
        }
        other => panic!("Expected InvalidSpeedRange, got {:?}", other),
    }
}

#[test]
fn test_equal_speeds_are_allowed() {
    let config = FlockConfig { min_speed: 50.0, max_speed: 50.0, ..FlockConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn test_negative_weights_are_rejected() {
    let cases = [
        (FlockConfig { cohesion_weight: -0.1, ..FlockConfig::default() }, "cohesion_weight"),
        (FlockConfig { separation_weight: -1.0, ..FlockConfig::default() }, "separation_weight"),
        (FlockConfig { alignment_weight: -2.0, ..FlockConfig::default() }, "alignment_weight"),
        (FlockConfig { touch_weight: -0.5, ..FlockConfig::default() }, "touch_weight"),
        (FlockConfig { randomness: -3.0, ..FlockConfig::default() }, "randomness"),
    ];
    for (config, field) in cases {
        assert_eq!(config.validate(), Err(FlockError::InvalidWeight(field)));
    }
}

#[test]
fn test_nan_weight_is_rejected() {
    let config = FlockConfig { alignment_weight: f64::NAN, ..FlockConfig::default() };
    assert_eq!(config.validate(), Err(FlockError::InvalidWeight("alignment_weight")));
}

#[test]
fn test_detection_range_must_be_positive() {
    let config = FlockConfig { detection_range: 0.0, ..FlockConfig::default() };
    assert_eq!(config.validate(), Err(FlockError::InvalidDistance("detection_range")));
}

#[test]
fn test_vision_half_angle_bounds() {
    let full_circle = FlockConfig { vision_half_angle: Some(PI), ..FlockConfig::default() };
    assert!(full_circle.validate().is_ok());

    let too_wide = FlockConfig { vision_half_angle: Some(PI + 0.01), ..FlockConfig::default() };
    assert_eq!(too_wide.validate(), Err(FlockError::InvalidAngle));

    let zero = FlockConfig { vision_half_angle: Some(0.0), ..FlockConfig::default() };
    assert_eq!(zero.validate(), Err(FlockError::InvalidAngle));
}

#[test]
fn test_zero_cadence_is_rejected() {
    let config = FlockConfig { rebuild_cadence: 0, ..FlockConfig::default() };
    assert_eq!(config.validate(), Err(FlockError::InvalidCadence));
}

#[test]
fn test_index_parameters_are_checked() {
    let tree = FlockConfig {
        index: IndexKind::QuadTree { subdivision_threshold: 0, min_cell_size: 10.0 },
        ..FlockConfig::default()
    };
    assert!(matches!(tree.validate(), Err(FlockError::InvalidIndexParameters(_))));

    let floor = FlockConfig {
        index: IndexKind::QuadTree { subdivision_threshold: 4, min_cell_size: -1.0 },
        ..FlockConfig::default()
    };
    assert!(matches!(floor.validate(), Err(FlockError::InvalidIndexParameters(_))));

    let grid = FlockConfig { index: IndexKind::SpatialHash { cell_size: 0.0 }, ..FlockConfig::default() };
    assert!(matches!(grid.validate(), Err(FlockError::InvalidIndexParameters(_))));
}

#[test]
fn test_time_step_and_smoothing() {
    let dt = FlockConfig { time_step: 0.0, ..FlockConfig::default() };
    assert_eq!(dt.validate(), Err(FlockError::InvalidTimeStep));

    let smoothing = FlockConfig { heading_smoothing: 1.5, ..FlockConfig::default() };
    assert_eq!(smoothing.validate(), Err(FlockError::InvalidSmoothing));

    let accel = FlockConfig { passive_acceleration: 0.0, ..FlockConfig::default() };
    assert_eq!(accel.validate(), Err(FlockError::InvalidWeight("passive_acceleration")));
}

#[test]
fn test_adaptive_range_must_reach_detection_range() {
    let config = FlockConfig {
        detection_range: 40.0,
        adaptive_range: Some(AdaptiveRange { min_neighbors: 5, max_radius: 30.0 }),
        ..FlockConfig::default()
    };
    assert_eq!(config.validate(), Err(FlockError::InvalidDistance("adaptive_range.max_radius")));

    let ok = FlockConfig {
        adaptive_range: Some(AdaptiveRange { min_neighbors: 5, max_radius: 80.0 }),
        ..FlockConfig::default()
    };
    assert!(ok.validate().is_ok());
}

#[test]
fn test_squared_distances() {
    let config = FlockConfig { separation_distance: 3.0, touch_distance: 4.0, ..FlockConfig::default() };
    assert_eq!(config.separation_distance_squared(), 9.0);
    assert_eq!(config.touch_distance_squared(), 16.0);
}

#[test]
fn test_error_display() {
    let message = FlockError::InvalidWeight("cohesion_weight").to_string();
    assert!(message.contains("cohesion_weight"));
    assert_eq!(FlockError::UnknownBoid(7).to_string(), "No boid with id 7");
}
