use crate::models::{Rect, Vec2};

fn unit_square() -> Rect {
    Rect::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0))
}

#[test]
fn test_contains_is_half_open() {
    let rect = unit_square();
    assert!(rect.contains(Vec2::new(0.0, 0.0)));
    assert!(rect.contains(Vec2::new(0.5, 0.999)));
    assert!(!rect.contains(Vec2::new(1.0, 0.5)));
    assert!(!rect.contains(Vec2::new(0.5, 1.0)));
    assert!(!rect.contains(Vec2::new(-0.1, 0.5)));
}

#[test]
fn test_contains_closed_includes_upper_edge() {
    let rect = unit_square();
    assert!(rect.contains_closed(Vec2::new(1.0, 1.0)));
    assert!(!rect.contains_closed(Vec2::new(1.0001, 1.0)));
}

#[test]
fn test_dimensions() {
    let rect = Rect::from_origin_size(-2.0, 3.0, 4.0, 6.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.center(), Vec2::new(0.0, 6.0));
    assert!(rect.is_valid());
    assert!(!Rect::from_origin_size(0.0, 0.0, 0.0, 1.0).is_valid());
}

#[test]
fn test_around() {
    let rect = Rect::around(Vec2::new(5.0, 5.0), 2.0);
    assert_eq!(rect.min, Vec2::new(3.0, 3.0));
    assert_eq!(rect.max, Vec2::new(7.0, 7.0));
}

#[test]
fn test_intersects_circle() {
    let rect = unit_square();
    assert!(rect.intersects_circle(Vec2::new(0.5, 0.5), 0.1)); // centre inside
    assert!(rect.intersects_circle(Vec2::new(2.0, 0.5), 1.0)); // touches the right edge
    assert!(!rect.intersects_circle(Vec2::new(2.0, 0.5), 0.9));
    // Diagonal from the corner: distance sqrt(2) to (1, 1)
    assert!(!rect.intersects_circle(Vec2::new(2.0, 2.0), 1.4));
    assert!(rect.intersects_circle(Vec2::new(2.0, 2.0), 1.5));
}

#[test]
fn test_intersects_rect() {
    let rect = unit_square();
    assert!(rect.intersects(&Rect::from_origin_size(0.5, 0.5, 2.0, 2.0)));
    assert!(!rect.intersects(&Rect::from_origin_size(1.5, 0.0, 1.0, 1.0)));
}

#[test]
fn test_subdivide_covers_parent() {
    let rect = Rect::from_origin_size(0.0, 0.0, 4.0, 4.0);
    let quadrants = rect.subdivide();
    for q in &quadrants {
        assert_eq!(q.width(), 2.0);
        assert_eq!(q.height(), 2.0);
    }
    // Every sample point belongs to exactly one quadrant, and quadrant_of agrees
    for ix in 0..8 {
        for iy in 0..8 {
            let p = Vec2::new(ix as f64 * 0.5, iy as f64 * 0.5);
            let owners: Vec<usize> = (0..4).filter(|&i| quadrants[i].contains(p)).collect();
            assert_eq!(owners.len(), 1, "point {:?} owned by {:?}", p, owners);
            assert_eq!(owners[0], rect.quadrant_of(p));
        }
    }
}
