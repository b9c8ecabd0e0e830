#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// round_half_up
// =============================================================

#[test]
fn rounds_to_nearest() {
    assert_eq!(round_half_up(1.4), 1);
    assert_eq!(round_half_up(1.6), 2);
    assert_eq!(round_half_up(-1.4), -1);
    assert_eq!(round_half_up(-1.6), -2);
}

#[test]
fn halves_round_toward_positive_infinity() {
    assert_eq!(round_half_up(2.5), 3);
    assert_eq!(round_half_up(-2.5), -2);
    assert_eq!(round_half_up(-0.5), 0);
}

// =============================================================
// Position
// =============================================================

#[test]
fn position_round_rounds_each_component() {
    let p = Position::round(10.49, 10.5);
    assert_eq!(p, Position::new(10, 11));
}

#[test]
fn position_default_is_origin() {
    assert_eq!(Position::default(), Position::new(0, 0));
}

#[test]
fn position_to_viewport_adds_surface_offset() {
    let bounds = ClientRect::new(8.0, 120.5, 500.0, 500.0);
    let p = Position::new(10, 20).to_viewport(bounds);
    assert_eq!(p, Point::new(18.0, 140.5));
}

// =============================================================
// Point / ClientRect
// =============================================================

#[test]
fn point_distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.distance_to(b), 5.0);
    assert_eq!(b.distance_to(a), 5.0);
}

#[test]
fn client_rect_to_local_subtracts_offset() {
    let bounds = ClientRect::new(30.0, 40.0, 500.0, 500.0);
    assert_eq!(bounds.to_local(Point::new(35.0, 41.0)), Point::new(5.0, 1.0));
}

#[test]
fn position_serializes_as_xy_object() {
    let json = serde_json::to_value(Position::new(3, -4)).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 3, "y": -4 }));
}
