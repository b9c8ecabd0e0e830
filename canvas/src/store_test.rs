use super::*;
use crate::geometry::Position;
use crate::shape::{ShapeDefaults, ShapeKind, next_shape_id};

fn make_shape(kind: ShapeKind) -> Shape {
    Shape::new(next_shape_id(), kind, &ShapeDefaults::default())
}

#[test]
fn new_store_is_empty() {
    let store = ShapeStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.sorted().is_empty());
}

#[test]
fn insert_stamps_increasing_z() {
    let mut store = ShapeStore::new();
    let a = make_shape(ShapeKind::Circle);
    let b = make_shape(ShapeKind::Rectangle);
    let (a_id, b_id) = (a.id(), b.id());
    store.insert(a);
    store.insert(b);
    assert!(store.get(&a_id).unwrap().z_index() < store.get(&b_id).unwrap().z_index());
}

#[test]
fn sorted_is_insertion_order() {
    let mut store = ShapeStore::new();
    let ids: Vec<ShapeId> = (0..5)
        .map(|i| {
            let shape = make_shape(if i % 2 == 0 { ShapeKind::Circle } else { ShapeKind::Rectangle });
            let id = shape.id();
            store.insert(shape);
            id
        })
        .collect();
    let sorted: Vec<ShapeId> = store.sorted().iter().map(|s| s.id()).collect();
    assert_eq!(sorted, ids);
}

#[test]
fn ids_top_down_reverses_insertion_order() {
    let mut store = ShapeStore::new();
    let a = make_shape(ShapeKind::Circle);
    let b = make_shape(ShapeKind::Circle);
    let c = make_shape(ShapeKind::Rectangle);
    let expected = vec![c.id(), b.id(), a.id()];
    store.insert(a);
    store.insert(b);
    store.insert(c);
    assert_eq!(store.ids_top_down(), expected);
}

#[test]
fn reinsert_keeps_slot() {
    let mut store = ShapeStore::new();
    let a = make_shape(ShapeKind::Rectangle);
    let b = make_shape(ShapeKind::Rectangle);
    let a_id = a.id();
    store.insert(a);
    store.insert(b);

    let mut moved = store.get(&a_id).unwrap().clone();
    moved.set_position(Position::new(40, 40));
    store.insert(moved);

    assert_eq!(store.len(), 2);
    assert_eq!(store.sorted()[0].id(), a_id);
    assert_eq!(store.get(&a_id).unwrap().position(), Position::new(40, 40));
}

#[test]
fn remove_returns_shape_once() {
    let mut store = ShapeStore::new();
    let a = make_shape(ShapeKind::Circle);
    let a_id = a.id();
    store.insert(a);
    assert!(store.contains(&a_id));
    assert!(store.remove(&a_id).is_some());
    assert!(store.remove(&a_id).is_none());
    assert!(!store.contains(&a_id));
}

#[test]
fn z_is_not_reused_after_removal() {
    let mut store = ShapeStore::new();
    let a = make_shape(ShapeKind::Circle);
    let a_id = a.id();
    store.insert(a);
    store.remove(&a_id);
    let b = make_shape(ShapeKind::Circle);
    let b_id = b.id();
    store.insert(b);
    assert_eq!(store.get(&b_id).unwrap().z_index(), 1);
}
