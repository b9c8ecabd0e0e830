//! In-memory store of live shapes, keyed by id.
//!
//! Insertion order is the z-order: each inserted shape is stamped with the
//! next z-index, so later shapes are drawn above earlier ones and win hit
//! ties. Re-inserting an existing id replaces the shape but keeps its slot.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::shape::{Shape, ShapeId};

/// Shapes owned by a scene.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: HashMap<ShapeId, Shape>,
    next_z: i64,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a shape on top of the stack, or replace an existing shape with
    /// the same id in place.
    pub fn insert(&mut self, mut shape: Shape) {
        let z_index = match self.shapes.get(&shape.id()) {
            Some(existing) => existing.z_index(),
            None => {
                let z = self.next_z;
                self.next_z += 1;
                z
            }
        };
        shape.set_z_index(z_index);
        self.shapes.insert(shape.id(), shape);
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        self.shapes.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    /// All shapes bottom-first, the order they are drawn in.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.values().collect();
        shapes.sort_by_key(|s| s.z_index());
        shapes
    }

    /// Ids top-first, the order hit-tests scan in.
    #[must_use]
    pub fn ids_top_down(&self) -> Vec<ShapeId> {
        self.sorted().iter().rev().map(|s| s.id()).collect()
    }

    /// Mutable access to every shape, in no particular order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.values_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
