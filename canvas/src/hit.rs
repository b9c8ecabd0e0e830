//! Hit resolution across overlapping shapes.
//!
//! Shapes are scanned from the last inserted to the first and the scan stops at
//! the first match, so the topmost shape always wins a tie.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geometry::{ClientRect, Point};
use crate::shape::ShapeId;
use crate::store::ShapeStore;

/// Id of the topmost shape under the viewport-space `pointer`, if any.
#[must_use]
pub fn topmost_at(store: &ShapeStore, pointer: Point, bounds: ClientRect) -> Option<ShapeId> {
    store
        .sorted()
        .into_iter()
        .rev()
        .find(|shape| shape.is_point_over(pointer, bounds))
        .map(|shape| shape.id())
}

/// Ids of every shape under `pointer`, topmost first.
#[must_use]
pub fn all_at(store: &ShapeStore, pointer: Point, bounds: ClientRect) -> Vec<ShapeId> {
    store
        .sorted()
        .into_iter()
        .rev()
        .filter(|shape| shape.is_point_over(pointer, bounds))
        .map(|shape| shape.id())
        .collect()
}
