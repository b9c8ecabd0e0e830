//! Drag tracker: converts raw pointer positions into shape positions.
//!
//! A [`DragGesture`] is created when a drag starts and lives until pointer-up.
//! Everything is anchored to the viewport frame captured at drag start, so a
//! canvas that scrolls mid-gesture does not make the shape jump.
//!
//! Given the surface origin `(L, T)`, the shape's start position `(x0, y0)` and
//! the pointer-down point `(px0, py0)`:
//!
//! ```text
//! initial  = (L + x0, T + y0)
//! offset   = (px0 - L - x0, py0 - T - y0)
//! moved    = (px - initial.x, py - initial.y)
//! next     = (initial.x - L + moved.x - offset.x, initial.y - T + moved.y - offset.y)
//! ```
//!
//! Every intermediate value is an integer-rounded [`Position`].

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::geometry::{ClientRect, Point, Position};

/// State for one continuous pointer-down-to-pointer-up repositioning.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    /// Surface left edge at drag start.
    canvas_left: f64,
    /// Surface top edge at drag start.
    canvas_top: f64,
    /// Shape position in canvas space at drag start.
    origin: Position,
    /// Shape position in viewport space at drag start.
    initial_shape_position: Position,
    /// Pointer position relative to the shape's top-left, fixed for the gesture.
    pointer_offset: Position,
    /// Pointer position the gesture was anchored at.
    anchor_pointer: Position,
    /// Most recent pointer position.
    last_pointer: Position,
}

impl DragGesture {
    /// Anchor a new gesture at `pointer` for a shape currently at `shape_position`.
    #[must_use]
    pub fn begin(pointer: Point, shape_position: Position, bounds: ClientRect) -> Self {
        let x0 = f64::from(shape_position.x);
        let y0 = f64::from(shape_position.y);
        let anchor_pointer = Position::round(pointer.x, pointer.y);
        Self {
            canvas_left: bounds.left,
            canvas_top: bounds.top,
            origin: shape_position,
            initial_shape_position: Position::round(bounds.left + x0, bounds.top + y0),
            pointer_offset: Position::round(pointer.x - bounds.left - x0, pointer.y - bounds.top - y0),
            anchor_pointer,
            last_pointer: anchor_pointer,
        }
    }

    /// Record a new pointer position and return where the shape should be.
    pub fn update(&mut self, pointer: Point) -> Position {
        self.last_pointer = Position::round(pointer.x, pointer.y);
        self.next_position()
    }

    /// Pointer travel from the shape's initial viewport position.
    #[must_use]
    pub fn distance_moved(&self) -> Position {
        Position::new(
            self.last_pointer.x - self.initial_shape_position.x,
            self.last_pointer.y - self.initial_shape_position.y,
        )
    }

    /// Shape position for the most recent pointer sample, in canvas space.
    ///
    /// A pointer that is back on its anchor maps to the start position exactly,
    /// regardless of sub-pixel surface offsets.
    #[must_use]
    pub fn next_position(&self) -> Position {
        if self.last_pointer == self.anchor_pointer {
            return self.origin;
        }
        let moved = self.distance_moved();
        Position::round(
            f64::from(self.initial_shape_position.x) - self.canvas_left + f64::from(moved.x)
                - f64::from(self.pointer_offset.x),
            f64::from(self.initial_shape_position.y) - self.canvas_top + f64::from(moved.y)
                - f64::from(self.pointer_offset.y),
        )
    }

    #[must_use]
    pub fn initial_shape_position(&self) -> Position {
        self.initial_shape_position
    }

    #[must_use]
    pub fn pointer_offset(&self) -> Position {
        self.pointer_offset
    }

    #[must_use]
    pub fn last_pointer(&self) -> Position {
        self.last_pointer
    }
}
