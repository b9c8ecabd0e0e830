//! Input model: pointer events, modifier keys, and the gesture state machine.
//!
//! `PointerEvent` is what the host's input source delivers: absolute viewport
//! coordinates plus the modifier keys held at the time. `InputState` is the
//! scene's view of the current pointer stream.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::shape::ShapeId;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift key is held.
    #[serde(default)]
    pub shift: bool,
    /// Ctrl key is held.
    #[serde(default)]
    pub ctrl: bool,
    /// Alt / Option key is held.
    #[serde(default)]
    pub alt: bool,
    /// Meta / Command key is held.
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    /// Whether a click should add to the selection instead of replacing it.
    #[must_use]
    pub fn additive(self) -> bool {
        self.shift
    }
}

/// A pointer-down, -move or -up sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Horizontal position relative to the viewport.
    pub client_x: f64,
    /// Vertical position relative to the viewport.
    pub client_y: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y, modifiers: Modifiers::default() }
    }

    /// Same event with the shift key held.
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}

/// Where the pointer stream currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputState {
    /// Button up, pointer over empty canvas (or no event seen yet).
    #[default]
    Idle,
    /// Button up, pointer over the given shape.
    Hovering(ShapeId),
    /// Button down after pressing on the given shape.
    Dragging(ShapeId),
}
