//! Coordinate types shared by the shape model, the drag tracker and the scene.
//!
//! Two coordinate frames exist. Pointer events arrive in *viewport* space
//! (relative to the browser window) as raw [`Point`]s. Shapes live in
//! *canvas-local* space, always on whole pixels, as [`Position`]s. The
//! surface's on-screen [`ClientRect`] translates between the two.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// Round to the nearest integer with halves going toward positive infinity,
/// matching the browser's `Math.round` (`-2.5` rounds to `-2`).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// An integer-rounded 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a position from fractional coordinates, rounding each component.
    #[must_use]
    pub fn round(x: f64, y: f64) -> Self {
        Self { x: round_half_up(x), y: round_half_up(y) }
    }

    /// Translate into viewport space using the surface's on-screen rectangle.
    #[must_use]
    pub fn to_viewport(self, bounds: ClientRect) -> Point {
        Point::new(f64::from(self.x) + bounds.left, f64::from(self.y) + bounds.top)
    }
}

/// A raw pointer coordinate in viewport space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// On-screen bounding rectangle of the rendering surface, in viewport space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Convert a viewport point into canvas-local coordinates.
    #[must_use]
    pub fn to_local(&self, viewport: Point) -> Point {
        Point::new(viewport.x - self.left, viewport.y - self.top)
    }
}
