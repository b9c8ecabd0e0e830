//! Shape model: identity, placement, color, interaction flags and per-kind
//! geometry for every drawable object on the canvas.
//!
//! The variant set is closed. [`Geometry`] carries the per-kind data and every
//! operation that depends on the kind (`width`, `center`, hit-testing, the
//! outline routines in [`crate::render`]) matches on it exhaustively.
//!
//! State toggles return `true` only when they actually change something, so
//! the scene can decide whether a redraw or a panel update is needed.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    DEFAULT_CIRCLE_RADIUS, DEFAULT_RECT_HEIGHT, DEFAULT_RECT_WIDTH, DEFAULT_SHAPE_COLOR, MIN_SHAPE_LENGTH,
};
use crate::drag::DragGesture;
use crate::geometry::{ClientRect, Point, Position};
use crate::scene::SceneError;

/// Unique identifier for a shape. Time-ordered, never reused.
pub type ShapeId = Uuid;

/// Allocate a fresh shape identifier.
#[must_use]
pub fn next_shape_id() -> ShapeId {
    Uuid::now_v7()
}

/// The kind of a shape, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Circle anchored at the top-left of its bounding box.
    Circle,
    /// Axis-aligned rectangle.
    Rectangle,
}

impl ShapeKind {
    /// Lowercase display name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "rectangle" | "rect" => Ok(Self::Rectangle),
            _ => Err(SceneError::UnsupportedShapeKind(s.to_owned())),
        }
    }
}

/// Per-kind geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Bounding box is derived as `2 × radius` on both axes.
    Circle { radius: f64 },
    /// Bounding box is stored directly.
    Rectangle { width: f64, height: f64 },
}

impl Geometry {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }
}

/// Geometry and color given to newly created shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeDefaults {
    pub circle_radius: f64,
    pub rect_width: f64,
    pub rect_height: f64,
    pub color: String,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            rect_width: DEFAULT_RECT_WIDTH,
            rect_height: DEFAULT_RECT_HEIGHT,
            color: DEFAULT_SHAPE_COLOR.to_owned(),
        }
    }
}

/// A drawable shape.
#[derive(Debug, Clone)]
pub struct Shape {
    id: ShapeId,
    geometry: Geometry,
    position: Position,
    color: String,
    z_index: i64,
    selected: bool,
    hovered: bool,
    drag: Option<DragGesture>,
}

impl Shape {
    /// Create a shape of `kind` at the canvas origin using `defaults`.
    #[must_use]
    pub fn new(id: ShapeId, kind: ShapeKind, defaults: &ShapeDefaults) -> Self {
        let geometry = match kind {
            ShapeKind::Circle => Geometry::Circle { radius: defaults.circle_radius },
            ShapeKind::Rectangle => Geometry::Rectangle { width: defaults.rect_width, height: defaults.rect_height },
        };
        Self {
            id,
            geometry,
            position: Position::default(),
            color: defaults.color.clone(),
            z_index: 0,
            selected: false,
            hovered: false,
            drag: None,
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.position.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        match self.geometry {
            Geometry::Circle { radius } => radius * 2.0,
            Geometry::Rectangle { width, .. } => width,
        }
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        match self.geometry {
            Geometry::Circle { radius } => radius * 2.0,
            Geometry::Rectangle { height, .. } => height,
        }
    }

    /// Radius for circles, `None` for every other kind.
    #[must_use]
    pub fn radius(&self) -> Option<f64> {
        match self.geometry {
            Geometry::Circle { radius } => Some(radius),
            Geometry::Rectangle { .. } => None,
        }
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Stacking order; higher values are drawn above and hit-tested first.
    #[must_use]
    pub fn z_index(&self) -> i64 {
        self.z_index
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Center of the shape in canvas space.
    #[must_use]
    pub fn center(&self) -> Position {
        let x = f64::from(self.position.x);
        let y = f64::from(self.position.y);
        match self.geometry {
            Geometry::Circle { radius } => Position::round(x + radius, y + radius),
            Geometry::Rectangle { width, height } => Position::round(x + width / 2.0, y + height / 2.0),
        }
    }

    // --- Hit-testing ---

    /// Whether the viewport-space `pointer` falls inside the shape, given the
    /// surface's on-screen rectangle.
    ///
    /// Circles use a closed boundary (distance to center `<= radius`).
    /// Rectangles use an open one: a point on an edge is outside.
    #[must_use]
    pub fn is_point_over(&self, pointer: Point, bounds: ClientRect) -> bool {
        match self.geometry {
            Geometry::Circle { radius } => {
                let center = self.center().to_viewport(bounds);
                pointer.distance_to(center) <= radius
            }
            Geometry::Rectangle { width, height } => {
                let left = f64::from(self.position.x) + bounds.left;
                let top = f64::from(self.position.y) + bounds.top;
                pointer.x > left && pointer.x < left + width && pointer.y > top && pointer.y < top + height
            }
        }
    }

    // --- Interaction flags ---

    pub fn select(&mut self) -> bool {
        !std::mem::replace(&mut self.selected, true)
    }

    pub fn unselect(&mut self) -> bool {
        std::mem::replace(&mut self.selected, false)
    }

    pub fn hover(&mut self) -> bool {
        !std::mem::replace(&mut self.hovered, true)
    }

    pub fn unhover(&mut self) -> bool {
        std::mem::replace(&mut self.hovered, false)
    }

    // --- Dragging ---

    /// Anchor a drag gesture at `pointer`, replacing any gesture in progress.
    pub fn begin_drag(&mut self, pointer: Point, bounds: ClientRect) {
        self.drag = Some(DragGesture::begin(pointer, self.position, bounds));
    }

    /// Feed a pointer-move into the drag gesture.
    ///
    /// Without a gesture in progress this only anchors one and leaves the shape
    /// where it is. Returns `true` when the shape moved.
    pub fn handle_drag_move(&mut self, pointer: Point, bounds: ClientRect) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            self.begin_drag(pointer, bounds);
            return false;
        };
        let next = drag.update(pointer);
        self.set_position(next)
    }

    /// Tear down the drag gesture. Returns `true` if one was active.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    // --- Attribute mutation ---

    pub fn set_position(&mut self, position: Position) -> bool {
        if self.position == position {
            return false;
        }
        self.position = position;
        true
    }

    pub fn set_color(&mut self, color: &str) -> bool {
        if self.color == color {
            return false;
        }
        color.clone_into(&mut self.color);
        true
    }

    /// Set a rectangle's width. Circles derive their box from the radius, so
    /// this is a no-op for them.
    pub fn set_width(&mut self, value: f64) -> bool {
        match &mut self.geometry {
            Geometry::Rectangle { width, .. } if valid_length(value) && *width != value => {
                *width = value;
                true
            }
            _ => false,
        }
    }

    /// Set a rectangle's height. No-op for circles.
    pub fn set_height(&mut self, value: f64) -> bool {
        match &mut self.geometry {
            Geometry::Rectangle { height, .. } if valid_length(value) && *height != value => {
                *height = value;
                true
            }
            _ => false,
        }
    }

    /// Set a circle's radius. No-op for rectangles.
    pub fn set_radius(&mut self, value: f64) -> bool {
        match &mut self.geometry {
            Geometry::Circle { radius } if valid_length(value) && *radius != value => {
                *radius = value;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn set_z_index(&mut self, z_index: i64) {
        self.z_index = z_index;
    }

    /// Immutable snapshot for observers and the property panel.
    #[must_use]
    pub fn view(&self) -> ShapeView {
        ShapeView {
            id: self.id,
            kind: self.kind(),
            x: self.position.x,
            y: self.position.y,
            width: self.width(),
            height: self.height(),
            radius: self.radius(),
            center: self.center(),
            color: self.color.clone(),
            z_index: self.z_index,
            selected: self.selected,
            hovered: self.hovered,
        }
    }
}

fn valid_length(value: f64) -> bool {
    value.is_finite() && value >= MIN_SHAPE_LENGTH
}

/// Point-in-time copy of a shape's observable state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeView {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub x: i32,
    pub y: i32,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    pub center: Position,
    pub color: String,
    pub z_index: i64,
    pub selected: bool,
    pub hovered: bool,
}
