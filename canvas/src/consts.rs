//! Shared numeric constants for the canvas crate.

// ── Shape defaults ──────────────────────────────────────────────

/// Radius of a freshly created circle, in pixels.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 10.0;

/// Width of a freshly created rectangle, in pixels.
pub const DEFAULT_RECT_WIDTH: f64 = 100.0;

/// Height of a freshly created rectangle, in pixels.
pub const DEFAULT_RECT_HEIGHT: f64 = 100.0;

/// Fill color of a freshly created shape.
pub const DEFAULT_SHAPE_COLOR: &str = "black";

/// Smallest accepted width, height or radius. Below this a rectangle's
/// rounded center can land on or past its open edge.
pub const MIN_SHAPE_LENGTH: f64 = 2.0;

// ── Outlines ────────────────────────────────────────────────────

/// Base outline thickness shared by hover and selection rings, in pixels.
pub const OUTLINE_SIZE: f64 = 2.0;

/// How far the circle hover halo extends past the radius.
pub const HOVER_OUTLINE_SIZE: f64 = 4.0;

/// Translucent hover color.
pub const HOVER_OUTLINE_COLOR: &str = "rgba(30, 144, 255, 0.35)";

/// Gap unit between a circle's edge and its selection ring.
pub const SELECT_OUTLINE_SIZE: f64 = 3.0;

/// Selection ring color.
pub const SELECT_OUTLINE_COLOR: &str = "#1E90FF";

/// Line width of the selection ring.
pub const SELECT_LINE_WIDTH: f64 = 1.0;

// ── Property panel ──────────────────────────────────────────────

/// Rectangle width/height slider range.
pub const RECT_SIDE_MIN: f64 = 10.0;
pub const RECT_SIDE_MAX: f64 = 400.0;

/// Circle radius slider range.
pub const CIRCLE_RADIUS_MIN: f64 = 10.0;
pub const CIRCLE_RADIUS_MAX: f64 = 200.0;
