//! Rendering-surface contract.
//!
//! The scene never talks to a concrete canvas. It needs the surface's
//! on-screen rectangle (to translate pointer coordinates), its pixel size (to
//! clear it) and a 2D context with a small set of path and rectangle
//! primitives. [`RecordingSurface`] implements the contract in memory and is
//! what tests and the headless driver render into; the browser adapter lives
//! in `web` behind the `web` feature.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use serde::Serialize;

use crate::geometry::ClientRect;

/// 2D drawing primitives the renderer relies on.
pub trait DrawContext {
    fn begin_path(&mut self);
    fn close_path(&mut self);
    /// Add an arc from `start` to `end` radians around `(x, y)`.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
}

/// A clearable drawing surface with known bounds.
pub trait Surface {
    /// Current on-screen rectangle, in viewport coordinates.
    fn bounding_rect(&self) -> ClientRect;
    /// Pixel width of the drawing buffer.
    fn width(&self) -> f64;
    /// Pixel height of the drawing buffer.
    fn height(&self) -> f64;
    /// The 2D context, or `None` while it is not available yet.
    fn context(&mut self) -> Option<&mut dyn DrawContext>;
}

/// One recorded call against a [`DrawContext`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    BeginPath,
    ClosePath,
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool },
    Fill,
    Stroke,
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeRect { x: f64, y: f64, width: f64, height: f64 },
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    SetFillStyle { color: String },
    SetStrokeStyle { color: String },
    SetLineWidth { width: f64 },
}

/// Context that appends every call to a command log.
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl DrawContext for RecordingContext {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        self.commands.push(DrawCommand::Arc { x, y, radius, start, end, anticlockwise });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::StrokeRect { x, y, width, height });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetFillStyle { color: color.to_owned() });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetStrokeStyle { color: color.to_owned() });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth { width });
    }
}

/// In-memory surface that records draw calls.
#[derive(Debug)]
pub struct RecordingSurface {
    bounds: ClientRect,
    context: RecordingContext,
    available: bool,
}

impl RecordingSurface {
    /// A surface of `width × height` pixels placed at `(left, top)` in the viewport.
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { bounds: ClientRect::new(left, top, width, height), context: RecordingContext::default(), available: true }
    }

    /// Toggle context availability to simulate a surface that is still mounting.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Move the surface on screen, as scrolling the page would.
    pub fn move_to(&mut self, left: f64, top: f64) {
        self.bounds.left = left;
        self.bounds.top = top;
    }

    /// Every command recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        self.context.commands()
    }

    /// Drain the command log.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.context.commands)
    }

    /// Commands since the most recent full clear, i.e. what is on screen now.
    #[must_use]
    pub fn current_frame(&self) -> &[DrawCommand] {
        let commands = self.context.commands();
        let start = commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::ClearRect { .. }))
            .map_or(0, |i| i + 1);
        &commands[start..]
    }

    /// Number of full clears recorded, one per redraw.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.context
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::ClearRect { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn bounding_rect(&self) -> ClientRect {
        self.bounds
    }

    fn width(&self) -> f64 {
        self.bounds.width
    }

    fn height(&self) -> f64 {
        self.bounds.height
    }

    fn context(&mut self) -> Option<&mut dyn DrawContext> {
        if self.available {
            Some(&mut self.context)
        } else {
            None
        }
    }
}
