//! Browser rendering surface over an `HtmlCanvasElement`.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].

use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::geometry::ClientRect;
use crate::scene::SceneError;
use crate::surface::{DrawContext, Surface};

/// [`DrawContext`] backed by a 2D canvas context.
pub struct WebContext {
    ctx: CanvasRenderingContext2d,
}

impl DrawContext for WebContext {
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        if let Err(err) = self.ctx.arc_with_anticlockwise(x, y, radius, start, end, anticlockwise) {
            warn!(?err, radius, "canvas arc rejected");
        }
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.stroke_rect(x, y, width, height);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }
}

/// A canvas element bound as the scene's rendering surface.
pub struct WebSurface {
    canvas: HtmlCanvasElement,
    context: WebContext,
}

impl WebSurface {
    /// Bind to `canvas`, acquiring its 2D context.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::MissingRenderingSurface`] if the element cannot
    /// provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SceneError> {
        let value = match canvas.get_context("2d") {
            Ok(Some(value)) => value,
            Ok(None) => return Err(SceneError::MissingRenderingSurface),
            Err(err) => {
                warn!(?err, "2d context lookup failed");
                return Err(SceneError::MissingRenderingSurface);
            }
        };
        let ctx = value
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SceneError::MissingRenderingSurface)?;
        Ok(Self { canvas, context: WebContext { ctx } })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for WebSurface {
    fn bounding_rect(&self) -> ClientRect {
        let rect = self.canvas.get_bounding_client_rect();
        ClientRect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn width(&self) -> f64 {
        f64::from(self.canvas.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.canvas.height())
    }

    fn context(&mut self) -> Option<&mut dyn DrawContext> {
        Some(&mut self.context)
    }
}
