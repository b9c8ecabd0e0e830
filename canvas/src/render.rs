//! Rendering: draws shapes and their interaction outlines to a [`DrawContext`].
//!
//! Every routine here reads shape state and produces draw calls; none of them
//! mutate anything. The scene decides *when* to call them (full redraw versus
//! a single hover outline pass).

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use crate::consts::{
    HOVER_OUTLINE_COLOR, HOVER_OUTLINE_SIZE, OUTLINE_SIZE, SELECT_LINE_WIDTH, SELECT_OUTLINE_COLOR,
    SELECT_OUTLINE_SIZE,
};
use crate::shape::{Geometry, Shape};
use crate::surface::DrawContext;

/// Wipe the whole surface.
pub fn clear(ctx: &mut dyn DrawContext, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

/// Draw a shape with its outlines: fill first, then the hover outline, then
/// the selection outline so it stays visible when both states are set.
pub fn draw_shape(ctx: &mut dyn DrawContext, shape: &Shape) {
    draw_fill(ctx, shape);
    if shape.is_hovered() {
        draw_hover_outline(ctx, shape);
    }
    if shape.is_selected() {
        draw_select_outline(ctx, shape);
    }
}

// =============================================================
// Fill
// =============================================================

/// Draw the shape body in its fill color.
pub fn draw_fill(ctx: &mut dyn DrawContext, shape: &Shape) {
    match shape.geometry() {
        Geometry::Circle { radius } => {
            let (cx, cy) = circle_center(shape);
            ctx.begin_path();
            ctx.arc(cx, cy, radius, 0.0, TAU, true);
            ctx.close_path();
            ctx.set_fill_style(shape.color());
            ctx.fill();
        }
        Geometry::Rectangle { width, height } => {
            ctx.set_fill_style(shape.color());
            ctx.fill_rect(f64::from(shape.x()), f64::from(shape.y()), width, height);
        }
    }
}

// =============================================================
// Outlines
// =============================================================

/// Translucent halo around the shape.
pub fn draw_hover_outline(ctx: &mut dyn DrawContext, shape: &Shape) {
    match shape.geometry() {
        Geometry::Circle { radius } => {
            let (cx, cy) = circle_center(shape);
            ctx.begin_path();
            ctx.arc(cx, cy, radius + HOVER_OUTLINE_SIZE, 0.0, TAU, true);
            ctx.close_path();
            ctx.set_fill_style(HOVER_OUTLINE_COLOR);
            ctx.fill();
            // The halo is a filled disc; put the body back on top of it.
            draw_fill(ctx, shape);
        }
        Geometry::Rectangle { width, height } => {
            let size = OUTLINE_SIZE;
            ctx.set_line_width(size * 2.0);
            ctx.set_stroke_style(HOVER_OUTLINE_COLOR);
            ctx.stroke_rect(
                f64::from(shape.x()) - size,
                f64::from(shape.y()) - size,
                width + size * 2.0,
                height + size * 2.0,
            );
        }
    }
}

/// Selection ring, drawn outside the hover halo.
pub fn draw_select_outline(ctx: &mut dyn DrawContext, shape: &Shape) {
    ctx.set_stroke_style(SELECT_OUTLINE_COLOR);
    ctx.set_line_width(SELECT_LINE_WIDTH);
    match shape.geometry() {
        Geometry::Circle { radius } => {
            let (cx, cy) = circle_center(shape);
            ctx.begin_path();
            ctx.arc(cx, cy, radius + SELECT_OUTLINE_SIZE * 2.0, 0.0, TAU, true);
            ctx.stroke();
            ctx.close_path();
        }
        Geometry::Rectangle { width, height } => {
            let size = OUTLINE_SIZE + 1.0;
            ctx.stroke_rect(
                f64::from(shape.x()) - size * 2.0,
                f64::from(shape.y()) - size * 2.0,
                width + size * 4.0,
                height + size * 4.0,
            );
        }
    }
}

// =============================================================
// Helpers
// =============================================================

fn circle_center(shape: &Shape) -> (f64, f64) {
    let center = shape.center();
    (f64::from(center.x), f64::from(center.y))
}
