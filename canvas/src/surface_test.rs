#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn recording_surface_reports_bounds() {
    let surface = RecordingSurface::new(10.0, 20.0, 500.0, 400.0);
    assert_eq!(surface.bounding_rect(), ClientRect::new(10.0, 20.0, 500.0, 400.0));
    assert_eq!(surface.width(), 500.0);
    assert_eq!(surface.height(), 400.0);
}

#[test]
fn context_records_calls_in_order() {
    let mut surface = RecordingSurface::new(0.0, 0.0, 100.0, 100.0);
    let ctx = surface.context().unwrap();
    ctx.set_fill_style("red");
    ctx.fill_rect(1.0, 2.0, 3.0, 4.0);
    ctx.begin_path();
    ctx.arc(5.0, 5.0, 2.0, 0.0, 1.0, true);
    ctx.fill();
    assert_eq!(
        surface.commands(),
        &[
            DrawCommand::SetFillStyle { color: "red".into() },
            DrawCommand::FillRect { x: 1.0, y: 2.0, width: 3.0, height: 4.0 },
            DrawCommand::BeginPath,
            DrawCommand::Arc { x: 5.0, y: 5.0, radius: 2.0, start: 0.0, end: 1.0, anticlockwise: true },
            DrawCommand::Fill,
        ]
    );
}

#[test]
fn unavailable_surface_has_no_context() {
    let mut surface = RecordingSurface::new(0.0, 0.0, 100.0, 100.0);
    surface.set_available(false);
    assert!(surface.context().is_none());
    surface.set_available(true);
    assert!(surface.context().is_some());
}

#[test]
fn current_frame_starts_after_last_clear() {
    let mut surface = RecordingSurface::new(0.0, 0.0, 100.0, 100.0);
    let ctx = surface.context().unwrap();
    ctx.fill();
    ctx.clear_rect(0.0, 0.0, 100.0, 100.0);
    ctx.stroke();
    ctx.clear_rect(0.0, 0.0, 100.0, 100.0);
    ctx.begin_path();
    assert_eq!(surface.current_frame(), &[DrawCommand::BeginPath]);
    assert_eq!(surface.clear_count(), 2);
}

#[test]
fn current_frame_without_clear_is_everything() {
    let mut surface = RecordingSurface::new(0.0, 0.0, 100.0, 100.0);
    surface.context().unwrap().fill();
    assert_eq!(surface.current_frame(), &[DrawCommand::Fill]);
}

#[test]
fn take_commands_drains_log() {
    let mut surface = RecordingSurface::new(0.0, 0.0, 100.0, 100.0);
    surface.context().unwrap().stroke();
    assert_eq!(surface.take_commands(), vec![DrawCommand::Stroke]);
    assert!(surface.commands().is_empty());
}

#[test]
fn move_to_shifts_bounds_only() {
    let mut surface = RecordingSurface::new(0.0, 0.0, 100.0, 80.0);
    surface.move_to(15.0, -30.0);
    assert_eq!(surface.bounding_rect(), ClientRect::new(15.0, -30.0, 100.0, 80.0));
}

#[test]
fn commands_serialize_with_op_tag() {
    let json = serde_json::to_value(DrawCommand::FillRect { x: 0.0, y: 0.0, width: 1.0, height: 2.0 }).unwrap();
    assert_eq!(json["op"], "fill_rect");
    assert_eq!(json["height"], 2.0);
}
