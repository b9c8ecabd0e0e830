#![allow(clippy::float_cmp)]

use canvas::geometry::Position;
use canvas::input::InputState;
use canvas::shape::ShapeKind;

use super::*;

fn run(source: &str) -> Replay {
    let mut replay = Replay::new(&EditorConfig::default());
    replay.run(&Script::parse(source).unwrap()).unwrap();
    replay
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_every_step_kind() {
    let script = Script::parse(
        r#"{ "steps": [
            { "op": "add", "kind": "circle" },
            { "op": "pointer_down", "x": 1, "y": 2, "shift": true },
            { "op": "pointer_move", "x": 3, "y": 4 },
            { "op": "pointer_up", "x": 3, "y": 4 },
            { "op": "scroll", "left": 10, "top": 20 },
            { "op": "select", "shape": 0 },
            { "op": "unselect", "shape": 0 },
            { "op": "move_shape", "shape": 0, "x": 5, "y": 6 },
            { "op": "set_color", "shape": 0, "color": "red" },
            { "op": "set_width", "shape": 0, "value": 1 },
            { "op": "set_height", "shape": 0, "value": 1 },
            { "op": "set_radius", "shape": 0, "value": 1 },
            { "op": "slider", "shape": 0, "dimension": "radius", "value": 30 },
            { "op": "erase", "shape": 0 },
            { "op": "redraw" }
        ] }"#,
    )
    .unwrap();
    assert_eq!(script.steps.len(), 15);
    assert_eq!(script.steps[1], Step::PointerDown { x: 1.0, y: 2.0, shift: true });
    assert_eq!(script.steps[2], Step::PointerMove { x: 3.0, y: 4.0, shift: false });
    assert_eq!(script.steps[12], Step::Slider { shape: 0, dimension: Dimension::Radius, value: 30.0 });
}

#[test]
fn empty_document_has_no_steps() {
    assert!(Script::parse("{}").unwrap().steps.is_empty());
}

#[test]
fn unknown_op_is_rejected() {
    let err = Script::parse(r#"{ "steps": [{ "op": "rotate" }] }"#).unwrap_err();
    assert!(matches!(err, ReplayError::Json(_)));
}

// =============================================================
// Replay
// =============================================================

#[test]
fn overlapping_click_selects_rectangle() {
    let replay = run(
        r#"{ "steps": [
            { "op": "add", "kind": "circle" },
            { "op": "add", "kind": "rectangle" },
            { "op": "pointer_down", "x": 5, "y": 5 },
            { "op": "pointer_up", "x": 5, "y": 5 }
        ] }"#,
    );
    let rect = replay.added()[1];
    assert_eq!(replay.scene().selected().len(), 1);
    assert_eq!(replay.scene().selected()[0].id, rect);
    assert_eq!(replay.scene().selected()[0].kind, ShapeKind::Rectangle);

    let summary = replay.summary(false);
    assert_eq!(summary.selected, vec![rect]);
    assert_eq!(summary.panel.len(), 1);
    assert!(summary.frame.is_none());
}

#[test]
fn drag_moves_shape() {
    let replay = run(
        r#"{ "steps": [
            { "op": "add", "kind": "rect" },
            { "op": "move_shape", "shape": 0, "x": 10, "y": 10 },
            { "op": "pointer_down", "x": 50, "y": 50 },
            { "op": "pointer_move", "x": 70, "y": 80 },
            { "op": "pointer_up", "x": 70, "y": 80 }
        ] }"#,
    );
    let id = replay.added()[0];
    assert_eq!(replay.scene().shape(&id).unwrap().position(), Position::new(30, 40));
    assert_eq!(replay.scene().input_state(), InputState::Idle);

    let panel = replay.summary(false).panel;
    assert_eq!(panel.get(&id).unwrap().center, Position::new(80, 90));
}

#[test]
fn scroll_shifts_hit_testing() {
    let replay = run(
        r#"{ "steps": [
            { "op": "add", "kind": "circle" },
            { "op": "scroll", "left": 100, "top": 100 },
            { "op": "pointer_move", "x": 108, "y": 112 }
        ] }"#,
    );
    assert_eq!(replay.scene().hovered(), Some(replay.added()[0]));
}

#[test]
fn slider_is_clamped() {
    let replay = run(
        r#"{ "steps": [
            { "op": "add", "kind": "circle" },
            { "op": "pointer_down", "x": 10, "y": 10 },
            { "op": "pointer_up", "x": 10, "y": 10 },
            { "op": "slider", "shape": 0, "dimension": "radius", "value": 999 },
            { "op": "slider", "shape": 0, "dimension": "width", "value": 50 }
        ] }"#,
    );
    let circle = replay.scene().shape(&replay.added()[0]).unwrap();
    assert_eq!(circle.radius(), Some(200.0));
}

#[test]
fn slider_requires_selection() {
    let mut replay = Replay::new(&EditorConfig::default());
    let script = Script::parse(
        r#"{ "steps": [
            { "op": "add", "kind": "rectangle" },
            { "op": "slider", "shape": 0, "dimension": "width", "value": 50 }
        ] }"#,
    )
    .unwrap();
    let err = replay.run(&script).unwrap_err();
    assert!(matches!(err, ReplayError::NotInPanel { step: 1, index: 0 }));
}

#[test]
fn unknown_shape_reference_fails() {
    let mut replay = Replay::new(&EditorConfig::default());
    let err = replay.step(3, &Step::Erase { shape: 2 }).unwrap_err();
    assert_eq!(err.to_string(), "step 3: shape #2 was never added");
}

#[test]
fn unsupported_kind_fails_without_side_effects() {
    let mut replay = Replay::new(&EditorConfig::default());
    let err = replay.step(0, &Step::Add { kind: "hexagon".into() }).unwrap_err();
    assert_eq!(err.to_string(), "step 0: unsupported shape kind: hexagon");
    assert!(replay.scene().is_empty());
    assert!(replay.added().is_empty());
}

#[test]
fn erased_shape_stays_addressable() {
    let replay = run(
        r#"{ "steps": [
            { "op": "add", "kind": "circle" },
            { "op": "erase", "shape": 0 },
            { "op": "erase", "shape": 0 },
            { "op": "set_color", "shape": 0, "color": "red" }
        ] }"#,
    );
    assert!(replay.scene().is_empty());
    assert_eq!(replay.summary(false).redraws, 1);
}

#[test]
fn summary_reports_frame_and_events() {
    let replay = run(
        r#"{ "steps": [
            { "op": "add", "kind": "rectangle" },
            { "op": "set_color", "shape": 0, "color": "green" },
            { "op": "redraw" }
        ] }"#,
    );
    let summary = replay.summary(true);
    assert_eq!(summary.events, 1);
    assert_eq!(summary.redraws, 2);
    let frame = summary.frame.unwrap();
    assert!(frame.contains(&DrawCommand::SetFillStyle { color: "green".into() }));

    let json = serde_json::to_value(replay.summary(true)).unwrap();
    assert_eq!(json["shapes"][0]["color"], "green");
    assert_eq!(json["frame"][0]["op"], "set_fill_style");
}

#[test]
fn config_defaults_reach_new_shapes() {
    let mut config = EditorConfig::default();
    config.shapes.color = "orange".into();
    config.shapes.circle_radius = 20.0;
    let mut replay = Replay::new(&config);
    replay.step(0, &Step::Add { kind: "circle".into() }).unwrap();
    let circle = replay.scene().shape(&replay.added()[0]).unwrap();
    assert_eq!(circle.color(), "orange");
    assert_eq!(circle.radius(), Some(20.0));
}
