use super::*;

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
    assert!(!m.additive());
}

#[test]
fn only_shift_is_additive() {
    assert!(Modifiers { shift: true, ..Default::default() }.additive());
    assert!(!Modifiers { ctrl: true, meta: true, alt: true, ..Default::default() }.additive());
}

// =============================================================
// PointerEvent
// =============================================================

#[test]
fn pointer_event_point() {
    let ev = PointerEvent::new(12.5, -3.0);
    assert_eq!(ev.point(), Point::new(12.5, -3.0));
    assert!(!ev.modifiers.additive());
}

#[test]
fn with_shift_sets_additive() {
    assert!(PointerEvent::new(0.0, 0.0).with_shift().modifiers.additive());
}

#[test]
fn pointer_event_deserializes_without_modifiers() {
    let ev: PointerEvent = serde_json::from_str(r#"{ "client_x": 4, "client_y": 5 }"#).unwrap();
    assert_eq!(ev, PointerEvent::new(4.0, 5.0));
}

#[test]
fn pointer_event_deserializes_partial_modifiers() {
    let ev: PointerEvent =
        serde_json::from_str(r#"{ "client_x": 1, "client_y": 2, "modifiers": { "shift": true } }"#).unwrap();
    assert!(ev.modifiers.shift);
    assert!(!ev.modifiers.ctrl);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn input_state_variants_distinct() {
    let id = crate::shape::next_shape_id();
    assert_ne!(InputState::Hovering(id), InputState::Dragging(id));
    assert_ne!(InputState::Idle, InputState::Hovering(id));
}
