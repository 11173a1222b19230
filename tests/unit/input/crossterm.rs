use super::*;
use crate::core::PointerId;
use crossterm::event::KeyModifiers;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn left_button_maps_to_contact_phases() {
    let down = into_pointer_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 7), 10).unwrap();
    assert_eq!(down.phase, PointerPhase::Down);
    assert_eq!(down.pointer, PointerId::Mouse);
    assert_eq!((down.sample.x, down.sample.y), (3.0, 7.0));
    assert_eq!(down.sample.timestamp_ms, 10);

    let drag = into_pointer_event(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 7), 11).unwrap();
    assert_eq!(drag.phase, PointerPhase::Drag);

    let up = into_pointer_event(mouse(MouseEventKind::Up(MouseButton::Left), 5, 7), 12).unwrap();
    assert_eq!(up.phase, PointerPhase::Up);
}

#[test]
fn moved_without_button_is_hover() {
    let ev = into_pointer_event(mouse(MouseEventKind::Moved, 1, 1), 0).unwrap();
    assert_eq!(ev.phase, PointerPhase::Hover);
}

#[test]
fn other_buttons_and_scroll_are_dropped() {
    assert!(into_pointer_event(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0), 0).is_none());
    assert!(into_pointer_event(mouse(MouseEventKind::Drag(MouseButton::Middle), 0, 0), 0).is_none());
    assert!(into_pointer_event(mouse(MouseEventKind::ScrollDown, 0, 0), 0).is_none());
}

#[test]
fn focus_lost_is_leave() {
    assert_eq!(focus_lost(42).phase, PointerPhase::Leave);
}
