use super::*;

#[test]
fn constructors_tag_the_pointer_origin() {
    let m = PointerEvent::mouse(PointerPhase::Down, 1.0, 2.0, 3);
    assert_eq!(m.pointer, PointerId::Mouse);
    assert!(!m.pointer.is_touch());
    assert_eq!(m.point(), Point::new(1.0, 2.0));
    assert_eq!(m.sample.timestamp_ms, 3);

    let t = PointerEvent::touch(7, PointerPhase::Drag, 4.0, 5.0, 6);
    assert_eq!(t.pointer, PointerId::Touch(7));
    assert!(t.pointer.is_touch());
    assert_ne!(t.pointer, PointerId::Touch(8));
}

#[test]
fn contact_ending_phases() {
    for phase in [PointerPhase::Up, PointerPhase::Cancel, PointerPhase::Leave] {
        assert!(phase.ends_contact(), "{phase:?}");
    }
    for phase in [PointerPhase::Down, PointerPhase::Drag, PointerPhase::Hover] {
        assert!(!phase.ends_contact(), "{phase:?}");
    }
}
