use super::*;

#[test]
fn test_event_result() {
    assert!(EventResult::Consumed.is_consumed());
    assert!(EventResult::Ignored.is_ignored());
    assert!(EventResult::Quit.is_quit());
    assert!(!EventResult::Consumed.is_quit());
}

#[test]
fn test_active_area_default() {
    assert_eq!(ActiveArea::default(), ActiveArea::None);
}
