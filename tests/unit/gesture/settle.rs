use super::*;

#[test]
fn settles_from_offset_to_zero() {
    let anim = SettleAnimation::new(-120.0, 1_000, 500).with_easing(Easing::Linear);

    assert_eq!(anim.value_at(1_000), -120.0);
    assert!((anim.value_at(1_250) + 60.0).abs() < 1e-3);
    assert!(!anim.is_finished(1_499));
    assert!(anim.is_finished(1_500));
    assert_eq!(anim.value_at(1_500), 0.0);
    assert_eq!(anim.value_at(9_999), 0.0);
    assert_eq!(anim.ends_at_ms(), 1_500);
}

#[test]
fn zero_duration_finishes_immediately() {
    let anim = SettleAnimation::new(42.0, 10, 0);
    assert!(anim.is_finished(10));
    assert_eq!(anim.value_at(10), 0.0);
}
