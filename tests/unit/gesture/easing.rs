use super::*;

#[test]
fn curves_pin_endpoints() {
    for easing in [Easing::Linear, Easing::Ease, Easing::EaseOut, Easing::EaseInOut] {
        assert_eq!(easing.transform(0.0), 0.0);
        assert_eq!(easing.transform(1.0), 1.0);
        assert_eq!(easing.transform(-0.5), 0.0);
        assert_eq!(easing.transform(2.0), 1.0);
    }
}

#[test]
fn ease_is_monotonic_and_front_loaded() {
    let mut prev = 0.0;
    for i in 1..=20 {
        let v = Easing::Ease.transform(i as f32 / 20.0);
        assert!(v >= prev);
        prev = v;
    }
    // CSS ease covers most of the distance in the first half.
    assert!(Easing::Ease.transform(0.5) > 0.7);
}
