use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10.0, 20.0, 3.0, 2.0); // x:10..13, y:20..22
    assert!(r.contains(Point::new(10.0, 20.0)));
    assert!(r.contains(Point::new(12.5, 21.5)));

    // Right/bottom edges are exclusive.
    assert!(!r.contains(Point::new(13.0, 20.0)));
    assert!(!r.contains(Point::new(12.0, 22.0)));

    // Outside.
    assert!(!r.contains(Point::new(9.9, 20.0)));
    assert!(!r.contains(Point::new(10.0, 19.9)));
}

#[test]
fn rect_empty_never_contains() {
    let r = Rect::new(0.0, 0.0, 0.0, 10.0);
    assert!(!r.contains(Point::new(0.0, 0.0)));
    let r = Rect::new(0.0, 0.0, 10.0, -1.0);
    assert!(!r.contains(Point::new(0.0, 0.0)));
}

#[test]
fn midpoint_follows_axis() {
    let r = Rect::new(10.0, 100.0, 20.0, 40.0);
    assert_eq!(r.midpoint(Axis::Horizontal), 20.0);
    assert_eq!(r.midpoint(Axis::Vertical), 120.0);
    assert_eq!(Point::new(3.0, 7.0).along(Axis::Vertical), 7.0);
}
