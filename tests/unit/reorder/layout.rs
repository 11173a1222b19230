use super::*;

fn column(collection: &str, x: f32, ids: &[&str]) -> DropZone {
    let mut zone = DropZone::new(collection, Rect::new(x, 0.0, 100.0, 300.0), Axis::Vertical);
    for (i, id) in ids.iter().enumerate() {
        zone.push_item(*id, Rect::new(x, i as f32 * 20.0, 100.0, 20.0));
    }
    zone
}

#[test]
fn insertion_index_compares_against_midpoints() {
    let zone = column("day-1", 0.0, &["a", "b", "c"]);
    // Midpoints at 10, 30, 50.
    assert_eq!(zone.insertion_index(Point::new(5.0, 0.0), None), 0);
    assert_eq!(zone.insertion_index(Point::new(5.0, 9.9), None), 0);
    assert_eq!(zone.insertion_index(Point::new(5.0, 10.1), None), 1);
    assert_eq!(zone.insertion_index(Point::new(5.0, 45.0), None), 2);
    assert_eq!(zone.insertion_index(Point::new(5.0, 290.0), None), 3);
}

#[test]
fn gap_between_items_still_resolves_an_index() {
    let mut zone = DropZone::new("day-1", Rect::new(0.0, 0.0, 100.0, 200.0), Axis::Vertical);
    zone.push_item("a", Rect::new(0.0, 0.0, 100.0, 20.0));
    zone.push_item("b", Rect::new(0.0, 40.0, 100.0, 20.0));
    let p = Point::new(10.0, 30.0);
    assert!(zone.item_at(p).is_none());
    assert_eq!(zone.insertion_index(p, None), 1);
}

#[test]
fn insertion_index_skips_the_dragged_item() {
    let zone = column("day-1", 0.0, &["a", "b", "c"]);
    let a = ItemId::new("a");
    assert_eq!(zone.insertion_index(Point::new(5.0, 55.0), Some(&a)), 2);
    assert_eq!(zone.insertion_index(Point::new(5.0, 15.0), Some(&a)), 0);
}

#[test]
fn register_replaces_zone_for_same_collection() {
    let mut layout = DropLayout::new();
    layout.register(column("day-1", 0.0, &["a"]));
    layout.register(column("day-2", 100.0, &["m"]));
    layout.register(column("day-1", 0.0, &["a", "b"]));

    assert_eq!(layout.zones().len(), 2);
    assert_eq!(
        layout.zone(&CollectionId::new("day-1")).unwrap().items.len(),
        2
    );
    assert!(layout.unregister(&CollectionId::new("day-2")).is_some());
    assert!(layout.zone_at(Point::new(150.0, 5.0)).is_none());
}

#[test]
fn hit_tests_find_zone_and_item() {
    let mut layout = DropLayout::new();
    layout.register(column("day-1", 0.0, &["a", "b"]));
    layout.register(column("day-2", 100.0, &["m", "n"]));

    let (zone, slot) = layout.item_at(Point::new(150.0, 25.0)).unwrap();
    assert_eq!(zone.collection.as_str(), "day-2");
    assert_eq!(slot.id.as_str(), "n");

    assert_eq!(
        layout.zone_at(Point::new(50.0, 250.0)).unwrap().collection.as_str(),
        "day-1"
    );
    assert!(layout.zone_at(Point::new(500.0, 5.0)).is_none());
    assert!(layout
        .zone_at_where(Point::new(50.0, 5.0), |z| z.collection.as_str() != "day-1")
        .is_none());
}
