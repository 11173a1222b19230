use super::*;

fn app() -> DemoApp {
    let mut app = DemoApp::new(&InteractionConfig::default(), 0).unwrap();
    // carousel rows 0..12, board rows 12..24, log rows 24..30.
    app.set_viewport(80, 30);
    app
}

fn mouse(phase: PointerPhase, x: f32, y: f32, t: u64) -> PointerEvent {
    PointerEvent::mouse(phase, x, y, t)
}

fn ids(app: &DemoApp, collection: &str) -> Vec<String> {
    app.board()
        .ids(&CollectionId::new(collection))
        .into_iter()
        .map(|id| id.to_string())
        .collect()
}

#[test]
fn viewport_sizes_the_carousel_track() {
    let app = app();
    assert_eq!(app.carousel_track(), Rect::new(1.0, 1.0, 78.0, 10.0));
    assert_eq!(app.carousel().current_view().track_width, 78.0);

    let columns = app.columns();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].zone, Rect::new(1.0, 13.0, 38.0, 10.0));
    assert_eq!(columns[1].rows[1].rect, Rect::new(41.0, 14.0, 38.0, 1.0));
}

#[test]
fn swipe_in_carousel_advances_slide() {
    let mut app = app();
    assert!(app.handle_pointer(&mouse(PointerPhase::Down, 40.0, 5.0, 10)).is_consumed());
    app.handle_pointer(&mouse(PointerPhase::Drag, 10.0, 5.0, 20));
    app.handle_pointer(&mouse(PointerPhase::Up, 10.0, 5.0, 30));

    assert_eq!(app.carousel().active_index(), 1);
    assert!(app.log_lines().any(|l| l.contains("Tokyo")));
}

#[test]
fn drag_moves_activity_between_days() {
    let mut app = app();
    app.handle_pointer(&mouse(PointerPhase::Down, 5.0, 13.0, 0));
    assert_eq!(app.dragged_label().as_deref(), Some("09:00 Eiffel Tower Visit"));
    assert!(matches!(
        app.columns()[0].rows[0].content,
        RowContent::Placeholder
    ));

    app.handle_pointer(&mouse(PointerPhase::Drag, 45.0, 14.0, 16));
    assert!(matches!(
        app.columns()[1].rows[1].content,
        RowContent::Placeholder
    ));
    app.handle_pointer(&mouse(PointerPhase::Up, 45.0, 14.0, 32));

    assert_eq!(ids(&app, "day-1"), ["act-2", "act-3"]);
    assert_eq!(ids(&app, "day-2"), ["act-4", "act-1", "act-5"]);
    assert!(app.dragged_label().is_none());
}

#[test]
fn escape_cancels_a_drag_without_moving() {
    let mut app = app();
    app.handle_pointer(&mouse(PointerPhase::Down, 5.0, 13.0, 0));
    app.handle_pointer(&mouse(PointerPhase::Drag, 45.0, 14.0, 16));

    let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(app.handle_event(&esc, 20).is_consumed());

    assert!(app.engine().session().is_none());
    assert_eq!(ids(&app, "day-1"), ["act-1", "act-2", "act-3"]);
    assert!(app.log_lines().any(|l| l.contains("Aborted")));
    // The stray release that follows is ignored.
    assert!(app
        .handle_pointer(&mouse(PointerPhase::Up, 45.0, 14.0, 30))
        .is_ignored());
}

#[test]
fn autoplay_advances_on_poll() {
    let mut app = app();
    assert_eq!(app.next_deadline(0), Some(5_000));
    assert!(!app.poll(4_999));
    assert!(app.poll(5_000));
    assert_eq!(app.carousel().active_index(), 1);
    assert!(app.log_lines().any(|l| l.contains("Autoplay")));
}

#[test]
fn quit_keys() {
    let mut app = app();
    let q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.handle_event(&q, 0).is_quit());
    assert!(app.handle_event(&ctrl_c, 0).is_quit());
}

#[test]
fn shutdown_stops_timers() {
    let mut app = app();
    app.shutdown();
    assert_eq!(app.next_deadline(0), None);
    assert!(!app.poll(60_000));
}
