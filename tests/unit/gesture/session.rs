use super::*;
use crate::core::{PointerId, PointerPhase};

const WIDTH: f32 = 400.0;

fn mouse(phase: PointerPhase, x: f32, t: u64) -> PointerEvent {
    PointerEvent::mouse(phase, x, 10.0, t)
}

fn session() -> GestureSession {
    GestureSession::new(Axis::Horizontal, 0.3, 500)
}

#[test]
fn drag_tracks_raw_horizontal_delta() {
    let mut g = session();
    g.press(&mouse(PointerPhase::Down, 200.0, 0)).unwrap();
    assert_eq!(g.drag(&mouse(PointerPhase::Drag, 150.0, 16)).unwrap(), -50.0);
    assert_eq!(g.offset_px(), -50.0);
    assert!(matches!(
        g.state(),
        GestureState::Active { axis_delta, .. } if axis_delta == -50.0
    ));
}

#[test]
fn leftward_swipe_past_threshold_commits_next() {
    let mut g = session();
    g.press(&mouse(PointerPhase::Down, 300.0, 0)).unwrap();
    g.drag(&mouse(PointerPhase::Drag, 150.0, 50)).unwrap();
    let res = g.release(&mouse(PointerPhase::Up, 150.0, 100), WIDTH).unwrap();

    assert_eq!(res.step(), Some(Step::Next));
    // -150 relative to the old slot is +250 relative to the next one.
    assert_eq!(g.offset_px(), 250.0);
    assert!(g.is_settling());
    assert!(!g.is_active());
}

#[test]
fn rightward_swipe_past_threshold_commits_previous() {
    let mut g = session();
    g.press(&mouse(PointerPhase::Down, 0.0, 0)).unwrap();
    let res = g.release(&mouse(PointerPhase::Up, 120.0, 80), WIDTH).unwrap();
    assert_eq!(res.step(), Some(Step::Previous));
    assert_eq!(g.offset_px(), 120.0 - WIDTH);
}

#[test]
fn short_swipe_cancels_and_settles_to_zero() {
    let mut g = session();
    g.press(&mouse(PointerPhase::Down, 200.0, 0)).unwrap();
    g.drag(&mouse(PointerPhase::Drag, 119.0, 10)).unwrap();
    let res = g.release(&mouse(PointerPhase::Up, 119.0, 20), WIDTH).unwrap();

    assert!(matches!(res, GestureResolution::Cancelled { .. }));
    assert_eq!(g.state(), GestureState::Settling { target_offset: 0.0 });

    assert!(g.poll(270));
    assert!(g.offset_px() > -81.0 && g.offset_px() < 0.0);

    assert!(g.poll(520));
    assert_eq!(g.offset_px(), 0.0);
    assert_eq!(g.state(), GestureState::Idle);
    assert!(!g.poll(600));
}

#[test]
fn linear_easing_settles_at_constant_rate() {
    let mut g = session().with_easing(Easing::Linear);
    g.press(&mouse(PointerPhase::Down, 200.0, 0)).unwrap();
    g.release(&mouse(PointerPhase::Up, 100.0, 0), WIDTH).unwrap();
    assert_eq!(g.offset_px(), -100.0);

    g.poll(250);
    assert!((g.offset_px() + 50.0).abs() < 1e-3);
}

#[test]
fn threshold_scales_with_track_length() {
    let mut g = session();
    g.press(&mouse(PointerPhase::Down, 100.0, 0)).unwrap();
    let res = g.release(&mouse(PointerPhase::Up, 70.0, 10), 100.0).unwrap();
    assert_eq!(res.step(), Some(Step::Next));

    g.finish_settle();
    g.press(&mouse(PointerPhase::Down, 100.0, 20)).unwrap();
    let res = g.release(&mouse(PointerPhase::Up, 70.0, 30), 1000.0).unwrap();
    assert_eq!(res.step(), None);
}

#[test]
fn zero_offset_never_commits_even_on_empty_track() {
    let mut g = session();
    g.press(&mouse(PointerPhase::Down, 5.0, 0)).unwrap();
    let res = g.release(&mouse(PointerPhase::Up, 5.0, 1), 0.0).unwrap();
    assert_eq!(res.step(), None);
    assert_eq!(g.state(), GestureState::Idle);
}

#[test]
fn unmeasured_track_never_commits() {
    let mut g = session();
    assert_eq!(g.commit_threshold_px(0.0), f32::INFINITY);
    assert_eq!(g.commit_threshold_px(f32::NAN), f32::INFINITY);

    g.press(&mouse(PointerPhase::Down, 100.0, 0)).unwrap();
    g.drag(&mouse(PointerPhase::Drag, 99.0, 5)).unwrap();
    let res = g.release(&mouse(PointerPhase::Up, 99.0, 10), 0.0).unwrap();
    assert_eq!(res.step(), None);
}

#[test]
fn second_press_is_refused() {
    let mut g = session();
    g.press(&PointerEvent::touch(1, PointerPhase::Down, 10.0, 0.0, 0))
        .unwrap();
    let err = g
        .press(&PointerEvent::touch(2, PointerPhase::Down, 90.0, 0.0, 1))
        .unwrap_err();
    assert_eq!(err, InteractionError::ConcurrentGestureIgnored);
    assert!(matches!(
        g.state(),
        GestureState::Active { start, .. } if start.x == 10.0
    ));
}

#[test]
fn leave_releases_at_last_known_sample() {
    let mut g = session();
    g.press(&mouse(PointerPhase::Down, 300.0, 0)).unwrap();
    g.drag(&mouse(PointerPhase::Drag, 100.0, 40)).unwrap();
    // Leave coordinates are outside the surface and ignored.
    let res = g
        .release(&mouse(PointerPhase::Leave, 9999.0, 60), WIDTH)
        .unwrap();
    match res {
        GestureResolution::Committed { step, release } => {
            assert_eq!(step, Step::Next);
            assert_eq!(release.delta.dx, -200.0);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(!g.is_active());
}

#[test]
fn foreign_pointer_cannot_release() {
    let mut g = session();
    g.press(&PointerEvent::touch(1, PointerPhase::Down, 0.0, 0.0, 0))
        .unwrap();
    let err = g
        .release(
            &PointerEvent::touch(2, PointerPhase::Leave, 0.0, 0.0, 5),
            WIDTH,
        )
        .unwrap_err();
    assert_eq!(err, InteractionError::ConcurrentGestureIgnored);
    assert!(g.is_active());
    assert_eq!(
        g.release(
            &PointerEvent::new(
                PointerId::Touch(1),
                PointerPhase::Up,
                PointerSample::new(0.0, 0.0, 6)
            ),
            WIDTH
        )
        .unwrap()
        .step(),
        None
    );
}

#[test]
fn step_wraps_in_both_directions() {
    assert_eq!(Step::Previous.apply(0, 5), 4);
    assert_eq!(Step::Next.apply(4, 5), 0);
    assert_eq!(Step::Next.apply(0, 1), 0);
    assert_eq!(Step::Previous.apply(0, 1), 0);
}
