use super::*;

#[test]
fn fires_once_per_interval() {
    let mut s = AutoplayScheduler::new();
    s.start(1_000, 0);

    assert!(!s.poll(999));
    assert!(s.poll(1_000));
    assert!(!s.poll(1_500));
    assert!(s.poll(2_000));
    assert_eq!(s.next_deadline(), Some(3_000));
}

#[test]
fn late_poll_does_not_fire_backlog() {
    let mut s = AutoplayScheduler::new();
    s.start(100, 0);

    assert!(s.poll(1_050));
    assert!(!s.poll(1_100));
    assert!(s.poll(1_150));
}

#[test]
fn suspend_cancels_pending_tick_and_resume_restarts_fresh() {
    let mut s = AutoplayScheduler::new();
    s.start(1_000, 0);
    s.suspend();
    assert!(s.is_suspended());
    assert_eq!(s.next_deadline(), None);

    for t in (0..10_000).step_by(250) {
        assert!(!s.poll(t));
    }

    s.resume(10_000);
    assert!(!s.poll(10_999));
    assert!(s.poll(11_000));
    assert!(!s.poll(11_001));
}

#[test]
fn stop_is_idempotent() {
    let mut s = AutoplayScheduler::new();
    s.stop();
    s.start(10, 0);
    s.stop();
    s.stop();
    assert!(s.is_stopped());
    assert!(!s.poll(1_000));

    // Resuming a stopped scheduler does not restart it.
    s.suspend();
    s.resume(1_000);
    assert!(s.is_stopped());
}

#[test]
fn zero_interval_never_runs() {
    let mut s = AutoplayScheduler::new();
    s.start(0, 0);
    assert!(s.is_stopped());
    assert!(!s.poll(u64::MAX));
}
