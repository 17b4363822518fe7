use futures::FutureExt;
use vizij_tween_core::{Delay, ManualTimer, Timer};

/// Advance simulated time and deliver whatever fired to `delay`.
fn advance(delay: &mut Delay, timer: &mut ManualTimer, now_ms: f64) -> usize {
    timer
        .advance_to(now_ms)
        .into_iter()
        .filter(|h| delay.on_timeout(*h, timer))
        .count()
}

#[test]
fn resolves_at_or_after_duration() {
    let mut timer = ManualTimer::new();
    let mut delay = Delay::new(100.0);

    let done = delay.run(&mut timer);
    assert!(delay.is_running());

    assert_eq!(advance(&mut delay, &mut timer, 99.0), 0);
    assert!(!done.is_settled());

    assert_eq!(advance(&mut delay, &mut timer, 100.0), 1);
    assert!(done.is_settled());
    assert!(!delay.is_running());
    assert_eq!(done.now_or_never(), Some(()));
}

#[test]
fn early_cancel_resolves_and_disarms() {
    let mut timer = ManualTimer::new();
    let mut delay = Delay::new(100.0);

    let done = delay.run(&mut timer);
    let handle = delay.pending_timeout().unwrap();
    assert_eq!(advance(&mut delay, &mut timer, 50.0), 0);

    delay.cancel(&mut timer);
    assert!(done.is_settled());
    assert!(!timer.is_armed(handle));

    // The timer never fires afterwards.
    assert!(timer.advance_to(500.0).is_empty());
    assert!(!delay.on_timeout(handle, &mut timer));
}

#[test]
fn cancel_is_idempotent_and_safe_before_run() {
    let mut timer = ManualTimer::new();
    let mut delay = Delay::new(30.0);

    delay.cancel(&mut timer);
    assert!(timer.cleared.is_empty());

    let done = delay.run(&mut timer);
    delay.cancel(&mut timer);
    delay.cancel(&mut timer);
    assert!(done.is_settled());
    assert_eq!(timer.cleared.len(), 1);
}

#[test]
fn does_not_fire_for_foreign_handles() {
    let mut timer = ManualTimer::new();
    let mut delay = Delay::new(10.0);
    let done = delay.run(&mut timer);

    let foreign = timer.set_timeout(1.0);
    assert!(!delay.on_timeout(foreign, &mut timer));
    assert!(!done.is_settled());
}

#[test]
fn rerun_restarts_the_timer() {
    let mut timer = ManualTimer::new();
    let mut delay = Delay::new(100.0);

    let first = delay.run(&mut timer);
    assert_eq!(advance(&mut delay, &mut timer, 60.0), 0);
    let second = delay.run(&mut timer);
    assert!(first.is_settled());
    assert!(!second.is_settled());

    assert_eq!(advance(&mut delay, &mut timer, 150.0), 0);
    assert_eq!(advance(&mut delay, &mut timer, 160.0), 1);
    assert!(second.is_settled());
}

#[test]
fn zero_duration_fires_on_next_turn() {
    let mut timer = ManualTimer::new();
    let mut delay = Delay::new(0.0);
    let done = delay.run(&mut timer);
    assert!(!done.is_settled());
    assert_eq!(advance(&mut delay, &mut timer, 0.0), 1);
    assert!(done.is_settled());
}
