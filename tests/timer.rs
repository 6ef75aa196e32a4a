use std::time::{Duration, Instant};

use contplot::timer::Ticker;

#[test]
fn disarmed_ticker_reports_nothing_due() {
    let mut ticker = Ticker::new(Duration::from_millis(100));
    assert!(!ticker.is_armed());
    assert_eq!(ticker.poll(Instant::now()), 0);
}

#[test]
fn ticks_become_due_once_per_period() {
    let mut ticker = Ticker::new(Duration::from_millis(100));
    let t0 = Instant::now();
    ticker.start(t0);
    assert!(ticker.is_armed());
    assert_eq!(ticker.poll(t0), 0);
    assert_eq!(ticker.poll(t0 + Duration::from_millis(99)), 0);
    assert_eq!(ticker.poll(t0 + Duration::from_millis(100)), 1);
    assert_eq!(ticker.poll(t0 + Duration::from_millis(100)), 0, "already consumed");
    assert_eq!(ticker.poll(t0 + Duration::from_millis(450)), 3);
}

#[test]
fn stop_disarms_and_start_rearms() {
    let mut ticker = Ticker::new(Duration::from_millis(50));
    let t0 = Instant::now();
    ticker.start(t0);
    ticker.stop();
    assert!(!ticker.is_armed());
    assert_eq!(ticker.poll(t0 + Duration::from_secs(1)), 0);

    let t1 = t0 + Duration::from_secs(2);
    ticker.start(t1);
    assert_eq!(ticker.poll(t1 + Duration::from_millis(50)), 1);
}

#[test]
fn start_while_armed_keeps_the_schedule() {
    let mut ticker = Ticker::new(Duration::from_millis(100));
    let t0 = Instant::now();
    ticker.start(t0);
    // A second start must not push the next deadline out.
    ticker.start(t0 + Duration::from_millis(90));
    assert_eq!(ticker.poll(t0 + Duration::from_millis(100)), 1);
}

#[test]
fn long_stalls_are_capped_not_replayed() {
    let mut ticker = Ticker::new(Duration::from_millis(10));
    let t0 = Instant::now();
    ticker.start(t0);
    let burst = ticker.poll(t0 + Duration::from_secs(60));
    assert!(burst <= 10, "stall produced {burst} catch-up ticks");
    // After realignment the very next poll sees at most one tick.
    assert!(ticker.poll(t0 + Duration::from_secs(60) + Duration::from_millis(10)) <= 1);
}
