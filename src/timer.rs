//! Host-polled periodic tick timer.
//!
//! The driver starts and stops this timer explicitly; the host event loop
//! polls it with the current instant and runs one tick per due interval.
//! Pausing is a single `stop()`; there is no self-re-arming callback chain
//! to cancel.

use std::time::{Duration, Instant};

/// Ticks reported per poll are capped so a long host stall (debugger,
/// suspend) does not produce a huge burst of catch-up ticks.
const MAX_TICKS_PER_POLL: u32 = 10;

/// Fixed-interval timer driven by an external event loop.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the timer is currently armed.
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the timer; the first tick is due one period after `now`.
    /// No-op when already armed, so restarting keeps the current phase.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    /// Disarm the timer; subsequent polls report zero due ticks.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Number of ticks that became due up to `now`, advancing the schedule
    /// accordingly. Returns 0 while disarmed.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        let mut ticks = 0u32;
        while due <= now && ticks < MAX_TICKS_PER_POLL {
            ticks += 1;
            due += self.period;
        }
        if ticks == MAX_TICKS_PER_POLL && due <= now {
            // Dropped ticks after a stall: realign instead of catching up.
            due = now + self.period;
        }
        self.next_due = Some(due);
        ticks
    }
}
