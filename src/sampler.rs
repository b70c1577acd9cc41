//! Ingestion cadence, resize throttling, and the monotonic clock.
//!
//! Everything here is single-threaded and cooperative: the widget's per-frame
//! `ui()` call is the frame tick, and [`Sampler::poll_due`] tells it when a
//! fixed-rate ingestion tick has come due in between frames.

use std::time::{Duration, Instant};

use once_cell::sync::Lazy;

/// Process-wide epoch for the monotonic sample clock.
static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// Milliseconds elapsed on the monotonic clock since the first call site
/// touched it. Sample timestamps and the visible window use this clock;
/// only grid labels use wall time.
pub fn perf_now_ms() -> f64 {
    EPOCH.elapsed().as_secs_f64() * 1000.0
}

/// Fixed-rate ingestion schedule.
///
/// `start` arms the schedule, `stop` disarms it; both are idempotent. A
/// started sampler reports at most one due tick per `poll_due` call, so a
/// stalled UI catches up gradually instead of bursting.
#[derive(Debug, Clone)]
pub struct Sampler {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Sampler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the schedule with the first regular tick one interval from `now`.
    /// Returns `false` without touching the cadence when already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(now + self.interval);
        true
    }

    /// Disarm the schedule. Stopping an already-stopped sampler is a no-op.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Consume one due tick, if any.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let mut next = due + self.interval;
                if next <= now {
                    // Fell behind by more than an interval; resynchronize
                    // rather than replaying missed ticks.
                    next = now + self.interval;
                }
                self.next_due = Some(next);
                true
            }
            _ => false,
        }
    }
}

/// Trailing-edge rate limiter for viewport re-measurement.
///
/// The first call passes immediately; afterwards calls pass at most once per
/// interval. The final event is never dropped because the caller retries
/// every frame.
#[derive(Debug, Clone, Default)]
pub struct Throttle {
    interval: Duration,
    last_pass: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_pass: None,
        }
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_pass {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_pass = Some(now);
                true
            }
        }
    }
}
