use std::time::{Duration, Instant};

/// Fixed-rate tick driver, decoupled from whatever is polling it.
///
/// The caller polls `due` as often as it likes (every frame, typically); a
/// tick fires at most once per poll and only when the configured interval
/// has elapsed. The remainder of the elapsed time is carried over so the
/// long-run tick rate does not drift below the target, however uneven the
/// polling cadence is.
#[derive(Debug, Clone, Copy)]
pub struct TickDriver {
    interval: Duration,
    then: Instant,
}

impl TickDriver {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            // A zero interval would make the remainder math divide by zero
            interval: interval.max(Duration::from_nanos(1)),
            then: now,
        }
    }

    /// Tick rate expressed as an interval
    pub fn from_hz(hz: u32, now: Instant) -> Self {
        let hz = hz.max(1);
        Self::new(Duration::from_secs(1) / hz, now)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a tick is due, consuming one interval and keeping
    /// the remainder.
    pub fn due(&mut self, now: Instant) -> bool {
        let delta = now.saturating_duration_since(self.then);
        if delta < self.interval {
            return false;
        }

        // Carry the overshoot instead of restarting from `now`, otherwise
        // the effective rate sags below the target
        let carry = Duration::from_nanos((delta.as_nanos() % self.interval.as_nanos()) as u64);
        self.then = now - carry;
        true
    }
}
