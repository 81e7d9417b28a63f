//! Clock and periodic timer

use std::time::{Duration, Instant};

/// Monotonic time source
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Fixed-period timer polled by the event loop
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    period: Duration,
    next_due: Instant,
}

impl PeriodicTimer {
    /// Start a timer whose first tick is one period after `now`
    pub fn start(period: Duration, now: Instant) -> Self {
        assert!(!period.is_zero(), "timer period must be non-zero");
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// True if a tick is due at `now`. Missed periods collapse into one tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        while self.next_due <= now {
            self.next_due += self.period;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(200);

    #[test]
    fn not_due_before_period() {
        let t0 = Instant::now();
        let mut timer = PeriodicTimer::start(PERIOD, t0);
        assert!(!timer.poll(t0));
        assert!(!timer.poll(t0 + Duration::from_millis(199)));
        assert!(timer.poll(t0 + PERIOD));
        assert_eq!(timer.next_due(), t0 + PERIOD * 2);
    }

    #[test]
    fn missed_periods_coalesce() {
        let t0 = Instant::now();
        let mut timer = PeriodicTimer::start(PERIOD, t0);
        let late = t0 + Duration::from_millis(1050);
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.next_due(), t0 + PERIOD * 6);
    }

    #[test]
    #[should_panic]
    fn zero_period_rejected() {
        let _ = PeriodicTimer::start(Duration::ZERO, Instant::now());
    }
}
