//! Frame timing primitives for the driver loop

use std::time::Instant;

/// Measures wall-clock seconds elapsed between queries.
///
/// The first delta after construction is measured from construction time.
/// `Instant` is monotonic, so deltas are never negative.
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds elapsed since the previous call (or since construction),
    /// resetting the reference point to now.
    pub fn delta(&mut self) -> f64 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        delta
    }
}

/// Periodic timer built by summing deltas and firing on threshold crossing.
///
/// The remainder past the interval carries forward, so near-deadline deltas
/// roll over losslessly. An oversized delta fires at most once per call; the
/// excess stays accumulated, making the next check fire immediately.
pub struct IntervalTimer {
    interval: f64,
    accumulated: f64,
}

impl IntervalTimer {
    /// Create a timer firing once per `interval_secs` of accumulated delta.
    /// The interval must be positive.
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval: interval_secs,
            accumulated: 0.0,
        }
    }

    /// Create a timer firing `hz` times per accumulated second.
    pub fn with_hz(hz: f64) -> Self {
        Self::new(1.0 / hz)
    }

    /// Add `delta` seconds; report whether the interval was crossed.
    ///
    /// Subtracts the interval exactly once on a firing check. Negative
    /// deltas are accepted and simply decrease the accumulator.
    pub fn count(&mut self, delta: f64) -> bool {
        self.accumulated += delta;
        if self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            return true;
        }
        false
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Currently accumulated seconds toward the next firing.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_first_delta_measured_from_construction() {
        let mut clock = FrameClock::new();
        let delta = clock.delta();
        assert!(delta >= 0.0);
        assert!(delta < 0.1);
    }

    #[test]
    fn test_delta_resets_reference_point() {
        let mut clock = FrameClock::new();
        // Simulate half a second of host-clock advance
        clock.last -= Duration::from_millis(500);
        let delta = clock.delta();
        assert!(delta >= 0.5);
        assert!(delta < 0.6);

        // Reference point moved to now, so the next query is near zero
        let next = clock.delta();
        assert!(next < 0.1);
    }

    #[test]
    fn test_interval_remainder_carries_forward() {
        let mut timer = IntervalTimer::new(1.0);
        assert!(!timer.count(0.6));
        assert!((timer.accumulated() - 0.6).abs() < 1e-9);

        // 0.6 + 0.5 crosses 1.0, leaving 0.1 accumulated
        assert!(timer.count(0.5));
        assert!((timer.accumulated() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_exact_boundary_fires() {
        let mut timer = IntervalTimer::new(1.0);
        assert!(timer.count(1.0));
        assert!(timer.accumulated().abs() < 1e-9);
    }

    #[test]
    fn test_oversized_delta_fires_once_per_check() {
        let mut timer = IntervalTimer::new(1.0);
        assert!(timer.count(2.5));
        assert!((timer.accumulated() - 1.5).abs() < 1e-9);

        // Excess stays accumulated, so the next check fires with no new time
        assert!(timer.count(0.0));
        assert!((timer.accumulated() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_delta_decreases_accumulator() {
        let mut timer = IntervalTimer::new(1.0);
        assert!(!timer.count(-0.5));
        assert!((timer.accumulated() + 0.5).abs() < 1e-9);
        assert!(!timer.count(1.0));
        assert!((timer.accumulated() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_with_hz() {
        let timer = IntervalTimer::with_hz(20.0);
        assert!((timer.interval() - 0.05).abs() < 1e-12);
    }
}
