use std::time::Duration;

/// Gravity accumulator, decoupled from the polling cadence.
///
/// Elapsed time is added on every loop iteration; once it reaches the
/// interval one gravity tick is due and the accumulator restarts from zero.
#[derive(Debug, Clone)]
pub struct GravityTimer {
    interval: Duration,
    accumulated: Duration,
}

impl GravityTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Add `elapsed`; returns `true` when a gravity tick is due.
    ///
    /// At most one tick per call. The remainder past the threshold is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulated += elapsed;
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_interval_reached() {
        let mut timer = GravityTimer::new(Duration::from_millis(500));
        for _ in 0..49 {
            assert!(!timer.advance(Duration::from_millis(10)));
        }
        assert!(timer.advance(Duration::from_millis(10)));
        assert_eq!(timer.accumulated(), Duration::ZERO);
    }

    #[test]
    fn large_step_fires_only_once() {
        let mut timer = GravityTimer::new(Duration::from_millis(500));
        assert!(timer.advance(Duration::from_millis(1600)));
        assert!(!timer.advance(Duration::from_millis(10)));
    }

    #[test]
    fn partial_progress_carries_over() {
        let mut timer = GravityTimer::new(Duration::from_millis(100));
        assert!(!timer.advance(Duration::from_millis(60)));
        assert_eq!(timer.accumulated(), Duration::from_millis(60));
        assert!(timer.advance(Duration::from_millis(40)));
    }
}
