/// Timing helpers for simulation runs.
///
/// Provides an RAII profiling scope and a per-generation timer.
use std::time::{Duration, Instant};
use tracing::debug;

/// A profiling scope that measures elapsed time using RAII.
///
/// Elapsed time is logged at debug level when dropped.
pub struct ProfilerScope {
    start: Instant,
    name: &'static str,
}

impl ProfilerScope {
    /// Creates a new profiling scope.
    pub fn new(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    /// Gets elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Gets elapsed time in whole microseconds.
    pub fn elapsed_us(&self) -> u128 {
        self.start.elapsed().as_micros()
    }
}

impl Drop for ProfilerScope {
    fn drop(&mut self) {
        debug!(scope = self.name, elapsed_us = self.elapsed_us(), "profiler scope");
    }
}

/// Tracks how long each generation takes.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last: Duration,
    total: Duration,
    frames: u64,
}

impl FrameTimer {
    /// Creates a new frame timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one generation's duration.
    pub fn record(&mut self, time: Duration) {
        self.last = time;
        self.total += time;
        self.frames += 1;
    }

    /// Duration of the most recent generation.
    pub fn last(&self) -> Duration {
        self.last
    }

    /// Sum of all recorded generations.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Number of recorded generations.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Mean generation time, zero before the first record.
    pub fn mean(&self) -> Duration {
        if self.frames == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos((self.total.as_nanos() / u128::from(self.frames)) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_profiler_scope_measures_time() {
        let scope = ProfilerScope::new("test");
        thread::sleep(Duration::from_millis(10));
        let elapsed = scope.elapsed();
        assert!(elapsed >= Duration::from_millis(10), "got {elapsed:?}");
        assert!(scope.elapsed_us() >= 10_000);
    }

    #[test]
    fn test_frame_timer() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.last(), Duration::ZERO);
        assert_eq!(timer.mean(), Duration::ZERO);

        timer.record(Duration::from_millis(10));
        timer.record(Duration::from_millis(30));
        assert_eq!(timer.last(), Duration::from_millis(30));
        assert_eq!(timer.total(), Duration::from_millis(40));
        assert_eq!(timer.frames(), 2);
        assert_eq!(timer.mean(), Duration::from_millis(20));
    }
}
