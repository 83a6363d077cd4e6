//! Animation clock driven by an injectable time source

use std::cell::Cell;
use std::rc::Rc;

/// Millisecond time source (e.g. `performance.now()` in the browser)
pub trait TimeSource {
    fn now_ms(&self) -> f64;
}

/// Time source advanced by hand, for deterministic tests and previews
#[derive(Clone, Debug, Default)]
pub struct ManualTime {
    now: Rc<Cell<f64>>,
}

impl ManualTime {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl TimeSource for ManualTime {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Monotonic elapsed-time clock, zeroed when created
///
/// Readings never decrease: if the source steps backwards the last
/// reported value is returned again.
pub struct AnimationClock<T: TimeSource> {
    source: T,
    start_ms: f64,
    last_elapsed: Cell<f32>,
}

impl<T: TimeSource> AnimationClock<T> {
    /// Start a clock at the source's current time
    pub fn start(source: T) -> Self {
        let start_ms = source.now_ms();
        Self {
            source,
            start_ms,
            last_elapsed: Cell::new(0.0),
        }
    }

    /// Seconds since the clock started
    pub fn elapsed(&self) -> f32 {
        let elapsed = ((self.source.now_ms() - self.start_ms) / 1000.0) as f32;
        let elapsed = elapsed.max(self.last_elapsed.get());
        self.last_elapsed.set(elapsed);
        elapsed
    }

    /// Underlying time source
    pub fn source(&self) -> &T {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero() {
        let time = ManualTime::new(12_345.0);
        let clock = AnimationClock::start(time.clone());
        assert!((clock.elapsed() - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_clock_reports_seconds() {
        let time = ManualTime::new(500.0);
        let clock = AnimationClock::start(time.clone());

        time.advance(1500.0);
        assert!((clock.elapsed() - 1.5).abs() < 0.001);

        time.advance(8500.0);
        assert!((clock.elapsed() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_clock_never_decreases() {
        let time = ManualTime::new(0.0);
        let clock = AnimationClock::start(time.clone());

        time.set(2000.0);
        assert!((clock.elapsed() - 2.0).abs() < 0.001);

        time.set(1000.0);
        assert!((clock.elapsed() - 2.0).abs() < 0.001);

        time.set(3000.0);
        assert!((clock.elapsed() - 3.0).abs() < 0.001);
    }
}
