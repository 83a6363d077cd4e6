//! Browser time source

use folio_fx::TimeSource;

/// `performance.now()`, falling back to `Date.now()` when the Performance
/// API is unavailable
pub struct PerformanceTime {
    performance: Option<web_sys::Performance>,
}

impl PerformanceTime {
    pub fn new(window: &web_sys::Window) -> Self {
        Self {
            performance: window.performance(),
        }
    }
}

impl TimeSource for PerformanceTime {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }
}
