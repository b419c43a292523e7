//! Monotonic millisecond clock.
//!
//! - **`feature = "espidf"`** — wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **otherwise** — uses `std::time::Instant` for host-side testing and
//!   simulation.
//!
//! Both truncate to `u32` milliseconds, wrapping after ~49.7 days.

use crate::app::ports::ClockPort;

/// Milliseconds since construction (host) or since boot (ESP-IDF).
pub struct MonotonicClock {
    #[cfg(not(feature = "espidf"))]
    start: std::time::Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(feature = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    #[cfg(feature = "espidf")]
    pub fn uptime_ms(&self) -> u32 {
        // SAFETY: esp_timer_get_time reads the monotonic system timer and
        // has no preconditions once the system has booted.
        ((unsafe { esp_idf_svc::sys::esp_timer_get_time() }) / 1_000) as u32
    }

    #[cfg(not(feature = "espidf"))]
    pub fn uptime_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}

impl ClockPort for MonotonicClock {
    fn now_ms(&mut self) -> u32 {
        self.uptime_ms()
    }
}
