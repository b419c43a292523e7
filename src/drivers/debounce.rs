//! Blocking debounced level reader.
//!
//! Spins on the pin until it has been continuously active for the
//! debounce window (pressed) or until the first inactive sample
//! (released). There is no release debounce: the first inactive sample
//! is trusted, which keeps the release path instant.

use log::trace;

use crate::app::ports::{ClockPort, PinPort, Polarity};

/// Press filter for one pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    pin: u8,
    polarity: Polarity,
    debounce_ms: u32,
}

impl Debouncer {
    pub const fn new(pin: u8, polarity: Polarity, debounce_ms: u32) -> Self {
        Self {
            pin,
            polarity,
            debounce_ms,
        }
    }

    /// True if the pin stays active for the whole debounce window.
    ///
    /// Blocks for at most `debounce_ms`; returns `false` as soon as one
    /// inactive sample is seen.
    pub fn is_pressed(&self, pins: &mut impl PinPort, clock: &mut impl ClockPort) -> bool {
        let start = clock.now_ms();
        while self.polarity.is_active(pins.read_level(self.pin)) {
            if clock.now_ms().wrapping_sub(start) >= self.debounce_ms {
                return true;
            }
        }
        trace!("pin {}: inactive", self.pin);
        false
    }
}
