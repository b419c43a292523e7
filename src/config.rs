//! Gesture timing configuration
//!
//! All three windows derive from one debounce unit. The reference unit is
//! 36 ms, the classic telephone push-button debounce delay.

use serde::{Deserialize, Serialize};

use crate::app::ports::{InputMode, Polarity};
use crate::error::{Error, Result};

/// Reference debounce unit in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 36;
/// Long-press threshold as a multiple of the debounce unit.
pub const LONG_PRESS_FACTOR: u32 = 20;
/// Multi-tap gap window as a multiple of the debounce unit.
pub const MULTI_TAP_FACTOR: u32 = 7;

/// Timing windows used by the classifier, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Continuous contact required before a press is trusted.
    pub debounce_ms: u32,
    /// Hold duration at which a press becomes "long".
    pub long_press_ms: u32,
    /// Maximum gap after a release for the next press to join the sequence.
    pub multi_tap_window_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::from_debounce(DEFAULT_DEBOUNCE_MS)
    }
}

impl TimingConfig {
    /// Derive the long and multi-tap windows from a debounce unit.
    pub const fn from_debounce(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            long_press_ms: debounce_ms.saturating_mul(LONG_PRESS_FACTOR),
            multi_tap_window_ms: debounce_ms.saturating_mul(MULTI_TAP_FACTOR),
        }
    }

    /// Check `0 < debounce < multi_tap_window < long_press`.
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            return Err(Error::Timing("debounce must be non-zero"));
        }
        if self.debounce_ms >= self.multi_tap_window_ms {
            return Err(Error::Timing(
                "debounce must be shorter than the multi-tap window",
            ));
        }
        if self.multi_tap_window_ms >= self.long_press_ms {
            return Err(Error::Timing(
                "multi-tap window must be shorter than the long-press threshold",
            ));
        }
        Ok(())
    }

    /// Worst-case blocking time of one classification (triple long press).
    pub const fn worst_case_ms(&self) -> u32 {
        self.long_press_ms
            .saturating_mul(3)
            .saturating_add(self.multi_tap_window_ms.saturating_mul(2))
    }
}

/// Per-button construction settings, fixed for the lifetime of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    /// Platform pin identifier passed to the pin port.
    pub pin: u8,
    pub polarity: Polarity,
    pub mode: InputMode,
    pub timing: TimingConfig,
}

impl ButtonConfig {
    /// Active-high, floating input, reference timing.
    pub fn new(pin: u8) -> Self {
        Self {
            pin,
            polarity: Polarity::default(),
            mode: InputMode::default(),
            timing: TimingConfig::default(),
        }
    }

    #[must_use]
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: InputMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }
}
