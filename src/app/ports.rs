//! Port traits — the boundary between gesture logic and the host platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ButtonGestures (domain)
//! ```
//!
//! Two narrow collaborators are consumed: a pin that can be configured
//! and sampled, and a monotonic millisecond clock. Both take `&mut self`
//! so simulated implementations can advance a timeline as they are read.

// ───────────────────────────────────────────────────────────────
// Pin electrical settings
// ───────────────────────────────────────────────────────────────

/// Which electrical level means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// HIGH = pressed (button to VCC with pull-down).
    #[default]
    ActiveHigh,
    /// LOW = pressed (button to GND with pull-up).
    ActiveLow,
}

impl Polarity {
    /// True if the sampled level counts as pressed under this polarity.
    pub const fn is_active(self, level_high: bool) -> bool {
        match self {
            Self::ActiveHigh => level_high,
            Self::ActiveLow => !level_high,
        }
    }
}

/// Electrical input mode applied once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Floating input; an external resistor sets the idle level.
    #[default]
    Floating,
    /// Input with the internal pull-up enabled.
    PullUp,
    /// Input with the internal pull-down enabled.
    PullDown,
}

// ───────────────────────────────────────────────────────────────
// Pin port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Digital input access for one or more push-button pins.
pub trait PinPort {
    /// One-time electrical setup of `pin` as an input.
    fn configure(&mut self, pin: u8, mode: InputMode);

    /// Instantaneous level of `pin`; `true` = HIGH.
    fn read_level(&mut self, pin: u8) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond counter, wrapping at `u32::MAX`.
///
/// Consumers must only compare `now.wrapping_sub(start)` against a
/// duration, never absolute deadlines.
pub trait ClockPort {
    fn now_ms(&mut self) -> u32;
}
