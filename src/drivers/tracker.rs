//! Non-blocking gesture state machine.
//!
//! Same classification as the blocking cascade in
//! [`ButtonGestures::classify`](super::button::ButtonGestures::classify),
//! advanced one sample at a time from the main loop instead of spinning.
//!
//! ```text
//!   Idle ──active──▶ Debounce ──held ≥ debounce──▶ Pressed ──held ≥ long──▶ LongHeld
//!    ▲                  │ inactive                    │ released              │ released
//!    │                  ▼                             ▼                       ▼
//!    └────────── (Idle | WaitNextPress) ◀──── WaitNextPress ──gap expired──▶ emit SHORT
//! ```
//!
//! | Emission        | When                                                  |
//! |-----------------|-------------------------------------------------------|
//! | `n` + `LONG`    | the n-th press reaches the long threshold while held  |
//! | `n` + `SHORT`   | the gap after the n-th release expires (n < 3)        |
//! | `TRIPLE_SHORT`  | the third press is released before the long threshold |
//! | `NONE`          | a press already reported as long is released          |

use crate::config::TimingConfig;
use crate::gesture::GestureCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    /// Active level seen; waiting for it to persist through the debounce window.
    Debounce {
        since_ms: u32,
        taps: u8,
        /// Release time of the previous tap, when debouncing inside a gap.
        gap_since_ms: Option<u32>,
    },
    Pressed {
        since_ms: u32,
        taps: u8,
    },
    WaitNextPress {
        released_ms: u32,
        taps: u8,
    },
    /// Long press reported; waiting for release.
    LongHeld,
}

/// Sample-driven gesture classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureTracker {
    timing: TimingConfig,
    state: GestureState,
}

impl GestureTracker {
    pub const fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            state: GestureState::Idle,
        }
    }

    /// True when no press sequence is in progress.
    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    /// Drop any sequence in progress without reporting it.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Feed one sample. `active` is the polarity-corrected pin state.
    /// Returns a gesture when one resolves on this sample.
    pub fn update(&mut self, now_ms: u32, active: bool) -> Option<GestureCode> {
        match self.state {
            GestureState::Idle => {
                if active {
                    self.state = GestureState::Debounce {
                        since_ms: now_ms,
                        taps: 0,
                        gap_since_ms: None,
                    };
                }
                None
            }

            GestureState::Debounce {
                since_ms,
                taps,
                gap_since_ms,
            } => {
                if !active {
                    // Bounce: fall back to wherever the press started from.
                    return match gap_since_ms {
                        Some(released_ms) => {
                            self.state = GestureState::WaitNextPress { released_ms, taps };
                            self.update(now_ms, false)
                        }
                        None => {
                            self.state = GestureState::Idle;
                            None
                        }
                    };
                }
                if now_ms.wrapping_sub(since_ms) >= self.timing.debounce_ms {
                    self.state = GestureState::Pressed {
                        since_ms: now_ms,
                        taps: taps + 1,
                    };
                }
                None
            }

            GestureState::Pressed { since_ms, taps } => {
                if !active {
                    if taps >= 3 {
                        self.state = GestureState::Idle;
                        return Some(GestureCode::TRIPLE_SHORT);
                    }
                    self.state = GestureState::WaitNextPress {
                        released_ms: now_ms,
                        taps,
                    };
                    return None;
                }
                if now_ms.wrapping_sub(since_ms) >= self.timing.long_press_ms {
                    self.state = GestureState::LongHeld;
                    return Some(tap_bits(taps) | GestureCode::LONG);
                }
                None
            }

            GestureState::WaitNextPress { released_ms, taps } => {
                if now_ms.wrapping_sub(released_ms) >= self.timing.multi_tap_window_ms {
                    self.state = GestureState::Idle;
                    return Some(tap_bits(taps) | GestureCode::SHORT);
                }
                if active {
                    self.state = GestureState::Debounce {
                        since_ms: now_ms,
                        taps,
                        gap_since_ms: Some(released_ms),
                    };
                }
                None
            }

            GestureState::LongHeld => {
                if active {
                    return None;
                }
                self.state = GestureState::Idle;
                Some(GestureCode::NONE)
            }
        }
    }
}

fn tap_bits(taps: u8) -> GestureCode {
    match taps {
        1 => GestureCode::SINGLE,
        2 => GestureCode::DOUBLE,
        _ => GestureCode::TRIPLE,
    }
}
