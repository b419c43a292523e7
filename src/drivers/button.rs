//! Polled push-button driver with single, double and triple tap detection,
//! each in a short or long variant.
//!
//! ## Gesture detection
//!
//! | Gesture      | Condition                                               |
//! |--------------|---------------------------------------------------------|
//! | n × short    | n-th release before the long threshold, no further press within the multi-tap window |
//! | n × long     | n-th press held for the long threshold                  |
//! | 3 × short    | third release before the long threshold (no window wait) |
//!
//! ## Two driving modes
//!
//! - [`ButtonGestures::poll`] spins until one full interaction resolves.
//!   Worst-case blocking time is [`TimingConfig::worst_case_ms`].
//! - [`ButtonGestures::tick`] samples once and returns immediately, using
//!   [`GestureTracker`] to carry the cascade across calls.
//!
//! Use one mode per instance; they share the reported-gesture memory.
//!
//! ## Hysteresis
//!
//! Polling again while a long press is still held re-reports the long
//! gesture with the tap count that was first reported, instead of a fresh
//! `SINGLE_LONG`. The first poll that ends without a long press after a
//! reported long press returns `NONE` and resets state without invoking any
//! handler, so the tail of a held press is never reported as a short tap.

use log::{debug, info};

use crate::app::ports::{ClockPort, InputMode, PinPort, Polarity};
use crate::config::{ButtonConfig, TimingConfig};
use crate::error::Result;
use crate::gesture::GestureCode;

use super::debounce::Debouncer;
use super::dispatch::{CallbackTable, GestureCallback};
use super::tracker::GestureTracker;

/// One physical button: pin settings, reported-gesture memory and handlers.
pub struct ButtonGestures<P: PinPort, C: ClockPort> {
    config: ButtonConfig,
    debouncer: Debouncer,
    pins: P,
    clock: C,
    /// Last reported gesture (hysteresis memory).
    last: GestureCode,
    callbacks: CallbackTable,
    tracker: GestureTracker,
}

impl<P: PinPort, C: ClockPort> ButtonGestures<P, C> {
    /// Validate the timing, configure the pin and build the button.
    pub fn new(config: ButtonConfig, mut pins: P, clock: C) -> Result<Self> {
        config.timing.validate()?;
        pins.configure(config.pin, config.mode);
        info!(
            "button on pin {}: {:?}, {:?}, debounce={}ms long={}ms gap={}ms",
            config.pin,
            config.polarity,
            config.mode,
            config.timing.debounce_ms,
            config.timing.long_press_ms,
            config.timing.multi_tap_window_ms,
        );
        Ok(Self {
            debouncer: Debouncer::new(config.pin, config.polarity, config.timing.debounce_ms),
            tracker: GestureTracker::new(config.timing),
            config,
            pins,
            clock,
            last: GestureCode::NONE,
            callbacks: CallbackTable::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn pin(&self) -> u8 {
        self.config.pin
    }

    pub fn polarity(&self) -> Polarity {
        self.config.polarity
    }

    pub fn input_mode(&self) -> InputMode {
        self.config.mode
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.config.timing
    }

    /// Gesture remembered from the last poll or tick.
    pub fn last_gesture(&self) -> GestureCode {
        self.last
    }

    /// Give back the pin and clock ports.
    pub fn into_parts(self) -> (P, C) {
        (self.pins, self.clock)
    }

    // ── Handlers ──────────────────────────────────────────────

    /// Install a handler for one of the six actionable gestures.
    /// Returns `false` (table unchanged) for any other code.
    pub fn register_handler(&mut self, code: GestureCode, callback: GestureCallback) -> bool {
        let ok = self.callbacks.register(code, callback);
        if ok {
            info!(
                "pin {}: handler registered for {code} ({}/{} set)",
                self.config.pin,
                self.callbacks.len(),
                GestureCode::ACTIONABLE.len(),
            );
        }
        ok
    }

    /// Remove the handler for `code`. Returns `false` for non-actionable codes.
    pub fn clear_handler(&mut self, code: GestureCode) -> bool {
        self.callbacks.clear(code)
    }

    /// Registered handler for `code`. Never invokes it.
    pub fn handler(&self, code: GestureCode) -> Option<GestureCallback> {
        self.callbacks.get(code)
    }

    // ── Blocking mode ─────────────────────────────────────────

    /// Debounced press check: true once the pin has been active for the
    /// whole debounce window, false on the first inactive sample.
    pub fn is_pressed(&mut self) -> bool {
        self.debouncer.is_pressed(&mut self.pins, &mut self.clock)
    }

    /// Resolve one complete interaction without hysteresis or dispatch.
    ///
    /// Returns `NONE` at once if the button is not pressed; otherwise
    /// blocks until the tap sequence resolves (at most three taps).
    pub fn classify(&mut self) -> GestureCode {
        if !self.is_pressed() {
            return GestureCode::NONE;
        }

        let mut taps = GestureCode::SINGLE;
        loop {
            if self.held_until_long() {
                return taps | GestureCode::LONG;
            }
            let next = match taps {
                GestureCode::SINGLE => GestureCode::DOUBLE,
                GestureCode::DOUBLE => GestureCode::TRIPLE,
                _ => return taps | GestureCode::SHORT,
            };
            if !self.pressed_within_gap() {
                return taps | GestureCode::SHORT;
            }
            taps = next;
        }
    }

    /// Classify, reconcile with the last reported gesture, dispatch.
    ///
    /// Discards any partial sequence left by earlier [`tick`](Self::tick)
    /// calls, so a press is never reported by both modes.
    pub fn poll(&mut self) -> GestureCode {
        self.tracker.reset();
        let classified = self.classify();
        self.report(classified)
    }

    // ── Non-blocking mode ─────────────────────────────────────

    /// Take one pin sample and advance the gesture state machine.
    ///
    /// Returns the reported gesture when one resolves on this sample,
    /// `NONE` otherwise. A long press is reported once, when the threshold
    /// is crossed.
    pub fn tick(&mut self) -> GestureCode {
        let now_ms = self.clock.now_ms();
        let active = self
            .config
            .polarity
            .is_active(self.pins.read_level(self.config.pin));
        match self.tracker.update(now_ms, active) {
            Some(classified) => self.report(classified),
            None => GestureCode::NONE,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    /// True if the current press is still held after the long threshold.
    fn held_until_long(&mut self) -> bool {
        let start = self.clock.now_ms();
        while self.is_pressed() {
            if self.clock.now_ms().wrapping_sub(start) >= self.config.timing.long_press_ms {
                return true;
            }
        }
        false
    }

    /// True if a new press is confirmed before the multi-tap window closes.
    fn pressed_within_gap(&mut self) -> bool {
        let start = self.clock.now_ms();
        while self.clock.now_ms().wrapping_sub(start) < self.config.timing.multi_tap_window_ms {
            if self.is_pressed() {
                return true;
            }
        }
        false
    }

    /// Apply hysteresis against the last reported gesture and dispatch.
    fn report(&mut self, classified: GestureCode) -> GestureCode {
        let pin = self.config.pin;

        if self.last.is_long() {
            if classified.is_long() {
                // Still held: keep the tap count that was first reported.
                let code = GestureCode::LONG | self.last.taps();
                debug!("pin {pin}: {code} (held, classified {classified})");
                self.callbacks.dispatch(pin, code);
                return code;
            }
            debug!("pin {pin}: long press released (classified {classified})");
            self.last = GestureCode::NONE;
            return GestureCode::NONE;
        }

        self.last = classified;
        if !classified.is_none() {
            debug!("pin {pin}: {classified}");
            self.callbacks.dispatch(pin, classified);
        }
        classified
    }
}
