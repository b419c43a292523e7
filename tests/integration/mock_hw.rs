//! Simulated button hardware for integration tests.
//!
//! A [`Timeline`] holds a script of press intervals. [`SimClock`] advances
//! the shared time by 1 ms on every read, and [`SimPin`] reports the
//! scripted level for the current time, so the blocking classifier can be
//! driven deterministically without real GPIO.

use button_gestures::{ClockPort, InputMode, PinPort, Polarity};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ── Timeline ──────────────────────────────────────────────────

pub struct Timeline {
    now: Cell<u32>,
    origin: u32,
    /// Active intervals `[start, end)` relative to `origin`.
    presses: Vec<(u32, u32)>,
    configured: RefCell<Vec<(u8, InputMode)>>,
}

#[allow(dead_code)]
impl Timeline {
    pub fn now(&self) -> u32 {
        self.now.get()
    }

    /// Milliseconds since the script origin.
    pub fn elapsed(&self) -> u32 {
        self.now.get().wrapping_sub(self.origin)
    }

    pub fn configured(&self) -> Vec<(u8, InputMode)> {
        self.configured.borrow().clone()
    }

    fn active(&self) -> bool {
        let t = self.elapsed();
        self.presses.iter().any(|&(start, end)| t >= start && t < end)
    }
}

// ── Script builder ────────────────────────────────────────────

/// Builds a press/release script: `Script::new().press(100).release(50)...`
pub struct Script {
    origin: u32,
    cursor: u32,
    presses: Vec<(u32, u32)>,
}

#[allow(dead_code)]
impl Script {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Start the clock at an arbitrary value (e.g. just before wraparound).
    pub fn starting_at(origin: u32) -> Self {
        Self {
            origin,
            cursor: 0,
            presses: Vec::new(),
        }
    }

    pub fn press(mut self, ms: u32) -> Self {
        self.presses.push((self.cursor, self.cursor + ms));
        self.cursor += ms;
        self
    }

    pub fn release(mut self, ms: u32) -> Self {
        self.cursor += ms;
        self
    }

    /// Build the shared timeline plus pin and clock views onto it.
    pub fn build(self, polarity: Polarity) -> (Rc<Timeline>, SimPin, SimClock) {
        let timeline = Rc::new(Timeline {
            now: Cell::new(self.origin),
            origin: self.origin,
            presses: self.presses,
            configured: RefCell::new(Vec::new()),
        });
        let pin = SimPin {
            timeline: Rc::clone(&timeline),
            polarity,
        };
        let clock = SimClock {
            timeline: Rc::clone(&timeline),
        };
        (timeline, pin, clock)
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

// ── Ports ─────────────────────────────────────────────────────

pub struct SimPin {
    timeline: Rc<Timeline>,
    polarity: Polarity,
}

impl PinPort for SimPin {
    fn configure(&mut self, pin: u8, mode: InputMode) {
        self.timeline.configured.borrow_mut().push((pin, mode));
    }

    fn read_level(&mut self, _pin: u8) -> bool {
        let active = self.timeline.active();
        match self.polarity {
            Polarity::ActiveHigh => active,
            Polarity::ActiveLow => !active,
        }
    }
}

pub struct SimClock {
    timeline: Rc<Timeline>,
}

impl ClockPort for SimClock {
    fn now_ms(&mut self) -> u32 {
        let next = self.timeline.now.get().wrapping_add(1);
        self.timeline.now.set(next);
        next
    }
}

// ── Handler recorder ──────────────────────────────────────────

thread_local! {
    static CALLS: RefCell<Vec<(u8, u8)>> = const { RefCell::new(Vec::new()) };
}

/// Handler that records `(pin, code bits)` for the current test thread.
#[allow(dead_code)]
pub fn record(pin: u8, code: button_gestures::GestureCode) {
    CALLS.with(|c| c.borrow_mut().push((pin, code.bits())));
}

/// Drain recorded handler calls for the current test thread.
#[allow(dead_code)]
pub fn take_calls() -> Vec<(u8, u8)> {
    CALLS.with(|c| c.borrow_mut().drain(..).collect())
}
