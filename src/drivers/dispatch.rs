//! Callback dispatch table.
//!
//! One optional handler per actionable gesture. Lookup is pure; only
//! [`CallbackTable::dispatch`] runs a handler.

use log::{info, trace};

use crate::gesture::GestureCode;

/// Handler invoked with the pin identifier and the resolved gesture.
pub type GestureCallback = fn(pin: u8, code: GestureCode);

/// Fixed six-slot table, one per [`GestureCode::ACTIONABLE`] entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallbackTable {
    slots: [Option<GestureCallback>; 6],
}

impl CallbackTable {
    pub const fn new() -> Self {
        Self { slots: [None; 6] }
    }

    /// Install `callback` for `code`, replacing any previous handler.
    /// Returns `false` and leaves the table untouched for non-actionable codes.
    pub fn register(&mut self, code: GestureCode, callback: GestureCallback) -> bool {
        let Some(slot) = code.slot() else {
            return false;
        };
        if self.slots[slot].replace(callback).is_some() {
            info!("handler for {code} replaced");
        }
        true
    }

    /// Remove the handler for `code`. Returns `false` for non-actionable codes.
    pub fn clear(&mut self, code: GestureCode) -> bool {
        let Some(slot) = code.slot() else {
            return false;
        };
        self.slots[slot] = None;
        true
    }

    /// Currently registered handler for `code`, without invoking it.
    pub fn get(&self, code: GestureCode) -> Option<GestureCallback> {
        self.slots[code.slot()?]
    }

    /// Run the handler for `code`, if any. Returns whether one ran.
    pub fn dispatch(&self, pin: u8, code: GestureCode) -> bool {
        match self.get(code) {
            Some(callback) => {
                callback(pin, code);
                true
            }
            None => {
                trace!("pin {pin}: no handler for {code}");
                false
            }
        }
    }

    /// Number of gestures with a handler installed.
    pub(crate) fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
