//! `embedded-hal` input pin adapter.
//!
//! Wraps any [`embedded_hal::digital::InputPin`] as a [`PinPort`]. HAL pins
//! carry their electrical mode in the type they were created with, so
//! [`PinPort::configure`] only checks that the caller addresses this pin.
//! A failed read is logged and reported as the inactive level, which the
//! classifier treats as a release.

use embedded_hal::digital::{Error as _, InputPin};
use log::{debug, warn};

use crate::app::ports::{InputMode, PinPort, Polarity};

/// One HAL input pin exposed under a fixed identifier.
pub struct HalInputPin<P: InputPin> {
    id: u8,
    pin: P,
    /// Level returned when the HAL read fails.
    idle_level: bool,
}

impl<P: InputPin> HalInputPin<P> {
    pub fn new(id: u8, pin: P, polarity: Polarity) -> Self {
        Self {
            id,
            pin,
            idle_level: !polarity.is_active(true),
        }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> PinPort for HalInputPin<P> {
    fn configure(&mut self, pin: u8, mode: InputMode) {
        if pin != self.id {
            warn!("hal pin {}: configure for pin {} ignored", self.id, pin);
            return;
        }
        debug!("hal pin {}: mode {:?} fixed by HAL type", self.id, mode);
    }

    fn read_level(&mut self, pin: u8) -> bool {
        if pin != self.id {
            return self.idle_level;
        }
        match self.pin.is_high() {
            Ok(level) => level,
            Err(e) => {
                warn!("hal pin {}: read failed ({:?})", self.id, e.kind());
                self.idle_level
            }
        }
    }
}
