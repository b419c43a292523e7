//! Gesture codes.
//!
//! A [`GestureCode`] is a byte made of two independent bit groups:
//!
//! | Group     | Bits                                         | Mask   |
//! |-----------|----------------------------------------------|--------|
//! | Tap count | `SINGLE = 0x01`, `DOUBLE = 0x02`, `TRIPLE = 0x04` | `0x07` |
//! | Duration  | `SHORT = 0x08`, `LONG = 0x10`                | `0x18` |
//!
//! A legal non-idle code has exactly one tap-count bit and exactly one
//! duration bit, which gives seven legal values including [`GestureCode::NONE`].

use core::fmt;
use core::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Classified button gesture, or a raw bit pattern built from the constants.
///
/// Deserialization goes through [`TryFrom<u8>`], so only the seven legal
/// codes are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GestureCode(u8);

impl GestureCode {
    /// No press occurred.
    pub const NONE: Self = Self(0x00);

    pub const SINGLE: Self = Self(0x01);
    pub const DOUBLE: Self = Self(0x02);
    pub const TRIPLE: Self = Self(0x04);
    pub const TAP_MASK: u8 = 0x07;

    pub const SHORT: Self = Self(0x08);
    pub const LONG: Self = Self(0x10);
    pub const DURATION_MASK: u8 = 0x18;

    pub const SINGLE_SHORT: Self = Self(0x01 | 0x08);
    pub const SINGLE_LONG: Self = Self(0x01 | 0x10);
    pub const DOUBLE_SHORT: Self = Self(0x02 | 0x08);
    pub const DOUBLE_LONG: Self = Self(0x02 | 0x10);
    pub const TRIPLE_SHORT: Self = Self(0x04 | 0x08);
    pub const TRIPLE_LONG: Self = Self(0x04 | 0x10);

    /// The six codes that can carry a handler, in dispatch-table order.
    pub const ACTIONABLE: [Self; 6] = [
        Self::SINGLE_SHORT,
        Self::SINGLE_LONG,
        Self::DOUBLE_SHORT,
        Self::DOUBLE_LONG,
        Self::TRIPLE_SHORT,
        Self::TRIPLE_LONG,
    ];

    /// Wrap a raw byte without validating it.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    pub const fn is_long(self) -> bool {
        self.0 & Self::LONG.0 != 0
    }

    pub const fn is_short(self) -> bool {
        self.0 & Self::SHORT.0 != 0
    }

    /// Tap-count bits only (`SINGLE`, `DOUBLE`, `TRIPLE` or `NONE`).
    pub const fn taps(self) -> Self {
        Self(self.0 & Self::TAP_MASK)
    }

    /// Number of taps encoded in the code, 0 for anything without
    /// exactly one tap bit.
    pub const fn tap_count(self) -> u8 {
        match self.0 & Self::TAP_MASK {
            0x01 => 1,
            0x02 => 2,
            0x04 => 3,
            _ => 0,
        }
    }

    /// Slot of this code in the dispatch table, if it is actionable.
    pub const fn slot(self) -> Option<usize> {
        match self.0 {
            0x09 => Some(0),
            0x11 => Some(1),
            0x0A => Some(2),
            0x12 => Some(3),
            0x0C => Some(4),
            0x14 => Some(5),
            _ => None,
        }
    }

    /// One of the six non-idle codes.
    pub const fn is_actionable(self) -> bool {
        self.slot().is_some()
    }

    /// One of the seven legal codes (`NONE` or actionable).
    pub const fn is_valid(self) -> bool {
        self.is_none() || self.is_actionable()
    }
}

impl BitOr for GestureCode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl TryFrom<u8> for GestureCode {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self, Error> {
        let code = Self(raw);
        if code.is_valid() {
            Ok(code)
        } else {
            Err(Error::InvalidGesture(raw))
        }
    }
}

impl From<GestureCode> for u8 {
    fn from(code: GestureCode) -> u8 {
        code.0
    }
}

impl fmt::Display for GestureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::NONE => "none",
            Self::SINGLE_SHORT => "single-short",
            Self::SINGLE_LONG => "single-long",
            Self::DOUBLE_SHORT => "double-short",
            Self::DOUBLE_LONG => "double-long",
            Self::TRIPLE_SHORT => "triple-short",
            Self::TRIPLE_LONG => "triple-long",
            Self(raw) => return write!(f, "raw(0x{raw:02X})"),
        };
        f.write_str(name)
    }
}
