//! Error types for the gesture library.
//!
//! Gesture classification itself is total: every path through the
//! cascade ends in one of the seven legal codes. The only fallible
//! operations are configuration validation and converting raw bytes
//! into a [`GestureCode`](crate::gesture::GestureCode).

use core::fmt;

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Timing constants violate `0 < debounce < multi-tap window < long press`.
    Timing(&'static str),
    /// A raw byte is not one of the seven legal gesture codes.
    InvalidGesture(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timing(msg) => write!(f, "timing: {msg}"),
            Self::InvalidGesture(raw) => write!(f, "invalid gesture code 0x{raw:02X}"),
        }
    }
}

impl core::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
