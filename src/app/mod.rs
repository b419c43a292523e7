//! Application boundary — port traits only, zero I/O.
//!
//! The gesture core reaches the pin and the clock exclusively through
//! the traits in [`ports`], so it runs unchanged against real GPIO,
//! an `embedded-hal` pin, or a simulated timeline in tests.

pub mod ports;
