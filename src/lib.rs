//! Push-button gesture library.
//!
//! Turns a polled push-button into one of seven gesture codes: idle, or
//! single/double/triple tap in a short or long variant. Hardware is
//! reached only through the port traits in [`app::ports`], so the whole
//! classifier runs on the host in tests. ESP-IDF specific code is guarded
//! by the `espidf` feature.
//!
//! ```text
//!   PinPort ──▶ Debouncer ──▶ ButtonGestures ──▶ CallbackTable
//!   ClockPort ─┘              (cascade + hysteresis)   │
//!                              GestureTracker (tick)   ▼
//!                                                   handlers
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod gesture;
pub mod pins;

pub use app::ports::{ClockPort, InputMode, PinPort, Polarity};
pub use config::{ButtonConfig, TimingConfig};
pub use drivers::button::ButtonGestures;
pub use drivers::dispatch::GestureCallback;
pub use drivers::tracker::GestureTracker;
pub use error::{Error, Result};
pub use gesture::GestureCode;
