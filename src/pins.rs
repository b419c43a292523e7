//! GPIO assignments for the demo firmware board (ESP32-S3 DevKitC).
//!
//! Single source of truth — the firmware entry point references this
//! module rather than hard-coding pin numbers.

use crate::app::ports::{InputMode, Polarity};

/// On-board BOOT push-button. Shorts to GND when pressed.
pub const BUTTON_GPIO: u8 = 0;
/// BOOT button reads LOW when pressed.
pub const BUTTON_POLARITY: Polarity = Polarity::ActiveLow;
/// Internal pull-up holds the idle level HIGH.
pub const BUTTON_INPUT_MODE: InputMode = InputMode::PullUp;
