//! ButtonGestures demo firmware — ESP32-S3.
//!
//! Polls the BOOT button in a loop, logs every resolved gesture and
//! routes each of the six gestures to its own handler.
//!
//! ```text
//!  EspGpio (PinPort) ──┐
//!                      ├──▶ ButtonGestures ──▶ handlers ──▶ log
//!  MonotonicClock ─────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::{info, warn};

use button_gestures::adapters::esp_gpio::EspGpio;
use button_gestures::adapters::time::MonotonicClock;
use button_gestures::{pins, ButtonConfig, ButtonGestures, GestureCallback, GestureCode, TimingConfig};

/// Pause between polls so the idle task can feed the task watchdog.
const POLL_INTERVAL_MS: u32 = 10;

fn on_single_short(pin: u8, code: GestureCode) {
    info!("gpio {pin}: {code} -> toggle");
}

fn on_single_long(pin: u8, code: GestureCode) {
    info!("gpio {pin}: {code} -> hold action");
}

fn on_double(pin: u8, code: GestureCode) {
    info!("gpio {pin}: {code} -> next mode");
}

fn on_triple(pin: u8, code: GestureCode) {
    info!("gpio {pin}: {code} -> reset request");
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ButtonGestures v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Button setup ───────────────────────────────────────
    let config = ButtonConfig::new(pins::BUTTON_GPIO)
        .with_polarity(pins::BUTTON_POLARITY)
        .with_mode(pins::BUTTON_INPUT_MODE)
        .with_timing(TimingConfig::default());
    let mut button = ButtonGestures::new(config, EspGpio::new(), MonotonicClock::new())?;

    let handlers: [(GestureCode, GestureCallback); 6] = [
        (GestureCode::SINGLE_SHORT, on_single_short),
        (GestureCode::SINGLE_LONG, on_single_long),
        (GestureCode::DOUBLE_SHORT, on_double),
        (GestureCode::DOUBLE_LONG, on_double),
        (GestureCode::TRIPLE_SHORT, on_triple),
        (GestureCode::TRIPLE_LONG, on_triple),
    ];
    for (code, handler) in handlers {
        if !button.register_handler(code, handler) {
            warn!("gpio {}: handler for {} rejected", button.pin(), code);
        }
    }

    info!(
        "Polling gpio {} (worst case {} ms per gesture)",
        button.pin(),
        button.timing().worst_case_ms()
    );

    // ── 3. Poll loop ──────────────────────────────────────────
    loop {
        let code = button.poll();
        if !code.is_none() {
            info!("gesture: {code} (0x{:02X})", code.bits());
        }
        FreeRtos::delay_ms(POLL_INTERVAL_MS);
    }
}
