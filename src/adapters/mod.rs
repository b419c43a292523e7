//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements | Connects to                         |
//! |------------|------------|-------------------------------------|
//! | `esp_gpio` | PinPort    | ESP-IDF GPIO driver (espidf only)   |
//! | `hal_pin`  | PinPort    | any `embedded-hal` 1.0 `InputPin`   |
//! | `time`     | ClockPort  | ESP32 system timer / host `Instant` |

#[cfg(feature = "espidf")]
pub mod esp_gpio;
pub mod hal_pin;
pub mod time;
