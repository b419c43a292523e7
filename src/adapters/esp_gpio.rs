//! Raw ESP-IDF GPIO adapter.
//!
//! Configures button pins with `gpio_config` (interrupts disabled, the
//! classifier polls) and samples them with `gpio_get_level`. Any pin
//! number can be addressed, so one instance serves every button.

use esp_idf_svc::sys::*;
use log::{error, info};

use crate::app::ports::{InputMode, PinPort};

/// Stateless GPIO access through the ESP-IDF driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct EspGpio;

impl EspGpio {
    pub fn new() -> Self {
        Self
    }
}

impl PinPort for EspGpio {
    fn configure(&mut self, pin: u8, mode: InputMode) {
        let Some(pin_bit_mask) = pin_mask(pin) else {
            error!("gpio {}: pin number out of range, not configured", pin);
            return;
        };
        let (pull_up_en, pull_down_en) = match mode {
            InputMode::Floating => (
                gpio_pullup_t_GPIO_PULLUP_DISABLE,
                gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            ),
            InputMode::PullUp => (
                gpio_pullup_t_GPIO_PULLUP_ENABLE,
                gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            ),
            InputMode::PullDown => (
                gpio_pullup_t_GPIO_PULLUP_DISABLE,
                gpio_pulldown_t_GPIO_PULLDOWN_ENABLE,
            ),
        };
        let cfg = gpio_config_t {
            pin_bit_mask,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en,
            pull_down_en,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
            ..Default::default()
        };
        // SAFETY: gpio_config only touches the pins named in pin_bit_mask;
        // called once per button from the main task.
        let ret = unsafe { gpio_config(&cfg) };
        if ret == ESP_OK as i32 {
            info!("gpio {}: input, {:?}", pin, mode);
        } else {
            error!("gpio {}: gpio_config failed (rc={})", pin, ret);
        }
    }

    fn read_level(&mut self, pin: u8) -> bool {
        // SAFETY: gpio_get_level is a read-only register access on an
        // already-configured input pin.
        (unsafe { gpio_get_level(pin as i32) }) != 0
    }
}

/// Bit for `pin` in a `gpio_config_t` mask, `None` past the 64-bit mask.
fn pin_mask(pin: u8) -> Option<u64> {
    1u64.checked_shl(u32::from(pin))
}
