//! Indicator-panel interfaces: status LED, alarm buzzer, arming button.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Error type for panel operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// GPIO request or line update failure
    Gpio(String),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::Gpio(msg) => write!(f, "GPIO error: {msg}"),
        }
    }
}

impl Error for PanelError {}

/// Result type for panel operations
pub type PanelResult<T> = Result<T, PanelError>;

/// Color shown by the status LED.
///
/// The monitor only drives these three states even though the part
/// itself is a full RGB LED.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedColor {
    /// All channels off
    #[default]
    Off,
    /// Armed and monitoring
    Green,
    /// Latched concussion alarm
    Red,
}

impl LedColor {
    /// Per-channel drive levels as (red, green, blue).
    pub fn channels(self) -> (bool, bool, bool) {
        match self {
            LedColor::Off => (false, false, false),
            LedColor::Green => (false, true, false),
            LedColor::Red => (true, false, false),
        }
    }
}

/// Status LED with a settable color.
pub trait StatusLed: Send {
    /// Drive the LED to the given color.
    fn set_color(&mut self, color: LedColor) -> PanelResult<()>;

    /// Currently displayed color.
    fn color(&self) -> LedColor;

    /// True while any channel is driven.
    fn is_lit(&self) -> bool {
        self.color() != LedColor::Off
    }
}

/// Alarm buzzer with on/off control.
pub trait AlarmBuzzer: Send {
    fn on(&mut self) -> PanelResult<()>;

    fn off(&mut self) -> PanelResult<()>;

    /// True while the buzzer is sounding.
    fn is_on(&self) -> bool;
}

/// Momentary arming/acknowledge button.
///
/// Implementations report the instantaneous level; the loop supplies
/// its own dead time between accepted presses.
pub trait ArmingButton: Send {
    fn is_pressed(&mut self) -> PanelResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_color_channels() {
        assert_eq!(LedColor::Off.channels(), (false, false, false));
        assert_eq!(LedColor::Green.channels(), (false, true, false));
        assert_eq!(LedColor::Red.channels(), (true, false, false));
    }
}
