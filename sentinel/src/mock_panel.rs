//! Mock panel peripherals for testing.
//!
//! Each mock exposes shared handles to its interior state so tests can
//! keep observing it after the mock has been moved into the monitor.

use shared::panel::{AlarmBuzzer, ArmingButton, LedColor, PanelResult, StatusLed};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock status LED recording every color change.
#[derive(Default)]
pub struct MockLed {
    color: Arc<Mutex<LedColor>>,
    history: Arc<Mutex<Vec<LedColor>>>,
}

impl MockLed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared view of the current color.
    pub fn color_handle(&self) -> Arc<Mutex<LedColor>> {
        Arc::clone(&self.color)
    }

    /// Shared view of the color-change history.
    pub fn history_handle(&self) -> Arc<Mutex<Vec<LedColor>>> {
        Arc::clone(&self.history)
    }
}

impl StatusLed for MockLed {
    fn set_color(&mut self, color: LedColor) -> PanelResult<()> {
        *self.color.lock().unwrap() = color;
        self.history.lock().unwrap().push(color);
        Ok(())
    }

    fn color(&self) -> LedColor {
        *self.color.lock().unwrap()
    }
}

/// Mock buzzer exposing its on/off state.
#[derive(Default)]
pub struct MockBuzzer {
    active: Arc<AtomicBool>,
}

impl MockBuzzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared view of the sounding state.
    pub fn active_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.active)
    }
}

impl AlarmBuzzer for MockBuzzer {
    fn on(&mut self) -> PanelResult<()> {
        self.active.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn off(&mut self) -> PanelResult<()> {
        self.active.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// Mock button replaying a per-tick press script.
///
/// Past the end of the script the button reads unpressed.
#[derive(Default)]
pub struct MockButton {
    script: Vec<bool>,
    cursor: Arc<Mutex<usize>>,
}

impl MockButton {
    /// Unpressed on every tick.
    pub fn unpressed() -> Self {
        Self::default()
    }

    /// Replays the given per-tick samples.
    pub fn with_script(script: Vec<bool>) -> Self {
        Self {
            script,
            cursor: Arc::new(Mutex::new(0)),
        }
    }

    /// Pressed for exactly one tick at each of the given tick indexes.
    pub fn pressed_at(ticks: &[u64], total_ticks: u64) -> Self {
        let mut script = vec![false; total_ticks as usize];
        for &tick in ticks {
            if let Some(slot) = script.get_mut(tick as usize) {
                *slot = true;
            }
        }
        Self::with_script(script)
    }
}

impl ArmingButton for MockButton {
    fn is_pressed(&mut self) -> PanelResult<bool> {
        let mut index = self.cursor.lock().unwrap();
        let pressed = self.script.get(*index).copied().unwrap_or(false);
        *index += 1;
        Ok(pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_records_history() {
        let mut led = MockLed::new();
        let history = led.history_handle();
        assert!(!led.is_lit());

        led.set_color(LedColor::Green).unwrap();
        led.set_color(LedColor::Red).unwrap();
        assert!(led.is_lit());
        assert_eq!(led.color(), LedColor::Red);
        assert_eq!(
            *history.lock().unwrap(),
            vec![LedColor::Green, LedColor::Red]
        );
    }

    #[test]
    fn test_buzzer_state_is_shared() {
        let mut buzzer = MockBuzzer::new();
        let active = buzzer.active_handle();
        buzzer.on().unwrap();
        assert!(active.load(Ordering::SeqCst));
        buzzer.off().unwrap();
        assert!(!active.load(Ordering::SeqCst));
    }

    #[test]
    fn test_button_script_plays_once() {
        let mut button = MockButton::pressed_at(&[1], 3);
        assert_eq!(button.is_pressed(), Ok(false));
        assert_eq!(button.is_pressed(), Ok(true));
        assert_eq!(button.is_pressed(), Ok(false));
        // Past the script's end.
        assert_eq!(button.is_pressed(), Ok(false));
    }
}
