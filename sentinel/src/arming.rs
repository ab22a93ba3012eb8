//! Button-driven arming control with a software dead time.

use crate::state::ArmingState;

/// An accepted arming transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmingToggle {
    /// Unarmed -> Armed; the only path that clears a latched alarm
    Engaged,
    /// Armed -> Unarmed
    Disengaged,
}

/// Arming state machine fed one button sample per tick.
///
/// At most one toggle is accepted per dead-time interval, measured on
/// the loop clock passed to [`poll`]: a press held across consecutive
/// ticks, or a bouncy double-tap inside the window, produces a single
/// transition.
#[derive(Debug, Clone)]
pub struct ArmingControl {
    state: ArmingState,
    dead_time_s: f64,
    ready_at_s: f64,
}

impl ArmingControl {
    /// Starts armed; the loop lights the indicator green at startup to
    /// match.
    pub fn new(dead_time_s: f64) -> Self {
        Self {
            state: ArmingState::Armed,
            dead_time_s,
            ready_at_s: 0.0,
        }
    }

    pub fn state(&self) -> ArmingState {
        self.state
    }

    /// Evaluates the button sample for this tick.
    ///
    /// `now_s` is the loop clock (tick index times the sample
    /// interval). Returns the accepted transition, or `None` while the
    /// button is up or the dead time has not elapsed.
    pub fn poll(&mut self, pressed: bool, now_s: f64) -> Option<ArmingToggle> {
        if !pressed || now_s < self.ready_at_s {
            return None;
        }

        self.ready_at_s = now_s + self.dead_time_s;
        let toggle = match self.state {
            ArmingState::Unarmed => {
                self.state = ArmingState::Armed;
                ArmingToggle::Engaged
            }
            ArmingState::Armed => {
                self.state = ArmingState::Unarmed;
                ArmingToggle::Disengaged
            }
        };
        Some(toggle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_armed() {
        let control = ArmingControl::new(1.0);
        assert_eq!(control.state(), ArmingState::Armed);
    }

    #[test]
    fn test_unpressed_never_toggles() {
        let mut control = ArmingControl::new(1.0);
        for tick in 0..500u64 {
            assert_eq!(control.poll(false, tick as f64 * 0.01), None);
        }
        assert_eq!(control.state(), ArmingState::Armed);
    }

    #[test]
    fn test_press_toggles_and_alternates() {
        let mut control = ArmingControl::new(1.0);
        assert_eq!(control.poll(true, 0.0), Some(ArmingToggle::Disengaged));
        assert_eq!(control.state(), ArmingState::Unarmed);
        assert_eq!(control.poll(true, 2.0), Some(ArmingToggle::Engaged));
        assert_eq!(control.state(), ArmingState::Armed);
    }

    #[test]
    fn test_two_presses_within_dead_time_toggle_once() {
        let mut control = ArmingControl::new(1.0);
        assert!(control.poll(true, 0.0).is_some());
        assert_eq!(control.poll(true, 0.4), None);
        assert_eq!(control.state(), ArmingState::Unarmed);
    }

    #[test]
    fn test_held_press_toggles_once_per_dead_time() {
        let mut control = ArmingControl::new(1.0);
        let mut toggles = 0;
        // Hold the button for two simulated seconds at 100 Hz.
        for tick in 0..200u64 {
            if control.poll(true, tick as f64 * 0.01).is_some() {
                toggles += 1;
            }
        }
        assert_eq!(toggles, 2);
    }

    #[test]
    fn test_press_at_exact_dead_time_boundary_accepted() {
        let mut control = ArmingControl::new(1.0);
        assert!(control.poll(true, 0.0).is_some());
        assert!(control.poll(true, 1.0).is_some());
    }

    #[test]
    fn test_zero_dead_time_toggles_every_tick() {
        let mut control = ArmingControl::new(0.0);
        assert!(control.poll(true, 0.0).is_some());
        assert!(control.poll(true, 0.01).is_some());
    }
}
