//! Loop state types.

use serde::{Deserialize, Serialize};
use shared::window::ScalarWindow;

use crate::arming::{ArmingControl, ArmingToggle};
use crate::config::MonitorConfig;
use crate::motion::RadialAccelEstimator;

/// Alarm latch states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmState {
    /// No breach since the last acknowledge
    Normal,
    /// Threshold breached; held until acknowledged by re-arming
    Alarmed,
}

impl AlarmState {
    /// True while the alarm is latched.
    pub fn is_latched(self) -> bool {
        matches!(self, AlarmState::Alarmed)
    }
}

/// Arming states toggled by the panel button.
///
/// Detection runs in both states; arming only selects whether the
/// panel indicates it and whether an acknowledge is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmingState {
    /// Indicator dark
    Unarmed,
    /// Indicator lit
    Armed,
}

/// Indicator tri-state reported per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorState {
    /// LED unlit
    Idle,
    /// LED lit with no latched alarm
    Armed,
    /// LED lit with a latched alarm
    Alarm,
}

impl IndicatorState {
    /// Derives the reporting tri-state from the LED and the latch.
    pub fn derive(lit: bool, alarm: AlarmState) -> Self {
        match (lit, alarm) {
            (false, _) => IndicatorState::Idle,
            (true, AlarmState::Normal) => IndicatorState::Armed,
            (true, AlarmState::Alarmed) => IndicatorState::Alarm,
        }
    }
}

/// All mutable state owned by the monitoring loop.
///
/// Everything the loop updates tick to tick lives here, so a reader
/// can see the loop's whole footprint in one place and tests can
/// inspect it directly.
#[derive(Debug, Clone)]
pub struct LoopState {
    /// Alarm latch
    pub alarm: AlarmState,
    /// Button-driven arming state machine
    pub arming: ArmingControl,
    /// Backward-difference estimator fed by gyroscope samples
    pub radial_estimator: RadialAccelEstimator,
    /// Smoothing window of radial acceleration magnitudes
    pub radial_window: ScalarWindow,
    /// Smoothing window of linear acceleration magnitudes
    pub linear_window: ScalarWindow,
    /// Ticks processed since start
    pub tick: u64,
}

impl LoopState {
    /// Fresh state: alarm clear, armed, empty windows.
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            alarm: AlarmState::Normal,
            arming: ArmingControl::new(config.debounce_dead_time_s),
            radial_estimator: RadialAccelEstimator::new(config.sample_interval_s),
            radial_window: ScalarWindow::new(config.smoothing_depth),
            linear_window: ScalarWindow::new(config.smoothing_depth),
            tick: 0,
        }
    }
}

/// Outcome of one loop iteration.
#[derive(Debug, Clone)]
pub struct TickReport {
    /// Tick index, starting at 0
    pub tick: u64,
    /// Radial acceleration estimate for this tick, rad/s², if available
    pub radial: Option<f64>,
    /// Peak linear acceleration for this tick, m/s², if available
    pub linear: Option<f64>,
    /// Smoothed radial average used for the threshold check
    pub radial_avg: f64,
    /// Smoothed linear average used for the threshold check
    pub linear_avg: f64,
    /// True when this tick latched the alarm
    pub breached: bool,
    /// Arming transition accepted this tick, if any
    pub toggled: Option<ArmingToggle>,
    /// Indicator tri-state after this tick's updates
    pub indicator: IndicatorState,
    /// Whether the regular log record reached the file
    pub logged: bool,
}
