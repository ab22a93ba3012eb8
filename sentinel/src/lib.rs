//! SENTINEL - Sensor-Embedded Neurotrauma Threshold Indication and
//! Notification Event Loop
//!
//! Single-threaded, fixed-period concussion monitor. Each tick it:
//!
//! 1. Reads angular velocity and linear acceleration from the IMU and
//!    derives this tick's radial (backward difference of angular
//!    velocity) and peak linear acceleration estimates.
//! 2. Pushes the estimates into their sliding smoothing windows.
//! 3. Compares the window averages against the concussion thresholds
//!    and, on a breach, latches the alarm, drives the red LED and the
//!    buzzer, and annotates the notification log.
//! 4. Appends the tick's estimates to the notification log.
//! 5. Emits a console status row once per second.
//! 6. Polls the arming button: a debounced press toggles arming, and
//!    re-arming is what acknowledges a latched alarm.
//!
//! Faulted sensor reads and failed log writes are logged and skipped;
//! the loop never stops for them. The panel collaborators are traits,
//! so the same loop runs over GPIO hardware or scripted mocks.

pub mod alarm;
pub mod arming;
pub mod config;
pub mod error;
pub mod mock_imu;
pub mod mock_panel;
pub mod motion;
pub mod notification;
pub mod state;

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use log::{info, warn};
use shared::imu::OrientationSensor;
use shared::panel::{AlarmBuzzer, ArmingButton, LedColor, StatusLed};

use crate::alarm::{AlarmEvaluator, Breach};
use crate::arming::ArmingToggle;
use crate::motion::peak_linear_accel;
use crate::notification::NotificationLog;

pub use crate::config::MonitorConfig;
pub use crate::error::MonitorError;
pub use crate::state::{AlarmState, ArmingState, IndicatorState, LoopState, TickReport};

/// Panel update requested by the loop's decision logic.
///
/// The handlers decide what the panel should show but do not touch the
/// hardware; the loop applies the updates afterwards, and an update
/// that fails is logged and skipped rather than unwinding the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorUpdate {
    SetLed(LedColor),
    BuzzerOn,
    BuzzerOff,
}

/// The indicator-panel collaborators as one bundle.
pub struct Panel {
    pub led: Box<dyn StatusLed>,
    pub buzzer: Box<dyn AlarmBuzzer>,
    pub button: Box<dyn ArmingButton>,
}

/// Loop counters reported at shutdown.
#[derive(Debug, Clone, Default)]
pub struct LoopStats {
    pub ticks: u64,
    pub gyro_faults: u64,
    pub linear_faults: u64,
    pub breaches: u64,
    pub toggles: u64,
    pub log_failures: u64,
}

impl LoopStats {
    fn final_report(&self) {
        info!("=== Final Statistics ===");
        info!("Ticks processed: {}", self.ticks);
        info!("Breaches latched: {}", self.breaches);
        info!("Arming toggles: {}", self.toggles);
        info!(
            "Sensor faults: gyro={}, linear={}",
            self.gyro_faults, self.linear_faults
        );
        info!("Log write failures: {}", self.log_failures);
    }
}

/// The concussion monitoring loop.
pub struct Monitor {
    config: MonitorConfig,
    state: LoopState,
    evaluator: AlarmEvaluator,
    sensor: Box<dyn OrientationSensor>,
    panel: Panel,
    log: NotificationLog,
    stats: LoopStats,
}

impl Monitor {
    /// Creates a monitor over the given collaborators.
    ///
    /// Validates the configuration up front. The notification log is
    /// not touched until [`Monitor::start`] resets it.
    pub fn new(
        config: MonitorConfig,
        sensor: Box<dyn OrientationSensor>,
        panel: Panel,
    ) -> Result<Self, MonitorError> {
        config.validate()?;
        let evaluator = AlarmEvaluator::new(config.radial_threshold, config.linear_threshold);
        let state = LoopState::new(&config);
        let log = NotificationLog::new(config.log_path.clone());
        Ok(Self {
            config,
            state,
            evaluator,
            sensor,
            panel,
            log,
            stats: LoopStats::default(),
        })
    }

    /// Current loop state.
    pub fn state(&self) -> &LoopState {
        &self.state
    }

    /// Loop counters so far.
    pub fn stats(&self) -> &LoopStats {
        &self.stats
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Resets the notification log and lights the arming indicator.
    ///
    /// Startup is strict: a failure here aborts instead of being
    /// retried, unlike the lenient per-tick path.
    pub fn start(&mut self) -> Result<(), MonitorError> {
        self.log.reset_with_header()?;
        self.panel.led.set_color(LedColor::Green)?;
        info!(
            "Monitoring {} at {} Hz",
            self.sensor.name(),
            self.config.ticks_per_second()
        );
        info!("Power\t\tStatus\t\tAvg Radial\tAvg Linear\tWriting to File?");
        info!("{}", "-".repeat(80));
        Ok(())
    }

    /// Runs the loop at the configured period until the shutdown flag
    /// is raised or `max_ticks` ticks have been processed (0 = run
    /// until shut down).
    pub fn run(&mut self, shutdown: &AtomicBool, max_ticks: u64) -> Result<(), MonitorError> {
        self.start()?;
        let period = Duration::from_secs_f64(self.config.sample_interval_s);

        while !shutdown.load(Ordering::SeqCst) {
            self.process_tick();
            if max_ticks > 0 && self.stats.ticks >= max_ticks {
                break;
            }
            thread::sleep(period);
        }

        self.stats.final_report();
        Ok(())
    }

    /// Executes one iteration of the monitoring pipeline.
    ///
    /// Public so harnesses and tests can drive the loop without real
    /// time passing; [`Monitor::run`] calls this once per period.
    pub fn process_tick(&mut self) -> TickReport {
        let tick = self.state.tick;
        let now_s = tick as f64 * self.config.sample_interval_s;

        // Acquire this tick's estimates. A faulted channel skips its
        // window update; the other channel proceeds independently.
        let radial = match self.sensor.read_gyroscope() {
            Ok(sample) => self.state.radial_estimator.ingest(sample),
            Err(e) => {
                self.stats.gyro_faults += 1;
                warn!("Gyroscope read failed: {e}");
                None
            }
        };
        let linear = match self.sensor.read_linear_acceleration() {
            Ok(sample) => Some(peak_linear_accel(sample)),
            Err(e) => {
                self.stats.linear_faults += 1;
                warn!("Linear acceleration read failed: {e}");
                None
            }
        };

        if let Some(value) = radial {
            self.state.radial_window.push(value);
        }
        if let Some(value) = linear {
            self.state.linear_window.push(value);
        }

        // Threshold check on the smoothed averages, every tick,
        // armed or not.
        let radial_avg = self.state.radial_window.average();
        let linear_avg = self.state.linear_window.average();
        let breach = self
            .evaluator
            .evaluate(radial_avg, linear_avg, self.state.alarm);
        let breached = breach.is_some();
        if let Some(breach) = breach {
            let updates = self.handle_breach(breach);
            self.apply_updates(&updates);
        }

        // Regular record for the tick, before any arming change below
        // can affect the next one.
        let logged = match self.log.record(radial, linear, false) {
            Ok(()) => true,
            Err(e) => {
                self.stats.log_failures += 1;
                warn!("Notification log write failed: {e}");
                false
            }
        };

        if tick % self.config.ticks_per_second() == 0 {
            self.emit_status(radial_avg, linear_avg, logged);
        }

        let pressed = match self.panel.button.is_pressed() {
            Ok(pressed) => pressed,
            Err(e) => {
                warn!("Button read failed: {e}");
                false
            }
        };
        let toggled = self.state.arming.poll(pressed, now_s);
        if let Some(toggle) = toggled {
            self.stats.toggles += 1;
            let updates = self.handle_toggle(toggle);
            self.apply_updates(&updates);
        }

        self.state.tick += 1;
        self.stats.ticks += 1;

        TickReport {
            tick,
            radial,
            linear,
            radial_avg,
            linear_avg,
            breached,
            toggled,
            indicator: IndicatorState::derive(self.panel.led.is_lit(), self.state.alarm),
            logged,
        }
    }

    /// Latches the alarm and requests the breach indication.
    ///
    /// The annotated log record carries the smoothed averages the
    /// decision was made on, not the tick's raw estimates.
    fn handle_breach(&mut self, breach: Breach) -> Vec<IndicatorUpdate> {
        self.state.alarm = AlarmState::Alarmed;
        self.stats.breaches += 1;
        warn!(
            "Concussion detected: radial avg {:.2} rad/s², linear avg {:.2} m/s²",
            breach.radial_avg, breach.linear_avg
        );
        if let Err(e) = self
            .log
            .record(Some(breach.radial_avg), Some(breach.linear_avg), true)
        {
            self.stats.log_failures += 1;
            warn!("Notification log write failed: {e}");
        }
        vec![
            IndicatorUpdate::SetLed(LedColor::Red),
            IndicatorUpdate::BuzzerOn,
        ]
    }

    /// Applies an accepted arming transition.
    ///
    /// Both directions silence the buzzer; engaging is additionally the
    /// acknowledge path that clears a latched alarm.
    fn handle_toggle(&mut self, toggle: ArmingToggle) -> Vec<IndicatorUpdate> {
        match toggle {
            ArmingToggle::Engaged => {
                if self.state.alarm.is_latched() {
                    info!("Alarm acknowledged, latch cleared");
                }
                self.state.alarm = AlarmState::Normal;
                vec![
                    IndicatorUpdate::BuzzerOff,
                    IndicatorUpdate::SetLed(LedColor::Green),
                ]
            }
            ArmingToggle::Disengaged => vec![
                IndicatorUpdate::BuzzerOff,
                IndicatorUpdate::SetLed(LedColor::Off),
            ],
        }
    }

    /// Applies panel updates, logging and skipping any that fail.
    fn apply_updates(&mut self, updates: &[IndicatorUpdate]) {
        for update in updates {
            let result = match update {
                IndicatorUpdate::SetLed(color) => self.panel.led.set_color(*color),
                IndicatorUpdate::BuzzerOn => self.panel.buzzer.on(),
                IndicatorUpdate::BuzzerOff => self.panel.buzzer.off(),
            };
            if let Err(e) = result {
                warn!("Failed to apply panel update {update:?}: {e}");
            }
        }
    }

    /// One row of the console status table.
    fn emit_status(&self, radial_avg: f64, linear_avg: f64, logged: bool) {
        if self.panel.led.is_lit() {
            let status = if self.state.alarm.is_latched() {
                "Concussed"
            } else {
                "OK\t"
            };
            let writing = if logged { "YES" } else { "NO" };
            info!("ON\t\t{status}\t{radial_avg:.2}\t\t{linear_avg:.2}\t\t{writing}");
        } else {
            info!("OFF\t\tOFF\t\tN/A\t\tN/A\t\tNO");
        }
    }
}
