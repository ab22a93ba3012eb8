//! End-to-end tests driving the full monitoring loop over scripted
//! sensors and panel mocks.

mod common;

use common::{spike_stream, steady_stream, MotionStreamConfig};
use sentinel::mock_imu::{MockOrientationSensor, ScriptedReading};
use sentinel::mock_panel::{MockBuzzer, MockButton, MockLed};
use sentinel::{ArmingState, IndicatorState, Monitor, MonitorConfig, Panel};
use shared::panel::LedColor;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// One-tick gyro step used by the impact tests, deg/s.
///
/// Differenced over the 0.01 s interval this comes out at ~698.13
/// rad/s², and the 10-deep window average on the impact tick at
/// ~69.81, comfortably past the 33.3 threshold.
const IMPACT_SPIKE_DPS: f64 = 400.0;

struct TestRig {
    monitor: Monitor,
    led: Arc<Mutex<LedColor>>,
    buzzer: Arc<AtomicBool>,
    log_path: PathBuf,
    _dir: TempDir,
}

impl TestRig {
    fn new(readings: Vec<ScriptedReading>, button: MockButton) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("concussion_notification.txt");
        let config = MonitorConfig {
            log_path: log_path.clone(),
            ..MonitorConfig::default()
        };

        let led = MockLed::new();
        let led_handle = led.color_handle();
        let buzzer = MockBuzzer::new();
        let buzzer_handle = buzzer.active_handle();

        let mut monitor = Monitor::new(
            config,
            Box::new(MockOrientationSensor::new_repeating(readings)),
            Panel {
                led: Box::new(led),
                buzzer: Box::new(buzzer),
                button: Box::new(button),
            },
        )
        .unwrap();
        monitor.start().unwrap();

        Self {
            monitor,
            led: led_handle,
            buzzer: buzzer_handle,
            log_path,
            _dir: dir,
        }
    }

    fn led_color(&self) -> LedColor {
        *self.led.lock().unwrap()
    }

    fn buzzer_on(&self) -> bool {
        self.buzzer.load(Ordering::SeqCst)
    }

    fn log_contents(&self) -> String {
        std::fs::read_to_string(&self.log_path).unwrap()
    }
}

#[test]
fn test_quiet_wearer_never_alarms() {
    let stream_config = MotionStreamConfig::default();
    let mut rig = TestRig::new(steady_stream(&stream_config), MockButton::unpressed());

    for _ in 0..stream_config.ticks {
        let report = rig.monitor.process_tick();
        assert!(!report.breached);
        assert_eq!(report.indicator, IndicatorState::Armed);
    }

    assert_eq!(rig.monitor.stats().breaches, 0);
    assert_eq!(rig.led_color(), LedColor::Green);
    assert!(!rig.buzzer_on());

    let contents = rig.log_contents();
    assert!(!contents.contains("Concussed"));
    // Two header rows plus one record per tick.
    assert_eq!(contents.lines().count(), 2 + stream_config.ticks);
}

#[test]
fn test_impact_latches_on_the_impact_tick() {
    let total_ticks = 80;
    let stream = spike_stream(total_ticks, 50, IMPACT_SPIKE_DPS);
    let mut rig = TestRig::new(stream, MockButton::unpressed());

    let mut breach_tick = None;
    for _ in 0..total_ticks {
        let report = rig.monitor.process_tick();
        if report.breached {
            assert!(breach_tick.is_none(), "alarm latched more than once");
            breach_tick = Some(report.tick);
        }
    }

    assert_eq!(breach_tick, Some(50));
    assert!(rig.monitor.state().alarm.is_latched());
    assert_eq!(rig.led_color(), LedColor::Red);
    assert!(rig.buzzer_on());

    let contents = rig.log_contents();
    // First record has no radial estimate yet; the linear channel is
    // already live.
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[2], "N/A\t5.00");
    // The annotated record carries the window averages at the breach,
    // then the regular record for the impact tick follows.
    assert!(
        contents.contains("69.81\t5.00\n\nConcussed\n\n698.13\t5.00\n"),
        "unexpected log contents around the breach:\n{contents}"
    );
}

#[test]
fn test_full_lifecycle_breach_acknowledge_rearm() {
    let total_ticks = 400;
    let stream = spike_stream(total_ticks, 50, IMPACT_SPIKE_DPS);
    let button = MockButton::pressed_at(&[150, 300], total_ticks as u64);
    let mut rig = TestRig::new(stream, button);

    // === Phase 1: quiet baseline, armed and green ===
    for _ in 0..50 {
        let report = rig.monitor.process_tick();
        assert!(!report.breached);
    }
    assert_eq!(rig.led_color(), LedColor::Green);
    assert!(!rig.buzzer_on());

    // === Phase 2: impact latches the alarm ===
    let report = rig.monitor.process_tick();
    assert!(report.breached);
    assert_eq!(report.indicator, IndicatorState::Alarm);
    assert_eq!(rig.led_color(), LedColor::Red);
    assert!(rig.buzzer_on());

    // === Phase 3: disengage silences the panel but keeps the latch ===
    for _ in 51..=150 {
        rig.monitor.process_tick();
    }
    assert_eq!(rig.monitor.state().arming.state(), ArmingState::Unarmed);
    assert!(rig.monitor.state().alarm.is_latched());
    assert_eq!(rig.led_color(), LedColor::Off);
    assert!(!rig.buzzer_on());

    // === Phase 4: re-arming acknowledges and goes back to green ===
    for _ in 151..=300 {
        rig.monitor.process_tick();
    }
    assert_eq!(rig.monitor.state().arming.state(), ArmingState::Armed);
    assert!(!rig.monitor.state().alarm.is_latched());
    assert_eq!(rig.led_color(), LedColor::Green);
    assert!(!rig.buzzer_on());

    // === Phase 5: loop is still healthy after the full cycle ===
    for _ in 301..total_ticks {
        let report = rig.monitor.process_tick();
        assert!(!report.breached);
        assert_eq!(report.indicator, IndicatorState::Armed);
    }
    assert_eq!(rig.monitor.stats().breaches, 1);
    assert_eq!(rig.monitor.stats().toggles, 2);
}

#[test]
fn test_breach_while_unarmed_still_latches_and_one_press_clears() {
    let total_ticks = 260;
    let stream = spike_stream(total_ticks, 60, IMPACT_SPIKE_DPS);
    let button = MockButton::pressed_at(&[10, 200], total_ticks as u64);
    let mut rig = TestRig::new(stream, button);

    // Disarm before the impact: panel goes dark, thresholds are still
    // watched every tick.
    for _ in 0..=10 {
        rig.monitor.process_tick();
    }
    assert_eq!(rig.monitor.state().arming.state(), ArmingState::Unarmed);
    assert_eq!(rig.led_color(), LedColor::Off);

    // The impact latches and drives the panel despite being unarmed.
    let mut breach_tick = None;
    for _ in 11..=60 {
        let report = rig.monitor.process_tick();
        if report.breached {
            breach_tick = Some(report.tick);
        }
    }
    assert_eq!(breach_tick, Some(60));
    assert!(rig.monitor.state().alarm.is_latched());
    assert_eq!(rig.monitor.state().arming.state(), ArmingState::Unarmed);
    assert_eq!(rig.led_color(), LedColor::Red);
    assert!(rig.buzzer_on());

    // A single press is enough: re-arming is itself the acknowledge.
    for _ in 61..=200 {
        rig.monitor.process_tick();
    }
    assert_eq!(rig.monitor.state().arming.state(), ArmingState::Armed);
    assert!(!rig.monitor.state().alarm.is_latched());
    assert_eq!(rig.led_color(), LedColor::Green);
    assert!(!rig.buzzer_on());
    assert_eq!(rig.monitor.stats().breaches, 1);
    assert_eq!(rig.monitor.stats().toggles, 2);
}

#[test]
fn test_presses_a_full_second_apart_both_count() {
    let total_ticks = 250;
    let stream_config = MotionStreamConfig {
        ticks: total_ticks,
        ..MotionStreamConfig::default()
    };
    let button = MockButton::pressed_at(&[100, 200], total_ticks as u64);
    let mut rig = TestRig::new(steady_stream(&stream_config), button);

    for _ in 0..total_ticks {
        rig.monitor.process_tick();
    }

    // 100 ticks is exactly the one-second dead time at 100 Hz.
    assert_eq!(rig.monitor.stats().toggles, 2);
    assert_eq!(rig.monitor.state().arming.state(), ArmingState::Armed);
}

#[test]
fn test_sensor_dropout_and_recovery() {
    let stream_config = MotionStreamConfig::default();
    let mut stream = steady_stream(&stream_config);
    for reading in stream.iter_mut().take(33).skip(30) {
        *reading = ScriptedReading::gyro_fault((0.2, 0.0, 0.0));
    }
    let mut rig = TestRig::new(stream, MockButton::unpressed());

    for tick in 0..stream_config.ticks as u64 {
        let report = rig.monitor.process_tick();
        if (30..33).contains(&tick) {
            assert_eq!(report.radial, None);
        }
        assert!(!report.breached);
    }

    assert_eq!(rig.monitor.stats().gyro_faults, 3);
    assert_eq!(rig.monitor.stats().breaches, 0);
    // The radial channel resumed after the dropout.
    assert!(!rig.monitor.state().radial_window.is_empty());
    assert_eq!(rig.led_color(), LedColor::Green);
}
