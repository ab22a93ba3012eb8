//! Common utilities for monitor integration tests.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sentinel::mock_imu::ScriptedReading;

/// Parameters for a synthetic wearer motion stream.
#[derive(Debug, Clone)]
pub struct MotionStreamConfig {
    /// Number of ticks to script
    pub ticks: usize,
    /// Baseline angular velocity per axis, deg/s
    pub gyro_baseline_dps: f64,
    /// Uniform jitter amplitude added to each gyro axis, deg/s
    pub gyro_jitter_dps: f64,
    /// Baseline linear acceleration on the x axis, m/s²
    pub linear_baseline: f64,
    /// Uniform jitter amplitude added to each linear axis, m/s²
    pub linear_jitter: f64,
    /// RNG seed for reproducibility
    pub seed: u64,
}

impl Default for MotionStreamConfig {
    fn default() -> Self {
        Self {
            ticks: 300,
            gyro_baseline_dps: 2.0,
            gyro_jitter_dps: 0.5,
            linear_baseline: 0.2,
            linear_jitter: 0.3,
            seed: 42,
        }
    }
}

/// Builds a quiet wearer stream: near-constant rotation and gentle
/// linear acceleration, nowhere near the alarm thresholds.
pub fn steady_stream(config: &MotionStreamConfig) -> Vec<ScriptedReading> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let jitter = |amplitude: f64, rng: &mut ChaCha8Rng| {
        if amplitude > 0.0 {
            rng.gen_range(-amplitude..amplitude)
        } else {
            0.0
        }
    };

    (0..config.ticks)
        .map(|_| {
            let gyro = (
                config.gyro_baseline_dps + jitter(config.gyro_jitter_dps, &mut rng),
                config.gyro_baseline_dps + jitter(config.gyro_jitter_dps, &mut rng),
                config.gyro_baseline_dps + jitter(config.gyro_jitter_dps, &mut rng),
            );
            let linear = (
                config.linear_baseline + jitter(config.linear_jitter, &mut rng),
                jitter(config.linear_jitter, &mut rng),
                jitter(config.linear_jitter, &mut rng),
            );
            ScriptedReading::ok(gyro, linear)
        })
        .collect()
}

/// Builds a jitter-free stream with a one-tick gyro step at
/// `spike_tick`.
///
/// The wearer is otherwise still, so the expected log records and
/// window averages can be computed exactly.
pub fn spike_stream(ticks: usize, spike_tick: usize, spike_dps: f64) -> Vec<ScriptedReading> {
    (0..ticks)
        .map(|tick| {
            let gyro = if tick == spike_tick {
                (spike_dps, 0.0, 0.0)
            } else {
                (0.0, 0.0, 0.0)
            };
            ScriptedReading::ok(gyro, (5.0, 0.0, 0.0))
        })
        .collect()
}
