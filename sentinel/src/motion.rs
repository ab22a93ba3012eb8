//! Acceleration estimates derived from raw sensor samples.

use shared::imu::AxisTriple;
use shared::window::ScalarWindow;

/// Samples differenced per axis by the estimator.
const DERIVATIVE_DEPTH: usize = 2;

/// Backward-difference estimator for radial (angular) acceleration.
///
/// Buffers the two most recent angular-velocity samples per axis,
/// converted to rad/s, and differences them over the fixed sample
/// interval. The estimate is the largest per-axis |Δω/Δt|: whichever
/// axis the head is snapping around dominates, without averaging it
/// away against the quiet axes.
///
/// Until two samples have arrived there is no estimate; `None` is
/// deliberately distinct from a measured zero.
#[derive(Debug, Clone)]
pub struct RadialAccelEstimator {
    interval_s: f64,
    x: ScalarWindow,
    y: ScalarWindow,
    z: ScalarWindow,
}

impl RadialAccelEstimator {
    pub fn new(interval_s: f64) -> Self {
        Self {
            interval_s,
            x: ScalarWindow::new(DERIVATIVE_DEPTH),
            y: ScalarWindow::new(DERIVATIVE_DEPTH),
            z: ScalarWindow::new(DERIVATIVE_DEPTH),
        }
    }

    /// Ingests a gyroscope sample in deg/s and returns the estimated
    /// angular-acceleration magnitude in rad/s², once enough samples
    /// are buffered.
    pub fn ingest(&mut self, gyro_dps: AxisTriple) -> Option<f64> {
        self.x.push(gyro_dps.0.to_radians());
        self.y.push(gyro_dps.1.to_radians());
        self.z.push(gyro_dps.2.to_radians());

        let ax = axis_accel(&self.x, self.interval_s)?;
        let ay = axis_accel(&self.y, self.interval_s)?;
        let az = axis_accel(&self.z, self.interval_s)?;
        Some(ax.max(ay).max(az))
    }
}

fn axis_accel(window: &ScalarWindow, interval_s: f64) -> Option<f64> {
    if window.len() < DERIVATIVE_DEPTH {
        return None;
    }
    let oldest = window.front()?;
    let newest = window.back()?;
    Some(((newest - oldest) / interval_s).abs())
}

/// Largest absolute component of a linear-acceleration sample, m/s².
///
/// Component-wise rather than a vector norm: the alarm threshold was
/// characterized against single-axis impact data.
pub fn peak_linear_accel(sample: AxisTriple) -> f64 {
    sample.0.abs().max(sample.1.abs()).max(sample.2.abs())
}
