//! Threshold evaluation for the alarm latch.

use crate::state::AlarmState;

/// Smoothed averages captured at the moment a breach latched.
///
/// These are what the notification log's annotated record reports:
/// the values the decision was actually made on, not the raw
/// single-tick estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breach {
    /// Radial average at breach, rad/s²
    pub radial_avg: f64,
    /// Linear average at breach, m/s²
    pub linear_avg: f64,
}

/// Compares smoothed averages against the alarm thresholds.
#[derive(Debug, Clone)]
pub struct AlarmEvaluator {
    radial_threshold: f64,
    linear_threshold: f64,
}

impl AlarmEvaluator {
    pub fn new(radial_threshold: f64, linear_threshold: f64) -> Self {
        Self {
            radial_threshold,
            linear_threshold,
        }
    }

    /// Evaluates one tick's smoothed averages.
    ///
    /// Returns a breach only on the Normal -> Alarmed edge: either
    /// average strictly exceeding its threshold latches, and a latched
    /// alarm never re-triggers until it has been acknowledged.
    pub fn evaluate(
        &self,
        radial_avg: f64,
        linear_avg: f64,
        current: AlarmState,
    ) -> Option<Breach> {
        if current.is_latched() {
            return None;
        }
        if radial_avg > self.radial_threshold || linear_avg > self.linear_threshold {
            return Some(Breach {
                radial_avg,
                linear_avg,
            });
        }
        None
    }
}
