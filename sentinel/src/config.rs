//! Monitoring-loop configuration.

use crate::error::MonitorError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed loop period in seconds.
///
/// The backward difference divides by this interval, so the loop must
/// actually be paced at it for the radial estimates to mean anything.
pub const SAMPLE_INTERVAL_S: f64 = 0.01;

/// Number of derivative samples smoothed before the threshold check.
pub const SMOOTHING_DEPTH: usize = 10;

/// Alarm threshold for the smoothed radial acceleration, rad/s².
///
/// Placeholder on the bench data's scale. Published concussion limits
/// are near 6432 rad/s² (1023 rev/s²) radial and 96.1 g linear; these
/// stand-ins keep roughly the same ratio for bench work.
pub const RAD_CONC_THRES: f64 = 33.3;

/// Alarm threshold for the smoothed linear acceleration, m/s².
/// See [`RAD_CONC_THRES`] for scale caveats.
pub const LIN_CONC_THRES: f64 = 30.0;

/// Minimum time between accepted arming toggles, seconds.
pub const DEBOUNCE_DEAD_TIME_S: f64 = 1.0;

/// Default notification log file, created in the working directory.
pub const DEFAULT_LOG_FILE: &str = "concussion_notification.txt";

/// Configuration for the monitoring loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Seconds between loop iterations, and between differenced samples
    pub sample_interval_s: f64,
    /// Depth of the smoothing windows
    pub smoothing_depth: usize,
    /// Alarm threshold for the smoothed radial average, rad/s²
    pub radial_threshold: f64,
    /// Alarm threshold for the smoothed linear average, m/s²
    pub linear_threshold: f64,
    /// Dead time between accepted arming toggles, seconds
    pub debounce_dead_time_s: f64,
    /// Path of the append-only notification log
    pub log_path: PathBuf,
}

impl MonitorConfig {
    /// Loop ticks per second at the configured interval.
    pub fn ticks_per_second(&self) -> u64 {
        (1.0 / self.sample_interval_s).round().max(1.0) as u64
    }

    /// Checks field ranges, returning the first violation found.
    pub fn validate(&self) -> Result<(), MonitorError> {
        if !self.sample_interval_s.is_finite() || self.sample_interval_s <= 0.0 {
            return Err(MonitorError::InvalidConfig(format!(
                "sample interval must be a positive number of seconds, got {}",
                self.sample_interval_s
            )));
        }
        if self.smoothing_depth == 0 {
            return Err(MonitorError::InvalidConfig(
                "smoothing depth must be at least 1".to_string(),
            ));
        }
        if !self.radial_threshold.is_finite() || self.radial_threshold <= 0.0 {
            return Err(MonitorError::InvalidConfig(format!(
                "radial threshold must be positive, got {}",
                self.radial_threshold
            )));
        }
        if !self.linear_threshold.is_finite() || self.linear_threshold <= 0.0 {
            return Err(MonitorError::InvalidConfig(format!(
                "linear threshold must be positive, got {}",
                self.linear_threshold
            )));
        }
        if !self.debounce_dead_time_s.is_finite() || self.debounce_dead_time_s < 0.0 {
            return Err(MonitorError::InvalidConfig(format!(
                "debounce dead time must be non-negative, got {}",
                self.debounce_dead_time_s
            )));
        }
        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sample_interval_s: SAMPLE_INTERVAL_S,
            smoothing_depth: SMOOTHING_DEPTH,
            radial_threshold: RAD_CONC_THRES,
            linear_threshold: LIN_CONC_THRES,
            debounce_dead_time_s: DEBOUNCE_DEAD_TIME_S,
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MonitorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_ticks_per_second() {
        assert_eq!(MonitorConfig::default().ticks_per_second(), 100);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = MonitorConfig {
            sample_interval_s: 0.0,
            ..MonitorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MonitorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_zero_smoothing_depth() {
        let config = MonitorConfig {
            smoothing_depth: 0,
            ..MonitorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_threshold() {
        let config = MonitorConfig {
            radial_threshold: f64::NAN,
            ..MonitorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
