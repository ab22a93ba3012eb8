//! Error types for the monitoring loop.

use shared::panel::PanelError;
use thiserror::Error;

/// Errors surfaced by the monitoring loop.
///
/// Per-tick sensor and log faults are handled leniently inside the
/// loop (logged, counted, and skipped); only configuration problems
/// and startup failures reach callers through this type.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Configuration validation failure
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Notification-log I/O failure during startup
    #[error("notification log I/O failed: {0}")]
    Log(#[from] std::io::Error),

    /// Panel fault during startup
    #[error("panel fault: {0}")]
    Panel(#[from] PanelError),
}
