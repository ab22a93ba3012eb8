//! Shared interfaces and containers for the concussion monitor.
//!
//! This crate defines the seams the detection loop is written against:
//! the orientation-sensor trait, the indicator-panel traits, and the
//! sliding-window container used for differencing and smoothing. Both
//! the hardware drivers and the test mocks implement these interfaces.

pub mod imu;
pub mod panel;
pub mod window;

pub use imu::{AxisTriple, ImuError, ImuResult, OrientationSensor};
pub use panel::{AlarmBuzzer, ArmingButton, LedColor, PanelError, PanelResult, StatusLed};
pub use window::ScalarWindow;
