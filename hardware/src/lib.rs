//! Hardware peripherals for the concussion monitor.
//!
//! GPIO-backed implementations of the indicator-panel traits and the
//! serial driver for the BNO055 orientation sensor. The binaries under
//! `src/bin` wire these into the monitoring loop.

pub mod gpio;
pub mod imu;
pub mod signals;
