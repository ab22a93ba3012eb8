//! Orientation-sensor interface.
//!
//! The detection loop only needs two motion channels from the IMU:
//! angular velocity and gravity-compensated linear acceleration. Writing
//! the loop against this trait lets it run unchanged over the real
//! serial-attached sensor or a scripted mock.

use std::error::Error;
use std::fmt;

/// A 3-axis sample as (x, y, z).
pub type AxisTriple = (f64, f64, f64);

/// Error type for sensor operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImuError {
    /// Transport failure while talking to the sensor
    Io(String),
    /// The sensor answered, but the payload was unusable
    BadReading(String),
    /// The implementation does not provide this channel
    Unsupported(&'static str),
}

impl fmt::Display for ImuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImuError::Io(msg) => write!(f, "IMU I/O error: {msg}"),
            ImuError::BadReading(msg) => write!(f, "IMU returned a bad reading: {msg}"),
            ImuError::Unsupported(channel) => {
                write!(f, "IMU channel not supported: {channel}")
            }
        }
    }
}

impl Error for ImuError {}

/// Result type for sensor operations
pub type ImuResult<T> = Result<T, ImuError>;

/// Interface to the absolute-orientation sensor.
pub trait OrientationSensor: Send {
    /// Angular velocity in deg/s.
    fn read_gyroscope(&mut self) -> ImuResult<AxisTriple>;

    /// Linear acceleration with gravity removed, in m/s².
    fn read_linear_acceleration(&mut self) -> ImuResult<AxisTriple>;

    /// Die temperature in °C. Diagnostic channel; implementations
    /// without one report it as unsupported.
    fn read_temperature(&mut self) -> ImuResult<f64> {
        Err(ImuError::Unsupported("temperature"))
    }

    /// Human-readable sensor name for log output.
    fn name(&self) -> &str;
}

impl OrientationSensor for Box<dyn OrientationSensor> {
    fn read_gyroscope(&mut self) -> ImuResult<AxisTriple> {
        (**self).read_gyroscope()
    }

    fn read_linear_acceleration(&mut self) -> ImuResult<AxisTriple> {
        (**self).read_linear_acceleration()
    }

    fn read_temperature(&mut self) -> ImuResult<f64> {
        (**self).read_temperature()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
