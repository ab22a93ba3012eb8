//! Mock orientation sensor for testing.
//!
//! Replays a scripted sequence of per-tick readings, including faults,
//! without any hardware attached.

use shared::imu::{AxisTriple, ImuError, ImuResult, OrientationSensor};
use std::sync::{Arc, Mutex};

/// One scripted tick of sensor data.
#[derive(Debug, Clone)]
pub struct ScriptedReading {
    /// Gyroscope outcome for the tick, deg/s
    pub gyro: ImuResult<AxisTriple>,
    /// Linear-acceleration outcome for the tick, m/s²
    pub linear: ImuResult<AxisTriple>,
}

impl ScriptedReading {
    /// Both channels healthy.
    pub fn ok(gyro: AxisTriple, linear: AxisTriple) -> Self {
        Self {
            gyro: Ok(gyro),
            linear: Ok(linear),
        }
    }

    /// Gyroscope faulted, linear channel healthy.
    pub fn gyro_fault(linear: AxisTriple) -> Self {
        Self {
            gyro: Err(ImuError::Io("scripted gyroscope fault".to_string())),
            linear: Ok(linear),
        }
    }

    /// Linear channel faulted, gyroscope healthy.
    pub fn linear_fault(gyro: AxisTriple) -> Self {
        Self {
            gyro: Ok(gyro),
            linear: Err(ImuError::Io("scripted linear fault".to_string())),
        }
    }
}

/// Mock sensor replaying a scripted sequence.
///
/// Each channel advances through the script independently, one entry
/// per read; the loop reads both channels once per tick, so they stay
/// in step.
pub struct MockOrientationSensor {
    readings: Vec<ScriptedReading>,
    gyro_cursor: Arc<Mutex<usize>>,
    linear_cursor: Arc<Mutex<usize>>,
    repeat_last: bool,
}

impl MockOrientationSensor {
    /// Replays `readings` in order; reads past the end fault.
    pub fn new(readings: Vec<ScriptedReading>) -> Self {
        Self {
            readings,
            gyro_cursor: Arc::new(Mutex::new(0)),
            linear_cursor: Arc::new(Mutex::new(0)),
            repeat_last: false,
        }
    }

    /// Replays `readings`, then repeats the final entry forever.
    pub fn new_repeating(readings: Vec<ScriptedReading>) -> Self {
        Self {
            repeat_last: true,
            ..Self::new(readings)
        }
    }

    fn entry(&self, cursor: &Arc<Mutex<usize>>) -> ImuResult<ScriptedReading> {
        let mut index = cursor.lock().unwrap();
        if *index < self.readings.len() {
            let reading = self.readings[*index].clone();
            *index += 1;
            return Ok(reading);
        }
        if self.repeat_last {
            if let Some(last) = self.readings.last() {
                return Ok(last.clone());
            }
        }
        Err(ImuError::Io("script exhausted".to_string()))
    }
}

impl OrientationSensor for MockOrientationSensor {
    fn read_gyroscope(&mut self) -> ImuResult<AxisTriple> {
        self.entry(&self.gyro_cursor)?.gyro
    }

    fn read_linear_acceleration(&mut self) -> ImuResult<AxisTriple> {
        self.entry(&self.linear_cursor)?.linear
    }

    fn name(&self) -> &str {
        "mock-bno055"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let mut sensor = MockOrientationSensor::new(vec![
            ScriptedReading::ok((1.0, 0.0, 0.0), (0.1, 0.0, 0.0)),
            ScriptedReading::ok((2.0, 0.0, 0.0), (0.2, 0.0, 0.0)),
        ]);
        assert_eq!(sensor.read_gyroscope(), Ok((1.0, 0.0, 0.0)));
        assert_eq!(sensor.read_linear_acceleration(), Ok((0.1, 0.0, 0.0)));
        assert_eq!(sensor.read_gyroscope(), Ok((2.0, 0.0, 0.0)));
        assert_eq!(sensor.read_linear_acceleration(), Ok((0.2, 0.0, 0.0)));
    }

    #[test]
    fn test_exhausted_script_faults() {
        let mut sensor =
            MockOrientationSensor::new(vec![ScriptedReading::ok((0.0, 0.0, 0.0), (0.0, 0.0, 0.0))]);
        assert!(sensor.read_gyroscope().is_ok());
        assert!(sensor.read_gyroscope().is_err());
    }

    #[test]
    fn test_repeating_sensor_holds_last_reading() {
        let mut sensor = MockOrientationSensor::new_repeating(vec![
            ScriptedReading::ok((1.0, 0.0, 0.0), (0.0, 0.0, 0.0)),
            ScriptedReading::ok((7.0, 0.0, 0.0), (0.0, 0.0, 0.0)),
        ]);
        sensor.read_gyroscope().unwrap();
        sensor.read_gyroscope().unwrap();
        assert_eq!(sensor.read_gyroscope(), Ok((7.0, 0.0, 0.0)));
        assert_eq!(sensor.read_gyroscope(), Ok((7.0, 0.0, 0.0)));
    }

    #[test]
    fn test_scripted_fault() {
        let mut sensor =
            MockOrientationSensor::new(vec![ScriptedReading::gyro_fault((0.5, 0.0, 0.0))]);
        assert!(sensor.read_gyroscope().is_err());
        assert_eq!(sensor.read_linear_acceleration(), Ok((0.5, 0.0, 0.0)));
    }
}
