//! Serial driver for the BNO055 orientation sensor.
//!
//! Speaks the sensor's UART protocol over a [`serialport`] handle:
//! verifies the chip ID, switches the part into NDOF fusion mode, and
//! serves the motion channels the monitoring loop needs. Bus-overrun
//! rejections, which the sensor emits when polled hard, are retried a
//! bounded number of times per transaction.

use std::io::{Read, Write};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};
use serialport::SerialPort;

use bno055::registers::{self, OperatingMode, PowerMode};
use bno055::{
    decode_accel_m_s2, decode_gyro_dps, decode_temp_c, parse_response, read_request,
    write_request, Response, Status, RESPONSE_DATA, VECTOR_LEN,
};
use shared::imu::{AxisTriple, ImuError, ImuResult, OrientationSensor};

/// UART baud rate the BNO055 ships with.
pub const BNO055_BAUD: u32 = 115_200;

/// Transactions retried on a bus-overrun status before giving up.
const MAX_RETRIES: usize = 3;

/// BNO055 absolute-orientation IMU over its UART interface.
pub struct UartImu {
    port: Box<dyn SerialPort>,
    name: String,
}

impl UartImu {
    /// Opens the serial port and brings the sensor into NDOF mode.
    pub fn open(path: &str) -> Result<Self> {
        info!("Opening IMU serial port: {path} at {BNO055_BAUD} bps");
        let port = serialport::new(path, BNO055_BAUD)
            .timeout(Duration::from_millis(100))
            .open()
            .with_context(|| format!("Failed to open serial port {path}"))?;

        let mut imu = Self {
            port,
            name: format!("bno055@{path}"),
        };
        imu.initialize()?;
        Ok(imu)
    }

    fn initialize(&mut self) -> Result<()> {
        let chip_id = self.read_register(registers::CHIP_ID)?;
        if chip_id != registers::CHIP_ID_VALUE {
            bail!(
                "Unexpected chip ID {chip_id:#04x}, want {:#04x}",
                registers::CHIP_ID_VALUE
            );
        }

        self.write_register(registers::OPR_MODE, OperatingMode::Config as u8)?;
        // Mode switches need settling time per the datasheet.
        thread::sleep(Duration::from_millis(25));
        self.write_register(registers::PAGE_ID, 0)?;
        self.write_register(registers::PWR_MODE, PowerMode::Normal as u8)?;
        self.write_register(registers::OPR_MODE, OperatingMode::Ndof as u8)?;
        thread::sleep(Duration::from_millis(20));

        info!("BNO055 initialized in NDOF mode");
        Ok(())
    }

    fn read_register(&mut self, reg: u8) -> Result<u8> {
        let data = self.read_registers(reg, 1)?;
        Ok(data[0])
    }

    /// One read transaction with bounded retry on bus overrun.
    fn read_registers(&mut self, reg: u8, len: u8) -> Result<Vec<u8>> {
        for attempt in 1..=MAX_RETRIES {
            self.port
                .write_all(&read_request(reg, len))
                .context("Failed to send read command")?;

            match self.receive_response(len as usize)? {
                Response::Data(data) => return Ok(data),
                Response::Status(Status::BusOverRun) => {
                    debug!("Bus overrun reading register {reg:#04x}, attempt {attempt}");
                }
                Response::Status(status) => {
                    bail!("Read of register {reg:#04x} rejected: {status:?}")
                }
            }
        }
        bail!("Read of register {reg:#04x} failed after {MAX_RETRIES} bus overruns")
    }

    /// One write transaction with bounded retry on bus overrun.
    fn write_register(&mut self, reg: u8, value: u8) -> Result<()> {
        for attempt in 1..=MAX_RETRIES {
            self.port
                .write_all(&write_request(reg, &[value]))
                .context("Failed to send write command")?;

            match self.receive_response(0)? {
                Response::Status(Status::WriteSuccess) => return Ok(()),
                Response::Status(Status::BusOverRun) => {
                    debug!("Bus overrun writing register {reg:#04x}, attempt {attempt}");
                }
                Response::Status(status) => {
                    bail!("Write of register {reg:#04x} rejected: {status:?}")
                }
                Response::Data(_) => bail!("Unexpected data response to a register write"),
            }
        }
        bail!("Write of register {reg:#04x} failed after {MAX_RETRIES} bus overruns")
    }

    /// Reads one response frame from the port.
    fn receive_response(&mut self, expected_len: usize) -> Result<Response> {
        let mut header = [0u8; 2];
        self.port
            .read_exact(&mut header)
            .context("Failed to read response header")?;

        let mut frame = header.to_vec();
        if header[0] == RESPONSE_DATA {
            let payload_len = header[1] as usize;
            if expected_len > 0 && payload_len != expected_len {
                bail!("Data response carries {payload_len} bytes, requested {expected_len}");
            }
            let mut payload = vec![0u8; payload_len];
            self.port
                .read_exact(&mut payload)
                .context("Failed to read response payload")?;
            frame.extend_from_slice(&payload);
        }

        parse_response(&frame).map_err(|e| anyhow!("Malformed response frame: {e:?}"))
    }

    fn read_vector(&mut self, reg: u8) -> ImuResult<[u8; VECTOR_LEN]> {
        let data = self
            .read_registers(reg, VECTOR_LEN as u8)
            .map_err(|e| ImuError::Io(format!("{e:#}")))?;
        data.try_into()
            .map_err(|_| ImuError::BadReading("short register payload".to_string()))
    }
}

impl OrientationSensor for UartImu {
    fn read_gyroscope(&mut self) -> ImuResult<AxisTriple> {
        Ok(decode_gyro_dps(&self.read_vector(registers::GYR_DATA)?))
    }

    fn read_linear_acceleration(&mut self) -> ImuResult<AxisTriple> {
        Ok(decode_accel_m_s2(&self.read_vector(registers::LIA_DATA)?))
    }

    fn read_temperature(&mut self) -> ImuResult<f64> {
        let raw = self
            .read_register(registers::TEMP)
            .map_err(|e| ImuError::Io(format!("{e:#}")))?;
        Ok(decode_temp_c(raw))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
