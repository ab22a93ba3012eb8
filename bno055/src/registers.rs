//! BNO055 page-0 register map.
//!
//! Offsets and magic values for the registers this workspace touches.
//! Multi-byte data registers are little-endian and grouped as X/Y/Z
//! i16 triples starting at the listed offset.

/// Chip identification register; reads back [`CHIP_ID_VALUE`].
pub const CHIP_ID: u8 = 0x00;
/// Expected contents of [`CHIP_ID`].
pub const CHIP_ID_VALUE: u8 = 0xA0;

/// Register page select.
pub const PAGE_ID: u8 = 0x07;

/// Accelerometer vector (6 bytes, 100 LSB per m/s²).
pub const ACC_DATA: u8 = 0x08;
/// Magnetometer vector (6 bytes, 16 LSB per µT).
pub const MAG_DATA: u8 = 0x0E;
/// Gyroscope vector (6 bytes, 16 LSB per deg/s).
pub const GYR_DATA: u8 = 0x14;
/// Euler angles heading/roll/pitch (6 bytes, 16 LSB per degree).
pub const EUL_DATA: u8 = 0x1A;
/// Linear acceleration, gravity removed (6 bytes, 100 LSB per m/s²).
pub const LIA_DATA: u8 = 0x28;
/// Gravity vector (6 bytes, 100 LSB per m/s²).
pub const GRV_DATA: u8 = 0x2E;

/// Die temperature (1 byte, two's complement, 1 LSB per °C).
pub const TEMP: u8 = 0x34;
/// Sensor calibration status bitfield.
pub const CALIB_STAT: u8 = 0x35;
/// System status code.
pub const SYS_STATUS: u8 = 0x39;
/// System error code, valid when status reports an error.
pub const SYS_ERR: u8 = 0x3A;
/// Measurement unit selection bitfield.
pub const UNIT_SEL: u8 = 0x3B;
/// Operating mode register, see [`OperatingMode`].
pub const OPR_MODE: u8 = 0x3D;
/// Power mode register, see [`PowerMode`].
pub const PWR_MODE: u8 = 0x3E;
/// System trigger register (reset, self-test).
pub const SYS_TRIGGER: u8 = 0x3F;

/// Operating modes selectable through [`OPR_MODE`].
///
/// Fusion modes (IMU and up) run the sensors plus the on-chip fusion
/// that produces the Euler, quaternion, linear-acceleration, and
/// gravity outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OperatingMode {
    Config = 0x00,
    AccOnly = 0x01,
    MagOnly = 0x02,
    GyroOnly = 0x03,
    AccMag = 0x04,
    AccGyro = 0x05,
    MagGyro = 0x06,
    Amg = 0x07,
    Imu = 0x08,
    Compass = 0x09,
    M4g = 0x0A,
    NdofFmcOff = 0x0B,
    Ndof = 0x0C,
}

/// Power modes selectable through [`PWR_MODE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerMode {
    Normal = 0x00,
    LowPower = 0x01,
    Suspend = 0x02,
}
