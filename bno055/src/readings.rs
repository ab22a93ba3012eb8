//! Decoding of BNO055 data-register payloads.
//!
//! Scale factors are the datasheet defaults for the power-on unit
//! selection (deg/s, m/s², degrees, µT, °C). The wire format is
//! little-endian, matching the hosts this workspace targets.

use bytemuck::{Pod, Zeroable};

/// Byte length of a 3-axis data register group.
pub const VECTOR_LEN: usize = 6;

/// Gyroscope scale: 16 LSB per deg/s.
pub const GYRO_LSB_PER_DPS: f64 = 16.0;
/// Accelerometer-family scale (ACC, LIA, GRV): 100 LSB per m/s².
pub const ACCEL_LSB_PER_M_S2: f64 = 100.0;
/// Euler-angle scale: 16 LSB per degree.
pub const EULER_LSB_PER_DEG: f64 = 16.0;
/// Magnetometer scale: 16 LSB per µT.
pub const MAG_LSB_PER_UT: f64 = 16.0;

/// A raw X/Y/Z register triple as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct RawVector {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawVector {
    /// Reinterprets a 6-byte register payload.
    pub fn from_bytes(data: &[u8; VECTOR_LEN]) -> Self {
        bytemuck::pod_read_unaligned(data)
    }

    fn scaled(self, lsb_per_unit: f64) -> (f64, f64, f64) {
        (
            f64::from(self.x) / lsb_per_unit,
            f64::from(self.y) / lsb_per_unit,
            f64::from(self.z) / lsb_per_unit,
        )
    }
}

/// Decodes a gyroscope payload to deg/s.
pub fn decode_gyro_dps(data: &[u8; VECTOR_LEN]) -> (f64, f64, f64) {
    RawVector::from_bytes(data).scaled(GYRO_LSB_PER_DPS)
}

/// Decodes an accelerometer, linear-acceleration, or gravity payload
/// to m/s².
pub fn decode_accel_m_s2(data: &[u8; VECTOR_LEN]) -> (f64, f64, f64) {
    RawVector::from_bytes(data).scaled(ACCEL_LSB_PER_M_S2)
}

/// Decodes an Euler-angle payload to degrees (heading, roll, pitch).
pub fn decode_euler_deg(data: &[u8; VECTOR_LEN]) -> (f64, f64, f64) {
    RawVector::from_bytes(data).scaled(EULER_LSB_PER_DEG)
}

/// Decodes a magnetometer payload to µT.
pub fn decode_mag_ut(data: &[u8; VECTOR_LEN]) -> (f64, f64, f64) {
    RawVector::from_bytes(data).scaled(MAG_LSB_PER_UT)
}

/// Decodes the temperature register to °C.
pub fn decode_temp_c(raw: u8) -> f64 {
    f64::from(raw as i8)
}
