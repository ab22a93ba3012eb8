//! Protocol support for the Bosch BNO055 absolute-orientation IMU in
//! UART mode.
//!
//! Covers the pieces a host needs to talk to the sensor over its serial
//! interface: the page-0 register map, command/response framing, and
//! decoding of the fixed-point register payloads into engineering
//! units. Transport is out of scope; callers bring their own serial
//! port.

mod parser;
mod readings;
pub mod registers;

pub use parser::{
    parse_response, read_request, write_request, ParseError, Response, Status, COMMAND_START,
    RESPONSE_DATA, RESPONSE_STATUS,
};
pub use readings::{
    decode_accel_m_s2, decode_euler_deg, decode_gyro_dps, decode_mag_ut, decode_temp_c, RawVector,
    ACCEL_LSB_PER_M_S2, EULER_LSB_PER_DEG, GYRO_LSB_PER_DPS, MAG_LSB_PER_UT, VECTOR_LEN,
};
