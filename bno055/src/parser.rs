//! Command and response framing for the BNO055 UART interface.
//!
//! Commands are `AA <op> <reg> <len> [data...]`; the sensor answers
//! either with a data frame `BB <len> <data...>` or a status frame
//! `EE <code>`. Register writes are always acknowledged with a status
//! frame.

/// Start byte of every command frame.
pub const COMMAND_START: u8 = 0xAA;
/// Start byte of a data response.
pub const RESPONSE_DATA: u8 = 0xBB;
/// Start byte of a status response.
pub const RESPONSE_STATUS: u8 = 0xEE;

const OP_WRITE: u8 = 0x00;
const OP_READ: u8 = 0x01;

/// Acknowledge and error codes carried by status responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    WriteSuccess,
    ReadFail,
    WriteFail,
    InvalidRegister,
    WriteDisabled,
    WrongStartByte,
    /// Host clocked data in faster than the sensor could serve it;
    /// the transaction is safe to retry.
    BusOverRun,
    MaxLength,
    MinLength,
    ReceiveTimeout,
    /// Code outside the documented set.
    Unknown(u8),
}

impl Status {
    /// Maps a raw status code to its meaning.
    pub fn from_code(code: u8) -> Self {
        match code {
            0x01 => Status::WriteSuccess,
            0x02 => Status::ReadFail,
            0x03 => Status::WriteFail,
            0x04 => Status::InvalidRegister,
            0x05 => Status::WriteDisabled,
            0x06 => Status::WrongStartByte,
            0x07 => Status::BusOverRun,
            0x08 => Status::MaxLength,
            0x09 => Status::MinLength,
            0x0A => Status::ReceiveTimeout,
            other => Status::Unknown(other),
        }
    }
}

/// A parsed response frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Successful register read; the payload bytes.
    Data(Vec<u8>),
    /// Acknowledge or error report.
    Status(Status),
}

/// Errors that can occur when parsing a response frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Frame shorter than the two-byte minimum
    TooShort,
    /// First byte is neither a data nor a status start byte
    UnknownStartByte(u8),
    /// Frame length disagrees with its length byte
    WrongLength { expected: usize, got: usize },
}

/// Encodes a read command for `len` bytes starting at register `reg`.
pub fn read_request(reg: u8, len: u8) -> [u8; 4] {
    [COMMAND_START, OP_READ, reg, len]
}

/// Encodes a write command carrying `data` for register `reg`.
pub fn write_request(reg: u8, data: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(4 + data.len());
    frame.extend_from_slice(&[COMMAND_START, OP_WRITE, reg, data.len() as u8]);
    frame.extend_from_slice(data);
    frame
}

/// Parses one complete response frame.
///
/// `data` must hold exactly one frame: a two-byte status response or a
/// data response whose length byte matches the trailing payload.
pub fn parse_response(data: &[u8]) -> Result<Response, ParseError> {
    if data.len() < 2 {
        return Err(ParseError::TooShort);
    }

    match data[0] {
        RESPONSE_STATUS => {
            if data.len() != 2 {
                return Err(ParseError::WrongLength {
                    expected: 2,
                    got: data.len(),
                });
            }
            Ok(Response::Status(Status::from_code(data[1])))
        }
        RESPONSE_DATA => {
            let expected = 2 + data[1] as usize;
            if data.len() != expected {
                return Err(ParseError::WrongLength {
                    expected,
                    got: data.len(),
                });
            }
            Ok(Response::Data(data[2..].to_vec()))
        }
        byte => Err(ParseError::UnknownStartByte(byte)),
    }
}
