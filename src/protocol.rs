//! Protocol definitions: function codes and device exception codes.
//!
//! The MX2 speaks a Modbus RTU subset (datasheet section B-3). Only the
//! function codes listed here are understood by the drive; anything else is
//! answered with an exception reply.

use std::fmt;

/// Function codes supported by the MX2 (second byte of every frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FunctionCode {
    /// Read coil status (0x01)
    ReadCoilStatus = 0x01,
    /// Read holding register (0x03)
    ReadHoldingRegister = 0x03,
    /// Write in coil (0x05)
    WriteInCoil = 0x05,
    /// Write in holding register (0x06)
    WriteInHoldingRegister = 0x06,
    /// Loopback test (0x08)
    LoopbackTest = 0x08,
    /// Write in multiple coils (0x0F)
    WriteInMultipleCoils = 0x0F,
    /// Write in registers (0x10)
    WriteInRegisters = 0x10,
    /// Read/write registers (0x17)
    ReadWriteRegisters = 0x17,
}

impl FunctionCode {
    /// Raw wire value of the function code.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Function code byte the device echoes when it reports an exception.
    #[inline]
    pub const fn exception_reply(self) -> u8 {
        self as u8 | 0x80
    }

    /// Parse a wire byte into a known function code.
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0x01 => Some(Self::ReadCoilStatus),
            0x03 => Some(Self::ReadHoldingRegister),
            0x05 => Some(Self::WriteInCoil),
            0x06 => Some(Self::WriteInHoldingRegister),
            0x08 => Some(Self::LoopbackTest),
            0x0F => Some(Self::WriteInMultipleCoils),
            0x10 => Some(Self::WriteInRegisters),
            0x17 => Some(Self::ReadWriteRegisters),
            _ => None,
        }
    }

    /// Human-readable description for logging.
    pub fn description(self) -> &'static str {
        match self {
            Self::ReadCoilStatus => "Read Coil Status",
            Self::ReadHoldingRegister => "Read Holding Register",
            Self::WriteInCoil => "Write In Coil",
            Self::WriteInHoldingRegister => "Write In Holding Register",
            Self::LoopbackTest => "Loopback Test",
            Self::WriteInMultipleCoils => "Write In Multiple Coils",
            Self::WriteInRegisters => "Write In Registers",
            Self::ReadWriteRegisters => "Read/Write Registers",
        }
    }
}

impl fmt::Display for FunctionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02X})", self.description(), self.to_u8())
    }
}

/// Exception codes the drive returns in the third byte of an exception reply
/// (datasheet section B-3, p. 300).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionKind {
    /// 0x01 - the function is not supported by the drive
    NotSupported,
    /// 0x02 - the referenced coil/register does not exist
    NotFound,
    /// 0x03 - the data format of the request was not recognized
    InvalidFormat,
    /// 0x21 - the target address is outside the writable area
    OutOfBounds,
    /// 0x22 - the function is not available in the drive's current state
    NotAvailable,
    /// 0x23 - the target is read-only
    ReadOnlyTarget,
    /// Any exception byte the drive is not documented to send
    Other(u8),
}

impl ExceptionKind {
    /// Map a raw exception byte to its kind.
    pub fn from_code(code: u8) -> Self {
        match code {
            0x01 => Self::NotSupported,
            0x02 => Self::NotFound,
            0x03 => Self::InvalidFormat,
            0x21 => Self::OutOfBounds,
            0x22 => Self::NotAvailable,
            0x23 => Self::ReadOnlyTarget,
            other => Self::Other(other),
        }
    }

    /// Raw wire value of the exception code.
    pub fn code(self) -> u8 {
        match self {
            Self::NotSupported => 0x01,
            Self::NotFound => 0x02,
            Self::InvalidFormat => 0x03,
            Self::OutOfBounds => 0x21,
            Self::NotAvailable => 0x22,
            Self::ReadOnlyTarget => 0x23,
            Self::Other(code) => code,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::NotSupported => "function not supported",
            Self::NotFound => "function not found",
            Self::InvalidFormat => "invalid data format",
            Self::OutOfBounds => "target address out of bounds",
            Self::NotAvailable => "function not available",
            Self::ReadOnlyTarget => "target is read-only",
            Self::Other(_) => "unknown device exception",
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02X})", self.description(), self.code())
    }
}
