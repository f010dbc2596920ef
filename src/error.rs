//! Error types for the MX2 Modbus engine.
//!
//! Everything that can go wrong on a request surfaces as a distinct
//! [`Mx2Error`] variant, so callers can tell a line-level failure (CRC, no
//! response) from a device-reported exception or a local parameter mistake.

use thiserror::Error;

use crate::protocol::{ExceptionKind, FunctionCode};

/// Result alias used throughout the crate.
pub type Mx2Result<T> = Result<T, Mx2Error>;

/// All error conditions reported by the engine and its collaborators.
#[derive(Error, Debug)]
pub enum Mx2Error {
    /// A request parameter failed validation before any I/O happened.
    #[error("invalid parameter: {message}")]
    Parameter { message: String },

    /// The serial link is not in a usable state (closed or never opened).
    #[error("transport not ready: {message}")]
    TransportState { message: String },

    /// A read or loopback request was addressed to a broadcast id.
    #[error("function {function} cannot be broadcast")]
    BroadcastNotAllowed { function: FunctionCode },

    /// No bytes arrived within the quiet period.
    #[error("no response from device")]
    NoResponse,

    /// The response frame failed its CRC check.
    #[error("response failed CRC check")]
    Crc,

    /// The response came from a different device id than the request targeted.
    #[error("device id mismatch: expected {expected}, received {received}")]
    DeviceIdMismatch { expected: u8, received: u8 },

    /// The response carried an unexpected function code.
    #[error("function code mismatch: expected 0x{expected:02X}, received 0x{received:02X}")]
    FunctionMismatch { expected: u8, received: u8 },

    /// The response had the wrong length for the issued function.
    #[error("response length mismatch: expected {expected} bytes, received {received}")]
    ResponseLength { expected: usize, received: usize },

    /// A write echo did not repeat the request's address and data fields.
    #[error("response content does not echo the request")]
    ResponseContent,

    /// The drive answered with an exception reply.
    #[error("device exception on {function}: {kind}")]
    DeviceException {
        function: FunctionCode,
        kind: ExceptionKind,
    },

    /// The drive flagged an EEPROM trip while committing to storage.
    #[error("nonvolatile storage commit failed: drive reported EEPROM error")]
    CommitFailed,

    /// The storage commit did not finish within the configured poll budget.
    #[error("nonvolatile storage commit still busy after {polls} polls")]
    CommitTimeout { polls: u32 },

    /// An I/O error from the underlying link.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serial-port level error from the transport.
    #[error("serial error: {message}")]
    Serial { message: String },
}

impl Mx2Error {
    /// Build a [`Mx2Error::Parameter`] from any printable message.
    pub fn parameter<S: Into<String>>(message: S) -> Self {
        Self::Parameter {
            message: message.into(),
        }
    }

    /// Build a [`Mx2Error::TransportState`] from any printable message.
    pub fn transport_state<S: Into<String>>(message: S) -> Self {
        Self::TransportState {
            message: message.into(),
        }
    }

    /// Build a [`Mx2Error::Serial`] from any printable message.
    pub fn serial<S: Into<String>>(message: S) -> Self {
        Self::Serial {
            message: message.into(),
        }
    }

    /// True when the drive itself rejected the request.
    pub fn is_device_exception(&self) -> bool {
        matches!(self, Self::DeviceException { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = Mx2Error::parameter("coil count must be within 1..=31");
        assert_eq!(
            err.to_string(),
            "invalid parameter: coil count must be within 1..=31"
        );

        let err = Mx2Error::DeviceIdMismatch {
            expected: 8,
            received: 9,
        };
        assert_eq!(err.to_string(), "device id mismatch: expected 8, received 9");

        let err = Mx2Error::DeviceException {
            function: FunctionCode::ReadHoldingRegister,
            kind: ExceptionKind::ReadOnlyTarget,
        };
        assert!(err.is_device_exception());
        assert!(err.to_string().contains("0x23"));
    }

    #[test]
    fn io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "port timeout");
        let err: Mx2Error = io.into();
        assert!(matches!(err, Mx2Error::Io(_)));
    }
}
