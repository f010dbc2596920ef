//! # MX2 Modbus - Master-Side Protocol Engine for the Omron MX2 Drive
//!
//! **License:** MIT
//!
//! A Modbus RTU master implementation speaking the protocol subset of the
//! Omron MX2 inverter: frame assembly with CRC-16/MODBUS, the drive's coil
//! and register map as typed static tables, and a strictly sequential
//! request/response engine with the drive's documented quiet-period timing.
//!
//! ## Supported Function Codes
//!
//! | Code | Function |
//! |------|----------|
//! | 0x01 | Read Coil Status |
//! | 0x03 | Read Holding Register |
//! | 0x05 | Write In Coil |
//! | 0x06 | Write In Holding Register |
//! | 0x08 | Loopback Test |
//! | 0x0F | Write In Multiple Coils |
//! | 0x10 | Write In Registers |
//! | 0x17 | Read/Write Registers |
//!
//! ## Quick Start
//!
//! Requires the `rtu` feature for the real serial transport:
//!
//! ```rust,ignore
//! use mx2_modbus::{catalog, EngineConfig, Mx2Engine, Mx2Result, RtuTransport};
//! use tokio_serial::{Parity, StopBits};
//!
//! #[tokio::main]
//! async fn main() -> Mx2Result<()> {
//!     let link = RtuTransport::open("/dev/ttyUSB0", 9600, Parity::None, StopBits::One)?;
//!     let mut mx = Mx2Engine::new(link, EngineConfig::new().with_device_id(1))?;
//!
//!     mx.loopback_test().await?;
//!
//!     let frequency = mx
//!         .read_registers(catalog::monitoring::OUTPUT_FREQUENCY, 1)
//!         .await?;
//!     println!("output frequency: {}", frequency[0]);
//!
//!     mx.write_coil(catalog::coils::OPERATION_COMMAND, true).await?;
//!     Ok(())
//! }
//! ```
//!
//! Addresses in the public API are one-based, exactly as printed in the
//! datasheet's register tables; the engine subtracts one before encoding.

// ============================================================================
// Core modules
// ============================================================================

/// Error types and result alias
pub mod error;

/// Protocol limits and wire-level constants
pub mod constants;

/// Function codes and device exception codes
pub mod protocol;

/// Frame assembly and CRC-16/MODBUS
pub mod frame;

/// Coils, registers and namespaces
pub mod entity;

/// Static register and coil map of the drive
pub mod catalog;

/// Decoded value containers
pub mod value;

/// Payload encoding and decoding
pub mod codec;

/// Serial link abstraction and the RTU transport
pub mod transport;

/// Engine configuration
pub mod config;

/// Request/response engine and high-level operations
pub mod engine;

// ============================================================================
// Public API re-exports
// ============================================================================

pub use catalog::{FaultMonitorField, InverterStatus, TripFactor, FAULT_MONITOR_BANKS};
pub use config::EngineConfig;
pub use engine::{quiet_period, Mx2Engine};
pub use entity::{Coil, CoilAddr, CoilDef, Namespace, Register, RegisterAddr, RegisterDef};
pub use error::{Mx2Error, Mx2Result};
pub use protocol::{ExceptionKind, FunctionCode};
pub use transport::SerialLink;
pub use value::{CoilValue, RegisterValue};

#[cfg(feature = "rtu")]
pub use transport::RtuTransport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_manifest() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn public_api_surface() {
        // Spot-check that the re-exports resolve.
        let _ = EngineConfig::new();
        let _ = FunctionCode::LoopbackTest;
        let _ = ExceptionKind::from_code(0x21);
        assert_eq!(catalog::coils::OPERATION_COMMAND.address(), 0x01);
        assert_eq!(FAULT_MONITOR_BANKS.len(), 6);
    }
}
