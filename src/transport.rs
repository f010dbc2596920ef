//! Serial link abstraction.
//!
//! The engine is generic over [`SerialLink`], which models exactly what the
//! request/response cycle needs: write a frame, later collect whatever bytes
//! the drive has put on the line, and report whether the port is usable.
//! The real RS-485 implementation lives behind the `rtu` feature; tests use
//! an in-memory mock.

use crate::error::Mx2Result;

/// A half-duplex serial line carrying RTU frames.
pub trait SerialLink: Send {
    /// Transmit one complete frame.
    fn write(&mut self, frame: &[u8]) -> impl std::future::Future<Output = Mx2Result<()>> + Send;

    /// Collect every byte currently buffered on the line.
    ///
    /// Returns an empty vector when nothing has arrived. The engine calls
    /// this exactly once per request, after the quiet period has elapsed.
    fn read_available(&mut self) -> impl std::future::Future<Output = Mx2Result<Vec<u8>>> + Send;

    /// Whether the line can be used for I/O.
    fn is_open(&self) -> bool;
}

#[cfg(feature = "rtu")]
pub use rtu::RtuTransport;

#[cfg(feature = "rtu")]
mod rtu {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio_serial::{DataBits, Parity, SerialPort, SerialPortBuilderExt, SerialStream, StopBits};
    use tracing::debug;

    use super::SerialLink;
    use crate::constants::BAUD_RATES;
    use crate::error::{Mx2Error, Mx2Result};

    /// RS-485 transport over a local serial port.
    pub struct RtuTransport {
        port: SerialStream,
        open: bool,
    }

    impl RtuTransport {
        /// Open `path` with the given line settings (8 data bits fixed).
        ///
        /// The baud rate must be one the drive supports, and must match both
        /// the engine configuration and the drive's C071 parameter.
        pub fn open(
            path: &str,
            baud_rate: u32,
            parity: Parity,
            stop_bits: StopBits,
        ) -> Mx2Result<Self> {
            if !BAUD_RATES.contains(&baud_rate) {
                return Err(Mx2Error::parameter(format!(
                    "unsupported baud rate {baud_rate}"
                )));
            }
            let port = tokio_serial::new(path, baud_rate)
                .data_bits(DataBits::Eight)
                .parity(parity)
                .stop_bits(stop_bits)
                .open_native_async()
                .map_err(|e| Mx2Error::serial(e.to_string()))?;
            debug!(path, baud_rate, "serial port opened");
            Ok(Self { port, open: true })
        }

        /// Stop using the port; subsequent I/O fails with a transport error.
        pub fn close(&mut self) {
            self.open = false;
        }
    }

    impl SerialLink for RtuTransport {
        async fn write(&mut self, frame: &[u8]) -> Mx2Result<()> {
            self.port.write_all(frame).await?;
            self.port.flush().await?;
            Ok(())
        }

        async fn read_available(&mut self) -> Mx2Result<Vec<u8>> {
            let pending = self
                .port
                .bytes_to_read()
                .map_err(|e| Mx2Error::serial(e.to_string()))? as usize;
            if pending == 0 {
                return Ok(Vec::new());
            }
            let mut reply = vec![0u8; pending];
            self.port.read_exact(&mut reply).await?;
            debug!(bytes = pending, "collected buffered reply");
            Ok(reply)
        }

        fn is_open(&self) -> bool {
            self.open
        }
    }
}
