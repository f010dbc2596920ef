//! Engine configuration.

use crate::constants::{
    is_valid_device_id, BAUD_RATES, LATENCY_MS_MAX,
};
use crate::error::{Mx2Error, Mx2Result};

/// Configuration of an [`crate::engine::Mx2Engine`].
///
/// Built with `with_*` setters and validated when the engine is created:
///
/// ```rust
/// use mx2_modbus::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_device_id(8)
///     .with_baud_rate(19200)
///     .with_latency_ms(50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Target device id: 1..=247 individual, 250..=254 broadcast.
    pub device_id: u8,
    /// Extra silence granted to the drive on top of the line time, 0..=1000 ms.
    pub latency_ms: u16,
    /// Line speed; must match the serial port and the drive's C071 setting.
    pub baud_rate: u32,
    /// Upper bound on busy polls during a nonvolatile storage commit.
    pub commit_poll_limit: u32,
}

impl EngineConfig {
    /// Configuration with the drive's factory communication settings
    /// (device id 1, 9600 baud) and a 30 ms latency allowance.
    pub fn new() -> Self {
        Self {
            device_id: 1,
            latency_ms: 30,
            baud_rate: 9600,
            commit_poll_limit: 100,
        }
    }

    pub fn with_device_id(mut self, device_id: u8) -> Self {
        self.device_id = device_id;
        self
    }

    pub fn with_latency_ms(mut self, latency_ms: u16) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_commit_poll_limit(mut self, commit_poll_limit: u32) -> Self {
        self.commit_poll_limit = commit_poll_limit;
        self
    }

    /// Check every field against the drive's documented ranges.
    pub fn validate(&self) -> Mx2Result<()> {
        if !is_valid_device_id(self.device_id) {
            return Err(Mx2Error::parameter(format!(
                "device id {} outside 1..=247 and 250..=254",
                self.device_id
            )));
        }
        if self.latency_ms > LATENCY_MS_MAX {
            return Err(Mx2Error::parameter(format!(
                "latency {} ms exceeds the {} ms maximum",
                self.latency_ms, LATENCY_MS_MAX
            )));
        }
        if !BAUD_RATES.contains(&self.baud_rate) {
            return Err(Mx2Error::parameter(format!(
                "unsupported baud rate {}",
                self.baud_rate
            )));
        }
        if self.commit_poll_limit == 0 {
            return Err(Mx2Error::parameter("commit poll limit must be at least 1"));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
