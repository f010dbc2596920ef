//! Request/response engine and the high-level drive operations.
//!
//! [`Mx2Engine`] owns a [`SerialLink`] and runs one request at a time:
//! validate parameters, assemble the frame, transmit, sit out the quiet
//! period, collect whatever the drive buffered, and validate the reply in
//! wire order (device id, checksum, function code, length, echo content).
//! There are no internal retries; every failure surfaces as a distinct
//! [`Mx2Error`] so the caller decides what to do.
//!
//! The quiet period is the drive's documented end-of-frame silence: the
//! configured latency plus 3.5 character times at the configured baud rate.

use std::time::Duration;

use tokio::time::{sleep, sleep_until, Instant};
use tracing::{debug, warn};

use crate::catalog::{self, FaultMonitorField, TripFactor};
use crate::codec;
use crate::config::EngineConfig;
use crate::constants::{
    is_broadcast, is_valid_device_id, BAUD_RATES, CHARACTER_BITS, COIL_ADDRESS_MAX,
    LATENCY_MS_MAX, MAX_COIL_BATCH, MAX_REGISTER_BATCH, MAX_WORD_SPAN, SILENT_INTERVAL_CHARS,
    WRITE_ECHO_LEN,
};
use crate::entity::{Coil, CoilAddr, Register, RegisterAddr};
use crate::error::{Mx2Error, Mx2Result};
use crate::frame;
use crate::protocol::{ExceptionKind, FunctionCode};
use crate::transport::SerialLink;
use crate::value::{CoilValue, RegisterValue};

/// Inter-frame silence the drive requires before it answers.
pub fn quiet_period(latency_ms: u16, baud_rate: u32) -> Duration {
    let seconds = f64::from(latency_ms) / 1000.0
        + f64::from(CHARACTER_BITS) * SILENT_INTERVAL_CHARS / f64::from(baud_rate);
    Duration::from_secs_f64(seconds)
}

/// Master-side protocol engine for one MX2 drive.
///
/// Exclusive ownership of the link keeps requests strictly sequential; the
/// only suspension points are the link's I/O and the quiet-period timer.
pub struct Mx2Engine<L: SerialLink> {
    link: L,
    device_id: u8,
    latency_ms: u16,
    baud_rate: u32,
    commit_poll_limit: u32,
    quiet_period: Duration,
    last_send: Option<Instant>,
}

impl<L: SerialLink> Mx2Engine<L> {
    /// Wrap `link` with a validated configuration.
    pub fn new(link: L, config: EngineConfig) -> Mx2Result<Self> {
        config.validate()?;
        Ok(Self {
            link,
            device_id: config.device_id,
            latency_ms: config.latency_ms,
            baud_rate: config.baud_rate,
            commit_poll_limit: config.commit_poll_limit,
            quiet_period: quiet_period(config.latency_ms, config.baud_rate),
            last_send: None,
        })
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    #[inline]
    pub fn device_id(&self) -> u8 {
        self.device_id
    }

    /// Retarget the engine at another device id on the same line.
    pub fn set_device_id(&mut self, device_id: u8) -> Mx2Result<()> {
        if !is_valid_device_id(device_id) {
            return Err(Mx2Error::parameter(format!(
                "device id {device_id} outside 1..=247 and 250..=254"
            )));
        }
        self.device_id = device_id;
        Ok(())
    }

    #[inline]
    pub fn latency_ms(&self) -> u16 {
        self.latency_ms
    }

    /// Change the latency allowance; the quiet period follows.
    pub fn set_latency_ms(&mut self, latency_ms: u16) -> Mx2Result<()> {
        if latency_ms > LATENCY_MS_MAX {
            return Err(Mx2Error::parameter(format!(
                "latency {latency_ms} ms exceeds the {LATENCY_MS_MAX} ms maximum"
            )));
        }
        self.latency_ms = latency_ms;
        self.quiet_period = quiet_period(self.latency_ms, self.baud_rate);
        Ok(())
    }

    #[inline]
    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    /// Track a line-speed change; the quiet period follows. The serial port
    /// itself is reconfigured by the transport, not here.
    pub fn set_baud_rate(&mut self, baud_rate: u32) -> Mx2Result<()> {
        if !BAUD_RATES.contains(&baud_rate) {
            return Err(Mx2Error::parameter(format!(
                "unsupported baud rate {baud_rate}"
            )));
        }
        self.baud_rate = baud_rate;
        self.quiet_period = quiet_period(self.latency_ms, self.baud_rate);
        Ok(())
    }

    #[inline]
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    #[inline]
    pub fn link(&self) -> &L {
        &self.link
    }

    #[inline]
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Give the serial link back.
    pub fn into_link(self) -> L {
        self.link
    }

    // ------------------------------------------------------------------
    // Request/response cycle
    // ------------------------------------------------------------------

    async fn send(&mut self, function: FunctionCode, payload: &[u8]) -> Mx2Result<()> {
        if !self.link.is_open() {
            return Err(Mx2Error::transport_state("serial link is not open"));
        }
        let request = frame::encode(self.device_id, function, payload);
        debug!(%function, device_id = self.device_id, bytes = request.len(), "sending request");
        self.link.write(&request).await?;
        self.last_send = Some(Instant::now());
        Ok(())
    }

    /// Wait until the quiet period since the last transmission has elapsed.
    async fn wait_quiet(&self) {
        if let Some(sent) = self.last_send {
            sleep_until(sent + self.quiet_period).await;
        }
    }

    async fn read_reply(&mut self) -> Mx2Result<Vec<u8>> {
        if !self.link.is_open() {
            return Err(Mx2Error::transport_state("serial link is not open"));
        }
        let reply = self.link.read_available().await?;
        debug!(bytes = reply.len(), "reply collected");
        Ok(reply)
    }

    /// Line-level checks shared by every reply: device id, checksum, then
    /// the function code or its exception form.
    fn validate_reply(&self, function: FunctionCode, reply: &[u8]) -> Mx2Result<()> {
        if reply.is_empty() {
            return Err(Mx2Error::NoResponse);
        }
        if reply[0] != self.device_id {
            return Err(Mx2Error::DeviceIdMismatch {
                expected: self.device_id,
                received: reply[0],
            });
        }
        if !frame::is_intact(reply) {
            return Err(Mx2Error::Crc);
        }
        match reply.get(1) {
            Some(&code) if code == function.to_u8() => Ok(()),
            Some(&code) if code == function.exception_reply() => {
                let kind = reply
                    .get(2)
                    .map(|&c| ExceptionKind::from_code(c))
                    .unwrap_or(ExceptionKind::Other(0));
                warn!(%function, %kind, "device reported exception");
                Err(Mx2Error::DeviceException { function, kind })
            }
            Some(&code) => Err(Mx2Error::FunctionMismatch {
                expected: function.to_u8(),
                received: code,
            }),
            None => Err(Mx2Error::ResponseLength {
                expected: WRITE_ECHO_LEN,
                received: reply.len(),
            }),
        }
    }

    fn expect_len(reply: &[u8], expected: usize) -> Mx2Result<()> {
        if reply.len() != expected {
            return Err(Mx2Error::ResponseLength {
                expected,
                received: reply.len(),
            });
        }
        Ok(())
    }

    /// Length check first, then the echoed address/data fields.
    fn check_echo(reply: &[u8], payload: &[u8]) -> Mx2Result<()> {
        Self::expect_len(reply, WRITE_ECHO_LEN)?;
        if reply[2..6] != payload[..4] {
            return Err(Mx2Error::ResponseContent);
        }
        Ok(())
    }

    /// Full cycle for functions that always expect a reply.
    async fn execute(&mut self, function: FunctionCode, payload: &[u8]) -> Mx2Result<Vec<u8>> {
        self.send(function, payload).await?;
        self.wait_quiet().await;
        let reply = self.read_reply().await?;
        self.validate_reply(function, &reply)?;
        Ok(reply)
    }

    /// Cycle for writes: a broadcast is fire-and-forget, everything else
    /// expects an echo reply.
    async fn execute_write(
        &mut self,
        function: FunctionCode,
        payload: &[u8],
    ) -> Mx2Result<Option<Vec<u8>>> {
        self.send(function, payload).await?;
        if is_broadcast(self.device_id) {
            return Ok(None);
        }
        self.wait_quiet().await;
        let reply = self.read_reply().await?;
        self.validate_reply(function, &reply)?;
        Ok(Some(reply))
    }

    fn reject_broadcast(&self, function: FunctionCode) -> Mx2Result<()> {
        if is_broadcast(self.device_id) {
            return Err(Mx2Error::BroadcastNotAllowed { function });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Coil operations
    // ------------------------------------------------------------------

    /// Read the state of `count` declared coils starting at `start`.
    ///
    /// Address gaps are skipped: the returned values follow the coil table,
    /// not consecutive raw addresses.
    pub async fn read_coil_status(
        &mut self,
        start: Coil,
        count: usize,
    ) -> Mx2Result<Vec<CoilValue>> {
        self.reject_broadcast(FunctionCode::ReadCoilStatus)?;
        if count == 0 || count > MAX_COIL_BATCH {
            return Err(Mx2Error::parameter(format!(
                "coil count {count} outside 1..={MAX_COIL_BATCH}"
            )));
        }
        let addr = u16::from(start.address() - 1).to_be_bytes();
        let count_field = (count as u16).to_be_bytes();
        let payload = [addr[0], addr[1], count_field[0], count_field[1]];

        let reply = self.execute(FunctionCode::ReadCoilStatus, &payload).await?;
        let expected = 6 + count / 8;
        Self::expect_len(&reply, expected)?;
        let byte_count = reply[2] as usize;
        let data = reply
            .get(3..3 + byte_count)
            .ok_or(Mx2Error::ResponseLength {
                expected,
                received: reply.len(),
            })?;
        let bits = codec::unpack_coil_bits(data);
        Ok(codec::pair_with_coils(start, count, &bits))
    }

    /// Set or clear a single coil. Broadcast writes return without waiting
    /// for a reply.
    pub async fn write_coil(
        &mut self,
        target: impl Into<CoilAddr>,
        state: bool,
    ) -> Mx2Result<()> {
        let target = target.into();
        Self::check_coil_address(target.address())?;
        let addr = u16::from(target.address() - 1).to_be_bytes();
        let payload = [addr[0], addr[1], if state { 0xFF } else { 0x00 }, 0x00];

        if let Some(reply) = self
            .execute_write(FunctionCode::WriteInCoil, &payload)
            .await?
        {
            Self::check_echo(&reply, &payload)?;
        }
        Ok(())
    }

    /// Write up to 31 consecutive coil states starting at `start`.
    pub async fn write_multiple_coils(
        &mut self,
        start: impl Into<CoilAddr>,
        states: &[bool],
    ) -> Mx2Result<()> {
        let start = start.into();
        Self::check_coil_address(start.address())?;
        if states.is_empty() || states.len() > MAX_COIL_BATCH {
            return Err(Mx2Error::parameter(format!(
                "coil count {} outside 1..={MAX_COIL_BATCH}",
                states.len()
            )));
        }
        let addr = u16::from(start.address() - 1).to_be_bytes();
        let count_field = (states.len() as u16).to_be_bytes();
        let data = codec::pack_coil_bits(states);
        let mut payload = vec![addr[0], addr[1], count_field[0], count_field[1]];
        payload.push(data.len() as u8);
        payload.extend_from_slice(&data);

        if let Some(reply) = self
            .execute_write(FunctionCode::WriteInMultipleCoils, &payload)
            .await?
        {
            Self::check_echo(&reply, &payload)?;
        }
        Ok(())
    }

    fn check_coil_address(address: u8) -> Mx2Result<()> {
        if address == 0 || address > COIL_ADDRESS_MAX {
            return Err(Mx2Error::parameter(format!(
                "coil address 0x{address:02X} outside 0x01..=0x{COIL_ADDRESS_MAX:02X}"
            )));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Register operations
    // ------------------------------------------------------------------

    /// Read `count` declared registers starting at `start`.
    ///
    /// The request covers the full word span from `start` to the end of the
    /// last register, which must not exceed 16 words.
    pub async fn read_registers(
        &mut self,
        start: Register,
        count: usize,
    ) -> Mx2Result<Vec<RegisterValue>> {
        self.reject_broadcast(FunctionCode::ReadHoldingRegister)?;
        if count == 0 || count > MAX_REGISTER_BATCH {
            return Err(Mx2Error::parameter(format!(
                "register count {count} outside 1..={MAX_REGISTER_BATCH}"
            )));
        }
        let span = start.word_span(count)?;
        Self::check_word_span(span)?;
        let addr = (start.address() - 1).to_be_bytes();
        let span_field = span.to_be_bytes();
        let payload = [addr[0], addr[1], span_field[0], span_field[1]];

        let reply = self
            .execute(FunctionCode::ReadHoldingRegister, &payload)
            .await?;
        Self::expect_len(&reply, 5 + 2 * span as usize)?;
        Ok(codec::decode_registers(start, &reply[3..reply.len() - 2]))
    }

    /// Write a single register. A declared two-word register delegates to
    /// the multi-register write; otherwise the value must fit 16 bits.
    pub async fn write_register(
        &mut self,
        target: impl Into<RegisterAddr>,
        value: u32,
    ) -> Mx2Result<()> {
        let target = target.into();
        Self::check_register_address(target.address())?;
        if let Some(register) = target.register() {
            if register.words() > 1 {
                return self.write_multiple_registers(target, &[value]).await;
            }
        }
        if value > 0xFFFF {
            return Err(Mx2Error::parameter(format!(
                "value {value} does not fit a single 16-bit register"
            )));
        }
        let addr = (target.address() - 1).to_be_bytes();
        let value_field = (value as u16).to_be_bytes();
        let payload = [addr[0], addr[1], value_field[0], value_field[1]];

        if let Some(reply) = self
            .execute_write(FunctionCode::WriteInHoldingRegister, &payload)
            .await?
        {
            Self::check_echo(&reply, &payload)?;
        }
        Ok(())
    }

    /// Write up to 16 registers starting at `target`.
    pub async fn write_multiple_registers(
        &mut self,
        target: impl Into<RegisterAddr>,
        values: &[u32],
    ) -> Mx2Result<()> {
        let target = target.into();
        Self::check_register_address(target.address())?;
        if values.is_empty() || values.len() > MAX_REGISTER_BATCH {
            return Err(Mx2Error::parameter(format!(
                "register count {} outside 1..={MAX_REGISTER_BATCH}",
                values.len()
            )));
        }
        let span = target.word_span(values.len())?;
        Self::check_word_span(span)?;
        let data = codec::encode_register_values(&target, values)?;
        let addr = (target.address() - 1).to_be_bytes();
        let span_field = span.to_be_bytes();
        let mut payload = vec![addr[0], addr[1], span_field[0], span_field[1]];
        payload.push((2 * span) as u8);
        payload.extend_from_slice(&data);

        if let Some(reply) = self
            .execute_write(FunctionCode::WriteInRegisters, &payload)
            .await?
        {
            Self::check_echo(&reply, &payload)?;
        }
        Ok(())
    }

    /// Combined read and write in one transaction. Bounds apply to each
    /// side independently; every written value must fit 16 bits.
    pub async fn read_and_write_registers(
        &mut self,
        read_start: Register,
        write_start: impl Into<RegisterAddr>,
        read_count: usize,
        write_values: &[u32],
    ) -> Mx2Result<Vec<RegisterValue>> {
        self.reject_broadcast(FunctionCode::ReadWriteRegisters)?;
        let write_start = write_start.into();
        Self::check_register_address(write_start.address())?;
        if read_count == 0 || read_count > MAX_REGISTER_BATCH {
            return Err(Mx2Error::parameter(format!(
                "register count {read_count} outside 1..={MAX_REGISTER_BATCH}"
            )));
        }
        if write_values.is_empty() || write_values.len() > MAX_REGISTER_BATCH {
            return Err(Mx2Error::parameter(format!(
                "register count {} outside 1..={MAX_REGISTER_BATCH}",
                write_values.len()
            )));
        }
        for &value in write_values {
            if value > 0xFFFF {
                return Err(Mx2Error::parameter(format!(
                    "value {value} outside 0..=0xFFFF"
                )));
            }
        }
        let read_span = read_start.word_span(read_count)?;
        Self::check_word_span(read_span)?;
        let write_span = write_start.word_span(write_values.len())?;
        Self::check_word_span(write_span)?;
        let data = codec::encode_register_values(&write_start, write_values)?;

        let read_addr = (read_start.address() - 1).to_be_bytes();
        let write_addr = (write_start.address() - 1).to_be_bytes();
        let read_span_field = read_span.to_be_bytes();
        let write_span_field = write_span.to_be_bytes();
        let mut payload = vec![
            read_addr[0],
            read_addr[1],
            read_span_field[0],
            read_span_field[1],
            write_addr[0],
            write_addr[1],
            write_span_field[0],
            write_span_field[1],
        ];
        payload.push((2 * write_span) as u8);
        payload.extend_from_slice(&data);

        let reply = self
            .execute(FunctionCode::ReadWriteRegisters, &payload)
            .await?;
        Self::expect_len(&reply, 5 + 2 * read_span as usize)?;
        Ok(codec::decode_registers(read_start, &reply[3..reply.len() - 2]))
    }

    fn check_register_address(address: u16) -> Mx2Result<()> {
        if address == 0 {
            return Err(Mx2Error::parameter("register address must be at least 1"));
        }
        Ok(())
    }

    fn check_word_span(span: u16) -> Mx2Result<()> {
        if span > MAX_WORD_SPAN {
            return Err(Mx2Error::parameter(format!(
                "request spans {span} words, more than the {MAX_WORD_SPAN}-word maximum"
            )));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Diagnostics and composite operations
    // ------------------------------------------------------------------

    /// Echo test: sends a wall-clock-derived 16-bit pattern and verifies the
    /// drive repeats it.
    pub async fn loopback_test(&mut self) -> Mx2Result<()> {
        self.reject_broadcast(FunctionCode::LoopbackTest)?;
        let stamp = (chrono::Utc::now().timestamp_millis() & 0xFFFF) as u16;
        let stamp_field = stamp.to_be_bytes();
        let payload = [0x00, 0x00, stamp_field[0], stamp_field[1]];

        let reply = self.execute(FunctionCode::LoopbackTest, &payload).await?;
        Self::check_echo(&reply, &payload)
    }

    /// Read one field of fault monitor bank 1..=6 (newest trip first).
    /// Two-word fields come back as a full 32-bit value.
    pub async fn read_fault_monitor(
        &mut self,
        bank: u8,
        field: FaultMonitorField,
    ) -> Mx2Result<u32> {
        if !(1..=6).contains(&bank) {
            return Err(Mx2Error::parameter(format!(
                "fault monitor bank {bank} outside 1..=6"
            )));
        }
        let raw = catalog::FAULT_MONITOR_BANKS[usize::from(bank - 1)] + field.offset();
        let register = catalog::monitoring::NAMESPACE
            .contains(raw)
            .ok_or_else(|| {
                Mx2Error::parameter(format!(
                    "no monitoring register declared at 0x{raw:04X}"
                ))
            })?;
        let values = self.read_registers(register, 1).await?;
        values
            .first()
            .map(RegisterValue::value)
            .ok_or(Mx2Error::ResponseContent)
    }

    /// Persist the drive's parameters to EEPROM and wait for completion.
    ///
    /// Polls the DataWritingInProgress coil at quiet-period intervals,
    /// checking fault monitor 1 for an EEPROM trip after every busy poll.
    /// Gives up after the configured poll limit.
    pub async fn commit_to_nonvolatile_storage(&mut self) -> Mx2Result<()> {
        self.write_register(catalog::modbus::WRITE_TO_EEPROM, 1)
            .await?;
        for _ in 0..self.commit_poll_limit {
            let busy = self
                .read_coil_status(catalog::coils::DATA_WRITING_IN_PROGRESS, 1)
                .await?;
            if !busy.first().map(CoilValue::is_on).unwrap_or(false) {
                debug!("nonvolatile storage commit finished");
                return Ok(());
            }
            sleep(self.quiet_period).await;
            let factor = self
                .read_registers(catalog::monitoring::FAULT_MONITOR_1_FACTOR, 1)
                .await?;
            let tripped = factor
                .first()
                .map(|v| v.value() == u32::from(TripFactor::EepromError.code()))
                .unwrap_or(false);
            if tripped {
                warn!("drive reported EEPROM error during commit");
                return Err(Mx2Error::CommitFailed);
            }
        }
        Err(Mx2Error::CommitTimeout {
            polls: self.commit_poll_limit,
        })
    }
}
