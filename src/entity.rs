//! Addressable entity model: coils, registers and register namespaces.
//!
//! The drive exposes two kinds of points. Coils are single bits in one flat
//! address space (1..=0x58, with gaps). Registers are 16-bit words, one or
//! two words wide, grouped into namespaces (Modbus area, monitoring area,
//! parameter groups); different namespaces may alias the same raw address.
//!
//! Entities are handles into static tables declared in [`crate::catalog`].
//! They are `Copy`, compare by raw address, and support ordered traversal of
//! their namespace via [`Register::next`] / [`Coil::next`].

use std::cmp::Ordering;
use std::fmt;

use crate::catalog;
use crate::error::{Mx2Error, Mx2Result};

// ============================================================================
// Definitions (static table rows)
// ============================================================================

/// One row of the coil table.
#[derive(Debug)]
pub struct CoilDef {
    pub name: &'static str,
    pub address: u8,
}

/// One row of a register namespace table.
#[derive(Debug)]
pub struct RegisterDef {
    pub name: &'static str,
    pub address: u16,
    /// Width in 16-bit words, 1 or 2.
    pub words: u8,
}

// ============================================================================
// Namespaces
// ============================================================================

/// A named group of registers, declared in ascending address order.
pub struct Namespace {
    pub name: &'static str,
    pub(crate) defs: &'static [RegisterDef],
}

impl Namespace {
    /// Look up the declared register with raw address `address`, if any.
    pub fn contains(&'static self, address: u16) -> Option<Register> {
        self.defs
            .iter()
            .position(|def| def.address == address)
            .map(|index| Register { ns: self, index })
    }

    /// Iterate over all declared registers in address order.
    pub fn iter(&'static self) -> impl Iterator<Item = Register> + 'static {
        (0..self.defs.len()).map(move |index| Register { ns: self, index })
    }

    /// Number of declared registers.
    #[inline]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("name", &self.name)
            .field("registers", &self.defs.len())
            .finish()
    }
}

// ============================================================================
// Register handles
// ============================================================================

/// Handle to one declared register inside a namespace.
#[derive(Clone, Copy)]
pub struct Register {
    ns: &'static Namespace,
    index: usize,
}

impl Register {
    /// Used by the catalog macros to declare handles as statics.
    #[doc(hidden)]
    pub const fn at(ns: &'static Namespace, index: usize) -> Self {
        Self { ns, index }
    }

    #[inline]
    fn def(&self) -> &'static RegisterDef {
        &self.ns.defs[self.index]
    }

    /// Symbolic name from the register map.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.def().name
    }

    /// One-based raw address on the wire.
    #[inline]
    pub fn address(&self) -> u16 {
        self.def().address
    }

    /// Width in 16-bit words (1 or 2).
    #[inline]
    pub fn words(&self) -> u8 {
        self.def().words
    }

    /// The namespace this register was declared in.
    #[inline]
    pub fn namespace(&self) -> &'static Namespace {
        self.ns
    }

    /// The `n` registers declared after this one, in address order.
    ///
    /// Fails with a parameter error when fewer than `n` remain in the
    /// namespace.
    pub fn next(self, n: usize) -> Mx2Result<Vec<Register>> {
        let end = self.index + 1 + n;
        if end > self.ns.defs.len() {
            return Err(Mx2Error::parameter(format!(
                "only {} register(s) declared after {} in namespace {}",
                self.ns.defs.len() - self.index - 1,
                self.name(),
                self.ns.name
            )));
        }
        Ok((self.index + 1..end)
            .map(|index| Register { ns: self.ns, index })
            .collect())
    }

    /// The register declared immediately after this one, if any.
    pub fn succ(self) -> Option<Register> {
        if self.index + 1 < self.ns.defs.len() {
            Some(Register {
                ns: self.ns,
                index: self.index + 1,
            })
        } else {
            None
        }
    }

    /// Word span covered when reading `count` registers starting here:
    /// distance from this address to the end of the last register touched.
    pub fn word_span(self, count: usize) -> Mx2Result<u16> {
        if count == 0 {
            return Err(Mx2Error::parameter("register count must be at least 1"));
        }
        let last = self.next(count - 1)?.last().copied().unwrap_or(self);
        Ok(last.address() - self.address() + u16::from(last.words()))
    }
}

impl PartialEq for Register {
    /// Registers compare by raw address alone; two namespaces aliasing the
    /// same address compare equal regardless of width.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl Eq for Register {}

impl PartialOrd for Register {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Register {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.address().cmp(&other.address())
    }
}

impl PartialEq<u16> for Register {
    #[inline]
    fn eq(&self, other: &u16) -> bool {
        self.address() == *other
    }
}

impl PartialEq<Register> for u16 {
    #[inline]
    fn eq(&self, other: &Register) -> bool {
        *self == other.address()
    }
}

impl fmt::Debug for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}.{} (0x{:04X}, {}w)>",
            self.ns.name,
            self.name(),
            self.address(),
            self.words()
        )
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.ns.name, self.name())
    }
}

// ============================================================================
// Coil handles
// ============================================================================

/// Handle to one declared coil in the drive's single coil table.
#[derive(Clone, Copy)]
pub struct Coil {
    index: usize,
}

impl Coil {
    /// Used by the catalog macro to declare handles as statics.
    #[doc(hidden)]
    pub const fn at(index: usize) -> Self {
        Self { index }
    }

    #[inline]
    fn def(&self) -> &'static CoilDef {
        &catalog::COIL_DEFS[self.index]
    }

    /// Symbolic name from the coil table.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.def().name
    }

    /// One-based raw address on the wire.
    #[inline]
    pub fn address(&self) -> u8 {
        self.def().address
    }

    /// Look up the declared coil with raw address `address`, if any.
    pub fn contains(address: u8) -> Option<Coil> {
        catalog::COIL_DEFS
            .iter()
            .position(|def| def.address == address)
            .map(|index| Coil { index })
    }

    /// Iterate over all declared coils in address order.
    pub fn all() -> impl Iterator<Item = Coil> {
        (0..catalog::COIL_DEFS.len()).map(|index| Coil { index })
    }

    /// The `n` coils declared after this one, in address order.
    ///
    /// Fails with a parameter error when fewer than `n` remain.
    pub fn next(self, n: usize) -> Mx2Result<Vec<Coil>> {
        let end = self.index + 1 + n;
        if end > catalog::COIL_DEFS.len() {
            return Err(Mx2Error::parameter(format!(
                "only {} coil(s) declared after {}",
                catalog::COIL_DEFS.len() - self.index - 1,
                self.name()
            )));
        }
        Ok((self.index + 1..end).map(|index| Coil { index }).collect())
    }

    /// The coil declared immediately after this one, if any.
    pub fn succ(self) -> Option<Coil> {
        if self.index + 1 < catalog::COIL_DEFS.len() {
            Some(Coil {
                index: self.index + 1,
            })
        } else {
            None
        }
    }
}

impl PartialEq for Coil {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl Eq for Coil {}

impl PartialOrd for Coil {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coil {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.address().cmp(&other.address())
    }
}

impl PartialEq<u8> for Coil {
    #[inline]
    fn eq(&self, other: &u8) -> bool {
        self.address() == *other
    }
}

impl PartialEq<Coil> for u8 {
    #[inline]
    fn eq(&self, other: &Coil) -> bool {
        *self == other.address()
    }
}

impl fmt::Debug for Coil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<coil.{} (0x{:02X})>", self.name(), self.address())
    }
}

impl fmt::Display for Coil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Write targets: declared entity or raw one-based address
// ============================================================================

/// Target of a register write: a declared register or a raw one-based
/// address. Raw targets are treated as one word per value.
#[derive(Debug, Clone, Copy)]
pub enum RegisterAddr {
    Declared(Register),
    Raw(u16),
}

impl RegisterAddr {
    /// One-based raw address on the wire.
    #[inline]
    pub fn address(&self) -> u16 {
        match self {
            Self::Declared(reg) => reg.address(),
            Self::Raw(addr) => *addr,
        }
    }

    /// The declared register behind this target, if there is one.
    #[inline]
    pub fn register(&self) -> Option<Register> {
        match self {
            Self::Declared(reg) => Some(*reg),
            Self::Raw(_) => None,
        }
    }

    /// Word span covered by `count` values written starting here.
    pub fn word_span(&self, count: usize) -> Mx2Result<u16> {
        match self {
            Self::Declared(reg) => reg.word_span(count),
            Self::Raw(_) => Ok(count as u16),
        }
    }
}

impl From<Register> for RegisterAddr {
    fn from(reg: Register) -> Self {
        Self::Declared(reg)
    }
}

impl From<u16> for RegisterAddr {
    fn from(addr: u16) -> Self {
        Self::Raw(addr)
    }
}

/// Target of a coil write: a declared coil or a raw one-based address.
#[derive(Debug, Clone, Copy)]
pub enum CoilAddr {
    Declared(Coil),
    Raw(u8),
}

impl CoilAddr {
    /// One-based raw address on the wire.
    #[inline]
    pub fn address(&self) -> u8 {
        match self {
            Self::Declared(coil) => coil.address(),
            Self::Raw(addr) => *addr,
        }
    }
}

impl From<Coil> for CoilAddr {
    fn from(coil: Coil) -> Self {
        Self::Declared(coil)
    }
}

impl From<u8> for CoilAddr {
    fn from(addr: u8) -> Self {
        Self::Raw(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{coils, main_profile, modbus, monitoring, standard};

    #[test]
    fn register_accessors() {
        assert_eq!(monitoring::OUTPUT_FREQUENCY.address(), 0x1001);
        assert_eq!(monitoring::OUTPUT_FREQUENCY.words(), 2);
        assert_eq!(modbus::WRITE_TO_EEPROM.address(), 0x0900);
        assert_eq!(modbus::WRITE_TO_EEPROM.words(), 1);
    }

    #[test]
    fn register_equality_ignores_width_and_namespace() {
        // main_profile.OutputFrequency and a same-address register compare
        // by raw address alone.
        assert_eq!(main_profile::OUTPUT_FREQUENCY, main_profile::OUTPUT_FREQUENCY);
        assert_eq!(monitoring::OUTPUT_FREQUENCY, 0x1001u16);
        assert_eq!(0x1001u16, monitoring::OUTPUT_FREQUENCY);
        assert_ne!(monitoring::OUTPUT_FREQUENCY, 0x1002u16);
        assert!(monitoring::OUTPUT_FREQUENCY < monitoring::OUTPUT_CURRENT);
    }

    #[test]
    fn namespace_lookup() {
        let reg = monitoring::NAMESPACE.contains(0x1003);
        assert!(reg.is_some());
        assert_eq!(reg.map(|r| r.name()), Some("OutputCurrent"));
        assert!(monitoring::NAMESPACE.contains(0x0F00).is_none());
    }

    #[test]
    fn namespaces_are_address_ordered() {
        for ns in [
            &modbus::NAMESPACE,
            &monitoring::NAMESPACE,
            &main_profile::NAMESPACE,
            &standard::NAMESPACE,
        ] {
            let addrs: Vec<u16> = ns.iter().map(|r| r.address()).collect();
            let mut sorted = addrs.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(addrs, sorted, "namespace {} out of order", ns.name);
        }
    }

    #[test]
    fn next_walks_declaration_order() {
        let following = monitoring::FAULT_FREQUENCY_MONITOR
            .next(2)
            .expect("two registers follow");
        assert_eq!(following[0].name(), "FaultMonitor1Factor");
        assert_eq!(following[1].name(), "FaultMonitor1InverterStatus");

        assert_eq!(
            monitoring::FAULT_FREQUENCY_MONITOR
                .next(0)
                .expect("zero is always available"),
            Vec::<Register>::new()
        );
    }

    #[test]
    fn next_fails_past_end_of_namespace() {
        let count = modbus::NAMESPACE.len();
        assert!(modbus::INVERTER_STATUS_A.next(count).is_err());
    }

    #[test]
    fn word_span_accounts_for_width_and_gaps() {
        // Two consecutive one-word registers.
        assert_eq!(modbus::INVERTER_STATUS_A.word_span(2).ok(), Some(2));
        // FaultFrequencyMonitor(1w) then Factor(1w), Status(1w), Frequency(2w):
        // 0x0011..0x0014+2 = 5 words.
        assert_eq!(
            monitoring::FAULT_FREQUENCY_MONITOR.word_span(4).ok(),
            Some(5)
        );
        assert_eq!(monitoring::FAULT_FREQUENCY_MONITOR.word_span(0).ok(), None);
    }

    #[test]
    fn coil_lookup_and_traversal() {
        assert_eq!(coils::OPERATION_COMMAND.address(), 0x01);
        assert_eq!(Coil::contains(0x01).map(|c| c.name()), Some("OperationCommand"));
        assert!(Coil::contains(0x00).is_none());

        let following = coils::OPERATION_COMMAND.next(4).expect("coils follow");
        // Addresses 0x02..0x04 are declared, 0x05/0x06 are gaps, next is 0x07.
        assert_eq!(following[2].address(), 0x04);
        assert_eq!(following[3].address(), 0x07);
    }

    #[test]
    fn raw_targets() {
        let target: RegisterAddr = 0x1234u16.into();
        assert_eq!(target.address(), 0x1234);
        assert!(target.register().is_none());
        assert_eq!(target.word_span(3).ok(), Some(3));

        let declared: RegisterAddr = monitoring::OUTPUT_FREQUENCY.into();
        assert_eq!(declared.address(), 0x1001);
        assert_eq!(declared.word_span(1).ok(), Some(2));

        let coil: CoilAddr = 0x07u8.into();
        assert_eq!(coil.address(), 0x07);
        let coil: CoilAddr = coils::OPERATION_COMMAND.into();
        assert_eq!(coil.address(), 0x01);
    }
}
