//! Value containers produced by the payload decoders.
//!
//! A read never returns bare integers: every decoded point is paired with
//! the entity it was read from, so callers can tell which coil or register a
//! value belongs to even when a batch skipped address gaps. Containers are
//! immutable; compute with [`RegisterValue::value`] when arithmetic beyond
//! comparison is needed.

use std::cmp::Ordering;
use std::fmt;

use crate::entity::{Coil, Register};

/// One decoded coil state.
#[derive(Clone, Copy)]
pub struct CoilValue {
    coil: Coil,
    value: bool,
}

impl CoilValue {
    pub(crate) fn new(coil: Coil, value: bool) -> Self {
        Self { coil, value }
    }

    /// The coil this state was read from.
    #[inline]
    pub fn coil(&self) -> Coil {
        self.coil
    }

    /// The decoded state.
    #[inline]
    pub fn value(&self) -> bool {
        self.value
    }

    /// Shorthand for `value() == true`.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.value
    }
}

impl PartialEq for CoilValue {
    fn eq(&self, other: &Self) -> bool {
        self.coil == other.coil && self.value == other.value
    }
}

impl Eq for CoilValue {}

impl PartialEq<bool> for CoilValue {
    #[inline]
    fn eq(&self, other: &bool) -> bool {
        self.value == *other
    }
}

impl PartialEq<CoilValue> for bool {
    #[inline]
    fn eq(&self, other: &CoilValue) -> bool {
        *self == other.value
    }
}

impl fmt::Debug for CoilValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.coil.name(), self.value)
    }
}

impl fmt::Display for CoilValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.coil.name(), if self.value { "ON" } else { "OFF" })
    }
}

/// One decoded register value, up to 32 bits for two-word registers.
#[derive(Clone, Copy)]
pub struct RegisterValue {
    register: Register,
    value: u32,
}

impl RegisterValue {
    pub(crate) fn new(register: Register, value: u32) -> Self {
        debug_assert!(u64::from(value) < 1u64 << (16 * u32::from(register.words())));
        Self { register, value }
    }

    /// The register this value was read from.
    #[inline]
    pub fn register(&self) -> Register {
        self.register
    }

    /// The decoded value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl PartialEq for RegisterValue {
    fn eq(&self, other: &Self) -> bool {
        self.register == other.register && self.value == other.value
    }
}

impl Eq for RegisterValue {}

impl PartialEq<u32> for RegisterValue {
    #[inline]
    fn eq(&self, other: &u32) -> bool {
        self.value == *other
    }
}

impl PartialEq<RegisterValue> for u32 {
    #[inline]
    fn eq(&self, other: &RegisterValue) -> bool {
        *self == other.value
    }
}

impl PartialOrd<u32> for RegisterValue {
    #[inline]
    fn partial_cmp(&self, other: &u32) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl fmt::Debug for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=0x{:X}", self.register.name(), self.value)
    }
}

impl fmt::Display for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.register.name(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{coils, monitoring};

    #[test]
    fn coil_value_comparisons() {
        let on = CoilValue::new(coils::RUNNING, true);
        let off = CoilValue::new(coils::RUNNING, false);
        assert_eq!(on, true);
        assert_eq!(false, off);
        assert_ne!(on, off);
        assert_eq!(on, CoilValue::new(coils::RUNNING, true));
        assert_ne!(on, CoilValue::new(coils::ALARM, true));
        assert!(on.is_on());
        assert_eq!(off.coil().address(), 0x13);
    }

    #[test]
    fn register_value_comparisons() {
        let freq = RegisterValue::new(monitoring::OUTPUT_FREQUENCY, 0x1388);
        assert_eq!(freq, 0x1388u32);
        assert_eq!(0x1388u32, freq);
        assert!(freq > 0x1000);
        assert!(freq < 0x2000);
        assert_eq!(freq, RegisterValue::new(monitoring::OUTPUT_FREQUENCY, 0x1388));
        assert_ne!(freq, RegisterValue::new(monitoring::OUTPUT_FREQUENCY, 0));
        assert_eq!(freq.register().words(), 2);
    }

    #[test]
    fn display_formats() {
        let running = CoilValue::new(coils::RUNNING, true);
        assert_eq!(running.to_string(), "Running: ON");
        let current = RegisterValue::new(monitoring::OUTPUT_CURRENT, 42);
        assert_eq!(current.to_string(), "OutputCurrent: 42");
    }
}
