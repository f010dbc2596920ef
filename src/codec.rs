//! Payload encoding and decoding between wire bytes and value containers.
//!
//! Decoders pair raw payload data with the declared entities of the catalog:
//! a batch read starting at some coil or register walks the table in address
//! order and skips the drive's address gaps, so decoded values always carry
//! the entity they belong to.

use crate::entity::{Coil, Register, RegisterAddr};
use crate::error::{Mx2Error, Mx2Result};
use crate::value::{CoilValue, RegisterValue};

// ============================================================================
// Coil payloads
// ============================================================================

/// Flatten the data bytes of a read-coil-status reply into bit states.
///
/// The drive transmits the byte holding the highest coil addresses first;
/// within each byte the lowest address sits in the least significant bit.
pub fn unpack_coil_bits(data: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(data.len() * 8);
    for byte in data.iter().rev() {
        for bit in 0..8 {
            bits.push(byte & (1 << bit) != 0);
        }
    }
    bits
}

/// Pair flat bit states with the coils declared from `start` onward.
///
/// Bits are consumed sequentially: the first bit belongs to `start`, the
/// second to the next declared coil, and so on, skipping address gaps.
/// Stops after `count` values or when the coil table is exhausted.
pub fn pair_with_coils(start: Coil, count: usize, bits: &[bool]) -> Vec<CoilValue> {
    let mut values = Vec::with_capacity(count);
    let mut coil = start;
    for &bit in bits {
        values.push(CoilValue::new(coil, bit));
        if values.len() == count {
            break;
        }
        match coil.succ() {
            Some(next) => coil = next,
            None => break,
        }
    }
    values
}

/// Pack coil states for a multi-coil write.
///
/// Produces `min(4, n/8 + 1)` data bytes with the first state in the highest
/// bit position and the bytes in big-endian order.
pub fn pack_coil_bits(values: &[bool]) -> Vec<u8> {
    let nbytes = usize::min(4, values.len() / 8 + 1);
    let mut intval: u32 = 0;
    for (n, &state) in values.iter().enumerate() {
        if state {
            intval |= 1 << (values.len() - 1 - n);
        }
    }
    (0..nbytes)
        .map(|n| (intval >> (8 * (nbytes - 1 - n))) as u8)
        .collect()
}

// ============================================================================
// Register payloads
// ============================================================================

/// Decode the data area of a register read into value containers.
///
/// Words arrive big-endian, most significant word of a two-word register
/// first. Each declared register from `start` onward consumes as many words
/// as its width, then decoding advances to the next declared register.
/// Stops at the end of the payload or when the namespace is exhausted.
pub fn decode_registers(start: Register, data: &[u8]) -> Vec<RegisterValue> {
    let mut values = Vec::new();
    let mut register = start;
    let mut remaining = register.words();
    let mut accum: u32 = 0;
    for word in data.chunks_exact(2) {
        let word = u16::from_be_bytes([word[0], word[1]]);
        remaining -= 1;
        accum |= u32::from(word) << (16 * u32::from(remaining));
        if remaining == 0 {
            values.push(RegisterValue::new(register, accum));
            accum = 0;
            match register.succ() {
                Some(next) => register = next,
                None => break,
            }
            remaining = register.words();
        }
    }
    values
}

/// Encode values for a multi-register write, big-endian, one register width
/// of words per value.
///
/// For a declared start register, each value takes the width of its declared
/// register and must fit it; raw start addresses take one word per value.
pub fn encode_register_values(start: &RegisterAddr, values: &[u32]) -> Mx2Result<Vec<u8>> {
    let mut data = Vec::with_capacity(values.len() * 2);
    match start.register() {
        Some(first) => {
            let mut registers = vec![first];
            if values.len() > 1 {
                registers.extend(first.next(values.len() - 1)?);
            }
            for (register, &value) in registers.iter().zip(values) {
                let bound = 1u64 << (16 * u32::from(register.words()));
                if u64::from(value) >= bound {
                    return Err(Mx2Error::parameter(format!(
                        "value {value} does not fit register {} ({} word(s))",
                        register.name(),
                        register.words()
                    )));
                }
                if register.words() == 2 {
                    data.extend_from_slice(&value.to_be_bytes());
                } else {
                    data.extend_from_slice(&(value as u16).to_be_bytes());
                }
            }
        }
        None => {
            for &value in values {
                if value > 0xFFFF {
                    return Err(Mx2Error::parameter(format!(
                        "value {value} does not fit a single 16-bit register"
                    )));
                }
                data.extend_from_slice(&(value as u16).to_be_bytes());
            }
        }
    }
    Ok(data)
}
