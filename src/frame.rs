//! RTU frame codec: CRC-16/MODBUS and frame assembly.
//!
//! Every frame on the wire is `[device id][function code][payload][crc]`,
//! with the checksum transmitted low byte first. The CRC covers everything
//! before it, so running the same checksum over a complete intact frame
//! reduces to zero; that is how replies are verified.

use crc::{Crc, CRC_16_MODBUS};

use crate::protocol::FunctionCode;

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_MODBUS);

/// CRC-16/MODBUS over `bytes` (reflected polynomial 0xA001, init 0xFFFF).
#[inline]
pub fn crc16(bytes: &[u8]) -> u16 {
    CRC16.checksum(bytes)
}

/// Assemble a complete frame for `device_id`/`function` around `payload`.
pub fn encode(device_id: u8, function: FunctionCode, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + 4);
    frame.push(device_id);
    frame.push(function.to_u8());
    frame.extend_from_slice(payload);
    let crc = crc16(&frame);
    frame.extend_from_slice(&crc.to_le_bytes());
    frame
}

/// True when `frame` carries a valid trailing checksum.
#[inline]
pub fn is_intact(frame: &[u8]) -> bool {
    crc16(frame) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Request vectors from the MX2 datasheet, section B-3-4, pp. 302-309.
    #[test]
    fn datasheet_request_frames() {
        assert_eq!(
            encode(8, FunctionCode::ReadCoilStatus, &[0x00, 0x06, 0x00, 0x05]),
            vec![0x08, 0x01, 0x00, 0x06, 0x00, 0x05, 0x1C, 0x91]
        );
        assert_eq!(
            encode(
                1,
                FunctionCode::ReadHoldingRegister,
                &[0x00, 0x11, 0x00, 0x06]
            ),
            vec![0x01, 0x03, 0x00, 0x11, 0x00, 0x06, 0x95, 0xCD]
        );
        assert_eq!(
            encode(8, FunctionCode::WriteInCoil, &[0x00, 0x00, 0xFF, 0x00]),
            vec![0x08, 0x05, 0x00, 0x00, 0xFF, 0x00, 0x8C, 0xA3]
        );
        assert_eq!(
            encode(
                8,
                FunctionCode::WriteInHoldingRegister,
                &[0x10, 0x28, 0x01, 0xF4]
            ),
            vec![0x08, 0x06, 0x10, 0x28, 0x01, 0xF4, 0x0D, 0x8C]
        );
        assert_eq!(
            encode(
                8,
                FunctionCode::WriteInMultipleCoils,
                &[0x00, 0x06, 0x00, 0x05, 0x02, 0x17, 0x00]
            ),
            vec![0x08, 0x0F, 0x00, 0x06, 0x00, 0x05, 0x02, 0x17, 0x00, 0x83, 0xEA]
        );
        assert_eq!(
            encode(
                8,
                FunctionCode::WriteInRegisters,
                &[0x10, 0x13, 0x00, 0x02, 0x04, 0x00, 0x04, 0x93, 0xE0]
            ),
            vec![0x08, 0x10, 0x10, 0x13, 0x00, 0x02, 0x04, 0x00, 0x04, 0x93, 0xE0, 0x7D, 0x53]
        );
        assert_eq!(
            encode(
                1,
                FunctionCode::ReadWriteRegisters,
                &[0x10, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x02, 0x04, 0x00, 0x00, 0x13, 0x88]
            ),
            vec![
                0x01, 0x17, 0x10, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x02, 0x04, 0x00, 0x00,
                0x13, 0x88, 0xF4, 0x86
            ]
        );
    }

    #[test]
    fn datasheet_reply_frames_are_intact() {
        // Read coil status reply and write echo reply, same datasheet section.
        assert!(is_intact(&[0x08, 0x01, 0x01, 0x05, 0x92, 0x17]));
        assert!(is_intact(&[0x08, 0x06, 0x10, 0x28, 0x01, 0xF4, 0x0D, 0x8C]));
    }

    #[test]
    fn corrupted_frame_is_rejected() {
        let mut frame = encode(8, FunctionCode::ReadCoilStatus, &[0x00, 0x06, 0x00, 0x05]);
        frame[3] ^= 0x01;
        assert!(!is_intact(&frame));
    }

    #[test]
    fn exception_reply_is_intact() {
        // Exception reply example: fc | 0x80 followed by the exception code.
        let mut frame = vec![0x01, 0x83, 0x23];
        let crc = crc16(&frame);
        frame.extend_from_slice(&crc.to_le_bytes());
        assert!(is_intact(&frame));
    }

    proptest! {
        // Any frame we assemble must reduce to zero under its own checksum.
        #[test]
        fn encoded_frames_self_reduce(
            device_id in 1u8..=247,
            payload in proptest::collection::vec(any::<u8>(), 0..64)
        ) {
            let frame = encode(device_id, FunctionCode::ReadHoldingRegister, &payload);
            prop_assert!(is_intact(&frame));
            prop_assert_eq!(frame[0], device_id);
            prop_assert_eq!(frame[1], 0x03);
            prop_assert_eq!(frame.len(), payload.len() + 4);
        }
    }
}
