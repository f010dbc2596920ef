//! Protocol limits and wire-level constants for the MX2 drive.

/// Lowest individual device id accepted by the drive.
pub const DEVICE_ID_MIN: u8 = 1;

/// Highest individual device id accepted by the drive.
pub const DEVICE_ID_MAX: u8 = 247;

/// Lowest broadcast device id (0xFA).
pub const BROADCAST_ID_MIN: u8 = 0xFA;

/// Highest broadcast device id (0xFE).
pub const BROADCAST_ID_MAX: u8 = 0xFE;

/// Largest number of coils a single read or multi-write may touch.
pub const MAX_COIL_BATCH: usize = 31;

/// Largest number of registers a single read or multi-write may touch.
pub const MAX_REGISTER_BATCH: usize = 16;

/// Largest 16-bit word span a register read or write may cover.
pub const MAX_WORD_SPAN: u16 = 16;

/// Highest coil address on the drive (GateSuppressMonitor).
pub const COIL_ADDRESS_MAX: u8 = 0x58;

/// Largest configurable response latency in milliseconds.
pub const LATENCY_MS_MAX: u16 = 1000;

/// Baud rates the MX2 serial port can be configured for.
pub const BAUD_RATES: [u32; 8] = [2400, 4800, 9600, 19200, 38400, 57600, 76800, 115_200];

/// Bits per character on the wire (start + 8 data + parity/stop framing).
pub const CHARACTER_BITS: u32 = 11;

/// Silent interval marking end-of-frame, in character times.
pub const SILENT_INTERVAL_CHARS: f64 = 3.5;

/// Length of the echo reply to every acknowledged write.
pub const WRITE_ECHO_LEN: usize = 8;

/// True for device ids the drive treats as broadcast (no reply is sent).
#[inline]
pub const fn is_broadcast(device_id: u8) -> bool {
    device_id >= BROADCAST_ID_MIN
}

/// True for device ids a request may legally carry.
#[inline]
pub const fn is_valid_device_id(device_id: u8) -> bool {
    (device_id >= DEVICE_ID_MIN && device_id <= DEVICE_ID_MAX)
        || (device_id >= BROADCAST_ID_MIN && device_id <= BROADCAST_ID_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_id_classification() {
        assert!(is_valid_device_id(1));
        assert!(is_valid_device_id(247));
        assert!(!is_valid_device_id(0));
        assert!(!is_valid_device_id(248));
        assert!(!is_valid_device_id(249));
        assert!(is_valid_device_id(250));
        assert!(is_valid_device_id(254));
        assert!(!is_valid_device_id(255));
    }

    #[test]
    fn broadcast_range() {
        assert!(!is_broadcast(1));
        assert!(!is_broadcast(247));
        assert!(is_broadcast(250));
        assert!(is_broadcast(254));
    }
}
