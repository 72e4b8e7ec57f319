//! GL1 protocol frame encoding
//!
//! GL1 is the UDP protocol spoken by Neewer GL-series studio lights.
//! Frames are fixed-layout byte strings sent as single datagrams; computed
//! frames carry one trailing XOR checksum byte and nothing else: no length
//! field, no response, no retransmission.

use std::net::Ipv4Addr;

/// Power on (fixed literal frame)
pub const POWER_ON: [u8; 6] = [0x80, 0x05, 0x02, 0x01, 0x01, 0x89];

/// Power off (fixed literal frame)
pub const POWER_OFF: [u8; 6] = [0x80, 0x05, 0x02, 0x01, 0x00, 0x88];

/// Query power state; doubles as the keep-alive heartbeat
pub const QUERY_POWER: [u8; 5] = [0x80, 0x04, 0x02, 0x01, 0x06];

const HANDSHAKE_PREFIX: [u8; 6] = [0x80, 0x02, 0x10, 0x00, 0x00, 0x0d];
const HANDSHAKE_SUFFIX: u8 = 0x2e;

const BRIGHTNESS_TEMPERATURE_HEADER: [u8; 4] = [0x80, 0x05, 0x03, 0x02];

/// XOR-fold checksum over `data`.
pub fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0, |acc, byte| acc ^ byte)
}

/// Build the handshake frame that announces a session to the fixture.
///
/// Layout:
/// - 6 bytes: fixed prefix
/// - 4 bytes: the fixture's address octets
/// - 1 byte:  fixed suffix
pub fn handshake_frame(host: Ipv4Addr) -> [u8; 11] {
    let mut frame = [0u8; 11];
    frame[0..6].copy_from_slice(&HANDSHAKE_PREFIX);
    frame[6..10].copy_from_slice(&host.octets());
    frame[10] = HANDSHAKE_SUFFIX;
    frame
}

/// Build the combined brightness / color temperature frame.
///
/// Layout:
/// - 4 bytes: fixed header
/// - 1 byte:  brightness (device 0-100 scale)
/// - 1 byte:  color temperature (device 0-100 scale)
/// - 1 byte:  XOR checksum of the preceding 6 bytes
pub fn brightness_temperature_frame(brightness: u8, temperature: u8) -> [u8; 7] {
    let mut frame = [0u8; 7];
    frame[0..4].copy_from_slice(&BRIGHTNESS_TEMPERATURE_HEADER);
    frame[4] = brightness;
    frame[5] = temperature;
    frame[6] = checksum(&frame[0..6]);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_checksum_is_xor_fold() {
        assert_eq!(checksum(&[]), 0);
        assert_eq!(checksum(&[0x80]), 0x80);
        assert_eq!(checksum(&[0x80, 0x05, 0x03, 0x02, 0x64, 0x32]), 0xd2);
    }

    #[test]
    fn test_power_frame_constants() {
        assert_eq!(hex::encode(POWER_ON), "800502010189");
        assert_eq!(hex::encode(POWER_OFF), "800502010088");
        assert_eq!(hex::encode(QUERY_POWER), "8004020106");
    }

    #[test]
    fn test_brightness_temperature_frame_layout() {
        let frame = brightness_temperature_frame(100, 50);
        assert_eq!(hex::encode(frame), "800503026432d2");
    }

    #[test]
    fn test_handshake_frame_encodes_host_octets() {
        let frame = handshake_frame(Ipv4Addr::new(192, 168, 1, 100));
        assert_eq!(hex::encode(frame), "80021000000dc0a801642e");

        let frame = handshake_frame(Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(hex::encode(frame), "80021000000d0a0000072e");
    }

    proptest! {
        // XOR of a frame including its own checksum is always zero.
        #[test]
        fn prop_checksum_cancels_itself(brightness: u8, temperature: u8) {
            let frame = brightness_temperature_frame(brightness, temperature);
            prop_assert_eq!(frame[4], brightness);
            prop_assert_eq!(frame[5], temperature);
            prop_assert_eq!(frame[6], checksum(&frame[0..6]));
            prop_assert_eq!(checksum(&frame), 0);
        }
    }
}
