//! Banner CRC-16
//!
//! The banner checksum is the reflected CRC-16 with polynomial `0xA001`
//! (CRC-16/MODBUS parameters: init `0xFFFF`, no final XOR), computed over
//! everything from banner offset `0x20` to the end of the banner and stored
//! little-endian at offset `0x02`.

use crate::banner::{CHECKSUM_FIELD, CHECKSUM_START};

const POLYNOMIAL: u16 = 0xA001;

const CRC_TABLE: [u16; 256] = build_table();

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u16;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ POLYNOMIAL
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Compute the CRC-16 of `data`
pub fn crc16(data: &[u8]) -> u16 {
    data.iter().fold(0xFFFF, |crc, &byte| {
        (crc >> 8) ^ CRC_TABLE[((crc ^ u16::from(byte)) & 0xFF) as usize]
    })
}

/// Zero the checksum field, compute the CRC of the banner body and store it
///
/// Returns the new checksum.
///
/// # Panics
///
/// Panics if `banner` is shorter than the `0x20`-byte header the checksum
/// skips. Every banner layout is far larger.
pub fn update_checksum(banner: &mut [u8]) -> u16 {
    banner[CHECKSUM_FIELD].fill(0);
    let crc = crc16(&banner[CHECKSUM_START..]);
    banner[CHECKSUM_FIELD].copy_from_slice(&crc.to_le_bytes());
    crc
}

/// Stored checksum of a banner buffer, `None` if it is too short to hold one
pub fn stored_checksum(banner: &[u8]) -> Option<u16> {
    banner
        .get(CHECKSUM_FIELD)
        .map(|field| u16::from_le_bytes([field[0], field[1]]))
}

/// Whether the stored checksum matches the banner body
///
/// A buffer shorter than the checksummed header never verifies.
pub fn verify_checksum(banner: &[u8]) -> bool {
    match (stored_checksum(banner), banner.get(CHECKSUM_START..)) {
        (Some(stored), Some(body)) => stored == crc16(body),
        _ => false,
    }
}
