//! Fixed banner header fields

use binrw::BinRead;

/// First four bytes of the banner block
///
/// - Version tag (2 bytes, little-endian)
/// - CRC-16 of `[0x20, total_size)` (2 bytes, little-endian)
///
/// Later format versions carry additional CRCs in `0x04..0x20`; those bytes
/// are left untouched by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(little)]
pub struct BannerHeader {
    /// Format version, selects the slot count
    pub version: u16,

    /// Stored CRC-16 of the banner body
    pub crc16: u16,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use binrw::io::Cursor;

    #[test]
    fn test_header_little_endian() {
        let data = [0x02, 0x00, 0x34, 0x12];
        let header = BannerHeader::read(&mut Cursor::new(&data)).unwrap();
        assert_eq!(header.version, 2);
        assert_eq!(header.crc16, 0x1234);
    }
}
