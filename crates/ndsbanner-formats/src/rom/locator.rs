//! Banner pointer lookup

use crate::banner::error::{BannerError, Result};
use binrw::BinRead;
use std::fmt;
use std::io::{Read, Seek, SeekFrom};
use std::num::NonZeroU32;
use tracing::debug;

/// Absolute header offset of the banner pointer
pub const BANNER_POINTER_OFFSET: u64 = 0x68;

/// Raw banner pointer field of the cartridge header
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(little)]
pub struct BannerPointer {
    /// Absolute offset of the banner, zero when absent
    pub offset: u32,
}

/// Non-zero absolute file offset of a banner block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerOffset(NonZeroU32);

impl BannerOffset {
    /// Create an offset, `None` for the "no banner" sentinel 0
    pub fn new(offset: u32) -> Option<Self> {
        NonZeroU32::new(offset).map(Self)
    }

    /// Offset as a seek position
    pub fn get(self) -> u64 {
        u64::from(self.0.get())
    }
}

impl fmt::Display for BannerOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}

impl BannerPointer {
    /// Pointer as a banner offset, `None` when zero
    pub fn banner_offset(self) -> Option<BannerOffset> {
        BannerOffset::new(self.offset)
    }
}

/// Read the banner pointer from the cartridge header
///
/// Returns `Ok(None)` when the pointer is zero. A file too short to hold the
/// pointer is reported as a corrupt banner.
pub fn locate_banner<R: Read + Seek>(reader: &mut R) -> Result<Option<BannerOffset>> {
    reader.seek(SeekFrom::Start(BANNER_POINTER_OFFSET))?;
    let pointer = BannerPointer::read(reader)
        .map_err(|e| BannerError::from_read(e, BANNER_POINTER_OFFSET, "banner pointer"))?;

    let offset = pointer.banner_offset();
    match offset {
        Some(offset) => debug!("Banner pointer: {}", offset),
        None => debug!("Banner pointer is zero"),
    }
    Ok(offset)
}
