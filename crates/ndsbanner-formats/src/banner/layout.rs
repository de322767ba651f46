//! Version-dependent banner layout
//!
//! | Version | Title slots | Banner size |
//! |---------|-------------|-------------|
//! | 1       | 6           | `0x840`     |
//! | 2       | 7           | `0x940`     |
//! | 3+      | 8           | `0xA40`     |
//!
//! Every version other than 1 and 2 resolves to the 8-slot layout.

use crate::banner::error::{BannerError, Result};
use crate::banner::header::BannerHeader;
use crate::banner::{TITLE_AREA_OFFSET, TITLE_SLOT_SIZE};
use crate::rom::BannerOffset;
use binrw::BinRead;
use std::io::{Read, Seek, SeekFrom};
use tracing::debug;

/// Slot count and total size of a banner, derived from its version tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerLayout {
    version: u16,
    slot_count: usize,
    total_size: usize,
}

impl BannerLayout {
    /// Resolve the layout for a version tag
    pub fn from_version(version: u16) -> Self {
        let (slot_count, total_size) = match version {
            1 => (6, 0x840),
            2 => (7, 0x940),
            _ => (8, 0xA40),
        };
        Self {
            version,
            slot_count,
            total_size,
        }
    }

    /// Read the banner header at `offset` and resolve the layout from its version
    pub fn read_from<R: Read + Seek>(reader: &mut R, offset: BannerOffset) -> Result<Self> {
        let position = offset.get();
        reader.seek(SeekFrom::Start(position))?;
        let header = BannerHeader::read(reader)
            .map_err(|e| BannerError::from_read(e, position, "banner header"))?;

        let layout = Self::from_version(header.version);
        debug!(
            "Banner at {:#x}: version {}, {} slots, {:#x} bytes, stored crc {:#06x}",
            position, header.version, layout.slot_count, layout.total_size, header.crc16
        );
        Ok(layout)
    }

    /// Version tag this layout was resolved from
    pub fn version(&self) -> u16 {
        self.version
    }

    /// Number of language title slots
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Total banner size in bytes
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// Byte range of title slot `index` within the banner buffer
    pub fn slot_range(&self, index: usize) -> std::ops::Range<usize> {
        let start = TITLE_AREA_OFFSET + index * TITLE_SLOT_SIZE;
        start..start + TITLE_SLOT_SIZE
    }

    /// Byte range covered by all title slots
    pub fn title_area(&self) -> std::ops::Range<usize> {
        TITLE_AREA_OFFSET..TITLE_AREA_OFFSET + self.slot_count * TITLE_SLOT_SIZE
    }
}
