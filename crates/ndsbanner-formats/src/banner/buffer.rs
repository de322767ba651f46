//! Fixed-length in-memory copy of a banner block

use crate::banner::checksum;
use crate::banner::error::{BannerError, Result};
use crate::banner::layout::BannerLayout;
use crate::banner::language::Language;
use crate::banner::title::{EncodedTitle, decode_slot};
use crate::rom::BannerOffset;
use std::io::{Read, Seek, SeekFrom, Write};

/// Banner bytes read from a ROM
///
/// The buffer length always equals the layout's total size; it is never grown
/// or shrunk, so writing it back cannot change the file length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerBuffer {
    offset: BannerOffset,
    layout: BannerLayout,
    bytes: Vec<u8>,
}

impl BannerBuffer {
    /// Read exactly `layout.total_size()` bytes at `offset`
    pub fn read_from<R: Read + Seek>(
        reader: &mut R,
        offset: BannerOffset,
        layout: BannerLayout,
    ) -> Result<Self> {
        reader.seek(SeekFrom::Start(offset.get()))?;
        let mut bytes = vec![0u8; layout.total_size()];
        reader
            .read_exact(&mut bytes)
            .map_err(|e| BannerError::from_short_read(e, offset.get(), "end of banner"))?;
        Ok(Self {
            offset,
            layout,
            bytes,
        })
    }

    /// Layout of this banner
    pub fn layout(&self) -> BannerLayout {
        self.layout
    }

    /// Raw banner bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes of title slot `index`
    pub fn slot(&self, index: usize) -> &[u8] {
        &self.bytes[self.layout.slot_range(index)]
    }

    /// Decoded title of the slot for `language`, if this layout has it
    pub fn title(&self, language: Language) -> Option<String> {
        let index = language.slot_index();
        (index < self.layout.slot_count()).then(|| decode_slot(self.slot(index)))
    }

    /// Write `title` into every title slot
    pub fn write_all_slots(&mut self, title: &EncodedTitle) {
        for index in 0..self.layout.slot_count() {
            let range = self.layout.slot_range(index);
            title.write_slot(&mut self.bytes[range]);
        }
    }

    /// Recompute and store the banner checksum
    pub fn update_checksum(&mut self) -> u16 {
        checksum::update_checksum(&mut self.bytes)
    }

    /// Whether the stored checksum matches the banner body
    pub fn checksum_valid(&self) -> bool {
        checksum::verify_checksum(&self.bytes)
    }

    /// Write the whole buffer back at its original offset
    pub fn flush_to<W: Write + Seek>(&self, writer: &mut W) -> Result<()> {
        writer.seek(SeekFrom::Start(self.offset.get()))?;
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        Ok(())
    }
}
