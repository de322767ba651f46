//! Test utilities for building synthetic ROM images
//!
//! The images carry only what the banner engine looks at: a cartridge header
//! with the banner pointer and a banner block of the right size for its
//! version.

use crate::banner::checksum::update_checksum;
use crate::banner::language::Language;
use crate::banner::layout::BannerLayout;
use crate::banner::title::EncodedTitle;
use crate::rom::BANNER_POINTER_OFFSET;

/// Size of the synthetic cartridge header
const HEADER_SIZE: usize = 0x200;

/// Builder for a minimal ROM image
pub struct RomBuilder {
    version: u16,
    banner_offset: u32,
    titles: Vec<(Language, String)>,
    trailing: usize,
    fill_pattern: bool,
}

impl RomBuilder {
    /// Banner of `version` placed directly after the header
    pub fn new(version: u16) -> Self {
        Self {
            version,
            banner_offset: HEADER_SIZE as u32,
            titles: Vec::new(),
            trailing: 0,
            fill_pattern: false,
        }
    }

    /// Banner pointer value; zero builds a ROM without banner
    pub fn banner_offset(mut self, offset: u32) -> Self {
        self.banner_offset = offset;
        self
    }

    /// Store `title` in the slot for `language`
    pub fn title(mut self, language: Language, title: &str) -> Self {
        self.titles.push((language, title.to_string()));
        self
    }

    /// Append `len` bytes of data after the banner
    pub fn trailing(mut self, len: usize) -> Self {
        self.trailing = len;
        self
    }

    /// Fill the banner body with a non-zero byte pattern
    pub fn fill_pattern(mut self) -> Self {
        self.fill_pattern = true;
        self
    }

    /// Build the image; the banner checksum is valid
    pub fn build(self) -> Vec<u8> {
        let offset = self.banner_offset as usize;
        assert!(offset == 0 || offset >= HEADER_SIZE);

        let mut rom = vec![0u8; offset.max(HEADER_SIZE)];
        for (i, byte) in rom.iter_mut().enumerate() {
            *byte = (i % 251) as u8;
        }
        let pointer = BANNER_POINTER_OFFSET as usize;
        rom[pointer..pointer + 4].copy_from_slice(&self.banner_offset.to_le_bytes());

        if offset != 0 {
            let layout = BannerLayout::from_version(self.version);
            let mut banner = vec![0u8; layout.total_size()];
            if self.fill_pattern {
                for (i, byte) in banner.iter_mut().enumerate() {
                    *byte = (i * 31 + 7) as u8;
                }
            }
            banner[..2].copy_from_slice(&self.version.to_le_bytes());
            for (language, title) in &self.titles {
                let range = layout.slot_range(language.slot_index());
                EncodedTitle::encode(title)
                    .expect("test title fits")
                    .write_slot(&mut banner[range]);
            }
            update_checksum(&mut banner);
            rom.extend_from_slice(&banner);
        }

        rom.extend((0..self.trailing).map(|i| (i % 199) as u8 ^ 0xA5));
        rom
    }
}
