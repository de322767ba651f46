//! Read-only banner title access

use crate::banner::buffer::BannerBuffer;
use crate::banner::error::Result;
use crate::banner::language::Language;
use crate::banner::layout::BannerLayout;
use crate::rom::{BannerOffset, RomFile, locate_banner};
use std::io::{Read, Seek};
use std::path::Path;

/// Decoded titles of one banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerTitles {
    /// Where the banner starts
    pub offset: BannerOffset,
    /// Layout resolved from the version tag
    pub layout: BannerLayout,
    /// Whether the stored CRC-16 matches the banner body
    pub checksum_valid: bool,
    /// One decoded title per slot, in slot order
    pub titles: Vec<(Language, String)>,
}

impl BannerTitles {
    /// Decoded title for `language`, if the layout has that slot
    pub fn get(&self, language: Language) -> Option<&str> {
        self.titles
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, title)| title.as_str())
    }

    /// Title of the first (Japanese) slot
    pub fn primary(&self) -> Option<&str> {
        self.get(Language::Japanese)
    }
}

/// Decode every title slot of the banner in `reader`
///
/// Returns `Ok(None)` when the ROM has no banner.
pub fn read_titles<R: Read + Seek>(reader: &mut R) -> Result<Option<BannerTitles>> {
    let Some(offset) = locate_banner(reader)? else {
        return Ok(None);
    };
    let layout = BannerLayout::read_from(reader, offset)?;
    let buffer = BannerBuffer::read_from(reader, offset, layout)?;

    let titles = Language::ALL
        .iter()
        .filter_map(|&language| buffer.title(language).map(|title| (language, title)))
        .collect();

    Ok(Some(BannerTitles {
        offset,
        layout,
        checksum_valid: buffer.checksum_valid(),
        titles,
    }))
}

/// Decode every title slot of the ROM at `path`
pub fn read_titles_from_path(path: impl AsRef<Path>) -> Result<Option<BannerTitles>> {
    let mut rom = RomFile::open_read(path)?;
    read_titles(&mut rom)
}
