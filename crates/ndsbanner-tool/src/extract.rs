//! Read-only dump of banner titles

use crate::scan::RomEntry;
use ndsbanner_formats::banner::{BannerTitles, read_titles_from_path};
use tracing::warn;

/// What was found in one ROM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractStatus {
    /// Decoded titles of every slot
    Banner(BannerTitles),
    /// The banner pointer is zero
    NoBanner,
    /// The banner could not be read
    Failed(String),
}

/// Extract result for one ROM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRom {
    /// File name
    pub file_name: String,
    /// What was found
    pub status: ExtractStatus,
}

/// Decode the banners of `roms`, one result per file
pub fn extract_titles(roms: &[RomEntry]) -> Vec<ExtractedRom> {
    roms.iter()
        .map(|rom| {
            let status = match read_titles_from_path(&rom.path) {
                Ok(Some(banner)) => {
                    if !banner.checksum_valid {
                        warn!("{}: banner checksum mismatch", rom.file_name);
                    }
                    ExtractStatus::Banner(banner)
                }
                Ok(None) => ExtractStatus::NoBanner,
                Err(err) => {
                    warn!("{}: {}", rom.file_name, err);
                    ExtractStatus::Failed(err.to_string())
                }
            };
            ExtractedRom {
                file_name: rom.file_name.clone(),
                status,
            }
        })
        .collect()
}
