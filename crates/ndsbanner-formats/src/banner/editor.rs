//! Banner title edit pipeline
//!
//! One edit is a single pass through:
//!
//! ```text
//! locate offset -> (no banner: done) -> resolve layout -> read buffer
//!   -> encode title (too long: fail) -> write slots -> checksum -> flush
//! ```
//!
//! The title is encoded and length-checked before the first write, so a
//! rejected title leaves the file untouched.

use crate::banner::buffer::BannerBuffer;
use crate::banner::error::Result;
use crate::banner::layout::BannerLayout;
use crate::banner::title::{BannerTitle, EncodedTitle};
use crate::rom::{RomFile, locate_banner};
use std::io::{Read, Seek, Write};
use std::path::Path;
use tracing::{debug, info};

/// Result of a completed edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Every title slot was rewritten and the checksum updated
    Updated(BannerLayout),
    /// The banner pointer is zero; nothing was written
    NoBanner,
}

/// Set every title slot of the ROM at `path` to `title`
pub fn apply_title(path: impl AsRef<Path>, title: &BannerTitle) -> Result<EditOutcome> {
    let mut rom = RomFile::open_rw(path)?;
    let outcome = edit_banner(&mut rom, title)?;
    if let EditOutcome::Updated(layout) = outcome {
        info!(
            "Updated {} title slots in {}",
            layout.slot_count(),
            rom.path().display()
        );
    }
    Ok(outcome)
}

/// Run the edit pipeline against any seekable read/write stream
pub fn edit_banner<F: Read + Write + Seek>(rom: &mut F, title: &BannerTitle) -> Result<EditOutcome> {
    let Some(offset) = locate_banner(rom)? else {
        return Ok(EditOutcome::NoBanner);
    };

    let layout = BannerLayout::read_from(rom, offset)?;
    let mut buffer = BannerBuffer::read_from(rom, offset, layout)?;
    let encoded = title.encode()?;

    let crc = patch_buffer(&mut buffer, &encoded);
    debug!("New banner checksum {:#06x}", crc);

    buffer.flush_to(rom)?;
    Ok(EditOutcome::Updated(buffer.layout()))
}

/// Write `title` into every slot of `buffer` and refresh its checksum
///
/// Returns the new checksum. Only the title slots and the checksum field
/// change.
pub fn patch_buffer(buffer: &mut BannerBuffer, title: &EncodedTitle) -> u16 {
    buffer.write_all_slots(title);
    buffer.update_checksum()
}
