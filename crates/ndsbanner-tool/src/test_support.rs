//! Synthetic ROM images for tool tests

use crate::scan::RomEntry;
use ndsbanner_formats::banner::{BannerLayout, EncodedTitle, update_checksum};
use std::path::Path;

const BANNER_OFFSET: usize = 0x200;

/// ROM with a `version` banner whose first slot holds `slot0`; `None` builds a ROM without banner
pub fn rom_bytes(version: u16, slot0: Option<&str>) -> Vec<u8> {
    let mut rom = vec![0u8; BANNER_OFFSET];
    let Some(slot0) = slot0 else {
        rom.extend(std::iter::repeat_n(0x11, 0x840));
        return rom;
    };
    rom[0x68..0x6C].copy_from_slice(&(BANNER_OFFSET as u32).to_le_bytes());

    let layout = BannerLayout::from_version(version);
    let mut banner = vec![0u8; layout.total_size()];
    banner[..2].copy_from_slice(&version.to_le_bytes());
    EncodedTitle::encode(slot0)
        .expect("test title fits")
        .write_slot(&mut banner[layout.slot_range(0)]);
    update_checksum(&mut banner);
    rom.extend_from_slice(&banner);
    rom
}

/// Write `data` to `dir/name`
pub fn write_rom(dir: &Path, name: &str, data: &[u8]) -> RomEntry {
    let path = dir.join(name);
    std::fs::write(&path, data).expect("Failed to write test ROM");
    RomEntry {
        path,
        file_name: name.to_string(),
    }
}
