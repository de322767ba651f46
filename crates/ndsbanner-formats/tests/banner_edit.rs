#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for in-place banner edits on files

use ndsbanner_formats::banner::{
    BannerError, BannerLayout, BannerTitle, EditOutcome, Language, apply_title, crc16,
    read_titles_from_path,
};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BANNER_OFFSET: usize = 0x4000;

/// Build a ROM with a banner of `version` at `BANNER_OFFSET` and some data after it
fn synthetic_rom(version: u16, slot0: &str) -> Vec<u8> {
    let layout = BannerLayout::from_version(version);
    let mut rom: Vec<u8> = (0..BANNER_OFFSET).map(|i| (i % 253) as u8).collect();
    rom[0x68..0x6C].copy_from_slice(&(BANNER_OFFSET as u32).to_le_bytes());

    let mut banner: Vec<u8> = (0..layout.total_size()).map(|i| (i * 13) as u8).collect();
    banner[..2].copy_from_slice(&version.to_le_bytes());
    for slot in 0..layout.slot_count() {
        let range = layout.slot_range(slot);
        banner[range].fill(0);
    }
    let encoded: Vec<u8> = slot0.encode_utf16().flat_map(u16::to_le_bytes).collect();
    banner[0x240..0x240 + encoded.len()].copy_from_slice(&encoded);
    banner[2..4].fill(0);
    let crc = crc16(&banner[0x20..]);
    banner[2..4].copy_from_slice(&crc.to_le_bytes());

    rom.extend_from_slice(&banner);
    rom.extend(std::iter::repeat_n(0xFF, 0x1000));
    rom
}

fn write_rom(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).expect("Failed to write test ROM");
    path
}

#[test]
fn edit_version_1_rom_on_disk() {
    let dir = TempDir::new().unwrap();
    let original = synthetic_rom(1, "OLD");
    let path = write_rom(dir.path(), "game.nds", &original);

    let outcome = apply_title(&path, &BannerTitle::new("New Game", "GroupX")).unwrap();
    assert_eq!(outcome, EditOutcome::Updated(BannerLayout::from_version(1)));

    let edited = std::fs::read(&path).unwrap();
    assert_eq!(edited.len(), original.len());
    assert_eq!(&edited[..BANNER_OFFSET], &original[..BANNER_OFFSET]);
    assert_eq!(
        &edited[BANNER_OFFSET + 0x840..],
        &original[BANNER_OFFSET + 0x840..]
    );

    let banner = read_titles_from_path(&path).unwrap().unwrap();
    assert!(banner.checksum_valid);
    assert_eq!(banner.titles.len(), 6);
    for (_, title) in &banner.titles {
        assert_eq!(title, "New Game\nGroupX");
    }
}

#[test]
fn edit_each_version() {
    let dir = TempDir::new().unwrap();
    for (version, slots) in [(1u16, 6usize), (2, 7), (3, 8), (255, 8)] {
        let path = write_rom(
            dir.path(),
            &format!("v{version}.nds"),
            &synthetic_rom(version, "Original"),
        );
        let before = read_titles_from_path(&path).unwrap().unwrap();
        assert_eq!(before.primary(), Some("Original"));

        apply_title(&path, &BannerTitle::single("Renamed")).unwrap();

        let after = read_titles_from_path(&path).unwrap().unwrap();
        assert_eq!(after.titles.len(), slots);
        assert_eq!(after.get(Language::English), Some("Renamed"));
        assert!(after.checksum_valid);
    }
}

#[test]
fn rom_without_banner_is_skipped_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut rom = synthetic_rom(1, "Keep");
    rom[0x68..0x6C].fill(0);
    let path = write_rom(dir.path(), "blank.nds", &rom);

    let outcome = apply_title(&path, &BannerTitle::single("Ignored")).unwrap();
    assert_eq!(outcome, EditOutcome::NoBanner);
    assert_eq!(std::fs::read(&path).unwrap(), rom);
    assert!(read_titles_from_path(&path).unwrap().is_none());
}

#[test]
fn too_long_title_leaves_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let rom = synthetic_rom(2, "Keep");
    let path = write_rom(dir.path(), "long.nds", &rom);

    // 100 + 1 + 40 code units = 282 bytes
    let title = BannerTitle::new("x".repeat(100), "y".repeat(40));
    match apply_title(&path, &title) {
        Err(BannerError::TitleTooLong { encoded_length }) => assert_eq!(encoded_length, 282),
        other => panic!("expected TitleTooLong, got {other:?}"),
    }
    assert_eq!(std::fs::read(&path).unwrap(), rom);
}

#[test]
fn truncated_rom_reports_corrupt_banner() {
    let dir = TempDir::new().unwrap();
    let mut rom = synthetic_rom(3, "Cut");
    rom.truncate(BANNER_OFFSET + 0x100);
    let path = write_rom(dir.path(), "cut.nds", &rom);

    let err = apply_title(&path, &BannerTitle::single("T")).unwrap_err();
    assert!(matches!(err, BannerError::CorruptBanner { .. }));
    assert_eq!(std::fs::read(&path).unwrap(), rom);
}

#[test]
fn tiny_file_reports_corrupt_banner() {
    let dir = TempDir::new().unwrap();
    let path = write_rom(dir.path(), "tiny.nds", &[0u8; 0x20]);
    let err = apply_title(&path, &BannerTitle::single("T")).unwrap_err();
    assert_eq!(err.reason_code(), "corrupt_banner");
}
