//! Cartridge header access
//!
//! Only one field of the NDS cartridge header matters here: the 32-bit
//! little-endian banner pointer at offset `0x68`. A pointer of zero means the
//! image carries no banner.

pub mod file;
pub mod locator;

pub use file::RomFile;
pub use locator::{BANNER_POINTER_OFFSET, BannerOffset, locate_banner};
