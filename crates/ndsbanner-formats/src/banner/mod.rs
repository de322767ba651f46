//! NDS banner block
//!
//! The banner is referenced by the cartridge header and holds the icon shown
//! by the system menu together with one title string per language.
//!
//! # Format Overview
//!
//! All offsets are relative to the banner start; integers are little-endian.
//!
//! | Offset            | Field                       | Size |
//! |-------------------|-----------------------------|------|
//! | `0x00`            | version                     | 2    |
//! | `0x02`            | CRC-16 of `[0x20, size)`    | 2    |
//! | `0x20`            | icon bitmap and palette     | 0x220 |
//! | `0x240 + i*0x100` | title slot `i` (UTF-16LE)   | 256  |
//!
//! The version selects the number of title slots and the banner size; see
//! [`BannerLayout`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use ndsbanner_formats::banner::{BannerTitle, Language, apply_title, read_titles_from_path};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! apply_title("game.nds", &BannerTitle::new("New Game", "GroupX"))?;
//!
//! if let Some(banner) = read_titles_from_path("game.nds")? {
//!     assert_eq!(banner.get(Language::English), Some("New Game\nGroupX"));
//!     assert!(banner.checksum_valid);
//! }
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod checksum;
pub mod editor;
pub mod error;
pub mod header;
pub mod language;
pub mod layout;
pub mod reader;
pub mod title;

// Re-export main types
pub use buffer::BannerBuffer;
pub use checksum::{crc16, update_checksum, verify_checksum};
pub use editor::{EditOutcome, apply_title, edit_banner, patch_buffer};
pub use error::{BannerError, Result};
pub use header::BannerHeader;
pub use language::Language;
pub use layout::BannerLayout;
pub use reader::{BannerTitles, read_titles, read_titles_from_path};
pub use title::{BannerTitle, EncodedTitle, decode_slot};

/// Banner-relative range of the stored checksum
pub const CHECKSUM_FIELD: std::ops::Range<usize> = 0x02..0x04;

/// Banner-relative start of the checksummed range
pub const CHECKSUM_START: usize = 0x20;

/// Banner-relative offset of the first title slot
pub const TITLE_AREA_OFFSET: usize = 0x240;

/// Size of one title slot in bytes
pub const TITLE_SLOT_SIZE: usize = 0x100;

/// Largest encoded title that still leaves room for the terminator
pub const MAX_TITLE_BYTES: usize = TITLE_SLOT_SIZE - 2;
