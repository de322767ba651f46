//! Banner block engine for Nintendo DS ROM images
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::cast_lossless)] // Sometimes clearer than From
#![allow(clippy::doc_markdown)] // Many NDS-specific terms don't need backticks
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::similar_names)] // Domain-specific naming patterns
#![allow(clippy::use_self)] // Type clarity
//! This crate edits the banner metadata block of `.nds` cartridge images in
//! place. The banner carries a version tag, a CRC-16, the icon bitmap and
//! palette, and one title string per language.
//!
//! # Components
//!
//! - **ROM access**: [`rom::RomFile`] and the banner pointer locator
//! - **Layout**: version tag to slot count and banner size
//! - **Titles**: UTF-16LE title slot encoding and decoding
//! - **Checksum**: CRC-16 (0xA001) over the banner body
//! - **Editor**: the locate, resolve, patch, checksum, flush pipeline
//! - **Reader**: decode every language slot for reporting
//!
//! # Integrity
//!
//! An edit never changes the length of the file. Bytes outside the title
//! slots and the checksum field are written back exactly as they were read,
//! and a title that does not fit its slot is rejected before anything on disk
//! is touched.
//!
//! # Example
//!
//! ```rust,no_run
//! use ndsbanner_formats::banner::{BannerTitle, EditOutcome, apply_title};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let title = BannerTitle::new("New Game", "GroupX");
//! match apply_title("game.nds", &title)? {
//!     EditOutcome::Updated(layout) => println!("patched {} slots", layout.slot_count()),
//!     EditOutcome::NoBanner => println!("no banner present"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Banner block layout, title codec, checksum and the edit pipeline
///
/// See the [`banner`] module for the on-disk layout and the edit state machine.
pub mod banner;
/// ROM file access and the banner pointer in the cartridge header
pub mod rom;

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
pub(crate) mod test_utils;
