//! Title slot codec
//!
//! Each language slot is 256 bytes of UTF-16LE text. A title is stored from
//! byte 0, followed by a `0x0000` terminator and zero padding, so the encoded
//! text may use at most 254 bytes.

use crate::banner::MAX_TITLE_BYTES;
use crate::banner::TITLE_SLOT_SIZE;
use crate::banner::error::{BannerError, Result};

/// Two-line banner title
///
/// The first line is the game title; the second is an optional annotation
/// such as a region or translation group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BannerTitle {
    /// Primary title line
    pub line1: String,
    /// Annotation line, empty when absent
    pub line2: String,
}

impl BannerTitle {
    /// Create a title from its two lines
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    /// Create a single-line title
    pub fn single(line1: impl Into<String>) -> Self {
        Self::new(line1, String::new())
    }

    /// Text as stored in the slot: the lines joined by `\n`, or line 1 alone
    pub fn text(&self) -> String {
        if self.line2.is_empty() {
            self.line1.clone()
        } else {
            format!("{}\n{}", self.line1, self.line2)
        }
    }

    /// Encode to a slot payload, rejecting titles over the slot budget
    pub fn encode(&self) -> Result<EncodedTitle> {
        EncodedTitle::encode(&self.text())
    }
}

/// UTF-16LE title payload that is known to fit a slot with its terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTitle {
    bytes: Vec<u8>,
}

impl EncodedTitle {
    /// Encode `text` as UTF-16LE
    pub fn encode(text: &str) -> Result<Self> {
        let bytes: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
        if bytes.len() > MAX_TITLE_BYTES {
            return Err(BannerError::TitleTooLong {
                encoded_length: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Encoded payload without terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Zero the whole slot, then copy the payload to its start
    ///
    /// Zeroing first clears whatever a longer previous title left behind.
    pub fn write_slot(&self, slot: &mut [u8]) {
        debug_assert_eq!(slot.len(), TITLE_SLOT_SIZE);
        slot.fill(0);
        slot[..self.bytes.len()].copy_from_slice(&self.bytes);
    }
}

/// Decode a title slot for display
///
/// Reads code units up to the first `0x0000` (or the end of the slot),
/// replaces undecodable units and trims surrounding whitespace. The
/// information separators U+001C to U+001F count as whitespace.
pub fn decode_slot(slot: &[u8]) -> String {
    let units: Vec<u16> = slot
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|&unit| unit != 0)
        .collect();
    String::from_utf16_lossy(&units)
        .trim_matches(is_title_space)
        .to_string()
}

fn is_title_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}
