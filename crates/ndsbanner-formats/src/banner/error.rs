//! Error types for banner editing

use thiserror::Error;

/// Errors that can occur while locating, reading or patching a banner
#[derive(Debug, Error)]
pub enum BannerError {
    /// The banner pointer, version tag or banner body could not be read in full
    #[error("Corrupt banner at offset {offset:#x}: {reason}")]
    CorruptBanner {
        /// Absolute file offset of the field that failed
        offset: u64,
        /// What could not be read
        reason: String,
    },

    /// The title does not fit a 256-byte slot with its terminator
    #[error("Title too long: {encoded_length} bytes encoded, limit is {limit}", limit = crate::banner::MAX_TITLE_BYTES)]
    TitleTooLong {
        /// UTF-16LE length of the rejected title
        encoded_length: usize,
    },

    /// Binary parsing error
    #[error("Binary parsing error: {0}")]
    BinRead(String),

    /// IO error during open, seek, read or write
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BannerError {
    /// Stable machine-readable code for failure reports
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::CorruptBanner { .. } | Self::BinRead(_) => "corrupt_banner",
            Self::TitleTooLong { .. } => "title_too_long",
            Self::Io(_) => "io_failure",
        }
    }

    /// Build a corrupt-banner error from a short read, passing other IO errors through
    pub(crate) fn from_short_read(err: std::io::Error, offset: u64, what: &str) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::CorruptBanner {
                offset,
                reason: format!("file ends before {what}"),
            }
        } else {
            Self::Io(err)
        }
    }

    /// Map a binrw read failure of the field `what` at `offset`
    pub(crate) fn from_read(err: binrw::Error, offset: u64, what: &str) -> Self {
        match root_cause(err) {
            binrw::Error::Io(io) => Self::from_short_read(io, offset, what),
            other => Self::BinRead(other.to_string()),
        }
    }
}

/// Strip the field backtraces derived readers wrap their errors in
fn root_cause(err: binrw::Error) -> binrw::Error {
    match err {
        binrw::Error::Backtrace(backtrace) => root_cause(*backtrace.error),
        other => other,
    }
}

/// Result type alias for banner operations
pub type Result<T> = std::result::Result<T, BannerError>;
