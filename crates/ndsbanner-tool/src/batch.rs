//! Batch driver: one independent banner edit per ROM
//!
//! A failure in one file is recorded and the run moves on to the next file.
//! Results are collected in order; nothing is shared between files except the
//! result list itself.

use crate::scan::RomEntry;
use crate::source::TitleSource;
use ndsbanner_formats::banner::{
    BannerError, BannerTitle, EditOutcome, apply_title, read_titles_from_path,
};
use std::fmt;
use std::io::{self, Write};
use tracing::warn;

/// Why a file was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The ROM header's banner pointer is zero
    NoBannerPresent,
    /// The title source declined to give a title
    NoTitle,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBannerPresent => f.write_str("no banner offset in ROM header"),
            Self::NoTitle => f.write_str("skipped"),
        }
    }
}

/// A file whose edit failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    /// File name
    pub file_name: String,
    /// Stable reason code
    pub reason_code: &'static str,
    /// Human-readable reason
    pub message: String,
    /// Title text that was to be written
    pub intended: String,
    /// Title found in the first slot before the edit, if readable
    pub original: Option<String>,
}

/// Outcome for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// The banner was rewritten
    Updated,
    /// The file was left alone
    Skipped(SkipReason),
    /// The edit failed; the file is unchanged
    Failed(FailureRecord),
}

/// Outcome for one file, with its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    /// File name
    pub file_name: String,
    /// What happened
    pub status: FileStatus,
}

/// Results of a batch run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Per-file results
    pub results: Vec<FileResult>,
}

impl BatchSummary {
    /// Failure records, for the error report
    pub fn failures(&self) -> Vec<&FailureRecord> {
        self.results
            .iter()
            .filter_map(|result| match &result.status {
                FileStatus::Failed(record) => Some(record),
                _ => None,
            })
            .collect()
    }

    /// Number of rewritten banners
    pub fn updated(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Updated))
    }

    /// Number of skipped files
    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Skipped(_)))
    }

    /// Number of failed files
    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&FileStatus) -> bool) -> usize {
        self.results.iter().filter(|r| predicate(&r.status)).count()
    }
}

/// Edit one ROM and turn every outcome into a result
pub fn process_rom(rom: &RomEntry, title: &BannerTitle) -> FileStatus {
    match apply_title(&rom.path, title) {
        Ok(EditOutcome::Updated(_)) => FileStatus::Updated,
        Ok(EditOutcome::NoBanner) => {
            warn!("{}: no banner", rom.file_name);
            FileStatus::Skipped(SkipReason::NoBannerPresent)
        }
        Err(err) => {
            warn!("{}: {}", rom.file_name, err);
            FileStatus::Failed(failure_record(rom, title, &err))
        }
    }
}

fn failure_record(rom: &RomEntry, title: &BannerTitle, err: &BannerError) -> FailureRecord {
    let original = read_titles_from_path(&rom.path)
        .ok()
        .flatten()
        .and_then(|banner| banner.primary().map(str::to_string));

    FailureRecord {
        file_name: rom.file_name.clone(),
        reason_code: err.reason_code(),
        message: err.to_string(),
        intended: title.text(),
        original,
    }
}

/// Run every ROM through `source` and the banner editor
///
/// One line per file is written to `out`. Only failures of `source` or `out`
/// end the run early.
pub fn run_batch<S: TitleSource, W: Write>(
    roms: &[RomEntry],
    source: &mut S,
    out: &mut W,
) -> io::Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let total = roms.len();

    for (index, rom) in roms.iter().enumerate() {
        let status = match source.title_for(rom, index + 1, total)? {
            Some(title) => process_rom(rom, &title),
            None => FileStatus::Skipped(SkipReason::NoTitle),
        };

        let result = FileResult {
            file_name: rom.file_name.clone(),
            status,
        };
        print_result(out, &result)?;
        summary.results.push(result);
    }

    Ok(summary)
}

/// Terminal line for one file
pub fn print_result<W: Write>(out: &mut W, result: &FileResult) -> io::Result<()> {
    match &result.status {
        FileStatus::Updated => writeln!(out, "[ok]   {}", result.file_name),
        FileStatus::Skipped(reason) => writeln!(out, "[skip] {} -> {}", result.file_name, reason),
        FileStatus::Failed(record) => {
            writeln!(out, "[fail] {} -> {}", result.file_name, record.message)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::filename::FilenameParser;
    use crate::source::FilenameTitles;
    use crate::test_support::{rom_bytes, write_rom};
    use ndsbanner_formats::banner::Language;

    struct FixedTitles(Option<BannerTitle>);

    impl TitleSource for FixedTitles {
        fn title_for(
            &mut self,
            _rom: &RomEntry,
            _position: usize,
            _total: usize,
        ) -> io::Result<Option<BannerTitle>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_batch_continues_after_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_rom(dir.path(), "Good Game (US).nds", &rom_bytes(1, Some("Old")));
        let blank = write_rom(dir.path(), "Blank.nds", &rom_bytes(1, None));
        let long_name = format!("{} (JP).nds", "L".repeat(130));
        let long = write_rom(dir.path(), &long_name, &rom_bytes(2, Some("Keep")));
        let long_before = std::fs::read(&long.path).unwrap();
        let broken = write_rom(dir.path(), "Broken.nds", &[0u8; 0x10]);

        let roms = vec![good.clone(), blank, long.clone(), broken];
        let mut source = FilenameTitles::new(FilenameParser::new().unwrap());
        let mut out = Vec::new();
        let summary = run_batch(&roms, &mut source, &mut out).unwrap();

        assert_eq!(summary.results.len(), 4);
        assert_eq!(summary.updated(), 1);
        assert_eq!(summary.skipped(), 1);
        assert_eq!(summary.failed(), 2);

        let failures = summary.failures();
        assert_eq!(failures[0].file_name, long_name);
        assert_eq!(failures[0].reason_code, "title_too_long");
        assert_eq!(failures[0].original.as_deref(), Some("Keep"));
        assert!(failures[0].intended.ends_with("\n(JP)"));
        assert_eq!(std::fs::read(&long.path).unwrap(), long_before);

        assert_eq!(failures[1].reason_code, "corrupt_banner");
        assert_eq!(failures[1].original, None);

        let banner = ndsbanner_formats::banner::read_titles_from_path(&good.path)
            .unwrap()
            .unwrap();
        assert_eq!(banner.get(Language::English), Some("Good Game\n(US)"));

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("[ok]   Good Game (US).nds"));
        assert!(printed.contains("[skip] Blank.nds"));
        assert!(printed.contains("[fail] Broken.nds"));
    }

    #[test]
    fn test_declined_title_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let rom = write_rom(dir.path(), "a.nds", &rom_bytes(3, Some("Same")));
        let before = std::fs::read(&rom.path).unwrap();

        let mut out = Vec::new();
        let summary = run_batch(&[rom.clone()], &mut FixedTitles(None), &mut out).unwrap();
        match &summary.results[0].status {
            FileStatus::Skipped(SkipReason::NoTitle) => {}
            other => panic!("unexpected status {other:?}"),
        }
        assert_eq!(std::fs::read(&rom.path).unwrap(), before);
    }

    #[test]
    fn test_missing_file_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let rom = RomEntry {
            path: dir.path().join("gone.nds"),
            file_name: "gone.nds".to_string(),
        };
        let status = process_rom(&rom, &BannerTitle::single("T"));
        match status {
            FileStatus::Failed(record) => {
                assert_eq!(record.reason_code, "io_failure");
                assert_eq!(record.intended, "T");
            }
            other => panic!("unexpected status {other:?}"),
        }
    }
}
