//! Where banner titles come from

use crate::filename::FilenameParser;
use crate::scan::RomEntry;
use ndsbanner_formats::banner::BannerTitle;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Supplies the title to write for each ROM
pub trait TitleSource {
    /// Title for `rom`, or `None` to leave the file alone
    ///
    /// `position` is 1-based; `total` is the number of ROMs in the run.
    fn title_for(&mut self, rom: &RomEntry, position: usize, total: usize)
    -> io::Result<Option<BannerTitle>>;
}

/// Titles derived from file names
#[derive(Debug, Clone)]
pub struct FilenameTitles {
    parser: FilenameParser,
}

impl FilenameTitles {
    /// Create a source backed by `parser`
    pub fn new(parser: FilenameParser) -> Self {
        Self { parser }
    }
}

impl TitleSource for FilenameTitles {
    fn title_for(
        &mut self,
        rom: &RomEntry,
        _position: usize,
        _total: usize,
    ) -> io::Result<Option<BannerTitle>> {
        let info = self.parser.parse(&rom.file_name);
        debug!(
            "{}: title={:?} region={:?} group={:?}",
            rom.file_name, info.title, info.region, info.group
        );
        Ok(Some(info.banner_title()))
    }
}

/// Titles typed at an interactive prompt
///
/// An empty first line skips the file; the second line may be left empty.
#[derive(Debug)]
pub struct PromptTitles<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptTitles<R, W> {
    /// Prompt on `output`, reading answers from `input`
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> TitleSource for PromptTitles<R, W> {
    fn title_for(
        &mut self,
        rom: &RomEntry,
        position: usize,
        total: usize,
    ) -> io::Result<Option<BannerTitle>> {
        writeln!(self.output, "{}", "-".repeat(50))?;
        writeln!(self.output, "[{position}/{total}] {}", rom.file_name)?;

        let line1 = self.ask("Line 1 (game title) [Enter to skip]: ")?;
        if line1.is_empty() {
            return Ok(None);
        }
        let line2 = self.ask("Line 2 (group, region) [Enter to leave empty]: ")?;
        Ok(Some(BannerTitle::new(line1, line2)))
    }
}
