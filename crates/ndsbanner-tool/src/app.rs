//! Command dispatch.

use crate::batch::{BatchSummary, run_batch};
use crate::config::{Command, EditMode, ToolConfig};
use crate::error::ToolError;
use crate::extract::extract_titles;
use crate::filename::FilenameParser;
use crate::report;
use crate::scan::{RomEntry, list_roms};
use crate::source::{FilenameTitles, PromptTitles, TitleSource};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// Run the configured command.
///
/// `input` feeds the manual-mode prompt, whose questions go to stderr. Per-file
/// results and the final summary go to `out`.
pub fn run<R: BufRead, W: Write>(
    config: &ToolConfig,
    input: R,
    out: &mut W,
) -> Result<(), ToolError> {
    let dir = config.rom_dir();
    let roms = scan(dir)?;
    info!("Found {} ROMs in {}", roms.len(), dir.display());

    match &config.command {
        Command::Auto { .. } => {
            writeln!(out, "Scanning {} ...", dir.display())?;
            let mut source = FilenameTitles::new(FilenameParser::new()?);
            edit(config, EditMode::Auto, &roms, &mut source, out)
        }
        Command::Manual { .. } => {
            if roms.is_empty() {
                writeln!(out, "No .nds files found in {}", dir.display())?;
                return Ok(());
            }
            writeln!(
                out,
                "Found {} files. Press Enter at the first prompt to skip a file.",
                roms.len()
            )?;
            let mut source = PromptTitles::new(input, std::io::stderr());
            edit(config, EditMode::Manual, &roms, &mut source, out)
        }
        Command::Extract { .. } => {
            let extracted = extract_titles(&roms);
            let path = config.listing_path();
            report::save(&path, &report::banner_list_xml(&extracted)?)?;
            writeln!(
                out,
                "Wrote banner titles of {} files to {}",
                extracted.len(),
                path.display()
            )?;
            Ok(())
        }
    }
}

fn scan(dir: &Path) -> Result<Vec<RomEntry>, ToolError> {
    list_roms(dir).map_err(|source| ToolError::Scan {
        path: dir.to_path_buf(),
        source,
    })
}

fn edit<S: TitleSource, W: Write>(
    config: &ToolConfig,
    mode: EditMode,
    roms: &[RomEntry],
    source: &mut S,
    out: &mut W,
) -> Result<(), ToolError> {
    let summary = run_batch(roms, source, out)?;
    write_summary(config, mode, &summary, out)
}

fn write_summary<W: Write>(
    config: &ToolConfig,
    mode: EditMode,
    summary: &BatchSummary,
    out: &mut W,
) -> Result<(), ToolError> {
    writeln!(
        out,
        "\nDone: {} updated, {} skipped, {} failed.",
        summary.updated(),
        summary.skipped(),
        summary.failed()
    )?;

    let failures = summary.failures();
    if !failures.is_empty() {
        let path = config.report_path(mode);
        report::save(&path, &report::error_log_xml(&failures)?)?;
        writeln!(out, "Failure details: {}", path.display())?;
    }
    Ok(())
}
