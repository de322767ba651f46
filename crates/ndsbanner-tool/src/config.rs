//! Command-line configuration.
//!
//! Configuration can be provided via:
//! - CLI arguments (`auto <DIR>`, `--report-dir`, etc.)
//! - Environment variables (`NDSBANNER_DIR`, `NDSBANNER_REPORT_DIR`)
//!
//! # Example
//!
//! ```no_run
//! use ndsbanner_tool::ToolConfig;
//!
//! let config = ToolConfig::from_args();
//! config.validate().expect("Invalid configuration");
//! println!("ROM folder: {}", config.rom_dir().display());
//! ```

use crate::error::ConfigError;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Default file name of the extract listing.
pub const BANNER_LIST_FILE: &str = "banners.xml";

/// Tool configuration loaded from CLI args and environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ndsbanner",
    about = "Rewrite the banner titles of Nintendo DS ROM images",
    version
)]
pub struct ToolConfig {
    /// What to do with the ROM folder
    #[command(subcommand)]
    pub command: Command,

    /// Directory for error reports (defaults to the ROM folder)
    #[arg(long, global = true, env = "NDSBANNER_REPORT_DIR")]
    pub report_dir: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Tool subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Derive titles from file names and update every ROM in a folder
    Auto {
        /// Folder containing .nds files
        #[arg(env = "NDSBANNER_DIR")]
        dir: PathBuf,
    },

    /// Prompt for the title of each ROM in a folder
    Manual {
        /// Folder containing .nds files
        #[arg(env = "NDSBANNER_DIR")]
        dir: PathBuf,
    },

    /// Write the banner titles of every ROM in a folder to an XML listing
    Extract {
        /// Folder containing .nds files
        #[arg(env = "NDSBANNER_DIR")]
        dir: PathBuf,

        /// Output file (defaults to banners.xml in the ROM folder)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// How titles are chosen in an edit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Titles parsed from file names
    Auto,
    /// Titles typed at a prompt
    Manual,
}

impl EditMode {
    /// File name of the failure report for this mode.
    pub const fn report_file_name(self) -> &'static str {
        match self {
            Self::Auto => "auto_errors.xml",
            Self::Manual => "manual_errors.xml",
        }
    }
}

impl ToolConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// ROM folder the command operates on.
    pub fn rom_dir(&self) -> &Path {
        match &self.command {
            Command::Auto { dir } | Command::Manual { dir } | Command::Extract { dir, .. } => dir,
        }
    }

    /// Where the failure report of `mode` is written.
    pub fn report_path(&self, mode: EditMode) -> PathBuf {
        self.report_dir
            .as_deref()
            .unwrap_or_else(|| self.rom_dir())
            .join(mode.report_file_name())
    }

    /// Where the extract listing is written.
    pub fn listing_path(&self) -> PathBuf {
        match &self.command {
            Command::Extract {
                output: Some(output),
                ..
            } => output.clone(),
            _ => self.rom_dir().join(BANNER_LIST_FILE),
        }
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The ROM folder is not a directory
    /// - A report directory is given but does not exist
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dir = self.rom_dir();
        if !dir.is_dir() {
            return Err(ConfigError::NotADirectory(dir.to_path_buf()));
        }

        if let Some(report_dir) = &self.report_dir
            && !report_dir.is_dir()
        {
            return Err(ConfigError::ReportDirMissing(report_dir.clone()));
        }

        Ok(())
    }
}
