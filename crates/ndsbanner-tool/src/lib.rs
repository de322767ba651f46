//! Banner title editor for folders of NDS ROM images.
//!
//! This crate wraps the `ndsbanner-formats` engine with everything needed to
//! process a whole folder:
//! - `scan`: find the `.nds` files of a folder
//! - `filename`: derive titles from `Title (Region)(Group)(Size).nds` names
//! - `source`: title sources for automatic and interactive runs
//! - `batch`: one independent edit per file, results collected in order
//! - `extract`: read-only dump of every language slot
//! - `report`: XML failure log and banner listing
//! - `config`: command-line configuration
//!
//! # Example
//!
//! ```no_run
//! use ndsbanner_tool::batch::run_batch;
//! use ndsbanner_tool::filename::FilenameParser;
//! use ndsbanner_tool::scan::list_roms;
//! use ndsbanner_tool::source::FilenameTitles;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let roms = list_roms(Path::new("roms"))?;
//! let mut source = FilenameTitles::new(FilenameParser::new()?);
//! let summary = run_batch(&roms, &mut source, &mut std::io::stdout())?;
//! println!("{} failed", summary.failed());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod batch;
pub mod config;
pub mod error;
pub mod extract;
pub mod filename;
pub mod report;
pub mod scan;
pub mod source;

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
pub(crate) mod test_support;

pub use app::run;
pub use config::{Command, EditMode, ToolConfig};
pub use error::{ConfigError, ReportError, ToolError};
