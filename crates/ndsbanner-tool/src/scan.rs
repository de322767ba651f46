//! ROM folder enumeration

use std::io;
use std::path::{Path, PathBuf};

/// A `.nds` file found in a ROM folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomEntry {
    /// Full path to the file
    pub path: PathBuf,
    /// File name shown in summaries and reports
    pub file_name: String,
}

/// List the `.nds` files directly inside `dir`, sorted by lower-cased name
pub fn list_roms(dir: &Path) -> io::Result<Vec<RomEntry>> {
    let mut roms = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let is_nds = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("nds"));
        if !is_nds {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        roms.push(RomEntry { path, file_name });
    }

    roms.sort_by_cached_key(|rom| rom.file_name.to_lowercase());
    Ok(roms)
}
