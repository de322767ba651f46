//! Title heuristics for ROM file names
//!
//! ROM dumps are commonly named `Title (Region)(Group)(Size).nds`. The parser
//! splits off the trailing parenthesised tags, drops version and edition
//! markers from the title, and sorts the tags into a region and a
//! translation group.

use ndsbanner_formats::banner::BannerTitle;
use regex::Regex;

/// Region tags recognised in file names (compared upper-case)
pub const REGIONS: &[&str] = &[
    "US", "JP", "FR", "DE", "ES", "IT", "NL", "PT", "RU", "KO", "ZHCN", "ZHTW", "EU", "HB", "ASIA",
    "UK", "CN",
];

/// Script tags (simplified/traditional) that carry no title information
const SCRIPT_TAGS: &[&str] = &["简", "繁"];

/// Parts of a ROM file name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilenameInfo {
    /// Cleaned game title
    pub title: String,
    /// Upper-case region tag, empty when none
    pub region: String,
    /// Translation group(s) joined with `" & "`, empty when none
    pub group: String,
}

impl FilenameInfo {
    /// Second banner line: `group(region)`, `group`, `(region)` or empty
    pub fn annotation(&self) -> String {
        match (self.group.is_empty(), self.region.is_empty()) {
            (false, false) => format!("{}({})", self.group, self.region),
            (false, true) => self.group.clone(),
            (true, false) => format!("({})", self.region),
            (true, true) => String::new(),
        }
    }

    /// Banner title built from the file name
    pub fn banner_title(&self) -> BannerTitle {
        BannerTitle::new(
            normalize_parens(&self.title),
            normalize_parens(&self.annotation()),
        )
    }
}

/// Replace full-width parentheses with ASCII ones
pub fn normalize_parens(text: &str) -> String {
    text.replace('（', "(").replace('）', ")")
}

/// Compiled file name patterns
#[derive(Debug, Clone)]
pub struct FilenameParser {
    tagged_name: Regex,
    tag: Regex,
    edition_suffix: Regex,
    size_tag: Regex,
}

impl FilenameParser {
    /// Compile the file name patterns
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            tagged_name: Regex::new(r"^(.*?)((\([^)]*\))+)$")?,
            tag: Regex::new(r"\(([^)]*)\)")?,
            edition_suffix: Regex::new(
                r"(?i)\s*(?:v\d+[\d.]*|\d+\.\d+|[0-9]*精修版|完全汉化版|汉化版|大字库版|最终版|完美版|英文字幕|中文字幕|中文配音|汉语配音).*$",
            )?,
            size_tag: Regex::new(r"^[\d.]+MB$")?,
        })
    }

    /// Remove version and edition markers, and everything after them
    pub fn clean_title(&self, title: &str) -> String {
        self.edition_suffix.replace(title, "").trim().to_string()
    }

    /// Split a ROM file name into title, region and translation group
    pub fn parse(&self, file_name: &str) -> FilenameInfo {
        let normalized = normalize_parens(file_name);
        let stem = strip_nds_extension(&normalized);

        let (raw_title, tags) = match self.tagged_name.captures(stem) {
            Some(caps) => {
                let title = caps.get(1).map_or("", |m| m.as_str());
                let tag_run = caps.get(2).map_or("", |m| m.as_str());
                let tags: Vec<&str> = self
                    .tag
                    .captures_iter(tag_run)
                    .filter_map(|c| c.get(1).map(|m| m.as_str()))
                    .collect();
                (title.trim(), tags)
            }
            None => (stem.trim(), Vec::new()),
        };

        let mut info = FilenameInfo {
            title: self.clean_title(raw_title),
            ..FilenameInfo::default()
        };

        for tag in tags {
            let trimmed = tag.trim();
            let upper = trimmed.to_uppercase();
            if SCRIPT_TAGS.contains(&upper.as_str()) || self.size_tag.is_match(&upper) {
                continue;
            }
            if REGIONS.contains(&upper.as_str()) {
                info.region = upper;
            } else if info.group.is_empty() {
                info.group = trimmed.to_string();
            } else {
                info.group.push_str(" & ");
                info.group.push_str(trimmed);
            }
        }

        info
    }
}

/// Strip a trailing `.nds`, ignoring case
fn strip_nds_extension(name: &str) -> &str {
    let split = name.len().saturating_sub(4);
    match (name.get(..split), name.get(split..)) {
        (Some(stem), Some(ext)) if ext.eq_ignore_ascii_case(".nds") => stem,
        _ => name,
    }
}
