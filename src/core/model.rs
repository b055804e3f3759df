//! Scan result model
//!
//! A scan produces one immutable `ScanResult`; every reporting surface
//! (stats output, listing rendering, export mode switching) reads from it
//! without mutating it.

use serde::{Deserialize, Serialize};

/// One listing page: an ordered run of wrapped lines
pub type Page = Vec<String>;

/// Wrapped effective lines of a single source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlock {
    /// Absolute path of the source file
    pub path: String,

    /// Wrapped effective lines, in source order
    pub lines: Vec<String>,
}

impl FileBlock {
    pub fn new(path: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// Last wrapped line, consulted only by the boundary trimmer
    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

/// Which page set the export surface uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// The full trimmed page sequence
    All,
    /// The resized target-length page sequence
    #[default]
    Selected,
}

impl std::str::FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ExportMode::All),
            "selected" => Ok(ExportMode::Selected),
            _ => Err(format!("Unknown export mode: {}", s)),
        }
    }
}

/// Aggregate produced by one scan invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Project root that was scanned
    pub project_path: String,

    /// Count of enumerated candidate files
    pub file_count: usize,

    /// Wrapped effective line count, post-trim
    pub effective_lines: usize,

    /// Full trimmed page sequence (statistics and the "all" export mode)
    pub pages: Vec<Page>,

    /// Resized target-length page sequence (the "selected" export mode)
    pub export_pages: Vec<Page>,

    /// XXH3 digest of the export line sequence
    pub digest: String,
}

impl ScanResult {
    /// Page count of the full trimmed sequence
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// Page count of the resized export sequence
    pub fn selected_pages(&self) -> usize {
        self.export_pages.len()
    }

    /// Pages for a given export mode
    pub fn pages_for(&self, mode: ExportMode) -> &[Page] {
        match mode {
            ExportMode::All => &self.pages,
            ExportMode::Selected => &self.export_pages,
        }
    }

    /// Reportable view without page bodies
    pub fn stats(&self) -> ScanStats {
        ScanStats {
            project_path: self.project_path.clone(),
            file_count: self.file_count,
            effective_lines: self.effective_lines,
            total_pages: self.total_pages(),
            selected_pages: self.selected_pages(),
            digest: self.digest.clone(),
        }
    }
}

/// Scan statistics reported to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub project_path: String,
    pub file_count: usize,
    pub effective_lines: usize,
    pub total_pages: usize,
    pub selected_pages: usize,
    pub digest: String,
}
