//! Scan configuration
//!
//! All numeric limits and denylists live in one serde-round-trippable value
//! so tests can exercise small target sizes without scanning huge trees.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default column limit for wrapped listing lines
pub const DEFAULT_COLUMN_LIMIT: usize = 64;

/// Default number of lines per listing page
pub const DEFAULT_LINES_PER_PAGE: usize = 50;

/// Default number of pages in the exported listing
pub const DEFAULT_TARGET_PAGES: usize = 60;

/// Default tab expansion width
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Directory names that are never descended into
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "out",
    ".git",
    "vendor",
    "bin",
    "obj",
    "target",
    ".idea",
    ".vscode",
    ".vs",
    ".svn",
    ".hg",
    ".turbo",
    ".next",
    ".cache",
    ".angular",
    ".gradle",
];

/// Lockfiles that never count as source material
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &["package-lock.json", "yarn.lock", "pnpm-lock.yaml"];

/// File extensions (without the dot) accepted as source material
pub const DEFAULT_SUPPORTED_EXTS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "py", "java", "cs", "c", "cpp", "h", "hpp", "go", "rs", "php",
    "swift", "kt",
];

/// Configuration for a scan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum characters per wrapped line
    pub column_limit: usize,

    /// Lines per listing page
    pub lines_per_page: usize,

    /// Page count of the exported listing
    pub target_pages: usize,

    /// Spaces substituted for each horizontal tab
    pub tab_width: usize,

    /// Directory names skipped during enumeration
    pub excluded_dirs: Vec<String>,

    /// File basenames skipped during enumeration
    pub excluded_files: Vec<String>,

    /// Accepted file extensions, lowercase, without the dot
    pub supported_exts: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            column_limit: DEFAULT_COLUMN_LIMIT,
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            target_pages: DEFAULT_TARGET_PAGES,
            tab_width: DEFAULT_TAB_WIDTH,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            excluded_files: DEFAULT_EXCLUDED_FILES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            supported_exts: DEFAULT_SUPPORTED_EXTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ScanConfig {
    /// Total line count of the exported listing
    pub fn target_lines(&self) -> usize {
        self.lines_per_page * self.target_pages
    }

    /// Load a config from a JSON file; missing fields fall back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("invalid config file: {}", path.display()))
    }

    /// Whether a directory name is on the denylist
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    /// Whether a file basename is a known lockfile
    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.excluded_files.iter().any(|f| f == name)
    }

    /// Whether an extension (lowercase, no dot) is supported
    pub fn is_supported_ext(&self, ext: &str) -> bool {
        self.supported_exts.iter().any(|e| e == ext)
    }
}
