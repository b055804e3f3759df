//! File enumeration
//!
//! Walks the project tree depth-first in lexical name order, skipping the
//! configured directory denylist. A file is a candidate only if its extension
//! is supported, its basename is not a known lockfile, and it is not a
//! minified artifact. Unreadable directories are skipped silently.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::config::ScanConfig;

/// Suffix marking pre-minified JavaScript, never source material
const MINIFIED_SUFFIX: &str = ".min.js";

/// Whether a path passes the candidate-file rules
pub fn is_candidate(path: &Path, config: &ScanConfig) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) => e.to_lowercase(),
        None => return false,
    };
    if !config.is_supported_ext(&ext) {
        return false;
    }
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return false,
    };
    if config.is_excluded_file(name) {
        return false;
    }
    if name.to_lowercase().ends_with(MINIFIED_SUFFIX) {
        return false;
    }
    true
}

/// Enumerate candidate files under `root` in deterministic lexical order
pub fn enumerate_files(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if entry.file_type().is_dir() {
                let name = entry.file_name().to_string_lossy();
                return !config.is_excluded_dir(&name);
            }
            true
        });

    let mut files = Vec::new();
    for entry in walker {
        // unreadable entries do not fail the scan
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if is_candidate(entry.path(), config) {
            files.push(entry.path().to_path_buf());
        }
    }
    files
}
