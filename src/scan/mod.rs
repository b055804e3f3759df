//! Scan pipeline
//!
//! One blocking pass over the filesystem: enumerate candidate files, classify
//! effective lines per file, wrap them, trim the tail at file granularity,
//! paginate, and resize for export. The whole scan either produces a complete
//! `ScanResult` or fails; no partial result is ever returned.

pub mod page;
pub mod strip;
pub mod trim;
pub mod walk;
pub mod wrap;

use std::path::Path;
use thiserror::Error;

use crate::core::config::ScanConfig;
use crate::core::model::{FileBlock, ScanResult};
use crate::core::syntax::syntax_for;
use crate::core::util::digest_lines;
use strip::CommentState;

/// Errors surfaced by the scan pipeline
#[derive(Debug, Error)]
pub enum ScanError {
    /// The project produced zero listing pages
    #[error("no usable source files found under {0}")]
    EmptyProject(String),

    /// An export operation was requested before any scan completed
    #[error("no completed scan to operate on")]
    NoScan,
}

/// Read a file as newline-normalized lines
///
/// Unreadable files contribute zero lines; invalid UTF-8 is converted lossily.
fn read_lines(path: &Path) -> Vec<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => return Vec::new(),
    };
    String::from_utf8_lossy(&bytes)
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Build the wrapped effective-line block for one file
///
/// Returns `None` when the file contributes nothing. The comment state starts
/// at `Normal` here and nowhere else, so an unclosed block comment can never
/// leak into the next file.
fn collect_block(path: &Path, config: &ScanConfig) -> Option<FileBlock> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    let syntax = syntax_for(&ext);

    let mut state = CommentState::Normal;
    let mut wrapped: Vec<String> = Vec::new();
    for line in read_lines(path) {
        let (effective, next) = strip::classify(&line, state, &syntax);
        state = next;
        if effective {
            wrapped.extend(wrap::wrap_effective_line(
                &line,
                config.column_limit,
                config.tab_width,
            ));
        }
    }

    if wrapped.is_empty() {
        None
    } else {
        Some(FileBlock::new(path.display().to_string(), wrapped))
    }
}

/// Run a full scan of `root`
pub fn scan(root: &Path, config: &ScanConfig) -> Result<ScanResult, ScanError> {
    let files = walk::enumerate_files(root, config);
    let file_count = files.len();

    let blocks: Vec<FileBlock> = files
        .iter()
        .filter_map(|path| collect_block(path, config))
        .collect();

    let trimmed = trim::trim_blocks(blocks);
    let lines: Vec<String> = trimmed.into_iter().flat_map(|block| block.lines).collect();
    let effective_lines = lines.len();

    let pages = page::paginate(&lines, config.lines_per_page);
    if pages.is_empty() {
        return Err(ScanError::EmptyProject(root.display().to_string()));
    }

    let export_lines = page::select_export_lines(&lines, config);
    let digest = digest_lines(&export_lines);
    let export_pages = page::paginate(&export_lines, config.lines_per_page);

    Ok(ScanResult {
        project_path: root.display().to_string(),
        file_count,
        effective_lines,
        pages,
        export_pages,
        digest,
    })
}
