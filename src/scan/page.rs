//! Pagination and export resizing
//!
//! `paginate` is a pure chunking of a line sequence into fixed-size pages.
//! `select_export_lines` resizes the trimmed sequence to exactly
//! `lines_per_page * target_pages` lines: oversized input is sampled
//! (head + tail pages, or a plain head cut), undersized input is padded by
//! cyclic repeats of the sequence *prepended* before the real content. A
//! final clamp repairs any residual length drift, which occurs when head/tail
//! sampling picks up a ragged final page.

use crate::core::config::ScanConfig;
use crate::core::model::Page;

/// Group a flat line sequence into pages of `per_page` lines
///
/// The final page may be shorter. Pure and deterministic.
pub fn paginate(lines: &[String], per_page: usize) -> Vec<Page> {
    lines.chunks(per_page).map(|chunk| chunk.to_vec()).collect()
}

/// Resize the trimmed line sequence to exactly the configured target length
///
/// An empty input yields an empty output; everything else yields exactly
/// `config.target_lines()` lines.
pub fn select_export_lines(lines: &[String], config: &ScanConfig) -> Vec<String> {
    if lines.is_empty() {
        return Vec::new();
    }

    let target = config.target_lines();
    let pages = paginate(lines, config.lines_per_page);

    let mut export: Vec<String> = if lines.len() >= target {
        if pages.len() > config.target_pages {
            // keep the start and the end of a large codebase visible
            let head = config.target_pages / 2;
            let tail = config.target_pages - head;
            let mut sampled: Vec<String> = pages[..head].concat();
            sampled.extend(pages[pages.len() - tail..].concat());
            sampled
        } else {
            lines[..target].to_vec()
        }
    } else {
        lines.to_vec()
    };

    // clamp to the exact target; padding wraps from the start of the trimmed
    // sequence and lands before the real content
    if export.len() < target {
        let pad_count = target - export.len();
        let mut padded: Vec<String> = Vec::with_capacity(target);
        for idx in 0..pad_count {
            padded.push(lines[idx % lines.len()].clone());
        }
        padded.extend(export);
        export = padded;
    } else if export.len() > target {
        export.truncate(target);
    }

    export
}
