//! Boundary trimming
//!
//! Registration listings should not stop mid-statement on an arbitrary file.
//! The trimmer walks the ordered file blocks backward to the last block whose
//! final wrapped line looks like a natural terminator (closing brace, `end`,
//! or a bare `return`, each with optional trailing semicolon and whitespace)
//! and discards every block after it. This is a content heuristic with no
//! grammar backing; its exact matching rules are preserved for compatibility.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::FileBlock;

static END_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\}\s*;?\s*$|end\s*;?\s*$|return\s*;?\s*$)").unwrap());

/// Whether a wrapped line matches the end-of-block heuristic
pub fn is_terminator(line: &str) -> bool {
    END_LINE_RE.is_match(line)
}

/// Drop trailing blocks after the last one ending in a natural terminator
///
/// Falls back to keeping every block when none matches; an empty input stays
/// empty.
pub fn trim_blocks(mut blocks: Vec<FileBlock>) -> Vec<FileBlock> {
    let last_idx = blocks
        .iter()
        .rposition(|block| block.last_line().is_some_and(is_terminator))
        .unwrap_or(blocks.len().saturating_sub(1));

    blocks.truncate(last_idx + 1);
    blocks
}
