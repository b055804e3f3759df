//! Line normalization and hard wrapping
//!
//! Tabs expand to a fixed run of spaces, then any line longer than the column
//! limit is split into consecutive fixed-width chunks. Chunks that are pure
//! whitespace are dropped, which can shrink the visual line count for a long
//! line of trailing whitespace. Chunking counts characters, so no code point
//! is ever split.

/// Expand horizontal tabs to `tab_width` spaces
pub fn normalize_line(line: &str, tab_width: usize) -> String {
    line.replace('\t', &" ".repeat(tab_width))
}

/// Split a normalized line into chunks of at most `limit` characters
pub fn wrap_line(line: &str, limit: usize) -> Vec<String> {
    if line.chars().count() <= limit {
        return vec![line.to_string()];
    }
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(limit)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Normalize, wrap, and drop whitespace-only chunks for one effective line
pub fn wrap_effective_line(line: &str, limit: usize, tab_width: usize) -> Vec<String> {
    wrap_line(&normalize_line(line, tab_width), limit)
        .into_iter()
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}
