//! Comment-stripping state machine
//!
//! Classifies each raw line as "effective" (still carries non-whitespace text
//! once every comment is removed) or not. The block-comment carry-over is a
//! two-state tagged value threaded functionally through the per-file fold;
//! it must start at `Normal` for every file, since block comments never span
//! file boundaries.
//!
//! Stripping is for classification only: the line emitted downstream is the
//! raw text, comments included.

use crate::core::syntax::LanguageSyntax;

/// Block-comment carry-over between consecutive lines of one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentState {
    #[default]
    Normal,
    /// Inside a block comment, waiting for this closer
    InBlock { closer: &'static str },
}

/// Remove block comments from one line, threading the carry-over state
///
/// Returns the live (non-block-comment) text of the line and the state to
/// carry into the next line. Openers are chosen by earliest column, not by
/// configuration order, and a block may open and close within the same line.
pub fn strip_block_comments(
    line: &str,
    state: CommentState,
    syntax: &LanguageSyntax,
) -> (String, CommentState) {
    let mut live = String::new();
    let mut state = state;
    let mut i = 0usize;

    while i < line.len() {
        match state {
            CommentState::InBlock { closer } => match line[i..].find(closer) {
                // the rest of the line is comment
                None => return (live, state),
                Some(offset) => {
                    i += offset + closer.len();
                    state = CommentState::Normal;
                }
            },
            CommentState::Normal => {
                let mut next: Option<(usize, &'static str, &'static str)> = None;
                for pair in syntax.block {
                    if let Some(offset) = line[i..].find(pair.open) {
                        let idx = i + offset;
                        if next.map_or(true, |(best, _, _)| idx < best) {
                            next = Some((idx, pair.open, pair.close));
                        }
                    }
                }
                match next {
                    None => {
                        live.push_str(&line[i..]);
                        break;
                    }
                    Some((idx, open, close)) => {
                        live.push_str(&line[i..idx]);
                        state = CommentState::InBlock { closer: close };
                        i = idx + open.len();
                    }
                }
            }
        }
    }

    (live, state)
}

/// Cut the line at the earliest line-comment marker
pub fn strip_line_comment<'a>(code: &'a str, syntax: &LanguageSyntax) -> &'a str {
    let mut earliest: Option<usize> = None;
    for marker in syntax.line {
        if let Some(idx) = code.find(marker) {
            if earliest.map_or(true, |e| idx < e) {
                earliest = Some(idx);
            }
        }
    }
    match earliest {
        Some(idx) => &code[..idx],
        None => code,
    }
}

/// Classify one raw line, returning whether it is effective and the state to
/// carry into the next line
///
/// A whitespace-only line is never effective and cannot change the state.
pub fn classify(
    line: &str,
    state: CommentState,
    syntax: &LanguageSyntax,
) -> (bool, CommentState) {
    if line.trim().is_empty() {
        return (false, state);
    }
    let (live, next) = strip_block_comments(line, state, syntax);
    let code = strip_line_comment(&live, syntax);
    (!code.trim().is_empty(), next)
}
