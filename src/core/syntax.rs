//! Per-language comment syntax
//!
//! Each supported extension maps to an ordered set of line-comment markers and
//! block-comment open/close pairs. The lookup happens once per file; any
//! unrecognized extension falls back to the C-style defaults plus `#`.

/// A block comment delimiter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPair {
    pub open: &'static str,
    pub close: &'static str,
}

/// Comment syntax for one language family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSyntax {
    /// Line-comment markers, earliest occurrence wins
    pub line: &'static [&'static str],
    /// Block-comment delimiters, earliest opener wins
    pub block: &'static [BlockPair],
}

const C_BLOCK: &[BlockPair] = &[BlockPair {
    open: "/*",
    close: "*/",
}];

const PY_BLOCK: &[BlockPair] = &[
    BlockPair {
        open: "\"\"\"",
        close: "\"\"\"",
    },
    BlockPair {
        open: "'''",
        close: "'''",
    },
];

const C_STYLE: LanguageSyntax = LanguageSyntax {
    line: &["//"],
    block: C_BLOCK,
};

const PYTHON: LanguageSyntax = LanguageSyntax {
    line: &["#"],
    block: PY_BLOCK,
};

const PHP: LanguageSyntax = LanguageSyntax {
    line: &["//", "#"],
    block: C_BLOCK,
};

const RUBY: LanguageSyntax = LanguageSyntax {
    line: &["#"],
    block: &[],
};

const FALLBACK: LanguageSyntax = LanguageSyntax {
    line: &["//", "#"],
    block: C_BLOCK,
};

/// Look up the comment syntax for a file extension (lowercase, without dot)
pub fn syntax_for(ext: &str) -> LanguageSyntax {
    match ext {
        "py" => PYTHON,
        "php" => PHP,
        "rb" => RUBY,
        "kt" | "swift" | "js" | "jsx" | "ts" | "tsx" | "java" | "cs" | "c" | "cpp" | "h"
        | "hpp" | "go" | "rs" => C_STYLE,
        _ => FALLBACK,
    }
}
