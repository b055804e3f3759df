//! Output rendering
//!
//! Two surfaces: scan statistics (text/json/jsonl) and the paginated listing
//! itself (header, right-aligned global line numbers, form-feed page breaks).

use chrono::Local;

use crate::core::model::{Page, ScanStats};

/// Width of the line-number column in rendered listings
const LINE_NUMBER_WIDTH: usize = 5;

/// Output format for scan statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

impl std::str::FromStr for StatsFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(StatsFormat::Text),
            "json" => Ok(StatsFormat::Json),
            "jsonl" => Ok(StatsFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render scan statistics to a string
pub fn render_stats(stats: &ScanStats, format: StatsFormat) -> String {
    match format {
        StatsFormat::Text => format!(
            "Project: {}\nFiles: {}\nEffective lines: {}\nTotal pages: {}\nExport pages: {}\nDigest: {}",
            stats.project_path,
            stats.file_count,
            stats.effective_lines,
            stats.total_pages,
            stats.selected_pages,
            stats.digest,
        ),
        StatsFormat::Json => {
            serde_json::to_string_pretty(stats).unwrap_or_else(|_| "{}".to_string())
        }
        StatsFormat::Jsonl => serde_json::to_string(stats).unwrap_or_else(|_| "{}".to_string()),
    }
}

/// Render a page sequence as a plain-text listing
///
/// Every page starts with the header line; the first page adds a compiled-on
/// date line. Line numbers run globally across pages. Pages are separated by
/// a form feed so downstream converters keep the page boundaries.
pub fn render_listing(pages: &[Page], header: &str) -> String {
    let date = Local::now().format("%Y-%m-%d");
    let mut output = String::new();
    let mut line_number = 1usize;

    for (page_index, page) in pages.iter().enumerate() {
        if page_index > 0 {
            output.push('\u{000C}');
            output.push('\n');
        }
        output.push_str(header);
        output.push('\n');
        if page_index == 0 {
            output.push_str(&format!("Compiled: {}\n", date));
        }
        for line in page {
            let text = if line.is_empty() { " " } else { line.as_str() };
            output.push_str(&format!(
                "{:>width$}  {}\n",
                line_number,
                text,
                width = LINE_NUMBER_WIDTH
            ));
            line_number += 1;
        }
    }

    output
}
