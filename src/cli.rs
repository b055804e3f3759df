//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::core::config::ScanConfig;
use crate::core::model::ExportMode;
use crate::core::render::{render_listing, render_stats, StatsFormat};
use crate::core::session::ScanSession;

/// softreg - scan a source tree into fixed-length registration listings.
#[derive(Parser, Debug)]
#[command(name = "softreg")]
#[command(
    author,
    version,
    about,
    long_about = r#"softreg walks a project tree, strips comments to find effective code
lines, hard-wraps them to a fixed column width, and paginates the result
into a fixed-length listing suitable for software copyright registration
submissions.

Commands:
- scan: report scan statistics (file count, effective lines, page counts)
- export: write the paginated listing with global line numbers

Examples:
    softreg scan ./my-project
    softreg scan ./my-project --format json
    softreg export ./my-project --header "MyApp v1.0" --out listing.txt
    softreg export ./my-project --header "MyApp v1.0" --mode all
"#
)]
pub struct Cli {
    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Reduce non-essential output. Statistics and listings are still\n\
printed to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable more detailed diagnostics on stderr. This is intended for\n\
debugging and may increase stderr output."
    )]
    pub verbose: bool,

    /// Scan configuration file (JSON).
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        long_help = "Load scan limits and denylists from a JSON file.\n\n\
Recognized fields: column_limit, lines_per_page, target_pages, tab_width,\n\
excluded_dirs, excluded_files, supported_exts. Missing fields fall back to\n\
the built-in defaults (64 columns, 50 lines/page, 60 pages)."
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a project tree and report statistics.
    #[command(
        long_about = "Scan the project tree under PATH and report the scan statistics:\n\
matched file count, effective line count after boundary trimming, full page\n\
count, export page count, and a digest of the export line sequence.\n\n\
Fails when the project yields zero listing pages.\n\n\
Examples:\n\
  softreg scan .\n\
  softreg scan ./src --format jsonl\n"
    )]
    Scan {
        /// Project root to scan.
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,

        /// Output format (text/json/jsonl).
        #[arg(
            long,
            default_value = "text",
            value_name = "FORMAT",
            long_help = "Select the output format for statistics.\n\n\
Supported values:\n\
- text (default): human-friendly key/value lines\n\
- json: pretty-printed JSON object\n\
- jsonl: one compact JSON object on a single line"
        )]
        format: String,
    },

    /// Scan a project tree and write the paginated listing.
    #[command(
        long_about = "Scan the project tree under PATH and write the paginated listing:\n\
every page starts with the header line, lines carry global right-aligned\n\
line numbers, and pages are separated by form feeds.\n\n\
The export mode picks the page set:\n\
- selected (default): the listing resized to exactly 60 pages x 50 lines\n\
- all: every trimmed page without resizing\n\n\
Examples:\n\
  softreg export . --header \"MyApp v1.0\"\n\
  softreg export . --header \"MyApp v1.0\" --mode all --out listing.txt\n"
    )]
    Export {
        /// Project root to scan.
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,

        /// Header text printed at the top of every listing page.
        #[arg(long, value_name = "TEXT")]
        header: String,

        /// Page set to export (selected/all).
        #[arg(
            long,
            default_value = "selected",
            value_name = "MODE",
            long_help = "Select which page set is written.\n\n\
Supported values:\n\
- selected (default): the fixed-length export page sequence\n\
- all: the full trimmed page sequence"
        )]
        mode: String,

        /// Write the listing to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::default(),
    };

    match cli.command {
        Commands::Scan { path, format } => run_scan(&path, &config, &format, cli.verbose),
        Commands::Export {
            path,
            header,
            mode,
            out,
        } => run_export(
            &path,
            &config,
            &header,
            &mode,
            out.as_deref(),
            cli.quiet,
            cli.verbose,
        ),
    }
}

fn run_scan(path: &Path, config: &ScanConfig, format: &str, verbose: bool) -> Result<()> {
    let format: StatsFormat = format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let result = crate::scan::scan(path, config)
        .with_context(|| format!("scan failed for {}", path.display()))?;

    if verbose {
        eprintln!(
            "scanned {} files, {} effective lines",
            result.file_count, result.effective_lines
        );
    }

    println!("{}", render_stats(&result.stats(), format));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_export(
    path: &Path,
    config: &ScanConfig,
    header: &str,
    mode: &str,
    out: Option<&Path>,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    let mode: ExportMode = mode.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let result = crate::scan::scan(path, config)
        .with_context(|| format!("scan failed for {}", path.display()))?;

    let mut session = ScanSession::new();
    session.complete(result);
    let page_count = session.select_export_mode(mode)?;
    if verbose {
        eprintln!("exporting {} pages", page_count);
    }

    let listing = render_listing(session.export_pages()?, header);
    match out {
        Some(out_path) => {
            std::fs::write(out_path, listing)
                .with_context(|| format!("failed to write {}", out_path.display()))?;
            if !quiet {
                eprintln!("wrote {}", out_path.display());
            }
        }
        None => print!("{}", listing),
    }
    Ok(())
}
