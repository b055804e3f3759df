//! softreg - source-material scanning and pagination for registration listings
//!
//! softreg provides:
//! - Deterministic source-tree enumeration with a fixed denylist
//! - Comment stripping across language syntaxes, including block comments
//! - Fixed-width line wrapping and boundary trimming
//! - Fixed-length paginated export (60 pages x 50 lines)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod scan;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
