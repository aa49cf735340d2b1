//! Command-line interface definitions.
//!
//! Defines the argument parser using clap's derive API. The invocation is
//! positional: lockfile path, source URL prefix, target URL prefix.

use clap::Parser;
use std::path::PathBuf;

/// Migrate yarn.lock resolved URLs from one package registry to another.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the lockfile to rewrite in place.
    pub lockfile: PathBuf,

    /// Registry URL prefix to search for (e.g., "https://registry.yarnpkg.com").
    #[arg(value_parser = parse_url_prefix)]
    pub from: String,

    /// Registry URL prefix to substitute. Any path/filename that followed the
    /// old prefix is kept after this one.
    #[arg(value_parser = parse_url_prefix)]
    pub to: String,

    /// Report the counts without writing the file.
    #[arg(long)]
    pub dry_run: bool,

    /// Confirm before overwriting the lockfile.
    #[arg(short, long)]
    pub interactive: bool,

    /// Emit JSON instead of human-readable output.
    #[arg(long)]
    pub json: bool,

    /// Print additional diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_url_prefix(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("URL prefix must not be empty".to_string());
    }
    Ok(s.to_string())
}
