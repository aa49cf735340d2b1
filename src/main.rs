//! yarn-lock-origin-changer: migrate yarn.lock resolved URLs between registries.
//!
//! Reads the lockfile into memory, replaces every occurrence of the source
//! registry URL prefix with the target prefix, writes the result back
//! atomically, and reports how many entries were migrated.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::Confirm;
use yarn_lock_origin_changer::cli::Args;
use yarn_lock_origin_changer::report::MigrationReport;
use yarn_lock_origin_changer::{lockfile, replacer};

fn main() -> Result<()> {
    let args = Args::parse();

    let original = lockfile::read(&args.lockfile)?;
    if args.verbose {
        eprintln!(
            "{} Read {} bytes from {}",
            "info:".blue().bold(),
            original.len(),
            args.lockfile.display()
        );
    }

    let migration = replacer::replace(&original, &args.from, &args.to);
    if args.verbose {
        eprintln!(
            "{} Found {} occurrence(s) of '{}'",
            "info:".blue().bold(),
            migration.total,
            args.from
        );
    }

    let report = MigrationReport::new(&args.lockfile, &args.from, &args.to, &migration);

    if args.dry_run {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "{} {} entries would be migrated from: '{}' to: '{}'",
                "dry-run:".yellow().bold(),
                report.total,
                report.from,
                report.to
            );
        }
        return Ok(());
    }

    if args.interactive {
        let prompt = format!(
            "Rewrite {} ({} entries)?",
            args.lockfile.display(),
            migration.total
        );
        if !Confirm::new().with_prompt(prompt).default(true).interact()? {
            eprintln!(
                "{} Aborted, {} left unchanged",
                "info:".blue().bold(),
                args.lockfile.display()
            );
            return Ok(());
        }
    }

    lockfile::write_atomic(&args.lockfile, &migration.result)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }

    Ok(())
}
