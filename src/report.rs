//! Migration reporting.
//!
//! Renders the one-line summary printed on success and carries the
//! serializable counts for `--json` output. The rewritten lockfile text is
//! deliberately not part of the report.

use crate::replacer::Migration;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Summary of a completed (or simulated) migration.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    /// Lockfile the migration ran against.
    pub lockfile: PathBuf,
    /// Source registry URL prefix.
    pub from: String,
    /// Target registry URL prefix.
    pub to: String,
    /// Occurrences of `from` found in the lockfile.
    pub total: usize,
    /// Occurrences substituted.
    pub replaced: usize,
}

impl MigrationReport {
    pub fn new(lockfile: &Path, from: &str, to: &str, migration: &Migration) -> Self {
        Self {
            lockfile: lockfile.to_path_buf(),
            from: from.to_string(),
            to: to.to_string(),
            total: migration.total,
            replaced: migration.replaced,
        }
    }

    /// The success line the CLI prints on stdout.
    pub fn summary(&self) -> String {
        format!(
            "yarn-lock-origin-changer: {} of {} entries have been migrated from: '{}' to: '{}'",
            self.replaced, self.total, self.from, self.to
        )
    }
}
