//! Lockfile reading and writing.
//!
//! The lockfile is treated as opaque UTF-8 text: whole-file read, transform in
//! memory, whole-file write. Writes go through a temporary file in the same
//! directory that is renamed over the target, so a failed write leaves the
//! original lockfile untouched.

use crate::replacer::{self, Migration};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads the entire lockfile into memory.
pub fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Writes `contents` over `path` atomically.
///
/// The content is written to a temporary file in the target's directory and
/// persisted via rename. The rename stays on one filesystem, so the target is
/// either fully replaced or left as it was.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write rewritten lockfile for {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}

/// Rewrites the lockfile at `path` in place, replacing every occurrence of
/// the `from` URL prefix with `to`.
///
/// Returns the counts from the replacement pass. The file is rewritten even
/// when nothing matched; the content is then byte-identical.
pub fn migrate(path: &Path, from: &str, to: &str) -> Result<Migration> {
    let original = read(path)?;
    let migration = replacer::replace(&original, from, to);
    write_atomic(path, &migration.result)?;
    Ok(migration)
}
