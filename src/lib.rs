//! yarn-lock-origin-changer library for migrating lockfile registry URLs.
//!
//! Rewrites the `resolved` URLs in a yarn.lock from one registry origin to
//! another without re-resolving dependencies. The lockfile is treated as
//! opaque text: every literal occurrence of the source URL prefix is replaced
//! with the target prefix, and whatever trailed the match (package path,
//! tarball name, hash fragment) stays attached after the new prefix.
//!
//! # Example
//!
//! ```no_run
//! use yarn_lock_origin_changer::lockfile;
//! use std::path::Path;
//!
//! let migration = lockfile::migrate(
//!     Path::new("yarn.lock"),
//!     "https://registry.yarnpkg.com",
//!     "https://npm.example.com",
//! ).unwrap();
//!
//! println!("{} of {} entries migrated", migration.replaced, migration.total);
//! ```

pub mod cli;
pub mod lockfile;
pub mod replacer;
pub mod report;

// Re-export commonly used types at crate root
pub use replacer::{Migration, replace};
pub use report::MigrationReport;
