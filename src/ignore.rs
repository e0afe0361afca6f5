//! File and directory ignore pattern handling for bundled templates.
//! This module processes .helperignore files to exclude specific paths
//! from template copying, similar to .gitignore functionality.

use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Ignore file looked up at the root of each template
pub const IGNORE_FILE: &str = ".helperignore";

/// Patterns that are always skipped, even without an ignore file
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".helperignore",
    "**/.DS_Store",
    "**/__pycache__",
    "**/__pycache__/**",
    "**/*.pyc",
];

/// Reads the ignore file and builds a set of glob patterns, defaults included.
///
/// # Notes
/// - If the ignore file doesn't exist, only the defaults are used
/// - Each non-empty line not starting with `#` is a glob pattern
/// - A trailing `/` is dropped and `dir/**` also matches `dir` itself
/// - Invalid patterns result in `Error::GlobError`
///
/// # Example
/// ```ignore
/// # Contents of .helperignore:
/// *.pyc
/// .venv/**
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_PATTERNS {
        builder.add(Glob::new(pattern)?);
    }

    if let Ok(contents) = read_to_string(ignore_path.as_ref()) {
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let pattern = line.trim_end_matches('/');
            if pattern.is_empty() {
                continue;
            }
            builder.add(Glob::new(pattern)?);
            if let Some(dir) = pattern.strip_suffix("/**") {
                if !dir.is_empty() {
                    builder.add(Glob::new(dir)?);
                }
            }
        }
    } else {
        debug!("{} does not exist", ignore_path.as_ref().display());
    }

    Ok(builder.build()?)
}
