//! Template copying.
//! Places a packaged template tree into the user's workspace before the
//! substitution primitives customize it.

use crate::error::{Error, Result};
use crate::ignore::{parse_ignore_file, IGNORE_FILE};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Trait for placing a template into a target directory.
pub trait TemplateCopier {
    /// Copies `template` into `target_dir`.
    ///
    /// # Arguments
    /// * `template` - Location of the packaged template
    /// * `target_dir` - Directory that receives the files
    /// * `create_dir` - Create `target_dir` (and its parents) first
    ///
    /// Existing files in `target_dir` are overwritten.
    fn extract(&self, template: &Path, target_dir: &Path, create_dir: bool) -> Result<()>;
}

/// Copies a template directory tree from the local filesystem.
#[derive(Debug, Default)]
pub struct DirectoryCopier;

impl DirectoryCopier {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCopier for DirectoryCopier {
    /// # Errors
    /// * `Error::TemplateNotFound` if `template` is not a directory
    /// * `Error::NotFound` if `target_dir` is missing and `create_dir` is false
    fn extract(&self, template: &Path, target_dir: &Path, create_dir: bool) -> Result<()> {
        if !template.is_dir() {
            return Err(Error::TemplateNotFound { template_dir: template.display().to_string() });
        }

        if create_dir {
            fs::create_dir_all(target_dir)?;
        } else if !target_dir.is_dir() {
            return Err(Error::NotFound { path: target_dir.to_path_buf() });
        }

        let ignored = parse_ignore_file(template.join(IGNORE_FILE))?;

        // Ignored directories are pruned so nothing below them is visited.
        let walker = WalkDir::new(template).min_depth(1).into_iter().filter_entry(|entry| {
            let skip = entry
                .path()
                .strip_prefix(template)
                .map(|relative| ignored.is_match(relative))
                .unwrap_or(false);
            if skip {
                debug!("Skipping '{}' from {}", entry.path().display(), IGNORE_FILE);
            }
            !skip
        });

        for entry in walker {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            let relative = entry
                .path()
                .strip_prefix(template)
                .map_err(|e| Error::ConfigError(e.to_string()))?;

            let target = target_dir.join(relative);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                debug!("Copying file: {}", target.display());
                fs::copy(entry.path(), &target)?;
            }
        }

        Ok(())
    }
}
