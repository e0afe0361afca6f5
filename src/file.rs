//! File I/O shared by the substitution primitives.
//!
//! Every primitive reads an existing source file, transforms it in memory and
//! writes the result to an optional destination that defaults to the source.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Reads the whole source file as UTF-8 text.
///
/// # Errors
/// * `Error::NotFound` if the file does not exist
/// * `Error::IoError` if it cannot be read
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::NotFound { path: path.to_path_buf() });
    }
    fs::read_to_string(path).map_err(Error::IoError)
}

/// Returns the path a primitive writes to: `output` when given, else `source`.
pub fn resolve_destination(source: &Path, output: Option<&Path>) -> PathBuf {
    output.unwrap_or(source).to_path_buf()
}

// Temporary files are owner-only; a plain create at `dest` yields the
// umask-derived mode a new file would normally get.
fn new_file_permissions(dest: &Path) -> Result<fs::Permissions> {
    let file = fs::OpenOptions::new().write(true).create_new(true).open(dest)?;
    let permissions = file.metadata()?.permissions();
    drop(file);
    fs::remove_file(dest)?;
    Ok(permissions)
}

/// Writes `content` to `dest`, creating missing parent directories.
///
/// The content goes to a temporary file next to `dest` which is then
/// persisted over it, so a failed write leaves an existing file untouched.
/// Permissions of an existing destination are carried over. A new
/// destination gets the default mode for new files.
pub fn write_destination(dest: &Path, content: &str) -> Result<()> {
    let parent = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        debug!("Creating directory '{}'.", parent.display());
        fs::create_dir_all(parent)?;
    }

    let permissions = match fs::metadata(dest) {
        Ok(metadata) => metadata.permissions(),
        Err(_) => new_file_permissions(dest)?,
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    fs::set_permissions(tmp.path(), permissions)?;

    tmp.persist(dest).map_err(|e| Error::IoError(e.error))?;
    Ok(())
}
