//! Anchor-line insertion.
//! Inserts text right below the first line that contains a literal tag.

use crate::error::{Error, Result};
use crate::file::{read_source, resolve_destination, write_destination};
use log::debug;
use std::path::Path;

/// Inserts the lines of `text` after the first line of `content` containing
/// `tag`. Returns `None` when no line contains it.
pub fn insert_after_tag_str(content: &str, tag: &str, text: &str) -> Option<String> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    let anchor = lines.iter().position(|line| line.contains(tag))?;

    let at = anchor + 1;
    lines.splice(at..at, text.split('\n'));
    Some(lines.join("\n"))
}

/// Inserts `text` after the anchor line of `source` and writes the result to
/// `output`, or back to `source` when `output` is `None`.
///
/// Only the first line containing `tag` is used as the anchor.
///
/// # Errors
/// * `Error::NotFound` if `source` does not exist
/// * `Error::TagNotFound` if no line contains `tag`; nothing is written
pub fn insert_after_tag<P: AsRef<Path>>(
    source: P,
    tag: &str,
    text: &str,
    output: Option<&Path>,
) -> Result<()> {
    let source = source.as_ref();
    let content = read_source(source)?;
    let updated = insert_after_tag_str(&content, tag, text).ok_or_else(|| {
        Error::TagNotFound { tag: tag.to_string(), path: source.to_path_buf() }
    })?;

    let dest = resolve_destination(source, output);
    write_destination(&dest, &updated)?;
    debug!("Inserted text after '{}' in '{}'.", tag, dest.display());
    Ok(())
}
