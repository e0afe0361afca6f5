use crate::error::Result;
use crate::file::{read_source, resolve_destination, write_destination};
use log::debug;
use std::path::Path;

/// Appends `text` to `content`, separating them with one line feed when
/// `content` is non-empty and not already newline-terminated.
pub fn append_str(content: &str, text: &str) -> String {
    let mut result = String::with_capacity(content.len() + text.len() + 1);
    result.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        result.push('\n');
    }
    result.push_str(text);
    result
}

/// Appends `text` verbatim to `source` and writes the result to `output`, or
/// back to `source` when `output` is `None`.
///
/// # Errors
/// * `Error::NotFound` if `source` does not exist
pub fn append<P: AsRef<Path>>(source: P, text: &str, output: Option<&Path>) -> Result<()> {
    let source = source.as_ref();
    let content = read_source(source)?;
    let updated = append_str(&content, text);

    let dest = resolve_destination(source, output);
    write_destination(&dest, &updated)?;
    debug!("Appended {} bytes to '{}'.", text.len(), dest.display());
    Ok(())
}
