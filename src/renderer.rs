//! Key-map rendering of template files.
//!
//! Placeholders such as `${project_name}` are plain text: every literal
//! occurrence of a key is replaced by its value, one key at a time, in the
//! insertion order of the map. A value that contains a later key is rewritten
//! again by that later key.

use crate::error::{Error, Result};
use crate::file::{read_source, resolve_destination, write_destination};
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// Ordered (needle, replacement) pairs. Iteration order is insertion order.
pub type Substitutions = IndexMap<String, String>;

/// Applies every substitution to `text`, in map order.
pub fn render_str(text: &str, substitutions: &Substitutions) -> String {
    let mut content = text.to_string();
    for (needle, replacement) in substitutions {
        if content.contains(needle.as_str()) {
            content = content.replace(needle.as_str(), replacement);
        }
    }
    content
}

/// Renders `source` with `substitutions` and writes the result to `output`,
/// or back to `source` when `output` is `None`.
///
/// # Errors
/// * `Error::EmptyNeedle` if a key is empty
/// * `Error::NotFound` if `source` does not exist
/// * `Error::IoError` if reading or writing fails
pub fn render_file<P: AsRef<Path>>(
    source: P,
    substitutions: &Substitutions,
    output: Option<&Path>,
) -> Result<()> {
    let source = source.as_ref();
    if substitutions.keys().any(|needle| needle.is_empty()) {
        return Err(Error::EmptyNeedle);
    }

    let content = read_source(source)?;
    let rendered = render_str(&content, substitutions);

    let dest = resolve_destination(source, output);
    write_destination(&dest, &rendered)?;
    debug!("Rendered '{}' into '{}'.", source.display(), dest.display());
    Ok(())
}
