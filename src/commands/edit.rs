//! `render`, `insert-after` and `append`: the substitution primitives exposed
//! directly on the command line.

use crate::appender::append;
use crate::error::Result;
use crate::inserter::insert_after_tag;
use crate::renderer::{render_file, Substitutions};
use std::path::Path;

/// Parses a `KEY=VALUE` argument. The key is everything before the first `=`.
pub fn parse_key_value(arg: &str) -> std::result::Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("empty key in '{arg}'")),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got '{arg}'")),
    }
}

/// Renders `file` with the pairs in argument order. A repeated key keeps its
/// first position and its last value.
pub fn render(file: &Path, pairs: &[(String, String)], output: Option<&Path>) -> Result<()> {
    let substitutions: Substitutions = pairs.iter().cloned().collect();
    render_file(file, &substitutions, output)?;
    println!("Rendered '{}'.", output.unwrap_or(file).display());
    Ok(())
}

pub fn insert_after(file: &Path, tag: &str, text: &str, output: Option<&Path>) -> Result<()> {
    insert_after_tag(file, tag, text, output)?;
    println!("Inserted after '{}' in '{}'.", tag, output.unwrap_or(file).display());
    Ok(())
}

pub fn append_text(file: &Path, text: &str, output: Option<&Path>) -> Result<()> {
    append(file, text, output)?;
    println!("Appended to '{}'.", output.unwrap_or(file).display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("${name}=shop"),
            Ok(("${name}".to_string(), "shop".to_string()))
        );
        assert_eq!(parse_key_value("a=b=c"), Ok(("a".to_string(), "b=c".to_string())));
        assert_eq!(parse_key_value("a="), Ok(("a".to_string(), String::new())));
        assert!(parse_key_value("=b").is_err());
        assert!(parse_key_value("novalue").is_err());
    }
}
