//! Absorbing already-compiled patterns into a builder.

use crate::error::BuildError;

/// A compiled regex whose source text can be spliced into another pattern.
pub trait CompiledPattern {
    fn pattern_source(&self) -> &str;
}

impl CompiledPattern for fancy_regex::Regex {
    fn pattern_source(&self) -> &str {
        self.as_str()
    }
}

impl CompiledPattern for regex::Regex {
    fn pattern_source(&self) -> &str {
        self.as_str()
    }
}

/// Strip the delimiters from a `/source/flags` pattern literal.
///
/// Flags after the closing `/` are dropped; only the source is returned.
pub fn unwrap_delimited(literal: &str) -> Result<&str, BuildError> {
    let invalid = || BuildError::InvalidArgument(literal.to_string());

    let body = literal.strip_prefix('/').ok_or_else(invalid)?;
    let close = body.rfind('/').ok_or_else(invalid)?;
    let (source, flags) = (&body[..close], &body[close + 1..]);
    if !flags.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }
    Ok(source)
}
