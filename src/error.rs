//! Error types returned by the pattern builder.

use crate::construct::ConstructKind;

/// Which half of a construct is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    /// A close was attempted with no matching open.
    Begin,
    /// The pattern was finished while the construct was still open.
    End,
}

/// A group or look ahead was closed without being opened, or left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralError {
    pub kind: ConstructKind,
    pub missing: Missing,
}

impl StructuralError {
    pub fn begin_missing(kind: ConstructKind) -> Self {
        Self {
            kind,
            missing: Missing::Begin,
        }
    }

    pub fn end_missing(kind: ConstructKind) -> Self {
        Self {
            kind,
            missing: Missing::End,
        }
    }

    pub fn message(&self) -> &'static str {
        match self.missing {
            Missing::Begin => self.kind.begin_missing(),
            Missing::End => self.kind.end_missing(),
        }
    }
}

impl std::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for StructuralError {}

/// Any failure while building or compiling a pattern.
#[derive(Debug)]
pub enum BuildError {
    Structural(StructuralError),
    /// An embed operation was handed something that is not a compiled pattern.
    InvalidArgument(String),
    /// The regex engine rejected the finished pattern text.
    Compile(fancy_regex::Error),
}

impl BuildError {
    /// The structural error, if this is one.
    pub fn as_structural(&self) -> Option<&StructuralError> {
        match self {
            Self::Structural(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structural(err) => write!(f, "{err}"),
            Self::InvalidArgument(what) => write!(f, "Expected a compiled pattern, got {what:?}"),
            Self::Compile(err) => write!(f, "Pattern failed to compile: {err}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Structural(err) => Some(err),
            Self::InvalidArgument(_) => None,
            Self::Compile(err) => Some(err),
        }
    }
}

impl From<StructuralError> for BuildError {
    fn from(err: StructuralError) -> Self {
        Self::Structural(err)
    }
}

impl From<fancy_regex::Error> for BuildError {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Compile(err)
    }
}
