//! The fluent pattern builder.
//!
//! Every method appends a fragment to the pattern text and hands the builder
//! back so calls can be chained. Methods that close a construct return a
//! [`Result`], since closing something that was never opened is an error.

use fancy_regex::Regex;
use itertools::Itertools;
use log::debug;

use crate::construct::ConstructKind;
use crate::embed::{CompiledPattern, unwrap_delimited};
use crate::error::BuildError;
use crate::escape::escape;
use crate::flags::Flags;
use crate::validator::ConstructStack;


/// Builds a regular expression one fragment at a time.
///
/// ```rust
/// use patchain::PatternBuilder;
///
/// let mut builder = PatternBuilder::new();
/// builder.start().begin_group().literal("v").digit().one_or_more().end_group()?.end();
/// assert_eq!(builder.as_str(), r"^(v\d+)$");
///
/// let re = builder.compile()?;
/// assert!(re.is_match("v12")?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    buffer: String,
    constructs: ConstructStack,
    flags: Flags,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn set_flags(&mut self, flags: Flags) -> &mut Self {
        self.flags = flags;
        self
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    fn push(&mut self, fragment: &str) -> &mut Self {
        self.buffer.push_str(fragment);
        self
    }

    fn open(&mut self, kind: ConstructKind, marker: &str) -> &mut Self {
        self.constructs.open(kind);
        self.push(marker)
    }

    fn close(&mut self, kind: ConstructKind) -> Result<&mut Self, BuildError> {
        self.constructs.close(kind)?;
        Ok(self.push(")"))
    }

    // --- Text ---

    /// Append raw pattern text, unescaped.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.push(text)
    }

    /// Append `text` so that it matches literally.
    pub fn literal(&mut self, text: &str) -> &mut Self {
        self.push(&escape(text))
    }

    /// Match any one of `alternatives` literally, as a non-capturing group.
    ///
    /// Nothing is appended when `alternatives` is empty.
    pub fn any_of<I, S>(&mut self, alternatives: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut alternatives = alternatives.into_iter().peekable();
        if alternatives.peek().is_none() {
            return self;
        }
        let joined = alternatives.map(|alt| escape(alt.as_ref())).join("|");
        self.push("(?:").push(&joined).push(")")
    }

    /// Splice in the source of an already compiled pattern, unescaped.
    pub fn embed<P: CompiledPattern + ?Sized>(&mut self, pattern: &P) -> &mut Self {
        self.push(pattern.pattern_source())
    }

    /// Splice in the source of a `/source/flags` pattern literal.
    ///
    /// Fails with [`BuildError::InvalidArgument`] if `literal` is not delimited.
    pub fn embed_literal(&mut self, literal: &str) -> Result<&mut Self, BuildError> {
        let source = unwrap_delimited(literal)?;
        Ok(self.push(source))
    }

    // --- Character classes ---

    /// Any character except a line separator.
    pub fn any_char(&mut self) -> &mut Self {
        self.push(".")
    }

    /// `[chars]`. The contents are not escaped.
    pub fn char_set(&mut self, chars: &str) -> &mut Self {
        self.push("[").push(chars).push("]")
    }

    /// `[^chars]`. The contents are not escaped.
    pub fn not_char_set(&mut self, chars: &str) -> &mut Self {
        self.push("[^").push(chars).push("]")
    }

    pub fn digit(&mut self) -> &mut Self {
        self.push(r"\d")
    }

    pub fn whitespace(&mut self) -> &mut Self {
        self.push(r"\s")
    }

    pub fn word_char(&mut self) -> &mut Self {
        self.push(r"\w")
    }

    // --- Quantifiers ---

    pub fn exactly(&mut self, count: usize) -> &mut Self {
        self.push(&format!("{{{count}}}"))
    }

    /// `{min,max}`. No check is made that `min <= max`.
    pub fn between(&mut self, min: usize, max: usize) -> &mut Self {
        self.push(&format!("{{{min},{max}}}"))
    }

    pub fn at_least(&mut self, min: usize) -> &mut Self {
        self.push(&format!("{{{min},}}"))
    }

    pub fn one_or_more(&mut self) -> &mut Self {
        self.push("+")
    }

    pub fn zero_or_more(&mut self) -> &mut Self {
        self.push("*")
    }

    pub fn optional(&mut self) -> &mut Self {
        self.push("?")
    }

    /// Make the preceding quantifier lazy.
    pub fn lazy(&mut self) -> &mut Self {
        self.push("?")
    }

    // --- Anchors and boundaries ---

    pub fn start(&mut self) -> &mut Self {
        self.push("^")
    }

    pub fn end(&mut self) -> &mut Self {
        self.push("$")
    }

    pub fn word_boundary(&mut self) -> &mut Self {
        self.push(r"\b")
    }

    pub fn non_word_boundary(&mut self) -> &mut Self {
        self.push(r"\B")
    }

    // --- Groups and look aheads ---

    pub fn begin_group(&mut self) -> &mut Self {
        self.open(ConstructKind::Group, "(")
    }

    /// `(?:`. Closed with [`end_group`](Self::end_group) like any other group.
    pub fn begin_non_capturing_group(&mut self) -> &mut Self {
        self.open(ConstructKind::Group, "(?:")
    }

    pub fn end_group(&mut self) -> Result<&mut Self, BuildError> {
        self.close(ConstructKind::Group)
    }

    pub fn begin_look_ahead(&mut self) -> &mut Self {
        self.open(ConstructKind::LookAhead, "(?=")
    }

    pub fn begin_negative_look_ahead(&mut self) -> &mut Self {
        self.open(ConstructKind::LookAhead, "(?!")
    }

    pub fn end_look_ahead(&mut self) -> Result<&mut Self, BuildError> {
        self.close(ConstructKind::LookAhead)
    }

    /// `\index`. The group is not required to exist.
    pub fn backreference(&mut self, index: usize) -> &mut Self {
        self.push(&format!("\\{index}"))
    }

    pub fn or(&mut self) -> &mut Self {
        self.push("|")
    }

    // --- Finishing ---

    /// The pattern text so far, whether or not it is balanced.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Number of groups and look aheads currently open.
    pub fn depth(&self) -> usize {
        self.constructs.depth()
    }

    pub fn is_balanced(&self) -> bool {
        self.constructs.is_empty()
    }

    /// Discard all text and open constructs. Flags are kept.
    pub fn reset(&mut self) -> &mut Self {
        debug!(
            "reset pattern {:?} with {} open construct(s)",
            self.buffer,
            self.constructs.depth()
        );
        self.buffer.clear();
        self.constructs.clear();
        self
    }

    /// The finished pattern text, without compiling it.
    pub fn finish(&self) -> Result<String, BuildError> {
        self.constructs.check_closed()?;
        Ok(self.buffer.clone())
    }

    /// Compile the finished pattern, with any flags applied.
    pub fn compile(&self) -> Result<Regex, BuildError> {
        self.constructs.check_closed()?;
        let pattern = format!("{}{}", self.flags.inline_prefix(), self.buffer);
        debug!("compiling pattern {pattern:?}");
        Ok(Regex::new(&pattern)?)
    }
}

impl std::fmt::Display for PatternBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buffer)
    }
}
