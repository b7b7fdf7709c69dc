//! A fluent builder for regular expressions.
//!
//! Patterns are assembled through chained calls instead of written by hand.
//! Groups and look aheads are tracked as they are opened and closed, so a
//! pattern with an unbalanced construct is rejected before it ever reaches
//! the regex engine.
//!
//! # Example
//!
//! ```rust
//! use patchain::{Flags, PatternBuilder};
//!
//! let mut builder = PatternBuilder::new().with_flags(Flags::new().case_insensitive(true));
//! builder
//!     .start()
//!     .literal("v")
//!     .begin_group()
//!     .digit()
//!     .one_or_more()
//!     .end_group()?
//!     .begin_negative_look_ahead()
//!     .literal(".")
//!     .end_look_ahead()?;
//!
//! assert_eq!(builder.as_str(), r"^v(\d+)(?!\.)");
//!
//! let re = builder.compile()?;
//! assert!(re.is_match("V2")?);
//! assert!(!re.is_match("v2.1")?);
//!
//! // Closing something that was never opened is an error.
//! builder.reset();
//! assert!(builder.end_group().is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod construct;
mod embed;
mod error;
mod escape;
mod flags;
mod validator;

pub use builder::PatternBuilder;
pub use construct::ConstructKind;
pub use embed::CompiledPattern;
pub use error::{BuildError, Missing, StructuralError};
pub use escape::escape;
pub use flags::Flags;
pub use validator::ConstructStack;
