//! Pattern-based text hyphenation.
//!
//! A [`Hyphenator`] takes running text and returns it with a hyphen string
//! inserted at permissible break points inside words. Whitespace, leading
//! and trailing punctuation, compound separators and letter case all come
//! out exactly as they went in.
//!
//! Break points come from a [`PatternEngine`]. With the default `patterns`
//! feature that is [`hyphenate_patterns::Patterns`], loaded from a TeX or
//! hyph-utf8 pattern file:
//!
//! ```no_run
//! use hyphenate::Hyphenator;
//!
//! let h = Hyphenator::open("hyph-en-us.pat.txt", "\u{00AD}", [("hello", ["h", "ello"])])?;
//! let out = h.hyphenate("Hello, hyphenation!");
//! # Ok::<(), hyphenate::HyphenateError>(())
//! ```
//!
//! # Modules
//!
//! - [`engine`] -- the [`PatternEngine`] seam
//! - [`options`] -- [`HyphenatorOptions`] thresholds and character sets
//! - [`hyphenator`] -- text pipeline, custom overrides, hyphen placement
//! - [`error`] -- [`HyphenateError`]

pub mod engine;
pub mod error;
pub mod hyphenator;
pub mod options;

pub use engine::PatternEngine;
pub use error::HyphenateError;
pub use hyphenator::Hyphenator;
pub use hyphenator::custom::CustomOverrides;
pub use hyphenator::placement::place_hyphens;
pub use options::HyphenatorOptions;

pub use hyphenate_core::{Fields, FieldsError};
#[cfg(feature = "patterns")]
pub use hyphenate_patterns::{PatternError, Patterns};
