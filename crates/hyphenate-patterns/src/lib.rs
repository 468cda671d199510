//! Liang/TeX hyphenation pattern engine.
//!
//! Loads hyph-utf8 style pattern files and answers "where may this word be
//! broken?" for single words. Text handling (whitespace, compounds,
//! punctuation) lives in the `hyphenate` crate; this crate only sees words.
//!
//! # Architecture
//!
//! - [`pattern`] -- compiling one pattern token into letters and levels
//! - [`parser`] -- reading a whole pattern source, including TeX wrappers
//! - [`trie`] -- pattern lookup structure
//! - [`dictionary`] -- [`Patterns`], the loaded engine with exceptions and margins

pub mod dictionary;
pub mod parser;
pub mod pattern;
pub mod trie;

pub use dictionary::{DEFAULT_LEFT_MIN, DEFAULT_RIGHT_MIN, Patterns};

/// Error type for pattern loading.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("failed to read patterns: {0}")]
    Io(#[from] std::io::Error),
    #[error("pattern source is not valid UTF-8 (at byte {offset})")]
    InvalidUtf8 { offset: usize },
    #[error("line {line}: invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        line: usize,
        pattern: String,
        reason: &'static str,
    },
    #[error("line {line}: unknown command {command}")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: unexpected token {token:?}")]
    UnexpectedToken { line: usize, token: String },
    #[error("line {line}: unbalanced brace")]
    UnbalancedBrace { line: usize },
    #[error("{command} group opened on line {line} is never closed")]
    UnclosedGroup { command: &'static str, line: usize },
    #[error("pattern source contains no patterns")]
    Empty,
}
