//! Text decomposition primitives for hyphenate.
//!
//! Everything here is a lossless split: each operation returns borrowed
//! slices of its input that concatenate back to the original string.
//!
//! - [`character`] -- character sets, whitespace classification, character counting
//! - [`fields`] -- whitespace runs vs. words, outer-whitespace trimming, word replacement
//! - [`subword`] -- splitting a word on internal hyphens, dashes and slashes
//! - [`affix`] -- trimming grammatical punctuation off a word

pub mod affix;
pub mod character;
pub mod fields;
pub mod subword;

pub use affix::{Trimmed, trim_affixes};
pub use fields::{Fields, Padded, split_fields, trim_space};
pub use subword::{SubWord, sub_words};

/// Error type for field reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldsError {
    /// The replacement list does not have one entry per original word.
    #[error("mismatch in number of replacement words: got {got}, wanted {wanted}")]
    WordCountMismatch { got: usize, wanted: usize },
}
