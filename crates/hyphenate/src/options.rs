// Hyphenator configuration

use hyphenate_core::character::{HYPHENS, PUNCTUATION, WORD_SEPARATORS};

/// Thresholds and character sets used while hyphenating.
///
/// All lengths are counted in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct HyphenatorOptions {
    /// Words (after punctuation trimming) shorter than this are never
    /// hyphenated.
    pub min_word_length: usize,

    /// Minimum characters on each side of an inserted hyphen, within one
    /// sub-word.
    pub min_fragment_length: usize,

    /// Characters that split a word into independently hyphenated
    /// sub-words. Kept verbatim in the output.
    pub separators: Vec<char>,

    /// Characters treated as an existing hyphen: a fragment ending in one
    /// never gets another hyphen appended.
    pub hyphens: Vec<char>,

    /// Characters trimmed off both ends of a sub-word before hyphenation
    /// and reattached afterwards.
    pub punctuation: Vec<char>,
}

impl Default for HyphenatorOptions {
    fn default() -> Self {
        Self {
            min_word_length: 6,
            min_fragment_length: 2,
            separators: WORD_SEPARATORS.to_vec(),
            hyphens: HYPHENS.to_vec(),
            punctuation: PUNCTUATION.to_vec(),
        }
    }
}

impl HyphenatorOptions {
    /// Whether a hyphen may follow a fragment of `fragment_len` characters
    /// in a word of `word_len` characters.
    pub fn allows_break(&self, word_len: usize, fragment_len: usize) -> bool {
        word_len >= self.min_word_length
            && fragment_len >= self.min_fragment_length
            && word_len.saturating_sub(fragment_len) >= self.min_fragment_length
    }
}
