// Custom hyphenation overrides: caller-supplied splits for specific words
// that take precedence over the pattern engine.

use hashbrown::HashMap;
use hyphenate_core::character::{byte_offset_of_char, char_len};

use crate::HyphenateError;

/// Word-specific hyphenations, keyed by lowercase word.
///
/// Each entry stores the character length of every fragment, so an
/// override written in lowercase applies to any casing of the word and the
/// output keeps the casing of the text.
#[derive(Debug, Clone, Default)]
pub struct CustomOverrides {
    entries: HashMap<String, Vec<usize>>,
}

impl CustomOverrides {
    /// Validate and store overrides given as `word -> fragments`.
    ///
    /// Fails when a word or a fragment is empty, or when the fragments do
    /// not add up to the (lowercased) word's length.
    pub fn new<I, K, V, F>(entries: I) -> Result<Self, HyphenateError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        let mut map = HashMap::new();
        for (word, fragments) in entries {
            let word = word.as_ref();
            let invalid = |reason| HyphenateError::InvalidOverride {
                word: word.to_string(),
                reason,
            };
            if word.is_empty() {
                return Err(invalid("word is empty"));
            }

            let key = word.to_lowercase();
            let mut lengths = Vec::new();
            for fragment in fragments {
                let n = char_len(fragment.as_ref());
                if n == 0 {
                    return Err(invalid("fragment is empty"));
                }
                lengths.push(n);
            }
            if lengths.iter().sum::<usize>() != char_len(&key) {
                return Err(invalid("fragments do not add up to the word"));
            }
            map.insert(key, lengths);
        }
        Ok(Self { entries: map })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hyphenate `word` from its override, if it has one.
    ///
    /// The word is sliced by the stored fragment lengths and the slices
    /// joined with `hyphen`. Returns `None` when there is no override, or
    /// when lowercasing changed the word's length so the fragments no
    /// longer line up with it.
    pub fn apply(&self, word: &str, hyphen: &str) -> Option<String> {
        if self.entries.is_empty() || word.is_empty() {
            return None;
        }
        let lengths = self.entries.get(&word.to_lowercase())?;
        let total: usize = lengths.iter().sum();
        if char_len(word) != total {
            log::warn!("custom hyphenation for {word:?} skipped: lowercasing changes its length");
            return None;
        }

        let mut out = String::with_capacity(word.len() + hyphen.len() * lengths.len());
        let mut rest = word;
        for (i, &n) in lengths.iter().enumerate() {
            if i > 0 {
                out.push_str(hyphen);
            }
            let end = byte_offset_of_char(rest, n).unwrap_or(rest.len());
            let (head, tail) = rest.split_at(end);
            out.push_str(head);
            rest = tail;
        }
        log::trace!("custom hyphenation {word:?} -> {out:?}");
        Some(out)
    }
}
