// Loaded pattern set for one language: trie, exception list and margins.

use std::io::Read;
use std::str::FromStr;

use hashbrown::HashMap;
use hyphenate_core::character::simple_lower;

use crate::PatternError;
use crate::parser::{self, PatternFile};
use crate::trie::PatternTrie;

/// Minimum characters before the first break.
pub const DEFAULT_LEFT_MIN: usize = 2;
/// Minimum characters after the last break.
pub const DEFAULT_RIGHT_MIN: usize = 3;

/// A compiled set of hyphenation patterns and exceptions for one language.
///
/// Immutable once built; lookups take `&self` and allocate only the
/// returned breakpoint list, so a `Patterns` can be shared across threads.
#[derive(Debug, Clone)]
pub struct Patterns {
    trie: PatternTrie,
    /// Lowercase word -> character offsets of its breaks.
    exceptions: HashMap<String, Vec<usize>>,
    left_min: usize,
    right_min: usize,
}

impl Patterns {
    fn from_file(file: PatternFile) -> Self {
        let mut trie = PatternTrie::new();
        for pattern in &file.patterns {
            trie.insert(pattern);
        }
        let mut patterns = Self {
            trie,
            exceptions: HashMap::new(),
            left_min: DEFAULT_LEFT_MIN,
            right_min: DEFAULT_RIGHT_MIN,
        };
        patterns.extend_exceptions(file.exceptions);
        log::debug!(
            "loaded {} hyphenation patterns and {} exceptions",
            patterns.pattern_count(),
            patterns.exception_count()
        );
        patterns
    }

    /// Read and parse a pattern source from a byte stream.
    ///
    /// The stream must be UTF-8. Read failures surface as
    /// [`PatternError::Io`], encoding failures as
    /// [`PatternError::InvalidUtf8`].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, PatternError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let source = String::from_utf8(bytes).map_err(|e| PatternError::InvalidUtf8 {
            offset: e.utf8_error().valid_up_to(),
        })?;
        source.parse()
    }

    /// Set the minimum number of characters kept before the first break
    /// and after the last one.
    #[must_use]
    pub fn with_margins(mut self, left_min: usize, right_min: usize) -> Self {
        self.left_min = left_min;
        self.right_min = right_min;
        self
    }

    /// Current `(left_min, right_min)` margins.
    pub fn margins(&self) -> (usize, usize) {
        (self.left_min, self.right_min)
    }

    /// Add exception words written with hyphens at their break points,
    /// e.g. `"ta-ble"`. An exception replaces pattern output for its word.
    ///
    /// Returns an error naming the first token that holds no letters.
    pub fn add_exceptions<I, S>(&mut self, words: I) -> Result<(), PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for word in words {
            let word = word.as_ref();
            let exception = crate::pattern::parse_exception(word).ok_or_else(|| {
                PatternError::UnexpectedToken {
                    line: 0,
                    token: word.to_string(),
                }
            })?;
            parsed.push(exception);
        }
        self.extend_exceptions(parsed);
        Ok(())
    }

    fn extend_exceptions(&mut self, exceptions: Vec<(String, Vec<usize>)>) {
        for (word, breaks) in exceptions {
            self.exceptions.insert(word, breaks);
        }
    }

    /// Number of distinct patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.trie.len()
    }

    /// Number of exception words loaded.
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Character offsets at which `word` may be broken.
    ///
    /// Offset `j` means "between the `j-1`th and `j`th character". Offsets
    /// are strictly increasing and respect the margins.
    pub fn char_breakpoints(&self, word: &str) -> Vec<usize> {
        let lower: Vec<char> = word.chars().map(simple_lower).collect();
        let n = lower.len();

        let lo = self.left_min.max(1);
        let hi = n.saturating_sub(self.right_min.max(1));
        if lo > hi {
            return Vec::new();
        }

        let key: String = lower.iter().collect();
        if let Some(breaks) = self.exceptions.get(&key) {
            return breaks
                .iter()
                .copied()
                .filter(|b| (lo..=hi).contains(b))
                .collect();
        }

        // ".word." -- the dots let edge patterns such as ".ex5am" anchor.
        let mut delimited = Vec::with_capacity(n + 2);
        delimited.push('.');
        delimited.extend_from_slice(&lower);
        delimited.push('.');

        let mut levels = vec![0u8; delimited.len() + 1];
        for start in 0..delimited.len() {
            self.trie.apply_at(&delimited, start, &mut levels);
        }

        // levels[i] is the gap before delimited[i]; the gap before word
        // character j is levels[j + 1].
        (lo..=hi).filter(|&j| levels[j + 1] % 2 == 1).collect()
    }

    /// Byte offsets into `word` at which it may be broken.
    ///
    /// Same positions as [`Patterns::char_breakpoints`], translated so they
    /// can slice `word` directly; every offset is a character boundary.
    pub fn breakpoints(&self, word: &str) -> Vec<usize> {
        let breaks = self.char_breakpoints(word);
        if breaks.is_empty() {
            return breaks;
        }
        let starts: Vec<usize> = word.char_indices().map(|(pos, _)| pos).collect();
        breaks
            .into_iter()
            .filter_map(|j| starts.get(j).copied())
            .collect()
    }
}

impl FromStr for Patterns {
    type Err = PatternError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_file(parser::parse(source)?))
    }
}
