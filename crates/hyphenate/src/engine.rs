// Pattern engine seam: anything that can answer "where may this word break?"

/// Source of raw break points for single words.
///
/// `word` is a bare word: no whitespace, no surrounding punctuation, no
/// compound separators. The result is a list of strictly increasing byte
/// offsets into `word`, each on a character boundary, where a hyphen may
/// be inserted. Offsets that violate this are ignored by the caller rather
/// than trusted.
pub trait PatternEngine {
    fn breakpoints(&self, word: &str) -> Vec<usize>;
}

impl<T: PatternEngine + ?Sized> PatternEngine for &T {
    fn breakpoints(&self, word: &str) -> Vec<usize> {
        (**self).breakpoints(word)
    }
}

impl<T: PatternEngine + ?Sized> PatternEngine for Box<T> {
    fn breakpoints(&self, word: &str) -> Vec<usize> {
        (**self).breakpoints(word)
    }
}

impl<T: PatternEngine + ?Sized> PatternEngine for std::sync::Arc<T> {
    fn breakpoints(&self, word: &str) -> Vec<usize> {
        (**self).breakpoints(word)
    }
}

#[cfg(feature = "patterns")]
impl PatternEngine for hyphenate_patterns::Patterns {
    fn breakpoints(&self, word: &str) -> Vec<usize> {
        hyphenate_patterns::Patterns::breakpoints(self, word)
    }
}
