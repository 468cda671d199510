// Hyphenator -- text-level pipeline
//
// text -> outer whitespace -> fields -> sub-words -> punctuation trim
//      -> custom override, or engine break points + placement rules
//      -> reassembly in reverse order

pub mod custom;
pub mod placement;

#[cfg(feature = "patterns")]
use std::fs::File;
#[cfg(feature = "patterns")]
use std::io::{BufReader, Read};
#[cfg(feature = "patterns")]
use std::path::Path;

use hyphenate_core::character::char_len;
use hyphenate_core::{Fields, split_fields, sub_words, trim_affixes, trim_space};
#[cfg(feature = "patterns")]
use hyphenate_patterns::Patterns;

use crate::{HyphenateError, HyphenatorOptions, PatternEngine};
use custom::CustomOverrides;
use placement::place_hyphens;

// ---------------------------------------------------------------------------
// Hyphenator
// ---------------------------------------------------------------------------

/// Inserts a hyphen string at permissible break points in text.
///
/// Built once per language and hyphen string, then used read-only; it is
/// `Send + Sync` whenever its engine is.
#[derive(Debug, Clone)]
pub struct Hyphenator<E> {
    engine: E,
    hyphen: String,
    custom: CustomOverrides,
    options: HyphenatorOptions,
}

impl<E: PatternEngine> Hyphenator<E> {
    /// Create a hyphenator from an engine, the string to insert at each
    /// break, and custom overrides (`word -> fragments`).
    ///
    /// Fails with [`HyphenateError::InvalidOverride`] when an override's
    /// fragments do not spell out its word.
    pub fn new<I, K, V, F>(
        engine: E,
        hyphen: impl Into<String>,
        custom: I,
    ) -> Result<Self, HyphenateError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        let custom = CustomOverrides::new(custom)?;
        log::debug!("hyphenator created with {} custom overrides", custom.len());
        Ok(Self::with_overrides(engine, hyphen, custom))
    }

    /// Create a hyphenator from already validated overrides.
    pub fn with_overrides(engine: E, hyphen: impl Into<String>, custom: CustomOverrides) -> Self {
        Self {
            engine,
            hyphen: hyphen.into(),
            custom,
            options: HyphenatorOptions::default(),
        }
    }

    /// Replace the default thresholds and character sets.
    #[must_use]
    pub fn with_options(mut self, options: HyphenatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn hyphen(&self) -> &str {
        &self.hyphen
    }

    pub fn options(&self) -> &HyphenatorOptions {
        &self.options
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn custom(&self) -> &CustomOverrides {
        &self.custom
    }

    /// Hyphenate `text`.
    ///
    /// Leading and trailing whitespace is kept exactly; runs of whitespace
    /// between words come out as a single space. Use
    /// [`Hyphenator::hyphenate_exact`] to keep those runs too.
    pub fn hyphenate(&self, text: &str) -> String {
        let padded = trim_space(text);
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        out.push_str(padded.leading);
        for (i, word) in split_fields(padded.inner).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&self.hyphenate_word(word));
        }
        out.push_str(padded.trailing);
        out
    }

    /// Hyphenate `text`, keeping every whitespace run unchanged.
    pub fn hyphenate_exact(&self, text: &str) -> String {
        Fields::new(text).map_words(|word| self.hyphenate_word(word))
    }

    /// Hyphenate one whitespace-free field.
    pub fn hyphenate_word(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len() + word.len() / 4);
        for sub in sub_words(word, &self.options.separators) {
            let trimmed = trim_affixes(sub.word, &self.options.punctuation);
            out.push_str(&trimmed.wrap(&self.hyphenate_core(trimmed.core)));
            out.push_str(sub.sep);
        }
        out
    }

    fn hyphenate_core(&self, core: &str) -> String {
        if let Some(custom) = self.custom.apply(core, &self.hyphen) {
            return custom;
        }
        // No break could pass the length rules, so the engine is not asked.
        if char_len(core) < self.options.min_word_length {
            return core.to_string();
        }
        let breakpoints = self.engine.breakpoints(core);
        place_hyphens(core, &breakpoints, &self.hyphen, &self.options)
    }
}

#[cfg(feature = "patterns")]
impl Hyphenator<Patterns> {
    /// Load patterns from `reader` and build a hyphenator over them.
    pub fn from_reader<R, I, K, V, F>(
        reader: R,
        hyphen: impl Into<String>,
        custom: I,
    ) -> Result<Self, HyphenateError>
    where
        R: Read,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        let patterns = Patterns::from_reader(reader)?;
        Self::new(patterns, hyphen, custom)
    }

    /// Load the pattern file at `path` and build a hyphenator over it.
    ///
    /// Relative paths are resolved against the current directory first, so
    /// errors name the absolute path that was tried.
    pub fn open<P, I, K, V, F>(
        path: P,
        hyphen: impl Into<String>,
        custom: I,
    ) -> Result<Self, HyphenateError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        let path = path.as_ref();
        let path = std::path::absolute(path).map_err(|source| HyphenateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = File::open(&path).map_err(|source| HyphenateError::Io {
            path: path.clone(),
            source,
        })?;
        log::debug!("loading hyphenation patterns from {}", path.display());
        Self::from_reader(BufReader::new(file), hyphen, custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
