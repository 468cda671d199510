// Whitespace splitting: field decomposition, outer-whitespace trimming and
// word replacement that rebuilds the original whitespace byte for byte.

use crate::character::is_whitespace;
use crate::FieldsError;

// ---------------------------------------------------------------------------
// Field decomposition
// ---------------------------------------------------------------------------

/// A string split into alternating whitespace runs and non-whitespace words.
///
/// Interleaving `words` and `seps`, starting with a separator when
/// `prefixed` is set and with a word otherwise, reproduces the original
/// string exactly. The two lists differ in length by at most one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields<'a> {
    /// Whether the string started with whitespace.
    pub prefixed: bool,
    /// Maximal whitespace runs, in order.
    pub seps: Vec<&'a str>,
    /// Maximal non-whitespace runs, in order.
    pub words: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Split `s` into whitespace runs and words.
    ///
    /// The empty string yields no words, no separators and
    /// `prefixed == false`.
    pub fn new(s: &'a str) -> Self {
        let mut fields = Fields::default();
        let Some(first) = s.chars().next() else {
            return fields;
        };

        fields.prefixed = is_whitespace(first);
        let mut in_word = !fields.prefixed;
        let mut start = 0;

        for (pos, c) in s.char_indices() {
            match (is_whitespace(c), in_word) {
                (true, true) => {
                    fields.words.push(&s[start..pos]);
                    in_word = false;
                    start = pos;
                }
                (false, false) => {
                    fields.seps.push(&s[start..pos]);
                    in_word = true;
                    start = pos;
                }
                _ => {}
            }
        }

        if in_word {
            fields.words.push(&s[start..]);
        } else {
            fields.seps.push(&s[start..]);
        }
        fields
    }

    /// Rebuild the string with `new_words` in place of the original words,
    /// keeping every whitespace run untouched.
    ///
    /// Fails with [`FieldsError::WordCountMismatch`] when `new_words` does
    /// not have exactly one entry per original word.
    pub fn replace_words<S: AsRef<str>>(&self, new_words: &[S]) -> Result<String, FieldsError> {
        if new_words.len() != self.words.len() {
            return Err(FieldsError::WordCountMismatch {
                got: new_words.len(),
                wanted: self.words.len(),
            });
        }
        Ok(self.interleave(new_words.iter().map(AsRef::as_ref)))
    }

    /// Rebuild the string with every word passed through `f`.
    ///
    /// Infallible counterpart of [`Fields::replace_words`]: the word count
    /// always matches because each original word produces one replacement.
    pub fn map_words<F>(&self, mut f: F) -> String
    where
        F: FnMut(&'a str) -> String,
    {
        let new_words: Vec<String> = self.words.iter().map(|&w| f(w)).collect();
        self.interleave(new_words.iter().map(String::as_str))
    }

    fn interleave<'w>(&self, new_words: impl Iterator<Item = &'w str>) -> String {
        let capacity = self.seps.iter().map(|s| s.len()).sum::<usize>()
            + self.words.iter().map(|w| w.len()).sum::<usize>();
        let mut out = String::with_capacity(capacity);
        let mut seps = self.seps.iter();

        if self.prefixed {
            if let Some(sep) = seps.next() {
                out.push_str(sep);
            }
        }
        for word in new_words {
            out.push_str(word);
            if let Some(sep) = seps.next() {
                out.push_str(sep);
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Outer whitespace
// ---------------------------------------------------------------------------

/// Text with its leading and trailing whitespace cut off and kept.
///
/// `leading + inner + trailing` is the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padded<'a> {
    pub leading: &'a str,
    pub inner: &'a str,
    pub trailing: &'a str,
}

/// Cut leading and trailing whitespace off `s`, returning all three pieces.
///
/// A string made only of whitespace ends up entirely in `leading`.
pub fn trim_space(s: &str) -> Padded<'_> {
    let rest = s.trim_start_matches(is_whitespace);
    let leading = &s[..s.len() - rest.len()];
    let inner = rest.trim_end_matches(is_whitespace);
    let trailing = &rest[inner.len()..];
    Padded {
        leading,
        inner,
        trailing,
    }
}

/// Iterate over the non-whitespace fields of `s`, discarding the whitespace
/// between them. Runs of whitespace count as a single delimiter.
pub fn split_fields(s: &str) -> impl Iterator<Item = &str> {
    s.split(is_whitespace).filter(|f| !f.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(s: &str, prefixed: bool, seps: &[&str], words: &[&str]) {
        let f = Fields::new(s);
        assert_eq!(f.prefixed, prefixed, "prefixed for {s:?}");
        assert_eq!(f.seps, seps, "seps for {s:?}");
        assert_eq!(f.words, words, "words for {s:?}");
    }

    #[test]
    fn fields_simple() {
        check(
            "hello there friendo",
            false,
            &[" ", " "],
            &["hello", "there", "friendo"],
        );
    }

    #[test]
    fn fields_leading_and_trailing_space() {
        check(
            "   hello  there friendo ",
            true,
            &["   ", "  ", " ", " "],
            &["hello", "there", "friendo"],
        );
    }

    #[test]
    fn fields_mixed_whitespace() {
        check(
            "   hello \t there \nfriendo ",
            true,
            &["   ", " \t ", " \n", " "],
            &["hello", "there", "friendo"],
        );
    }

    #[test]
    fn fields_only_space() {
        check(" ", true, &[" "], &[]);
    }

    #[test]
    fn fields_single_word() {
        check("a", false, &[], &["a"]);
    }

    #[test]
    fn fields_empty() {
        check("", false, &[], &[]);
    }

    #[test]
    fn fields_unicode_whitespace() {
        check(
            "k\u{00E4}\u{00E4}k\u{3000}\u{00A0}yy",
            false,
            &["\u{3000}\u{00A0}"],
            &["k\u{00E4}\u{00E4}k", "yy"],
        );
    }

    #[test]
    fn fields_lengths_differ_by_at_most_one() {
        for s in ["a b", " a b", "a b ", " a b ", "", " ", "ab"] {
            let f = Fields::new(s);
            assert!(f.seps.len().abs_diff(f.words.len()) <= 1, "{s:?}");
        }
    }

    #[test]
    fn replace_words_keeps_whitespace() {
        let cases: &[(&str, &str, &[&str])] = &[
            (
                "hello there my friendy friend",
                "howdy there my friendly friends",
                &["howdy", "there", "my", "friendly", "friends"],
            ),
            (
                "hello  there my friendy  friend",
                "howdy  there my friendly  friends",
                &["howdy", "there", "my", "friendly", "friends"],
            ),
            (
                "  hello  there my friend  ",
                "  howdy  there my friends  ",
                &["howdy", "there", "my", "friends"],
            ),
            ("\t\n", "\t\n", &[]),
        ];
        for &(s, want, words) in cases {
            let got = Fields::new(s).replace_words(words).unwrap();
            assert_eq!(got, want);
        }
    }

    #[test]
    fn replace_words_identity_round_trip() {
        for s in ["", " ", "a", " a", "a ", "  a \u{2003} b\n\nc\t"] {
            let f = Fields::new(s);
            assert_eq!(f.replace_words(&f.words).unwrap(), s);
        }
    }

    #[test]
    fn replace_words_count_mismatch() {
        let f = Fields::new("one two three");
        let err = f.replace_words(&["one", "two"]).unwrap_err();
        assert_eq!(err, FieldsError::WordCountMismatch { got: 2, wanted: 3 });
        assert_eq!(
            err.to_string(),
            "mismatch in number of replacement words: got 2, wanted 3"
        );

        let err = f.replace_words(&["a", "b", "c", "d"]).unwrap_err();
        assert_eq!(err, FieldsError::WordCountMismatch { got: 4, wanted: 3 });
    }

    #[test]
    fn map_words_uppercases() {
        let f = Fields::new(" ab\tcd ");
        assert_eq!(f.map_words(|w| w.to_uppercase()), " AB\tCD ");
    }

    #[test]
    fn trim_space_pieces() {
        let p = trim_space("  hello world\n");
        assert_eq!(p.leading, "  ");
        assert_eq!(p.inner, "hello world");
        assert_eq!(p.trailing, "\n");

        let p = trim_space("word");
        assert_eq!((p.leading, p.inner, p.trailing), ("", "word", ""));

        let p = trim_space(" \t ");
        assert_eq!((p.leading, p.inner, p.trailing), (" \t ", "", ""));

        let p = trim_space("");
        assert_eq!((p.leading, p.inner, p.trailing), ("", "", ""));
    }

    #[test]
    fn trim_space_round_trip() {
        for s in ["", " ", "a", "\u{3000}a b\u{00A0}", "\n\nx\n", " a  b "] {
            let p = trim_space(s);
            assert_eq!(format!("{}{}{}", p.leading, p.inner, p.trailing), s);
        }
    }

    #[test]
    fn split_fields_discards_runs() {
        let got: Vec<&str> = split_fields("a  b\t\nc").collect();
        assert_eq!(got, ["a", "b", "c"]);
        assert_eq!(split_fields("   ").count(), 0);
        assert_eq!(split_fields("").count(), 0);
    }
}
