// Punctuation trimming: separate grammatical punctuation from a word so it
// is neither measured nor hyphenated, and can be reattached verbatim.

/// A word with its leading and trailing punctuation cut off.
///
/// `leading + core + trailing` is the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trimmed<'a> {
    pub core: &'a str,
    pub leading: &'a str,
    pub trailing: &'a str,
}

impl Trimmed<'_> {
    /// Reattach the cut punctuation around `replacement`.
    pub fn wrap(&self, replacement: &str) -> String {
        let mut out =
            String::with_capacity(self.leading.len() + replacement.len() + self.trailing.len());
        out.push_str(self.leading);
        out.push_str(replacement);
        out.push_str(self.trailing);
        out
    }
}

/// Strip characters in `cutset` from both ends of `s`.
///
/// The leading run is removed first and the trailing run is taken from what
/// remains, so a string made only of cut-set characters leaves an empty core
/// with everything in `leading`.
pub fn trim_affixes<'a>(s: &'a str, cutset: &[char]) -> Trimmed<'a> {
    let rest = s.trim_start_matches(cutset);
    let leading = &s[..s.len() - rest.len()];
    let core = rest.trim_end_matches(cutset);
    let trailing = &rest[core.len()..];
    Trimmed {
        core,
        leading,
        trailing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::PUNCTUATION;

    fn trim(s: &str) -> (&str, &str, &str) {
        let t = trim_affixes(s, PUNCTUATION);
        (t.leading, t.core, t.trailing)
    }

    #[test]
    fn plain_word() {
        assert_eq!(trim("word"), ("", "word", ""));
    }

    #[test]
    fn trailing_punctuation() {
        assert_eq!(trim("hyphenation,"), ("", "hyphenation", ","));
        assert_eq!(trim("really?!"), ("", "really", "?!"));
    }

    #[test]
    fn surrounding_punctuation() {
        assert_eq!(trim("(example)."), ("(", "example", ")."));
        assert_eq!(trim("#hashtag"), ("#", "hashtag", ""));
    }

    #[test]
    fn interior_punctuation_kept() {
        assert_eq!(trim("e.g."), ("", "e.g", "."));
        assert_eq!(trim("3:30"), ("", "3:30", ""));
    }

    #[test]
    fn only_punctuation() {
        assert_eq!(trim("..."), ("...", "", ""));
        assert_eq!(trim(""), ("", "", ""));
    }

    #[test]
    fn quotes_are_not_trimmed() {
        assert_eq!(trim("\"quoted\""), ("", "\"quoted\"", ""));
    }

    #[test]
    fn multibyte_core() {
        assert_eq!(trim("(\u{00E4}iti)"), ("(", "\u{00E4}iti", ")"));
    }

    #[test]
    fn wrap_restores_input() {
        for s in ["", ".", "word", "(word),", "?!?", "#a#", "(\u{00E4}iti)"] {
            let t = trim_affixes(s, PUNCTUATION);
            assert_eq!(t.wrap(t.core), s);
        }
    }

    #[test]
    fn wrap_replacement() {
        let t = trim_affixes("(hello),", PUNCTUATION);
        assert_eq!(t.wrap("hel-lo"), "(hel-lo),");
    }
}
