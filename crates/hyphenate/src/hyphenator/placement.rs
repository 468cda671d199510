// Hyphen placement: turn raw engine break points into the hyphenated word,
// keeping only the breaks the length rules allow.

use hyphenate_core::character::{char_len, ends_with_any, starts_with_any};

use crate::HyphenatorOptions;

/// Insert `hyphen` into `core` at the break points `options` allows.
///
/// `core` is one punctuation-trimmed sub-word and `breakpoints` are byte
/// offsets into it. Breaks are decided left to right:
///
/// - a fragment that already ends in a hyphen character gets no second one;
/// - the fragment length is the number of characters seen so far, except
///   for a fragment that starts with a hyphen character, which counts only
///   its own characters after that hyphen;
/// - [`HyphenatorOptions::allows_break`] decides with the whole core's length.
pub fn place_hyphens(
    core: &str,
    breakpoints: &[usize],
    hyphen: &str,
    options: &HyphenatorOptions,
) -> String {
    let total = char_len(core);
    let parts = split_at_breakpoints(core, breakpoints);
    let mut out = String::with_capacity(core.len() + hyphen.len() * parts.len());
    let mut seen = 0;

    for part in parts {
        out.push_str(part);
        seen += char_len(part);

        if ends_with_any(part, &options.hyphens) {
            continue;
        }
        let part_len = if starts_with_any(part, &options.hyphens) {
            char_len(part) - 1
        } else {
            seen
        };
        if options.allows_break(total, part_len) {
            out.push_str(hyphen);
        }
    }
    out
}

/// Slice `word` at `breakpoints`, dropping an empty tail. Offsets that do
/// not advance, run past the end, or split a character are skipped.
fn split_at_breakpoints<'a>(word: &'a str, breakpoints: &[usize]) -> Vec<&'a str> {
    let mut parts = Vec::with_capacity(breakpoints.len() + 1);
    let mut pos = 0;
    for &bp in breakpoints {
        if bp <= pos || bp > word.len() || !word.is_char_boundary(bp) {
            log::trace!("ignoring breakpoint {bp} in {word:?}");
            continue;
        }
        parts.push(&word[pos..bp]);
        pos = bp;
    }
    if pos < word.len() {
        parts.push(&word[pos..]);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_gap(word: &str) -> Vec<usize> {
        word.char_indices().skip(1).map(|(pos, _)| pos).collect()
    }

    fn place(core: &str, breakpoints: &[usize]) -> String {
        place_hyphens(core, breakpoints, "-", &HyphenatorOptions::default())
    }

    #[test]
    fn split_parts() {
        assert_eq!(split_at_breakpoints("abcdef", &[2, 4]), ["ab", "cd", "ef"]);
        assert_eq!(split_at_breakpoints("abcdef", &[]), ["abcdef"]);
        assert_eq!(split_at_breakpoints("abcdef", &[6]), ["abcdef"]);
        assert!(split_at_breakpoints("", &[]).is_empty());
    }

    #[test]
    fn split_skips_bad_offsets() {
        assert_eq!(split_at_breakpoints("abcdef", &[0, 3, 3, 2, 9]), ["abc", "def"]);
        // byte 1 is inside 'ä'
        assert_eq!(split_at_breakpoints("\u{00E4}iti", &[1, 3]), ["\u{00E4}i", "ti"]);
    }

    #[test]
    fn every_gap_respects_fragment_minimum() {
        assert_eq!(
            place("hyphenation", &every_gap("hyphenation")),
            "hy-p-h-e-n-a-t-i-on"
        );
        assert_eq!(place("planet", &every_gap("planet")), "pl-a-n-et");
    }

    #[test]
    fn short_words_untouched() {
        for word in ["", "a", "ab", "hello", "\u{00E4}\u{00E4}\u{00E4}\u{00E4}\u{00E4}"] {
            assert_eq!(place(word, &every_gap(word)), word);
        }
    }

    #[test]
    fn multibyte_lengths() {
        let word = "\u{00E4}iti\u{00E4}ni";
        assert_eq!(
            place(word, &every_gap(word)),
            "\u{00E4}i-t-i-\u{00E4}-ni"
        );
    }

    #[test]
    fn invalid_breakpoints_are_ignored() {
        let word = "\u{00E4}iti\u{00E4}ni";
        assert_eq!(place(word, &[1, 3, 3, 2, 100]), "\u{00E4}i-ti\u{00E4}ni");
    }

    #[test]
    fn no_hyphen_after_existing_hyphen() {
        assert_eq!(place("co-operation", &[3, 5]), "co-op-eration");
        assert_eq!(place("co\u{00AD}operation", &[4, 6]), "co\u{00AD}op-eration");
    }

    #[test]
    fn fragment_after_hyphen_counts_alone() {
        // "-c" is one character after its hyphen: too short to take a break
        let opts = HyphenatorOptions::default();
        assert_eq!(place_hyphens("ab-cdefgh", &[2, 4], "=", &opts), "ab=-cdefgh");
        // "-cde" is three: long enough
        assert_eq!(place_hyphens("ab-cdefgh", &[2, 6], "=", &opts), "ab=-cde=fgh");
    }

    #[test]
    fn custom_hyphen_string() {
        assert_eq!(
            place_hyphens("planet", &[2, 4], "\u{00AD}", &HyphenatorOptions::default()),
            "pl\u{00AD}an\u{00AD}et"
        );
        assert_eq!(
            place_hyphens("planet", &[2], "<wbr>", &HyphenatorOptions::default()),
            "pl<wbr>anet"
        );
    }

    #[test]
    fn custom_thresholds() {
        let opts = HyphenatorOptions {
            min_word_length: 4,
            min_fragment_length: 1,
            ..Default::default()
        };
        assert_eq!(place_hyphens("abcd", &[1, 2, 3], "-", &opts), "a-b-c-d");
    }
}
