// Character classification and counting helpers shared by every stage of
// the hyphenation pipeline.

// ---------------------------------------------------------------------------
// Default character sets
// ---------------------------------------------------------------------------

/// Soft hyphen (U+00AD). Invisible unless a renderer breaks the line at it.
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// Characters that read as a hyphen: hyphen-minus, en dash, em dash and the
/// soft hyphen. A hyphen is never inserted next to one of these.
pub const HYPHENS: &[char] = &['-', '\u{2013}', '\u{2014}', SOFT_HYPHEN];

/// Characters that split a word into independently hyphenated sub-words:
/// every hyphen plus the forward slash.
pub const WORD_SEPARATORS: &[char] = &['-', '\u{2013}', '\u{2014}', SOFT_HYPHEN, '/'];

/// Grammatical punctuation trimmed off either end of a sub-word before it is
/// measured or hyphenated.
pub const PUNCTUATION: &[char] = &[',', '.', ';', ':', '?', '!', '(', ')', '#'];

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a character is whitespace.
///
/// Recognizes the Unicode White_Space set: the ASCII controls TAB through CR,
/// SPACE, NEL, NO-BREAK SPACE and the space separators in the general
/// punctuation and CJK blocks.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// Check whether `s` starts with a character from `set`.
pub fn starts_with_any(s: &str, set: &[char]) -> bool {
    s.chars().next().is_some_and(|c| set.contains(&c))
}

/// Check whether `s` ends with a character from `set`.
pub fn ends_with_any(s: &str, set: &[char]) -> bool {
    s.chars().next_back().is_some_and(|c| set.contains(&c))
}

// ---------------------------------------------------------------------------
// Counting and case
// ---------------------------------------------------------------------------

/// Length of `s` in Unicode scalar values, not bytes.
///
/// Every minimum-length rule is measured with this so that `"äiti"` counts
/// as four characters even though it is five bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the `n`th character of `s`, or `s.len()` when `s` has
/// exactly `n` characters. Returns `None` when `s` is shorter than `n`.
pub fn byte_offset_of_char(s: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    match s.char_indices().nth(n) {
        Some((pos, _)) => Some(pos),
        None if char_len(s) == n => Some(s.len()),
        None => None,
    }
}

/// Convert a character to its simple lowercase equivalent.
///
/// Characters whose lowercase form expands to several characters map to the
/// first one, so a lowered word keeps its character count.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}
