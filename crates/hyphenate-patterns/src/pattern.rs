// Single TeX pattern compilation: "hy3p" -> chars [h, y, p], levels [0, 0, 3, 0].

use hyphenate_core::character::simple_lower;

/// A compiled Liang pattern.
///
/// `levels[i]` is the level of the gap before `chars[i]`; the final entry is
/// the gap after the last character, so `levels.len() == chars.len() + 1`.
/// Odd levels allow a break, even levels forbid one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub chars: Vec<char>,
    pub levels: Vec<u8>,
}

/// Why a pattern token could not be compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternDefect {
    /// The token holds digits only.
    NoLetters,
    /// Two digits in a row, e.g. `a12b`.
    ConsecutiveDigits,
}

impl PatternDefect {
    pub fn describe(self) -> &'static str {
        match self {
            PatternDefect::NoLetters => "pattern has no letters",
            PatternDefect::ConsecutiveDigits => "pattern has two consecutive digits",
        }
    }
}

/// Compile a TeX pattern token.
///
/// Letters are lowercased one-to-one so a pattern lines up with words
/// lowered the same way. `.` is kept as an ordinary character and marks a
/// word edge when matched against a delimited word.
pub fn compile_pattern(token: &str) -> Result<Pattern, PatternDefect> {
    let mut chars = Vec::with_capacity(token.len());
    let mut levels = Vec::with_capacity(token.len() + 1);
    let mut pending: Option<u8> = None;

    for c in token.chars() {
        if let Some(d) = c.to_digit(10) {
            if pending.is_some() {
                return Err(PatternDefect::ConsecutiveDigits);
            }
            pending = Some(d as u8);
        } else {
            levels.push(pending.take().unwrap_or(0));
            chars.push(simple_lower(c));
        }
    }
    levels.push(pending.unwrap_or(0));

    if chars.is_empty() {
        return Err(PatternDefect::NoLetters);
    }
    Ok(Pattern { chars, levels })
}

/// An exception word: the lowercase word and the character offsets where it
/// breaks, e.g. `as-so-ciate` -> `("associate", [2, 4])`.
pub fn parse_exception(token: &str) -> Option<(String, Vec<usize>)> {
    let mut word = String::with_capacity(token.len());
    let mut breaks = Vec::new();
    let mut count = 0usize;

    for c in token.chars() {
        if c == '-' {
            if count > 0 && breaks.last() != Some(&count) {
                breaks.push(count);
            }
        } else {
            word.push(simple_lower(c));
            count += 1;
        }
    }

    if word.is_empty() {
        return None;
    }
    breaks.retain(|&b| b < count);
    Some((word, breaks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_interior_digit() {
        let pat = compile_pattern("hy3p").unwrap();
        assert_eq!(pat.chars, ['h', 'y', 'p']);
        assert_eq!(pat.levels, [0, 0, 3, 0]);
    }

    #[test]
    fn compile_leading_and_trailing_digits() {
        let pat = compile_pattern("2ph").unwrap();
        assert_eq!(pat.chars, ['p', 'h']);
        assert_eq!(pat.levels, [2, 0, 0]);

        let pat = compile_pattern("4ism.").unwrap();
        assert_eq!(pat.chars, ['i', 's', 'm', '.']);
        assert_eq!(pat.levels, [4, 0, 0, 0, 0]);

        let pat = compile_pattern("ab1").unwrap();
        assert_eq!(pat.levels, [0, 0, 1]);
    }

    #[test]
    fn compile_word_edge() {
        let pat = compile_pattern(".ex5am").unwrap();
        assert_eq!(pat.chars, ['.', 'e', 'x', 'a', 'm']);
        assert_eq!(pat.levels, [0, 0, 0, 5, 0, 0]);
    }

    #[test]
    fn compile_non_ascii() {
        let pat = compile_pattern("\u{00E4}1t").unwrap();
        assert_eq!(pat.chars, ['\u{00E4}', 't']);
        assert_eq!(pat.levels, [0, 1, 0]);
    }

    #[test]
    fn compile_lowercases() {
        let pat = compile_pattern("HY3P").unwrap();
        assert_eq!(pat.chars, ['h', 'y', 'p']);
    }

    #[test]
    fn levels_always_one_longer() {
        for tok in ["a", "1a", "a1", "1a1", "a1b2c3", ".a.", "ab"] {
            let pat = compile_pattern(tok).unwrap();
            assert_eq!(pat.levels.len(), pat.chars.len() + 1, "{tok}");
        }
    }

    #[test]
    fn reject_digits_only() {
        assert_eq!(compile_pattern("12"), Err(PatternDefect::ConsecutiveDigits));
        assert_eq!(compile_pattern("3"), Err(PatternDefect::NoLetters));
        assert_eq!(compile_pattern(""), Err(PatternDefect::NoLetters));
    }

    #[test]
    fn reject_consecutive_digits() {
        assert_eq!(
            compile_pattern("a12b"),
            Err(PatternDefect::ConsecutiveDigits)
        );
    }

    #[test]
    fn exception_breaks() {
        assert_eq!(
            parse_exception("as-so-ciate"),
            Some(("associate".to_string(), vec![2, 4]))
        );
        assert_eq!(
            parse_exception("Ta-ble"),
            Some(("table".to_string(), vec![2]))
        );
        assert_eq!(parse_exception("present"), Some(("present".to_string(), vec![])));
    }

    #[test]
    fn exception_ignores_edge_and_doubled_hyphens() {
        assert_eq!(
            parse_exception("-ab--cd-"),
            Some(("abcd".to_string(), vec![2]))
        );
        assert_eq!(parse_exception("---"), None);
    }
}
