// Sub-word splitting on internal hyphen-like separators.

/// One segment of a word and the separator that followed it.
///
/// The last segment of a word has an empty `sep`. Concatenating
/// `word + sep` for every segment reproduces the original word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubWord<'a> {
    pub word: &'a str,
    pub sep: &'a str,
}

impl<'a> SubWord<'a> {
    pub fn new(word: &'a str, sep: &'a str) -> Self {
        Self { word, sep }
    }
}

/// Split `word` at every character found in `separators`.
///
/// Each separator closes the current sub-word and is recorded with it, so
/// `"part-time"` becomes `[("part", "-"), ("time", "")]`. Leading, trailing
/// and doubled separators yield empty sub-words rather than being dropped.
/// The result always holds at least one entry.
pub fn sub_words<'a>(word: &'a str, separators: &[char]) -> Vec<SubWord<'a>> {
    let mut out = Vec::new();
    let mut start = 0;

    for (pos, c) in word.char_indices() {
        if !separators.contains(&c) {
            continue;
        }
        let end = pos + c.len_utf8();
        out.push(SubWord::new(&word[start..pos], &word[pos..end]));
        start = end;
    }

    out.push(SubWord::new(&word[start..], ""));
    out
}
