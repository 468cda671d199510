// Pattern file parsing.
//
// Accepts the plain hyph-utf8 `.pat.txt` layout (whitespace separated
// patterns, `%` comments) and the TeX wrappers `\patterns{...}` and
// `\hyphenation{...}`. Any other control sequence is rejected.

use crate::PatternError;
use crate::pattern::{Pattern, compile_pattern, parse_exception};

/// Everything read from one pattern source.
#[derive(Debug, Clone, Default)]
pub struct PatternFile {
    pub patterns: Vec<Pattern>,
    pub exceptions: Vec<(String, Vec<usize>)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Patterns,
    Hyphenation,
}

impl Group {
    fn command(self) -> &'static str {
        match self {
            Group::Patterns => "\\patterns",
            Group::Hyphenation => "\\hyphenation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    TopLevel,
    /// A command was read and its opening brace is expected next.
    Pending(Group, usize),
    /// Inside a group opened on the given line.
    Inside(Group, usize),
}

/// Parse pattern source text.
pub fn parse(source: &str) -> Result<PatternFile, PatternError> {
    let mut file = PatternFile::default();
    let mut state = State::TopLevel;
    let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);

    for (idx, raw_line) in source.lines().enumerate() {
        let line = idx + 1;
        let content = match raw_line.find('%') {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };

        for chunk in content.split_whitespace() {
            for token in split_braces(chunk) {
                state = step(state, token, line, &mut file)?;
            }
        }
    }

    match state {
        State::TopLevel => {}
        State::Pending(group, line) | State::Inside(group, line) => {
            return Err(PatternError::UnclosedGroup {
                command: group.command(),
                line,
            });
        }
    }

    if file.patterns.is_empty() {
        return Err(PatternError::Empty);
    }
    Ok(file)
}

fn step(
    state: State,
    token: &str,
    line: usize,
    file: &mut PatternFile,
) -> Result<State, PatternError> {
    let unexpected = || PatternError::UnexpectedToken {
        line,
        token: token.to_string(),
    };

    match (state, token) {
        (State::Pending(group, _), "{") => Ok(State::Inside(group, line)),
        (State::Pending(..), _) => Err(unexpected()),
        (State::Inside(..), "}") => Ok(State::TopLevel),
        (_, "{") | (_, "}") => Err(PatternError::UnbalancedBrace { line }),
        (State::TopLevel, cmd) if cmd.starts_with('\\') => match cmd {
            "\\patterns" => Ok(State::Pending(Group::Patterns, line)),
            "\\hyphenation" => Ok(State::Pending(Group::Hyphenation, line)),
            _ => Err(PatternError::UnknownCommand {
                line,
                command: cmd.to_string(),
            }),
        },
        (State::Inside(..), cmd) if cmd.starts_with('\\') => Err(unexpected()),
        (State::Inside(Group::Hyphenation, _), word) => {
            let exception = parse_exception(word).ok_or_else(unexpected)?;
            file.exceptions.push(exception);
            Ok(state)
        }
        (_, pattern) => {
            let compiled =
                compile_pattern(pattern).map_err(|defect| PatternError::InvalidPattern {
                    line,
                    pattern: pattern.to_string(),
                    reason: defect.describe(),
                })?;
            file.patterns.push(compiled);
            Ok(state)
        }
    }
}

/// Split a whitespace-free chunk so that `{` and `}` become tokens of their
/// own: `\patterns{` -> [`\patterns`, `{`], `a1b}` -> [`a1b`, `}`].
fn split_braces(chunk: &str) -> impl Iterator<Item = &str> {
    let mut rest = chunk;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(['{', '}']) {
            Some(0) => 1,
            Some(pos) => pos,
            None => rest.len(),
        };
        let (token, tail) = rest.split_at(end);
        rest = tail;
        Some(token)
    })
}
