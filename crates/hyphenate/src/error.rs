use std::path::PathBuf;

/// Error type for building a [`Hyphenator`](crate::Hyphenator).
///
/// Hyphenating text never fails; every variant here is raised before the
/// first call to `hyphenate`.
#[derive(Debug, thiserror::Error)]
pub enum HyphenateError {
    #[error("cannot open pattern file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[cfg(feature = "patterns")]
    #[error(transparent)]
    Patterns(#[from] hyphenate_patterns::PatternError),
    #[error("invalid custom hyphenation for {word:?}: {reason}")]
    InvalidOverride { word: String, reason: &'static str },
}
