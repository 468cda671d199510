// hyphenate-cli: shared utilities for the `hyphenate` binary.

pub mod config;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Environment variable listing directories to search for pattern files.
pub const PATTERN_PATH_ENV: &str = "HYPHENATE_PATTERN_PATH";

/// File name used for a language tag, e.g. `en-us` -> `hyph-en-us.pat.txt`.
pub fn pattern_file_name(tag: &str) -> String {
    format!("hyph-{tag}.pat.txt")
}

/// Resolve the `--patterns` argument to a file.
///
/// Search order:
/// 1. the argument itself, if it names an existing file
/// 2. `hyph-<tag>.pat.txt` in each directory of `HYPHENATE_PATTERN_PATH`
/// 3. `hyph-<tag>.pat.txt` in the current working directory
pub fn resolve_patterns(arg: &str) -> Result<PathBuf> {
    let dirs = search_dirs(std::env::var_os(PATTERN_PATH_ENV));
    resolve_patterns_in(arg, &dirs)
}

/// Directories searched for a language tag.
pub fn search_dirs(env_value: Option<OsString>) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = env_value
        .map(|v| std::env::split_paths(&v).filter(|p| !p.as_os_str().is_empty()).collect())
        .unwrap_or_default();
    dirs.push(PathBuf::from("."));
    dirs
}

/// [`resolve_patterns`] with an explicit directory list.
pub fn resolve_patterns_in(arg: &str, dirs: &[PathBuf]) -> Result<PathBuf> {
    let direct = Path::new(arg);
    if direct.is_file() {
        return Ok(direct.to_path_buf());
    }

    let name = pattern_file_name(arg);
    for dir in dirs {
        let candidate = dir.join(&name);
        if candidate.is_file() {
            log::info!("using patterns {} for {arg:?}", candidate.display());
            return Ok(candidate);
        }
    }

    bail!(
        "no pattern file {arg:?} and no {name} in any of the search paths:\n{}",
        dirs.iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    )
}

/// Map `-v` counts to a log filter. `RUST_LOG` still takes precedence.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the process logger unless `quiet` is set.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(verbose)))
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_pattern_file_name() {
        assert_eq!(pattern_file_name("en-us"), "hyph-en-us.pat.txt");
    }

    #[test]
    fn test_resolve_direct_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.pat");
        fs::write(&path, "1na").unwrap();
        let arg = path.to_str().unwrap();
        assert_eq!(resolve_patterns_in(arg, &[]).unwrap(), path);
    }

    #[test]
    fn test_resolve_language_tag_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(second.path().join("hyph-de.pat.txt"), "1na").unwrap();
        fs::write(second.path().join("hyph-fi.pat.txt"), "1na").unwrap();
        fs::write(first.path().join("hyph-fi.pat.txt"), "1na").unwrap();

        let dirs = [first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(
            resolve_patterns_in("de", &dirs).unwrap(),
            second.path().join("hyph-de.pat.txt")
        );
        assert_eq!(
            resolve_patterns_in("fi", &dirs).unwrap(),
            first.path().join("hyph-fi.pat.txt")
        );
    }

    #[test]
    fn test_resolve_missing_lists_search_paths() {
        let dir = TempDir::new().unwrap();
        let dirs = [dir.path().to_path_buf()];
        let err = resolve_patterns_in("xx", &dirs).unwrap_err().to_string();
        assert!(err.contains("hyph-xx.pat.txt"));
        assert!(err.contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_search_dirs() {
        assert_eq!(search_dirs(None), [PathBuf::from(".")]);

        let joined = std::env::join_paths(["/a", "/b"]).unwrap();
        assert_eq!(
            search_dirs(Some(joined)),
            [PathBuf::from("/a"), PathBuf::from("/b"), PathBuf::from(".")]
        );
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(9), "trace");
    }
}
