// hyphenate: insert hyphens into text using TeX hyphenation patterns.
//
// Reads each FILE (or stdin when none is given) and writes the hyphenated
// text to stdout. By default every line is hyphenated on its own, with runs
// of whitespace inside a line collapsed to one space; --exact keeps all
// whitespace byte for byte.
//
// Usage:
//   hyphenate -p PATTERNS [OPTIONS] [FILE...]

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hyphenate::{Hyphenator, Patterns};
use hyphenate_cli::config::{Config, load_custom};

const SOFT_HYPHEN: &str = "\u{00AD}";

/// Insert hyphens into text using TeX hyphenation patterns
#[derive(Debug, Parser)]
#[command(name = "hyphenate", version)]
struct Cli {
    /// Pattern file, or a language tag resolved as hyph-<TAG>.pat.txt
    #[arg(short, long, value_name = "FILE|TAG", env = "HYPHENATE_PATTERNS")]
    patterns: String,

    /// String inserted at each break [default: -]
    #[arg(long, value_name = "STR", conflicts_with = "soft")]
    hyphen: Option<String>,

    /// Insert soft hyphens (U+00AD)
    #[arg(long)]
    soft: bool,

    /// JSON file of custom hyphenations: {"word": ["frag", ...]}
    #[arg(long, value_name = "FILE")]
    custom: Option<PathBuf>,

    /// JSON configuration file (hyphen, custom, options)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Keep every whitespace run exactly
    #[arg(long)]
    exact: bool,

    /// Shortest word that may be hyphenated
    #[arg(long, value_name = "N")]
    min_word_length: Option<usize>,

    /// Fewest characters left on either side of a hyphen
    #[arg(long, value_name = "N")]
    min_fragment_length: Option<usize>,

    /// Disable logging
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Input files (default: stdin)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    hyphenate_cli::init_logging(cli.verbose, cli.quiet);
    log::debug!("arguments: {cli:?}");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let hyphenator = build_hyphenator(cli)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.files.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        write_hyphenated(&hyphenator, &text, cli.exact, &mut out)?;
    } else {
        for path in &cli.files {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            log::info!("hyphenating {}", path.display());
            write_hyphenated(&hyphenator, &text, cli.exact, &mut out)?;
        }
    }

    out.flush().context("Failed to write output")?;
    Ok(())
}

/// Merge config file, custom file and flags (flags win) and load patterns.
fn build_hyphenator(cli: &Cli) -> Result<Hyphenator<Patterns>> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(path) = &cli.custom {
        config.custom.extend(load_custom(path)?);
    }

    let hyphen = if cli.soft {
        SOFT_HYPHEN.to_string()
    } else {
        cli.hyphen
            .clone()
            .or(config.hyphen)
            .unwrap_or_else(|| "-".to_string())
    };

    let mut options = config.options.unwrap_or_default();
    if let Some(n) = cli.min_word_length {
        options.min_word_length = n;
    }
    if let Some(n) = cli.min_fragment_length {
        options.min_fragment_length = n;
    }

    let path = hyphenate_cli::resolve_patterns(&cli.patterns)?;
    let hyphenator = Hyphenator::open(&path, hyphen, &config.custom)
        .with_context(|| format!("Failed to load hyphenator from {}", path.display()))?
        .with_options(options);
    log::info!(
        "loaded {} patterns, {} exceptions, {} custom words",
        hyphenator.engine().pattern_count(),
        hyphenator.engine().exception_count(),
        hyphenator.custom().len()
    );
    Ok(hyphenator)
}

fn write_hyphenated<W: Write>(
    hyphenator: &Hyphenator<Patterns>,
    text: &str,
    exact: bool,
    out: &mut W,
) -> Result<()> {
    if exact {
        out.write_all(hyphenator.hyphenate_exact(text).as_bytes())?;
    } else {
        // the line break is trailing whitespace, so each line keeps its own
        for line in text.split_inclusive('\n') {
            out.write_all(hyphenator.hyphenate(line).as_bytes())?;
        }
    }
    Ok(())
}
