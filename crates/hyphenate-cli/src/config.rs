//! Configuration and custom-hyphenation files.
//!
//! Both are JSON. A config file bundles everything a run needs besides the
//! patterns:
//!
//! ```json
//! {
//!   "hyphen": "\u00ad",
//!   "custom": { "hyphenation": ["hy", "phen", "ation"] },
//!   "options": { "min_word_length": 7 }
//! }
//! ```
//!
//! A custom file holds only the `custom` map.

use anyhow::{Context, Result};
use hyphenate::HyphenatorOptions;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Word -> fragments, as written by the user.
pub type CustomMap = HashMap<String, Vec<String>>;

/// Contents of a `--config` file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub hyphen: Option<String>,
    pub custom: CustomMap,
    pub options: Option<HyphenatorOptions>,
}

impl Config {
    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!(
            "loaded config {} ({} custom words)",
            path.display(),
            config.custom.len()
        );
        Ok(config)
    }
}

/// Read a custom hyphenation file: a JSON object of word -> fragments.
pub fn load_custom(path: &Path) -> Result<CustomMap> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read custom hyphenation file: {}", path.display()))?;
    let custom: CustomMap = serde_json::from_str(&text)
        .with_context(|| format!("Invalid custom hyphenation file: {}", path.display()))?;
    log::debug!("loaded {} custom words from {}", custom.len(), path.display());
    Ok(custom)
}
