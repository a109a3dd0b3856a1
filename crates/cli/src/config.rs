// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles textsearch.toml parsing with version validation and unknown key
//! warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::automaton::SearchOptions;
use crate::error::{Error, Result};
use crate::keyword::Keyword;

/// Config file name looked up during discovery.
pub const CONFIG_FILE: &str = "textsearch.toml";

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "search", "keywords"];

/// Known `[search]` keys.
const KNOWN_SEARCH_KEYS: &[&str] = &["case_insensitive", "word_boundaries"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    search: Option<toml::Value>,

    #[serde(default)]
    keywords: Vec<Keyword>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Matching options.
    pub search: SearchOptions,

    /// Keywords in file order.
    pub keywords: Vec<Keyword>,
}

impl Config {
    /// Default config used when no file is found.
    pub fn empty() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            ..Self::default()
        }
    }

    /// Config keywords followed by `extra` (command-line keywords).
    pub fn keywords(&self, extra: &[Keyword]) -> Vec<Keyword> {
        self.keywords.iter().chain(extra).cloned().collect()
    }

    /// Search options with command-line flags applied.
    ///
    /// A flag can only switch an option on.
    pub fn options(&self, ignore_case: bool, word_boundaries: bool) -> SearchOptions {
        SearchOptions {
            case_insensitive: self.search.case_insensitive || ignore_case,
            word_boundaries: self.search.word_boundaries || word_boundaries,
        }
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    for key in unknown_keys(&flexible) {
        tracing::warn!(path = %path.display(), key, "unrecognized config field (ignored)");
    }

    let search = match flexible.search {
        Some(value @ toml::Value::Table(_)) => value
            .try_into::<SearchOptions>()
            .map_err(|e| config_error(format!("invalid [search] section: {e}")))?,
        Some(_) => return Err(config_error("[search] must be a table".to_string())),
        None => SearchOptions::default(),
    };

    // Reject empty patterns up front so the error names the file.
    if let Some(idx) = flexible.keywords.iter().position(|k| k.pattern().is_empty()) {
        return Err(config_error(format!("keywords[{idx}]: empty pattern")));
    }

    Ok(Config {
        version,
        search,
        keywords: flexible.keywords,
    })
}

/// Dotted names of keys the config does not recognize.
fn unknown_keys(flexible: &FlexibleConfig) -> Vec<String> {
    let mut keys: Vec<String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    if let Some(toml::Value::Table(search)) = &flexible.search {
        keys.extend(
            search
                .keys()
                .filter(|key| !KNOWN_SEARCH_KEYS.contains(&key.as_str()))
                .map(|key| format!("search.{key}")),
        );
    }
    keys
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
