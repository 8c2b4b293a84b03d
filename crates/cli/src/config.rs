// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles textmatch.toml parsing with version validation and unknown key
//! warnings. Each `[matchers.<name>]` table defines one matcher.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::text::StringMatcher;

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "textmatch.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Matcher definitions by name.
    #[serde(default)]
    pub matchers: BTreeMap<String, MatcherDef>,

    /// File the config was read from, used in error messages.
    #[serde(skip)]
    pub source: Option<PathBuf>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// One `[matchers.<name>]` table. Exactly one field must be set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatcherDef {
    /// Exact character sequence (may be empty).
    #[serde(default)]
    pub exact: Option<String>,

    /// Single character, given as a one-character string.
    #[serde(default)]
    pub char: Option<String>,

    /// Matcher that never matches.
    #[serde(default)]
    pub none: bool,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// A matcher together with its configured name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedMatcher {
    pub name: String,
    pub matcher: StringMatcher,
}

impl NamedMatcher {
    pub fn new(name: impl Into<String>, matcher: StringMatcher) -> Self {
        Self {
            name: name.into(),
            matcher,
        }
    }
}

impl Config {
    /// Build every configured matcher, ordered by name.
    pub fn matchers(&self) -> Result<Vec<NamedMatcher>> {
        self.matchers
            .iter()
            .map(|(name, def)| {
                let matcher = def.to_matcher(name, self.source.as_deref())?;
                Ok(NamedMatcher::new(name.clone(), matcher))
            })
            .collect()
    }
}

impl MatcherDef {
    /// Convert this definition into a matcher.
    pub fn to_matcher(&self, name: &str, path: Option<&Path>) -> Result<StringMatcher> {
        let invalid = |message: String| Error::Config {
            message,
            path: path.map(Path::to_path_buf),
        };

        match (&self.exact, &self.char, self.none) {
            (Some(text), None, false) => Ok(StringMatcher::exact(text.chars())),
            (None, Some(text), false) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(StringMatcher::char(ch)),
                    _ => Err(invalid(format!(
                        "matcher `{}`: `char` must be exactly one character, got {:?}",
                        name, text
                    ))),
                }
            }
            (None, None, true) => Ok(StringMatcher::none()),
            (None, None, false) => Err(invalid(format!(
                "matcher `{}`: expected one of `exact`, `char` or `none = true`",
                name
            ))),
            _ => Err(invalid(format!(
                "matcher `{}`: set only one of `exact`, `char` or `none`",
                name
            ))),
        }
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("loading config from {}", path.display());
    parse(&content, path)
}

/// Parse config from string content.
///
/// Unknown keys produce warnings, invalid matcher definitions are errors.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let mut config: Config = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;
    config.source = Some(path.to_path_buf());

    for key in config.unknown.keys() {
        warn_unknown_key(path, key);
    }
    for (name, def) in &config.matchers {
        for key in def.unknown.keys() {
            warn_unknown_key(path, &format!("matchers.{}.{}", name, key));
        }
    }

    // Reject bad definitions at load time rather than on first use.
    config.matchers()?;
    tracing::debug!("loaded {} matcher(s)", config.matchers.len());

    Ok(config)
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "textmatch: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
