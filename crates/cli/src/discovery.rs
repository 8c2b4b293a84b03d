// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating textmatch.toml.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, Result};

/// Nearest textmatch.toml in `start_dir` or its ancestors.
///
/// The search does not leave the enclosing git repository.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Config file to load for a command, if any.
///
/// A path given with `-C` (or `TEXTMATCH_CONFIG`) must exist; without one,
/// the file is discovered from `cwd`. `Ok(None)` means no matchers are
/// configured.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        let found = find_config(cwd);
        tracing::debug!("discovered config: {:?}", found);
        return Ok(found);
    };

    if !path.is_file() {
        return Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
