// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-pattern character matchers.
//!
//! The [`text`] module holds the matchers themselves. The remaining modules
//! support the `textmatch` binary: configuration, discovery and scanning.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod scan;
pub mod text;

pub use cli::{Cli, Command, MatchersArgs, OutputFormat, ScanArgs};
pub use config::{Config, MatcherDef, NamedMatcher};
pub use error::{Error, ExitCode, Result};
pub use scan::{ScanHit, scan_text};
pub use text::{
    CharMatcher, CharSequence, ExactMatcher, IndexedStr, NoneMatcher, StringMatcher,
};

#[cfg(test)]
pub mod test_utils;
