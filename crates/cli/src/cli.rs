// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Probe text with exact, single-character and null matchers
#[derive(Parser)]
#[command(name = "textmatch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TEXTMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report every offset where a matcher matches
    Scan(ScanArgs),
    /// List configured matchers
    Matchers(MatchersArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Text to scan, one line per argument (reads stdin when empty)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Scan the lines of a file instead
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Add an exact sequence matcher
    #[arg(long, value_name = "SEQ")]
    pub exact: Vec<String>,

    /// Add a single character matcher
    #[arg(long = "char", value_name = "CHAR")]
    pub chars: Vec<char>,

    /// Ignore the config file and use only --exact/--char matchers
    #[arg(long)]
    pub no_config: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct MatchersArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
