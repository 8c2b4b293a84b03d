// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matchers command implementation.

use serde::Serialize;

use textmatch::cli::{Cli, MatchersArgs, OutputFormat};
use textmatch::config::{self, NamedMatcher};
use textmatch::discovery::resolve_config;

/// Matcher listing for JSON output.
#[derive(Serialize)]
struct MatcherOutput {
    name: String,
    pattern: String,
    size: usize,
}

/// Load matchers from the explicit or discovered config file.
///
/// Returns no matchers when there is no config file.
pub fn configured(cli: &Cli) -> anyhow::Result<Vec<NamedMatcher>> {
    let cwd = std::env::current_dir()?;
    match resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => Ok(config::load(&path)?.matchers()?),
        None => {
            tracing::debug!("no config found");
            Ok(Vec::new())
        }
    }
}

/// Run the matchers command.
pub fn run(cli: &Cli, args: &MatchersArgs) -> anyhow::Result<()> {
    let matchers = configured(cli)?;

    match args.output {
        OutputFormat::Text => {
            for named in &matchers {
                println!("{}\t{}\t{}", named.name, named.matcher, named.matcher.size());
            }
        }
        OutputFormat::Json => {
            let out: Vec<MatcherOutput> = matchers
                .iter()
                .map(|named| MatcherOutput {
                    name: named.name.clone(),
                    pattern: named.matcher.to_string(),
                    size: named.matcher.size(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
