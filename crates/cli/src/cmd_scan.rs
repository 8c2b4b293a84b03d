// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use std::io::Read;

use textmatch::cli::{Cli, OutputFormat, ScanArgs};
use textmatch::config::NamedMatcher;
use textmatch::error::{Error, ExitCode};
use textmatch::scan::{ScanHit, scan_text};
use textmatch::text::StringMatcher;

/// Run the scan command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let mut matchers = if args.no_config {
        Vec::new()
    } else {
        crate::cmd_matchers::configured(cli)?
    };
    matchers.extend(adhoc_matchers(args));

    if matchers.is_empty() {
        return Err(Error::Argument(
            "no matchers: add a textmatch.toml or pass --exact/--char".to_string(),
        )
        .into());
    }
    tracing::debug!("scanning with {} matcher(s)", matchers.len());

    let text = read_input(args)?;
    let hits = scan_text(&matchers, &text);
    tracing::trace!("{} hit(s)", hits.len());

    match args.output {
        OutputFormat::Text => print_text(&hits),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&hits)?),
    }

    Ok(if hits.is_empty() {
        ExitCode::NoMatch
    } else {
        ExitCode::Success
    })
}

/// Matchers given on the command line, named after their pattern.
fn adhoc_matchers(args: &ScanArgs) -> Vec<NamedMatcher> {
    let exact = args.exact.iter().map(|s| StringMatcher::from(s.as_str()));
    let chars = args.chars.iter().map(|&c| StringMatcher::char(c));
    exact
        .chain(chars)
        .map(|m| NamedMatcher::new(m.to_string(), m))
        .collect()
}

fn read_input(args: &ScanArgs) -> anyhow::Result<String> {
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path).map_err(|e| {
            Error::Io {
                path: path.clone(),
                source: e,
            }
            .into()
        });
    }
    if !args.text.is_empty() {
        return Ok(args.text.join("\n"));
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn print_text(hits: &[ScanHit]) {
    for hit in hits {
        println!("{}:{}: {} ({})", hit.line, hit.offset, hit.matcher, hit.len);
    }
}
