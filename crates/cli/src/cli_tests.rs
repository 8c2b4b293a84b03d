// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn parse_bare_invocation() {
    let cli = Cli::parse_from(["textmatch"]);
    assert!(cli.command.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn parse_scan_with_text_and_matchers() {
    let cli = Cli::parse_from([
        "textmatch", "scan", "--exact", "${", "--char", "}", "a ${b}", "c",
    ]);
    let Some(Command::Scan(args)) = cli.command else {
        panic!("expected scan command");
    };
    assert_eq!(args.text, vec!["a ${b}".to_string(), "c".to_string()]);
    assert_eq!(args.exact, vec!["${".to_string()]);
    assert_eq!(args.chars, vec!['}']);
    assert!(matches!(args.output, OutputFormat::Text));
}

#[test]
fn parse_scan_rejects_multi_char_char_flag() {
    assert!(Cli::try_parse_from(["textmatch", "scan", "--char", "ab"]).is_err());
}

#[test]
fn parse_scan_file_conflicts_with_text() {
    assert!(Cli::try_parse_from(["textmatch", "scan", "--file", "in.txt", "text"]).is_err());
}

#[test]
fn parse_matchers_json() {
    let cli = Cli::parse_from(["textmatch", "matchers", "-o", "json"]);
    let Some(Command::Matchers(args)) = cli.command else {
        panic!("expected matchers command");
    };
    assert!(matches!(args.output, OutputFormat::Json));
}

#[test]
fn parse_global_config_flag() {
    let cli = Cli::parse_from(["textmatch", "matchers", "-C", "custom.toml"]);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}
