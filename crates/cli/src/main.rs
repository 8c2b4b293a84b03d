// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `textmatch` binary.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use textmatch::cli::{Cli, Command};
use textmatch::error::ExitCode;

mod cmd_matchers;
mod cmd_scan;

/// Logs go to stderr and stay silent unless `TEXTMATCH_LOG` is set.
fn init_logging() {
    let filter = EnvFilter::try_from_env("TEXTMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> std::process::ExitCode {
    init_logging();

    let code = run().unwrap_or_else(|e| {
        eprintln!("textmatch: {}", e);
        e.downcast_ref::<textmatch::Error>()
            .map_or(ExitCode::InternalError, ExitCode::from)
    });
    std::process::ExitCode::from(code as u8)
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::Success);
    };

    match command {
        Command::Scan(args) => cmd_scan::run(&cli, args),
        Command::Matchers(args) => cmd_matchers::run(&cli, args).map(|()| ExitCode::Success),
    }
}
