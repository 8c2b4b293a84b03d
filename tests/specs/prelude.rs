//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing textmatch CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::Predicate;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the textmatch binary
pub fn textmatch_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("textmatch"));
    cmd.env_remove("TEXTMATCH_CONFIG").env_remove("TEXTMATCH_LOG");
    cmd
}

/// Creates an isolated project directory (a git root, so discovery stops
/// there) with the given textmatch.toml content.
pub fn project(config: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    if let Some(content) = config {
        std::fs::write(dir.path().join("textmatch.toml"), content).unwrap();
    }
    dir
}

/// Create a builder for `textmatch <args>` run inside `dir`.
pub fn textmatch(dir: &Path) -> RunBuilder {
    RunBuilder {
        dir: dir.to_path_buf(),
        args: Vec::new(),
        stdin: None,
    }
}

pub struct RunBuilder {
    dir: PathBuf,
    args: Vec<String>,
    stdin: Option<String>,
}

#[allow(dead_code)]
impl RunBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Run and assert exit code 0
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and assert the given exit code
    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.run();
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        RunAssert { output }
    }

    fn run(self) -> std::process::Output {
        let mut cmd = textmatch_cmd();
        cmd.current_dir(&self.dir).args(&self.args);
        match self.stdin {
            Some(input) => {
                use std::io::Write;
                let mut child = cmd
                    .stdin(Stdio::piped())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .spawn()
                    .unwrap();
                child
                    .stdin
                    .take()
                    .unwrap()
                    .write_all(input.as_bytes())
                    .unwrap();
                child.wait_with_output().unwrap()
            }
            None => cmd.stdin(Stdio::null()).output().unwrap(),
        }
    }
}

pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }
}
