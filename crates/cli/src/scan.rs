// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offset-by-offset probing of text with a list of named matchers.

use serde::Serialize;

use crate::config::NamedMatcher;

/// One matcher hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanHit {
    /// 1-based line number.
    pub line: usize,
    /// Character offset within the line.
    pub offset: usize,
    /// Name of the matcher that matched.
    pub matcher: String,
    /// Characters consumed by the match.
    pub len: usize,
}

/// Try every matcher at every offset of `line`.
///
/// Hits are ordered by offset, then by matcher order. Overlapping hits are all
/// reported.
pub fn scan_line(matchers: &[NamedMatcher], line_number: usize, line: &[char]) -> Vec<ScanHit> {
    let mut hits = Vec::new();
    for offset in 0..line.len() {
        for named in matchers {
            let len = named.matcher.is_match(line, offset, 0, line.len());
            if len > 0 {
                hits.push(ScanHit {
                    line: line_number,
                    offset,
                    matcher: named.name.clone(),
                    len,
                });
            }
        }
    }
    hits
}

/// Scan each line of `text`.
pub fn scan_text(matchers: &[NamedMatcher], text: &str) -> Vec<ScanHit> {
    text.lines()
        .enumerate()
        .flat_map(|(i, line)| {
            let chars: Vec<char> = line.chars().collect();
            scan_line(matchers, i + 1, &chars)
        })
        .collect()
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
