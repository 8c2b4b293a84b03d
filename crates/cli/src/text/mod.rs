// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character matchers for tokenizing and escaping text.
//!
//! A matcher tests whether its pattern occurs at one offset of a character
//! buffer. Three strategies exist:
//! - Exact: a fixed character sequence
//! - Char: a single character
//! - None: never matches
//!
//! Buffers are read through [`CharSequence`], so `[char]` slices, strings and
//! deques share one matching path.

pub mod matcher;
pub mod sequence;

pub use matcher::{CharMatcher, ExactMatcher, NoneMatcher, StringMatcher};
pub use sequence::{CharSequence, IndexedStr};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
