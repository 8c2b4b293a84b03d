// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-pattern matchers anchored at a buffer offset.

use std::fmt;

use super::sequence::CharSequence;

/// A matcher for one fixed pattern.
///
/// Matching returns the number of characters consumed, `0` for no match.
/// No match is an ordinary result, never an error. Matchers are immutable
/// and may be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringMatcher {
    /// Fixed character sequence.
    Exact(ExactMatcher),
    /// Single character.
    Char(CharMatcher),
    /// Matches nothing.
    None(NoneMatcher),
}

/// Matches an exact sequence of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactMatcher {
    chars: Box<[char]>,
}

/// Matches one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharMatcher {
    ch: char,
}

/// Matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoneMatcher;

impl StringMatcher {
    /// Shared matcher that never matches.
    pub const NONE: StringMatcher = StringMatcher::None(NoneMatcher);

    /// Matcher for an exact character sequence. The characters are copied.
    pub fn exact<C>(chars: C) -> Self
    where
        C: IntoIterator<Item = char>,
    {
        StringMatcher::Exact(ExactMatcher::new(chars))
    }

    /// Matcher for a single character.
    pub fn char(ch: char) -> Self {
        StringMatcher::Char(CharMatcher::new(ch))
    }

    /// Matcher that never matches.
    pub fn none() -> Self {
        Self::NONE
    }

    /// Number of characters consumed by a successful match.
    pub fn size(&self) -> usize {
        match self {
            StringMatcher::Exact(m) => m.size(),
            StringMatcher::Char(m) => m.size(),
            StringMatcher::None(m) => m.size(),
        }
    }

    /// Match against a raw character buffer.
    ///
    /// `window_end` is the exclusive end of valid content in `buffer`;
    /// `window_start` is accepted for symmetry and currently unused.
    pub fn is_match(
        &self,
        buffer: &[char],
        start: usize,
        window_start: usize,
        window_end: usize,
    ) -> usize {
        self.is_match_seq(buffer, start, window_start, window_end)
    }

    /// Match against any [`CharSequence`]. Same semantics as [`Self::is_match`].
    pub fn is_match_seq<S>(
        &self,
        buffer: &S,
        start: usize,
        window_start: usize,
        window_end: usize,
    ) -> usize
    where
        S: CharSequence + ?Sized,
    {
        match self {
            StringMatcher::Exact(m) => m.is_match(buffer, start, window_start, window_end),
            StringMatcher::Char(m) => m.is_match(buffer, start, window_start, window_end),
            StringMatcher::None(m) => m.is_match(buffer, start, window_start, window_end),
        }
    }

    /// Match at `start` using the whole buffer as the window.
    pub fn is_match_from<S>(&self, buffer: &S, start: usize) -> usize
    where
        S: CharSequence + ?Sized,
    {
        self.is_match_seq(buffer, start, 0, buffer.len())
    }
}

impl ExactMatcher {
    /// Copies `chars`; the matcher never sees later changes to the source.
    pub fn new<C>(chars: C) -> Self
    where
        C: IntoIterator<Item = char>,
    {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Length of the sequence, `0` when empty.
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// The characters this matcher looks for.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns `size()` when the whole sequence fits before `window_end` and matches.
    pub fn is_match<S>(
        &self,
        buffer: &S,
        start: usize,
        _window_start: usize,
        window_end: usize,
    ) -> usize
    where
        S: CharSequence + ?Sized,
    {
        let len = self.size();
        match start.checked_add(len) {
            Some(end) if end <= window_end => {}
            _ => return 0,
        }
        let all_equal = self
            .chars
            .iter()
            .enumerate()
            .all(|(i, &expected)| buffer.char_at(start + i) == Some(expected));
        if all_equal { len } else { 0 }
    }
}

impl CharMatcher {
    /// Matcher for `ch`.
    pub fn new(ch: char) -> Self {
        Self { ch }
    }

    /// The character this matcher looks for.
    pub fn ch(&self) -> char {
        self.ch
    }

    /// Always `1`.
    pub fn size(&self) -> usize {
        1
    }

    /// Returns `1` when the character at `start` matches.
    ///
    /// Offsets at or past `window_end` never match.
    pub fn is_match<S>(
        &self,
        buffer: &S,
        start: usize,
        _window_start: usize,
        window_end: usize,
    ) -> usize
    where
        S: CharSequence + ?Sized,
    {
        if start >= window_end {
            return 0;
        }
        match buffer.char_at(start) {
            Some(c) if c == self.ch => 1,
            _ => 0,
        }
    }
}

impl NoneMatcher {
    /// Always `0`.
    pub fn size(&self) -> usize {
        0
    }

    /// Always `0`.
    pub fn is_match<S>(
        &self,
        _buffer: &S,
        _start: usize,
        _window_start: usize,
        _window_end: usize,
    ) -> usize
    where
        S: CharSequence + ?Sized,
    {
        0
    }
}

impl From<char> for StringMatcher {
    fn from(ch: char) -> Self {
        StringMatcher::char(ch)
    }
}

impl From<&str> for StringMatcher {
    fn from(s: &str) -> Self {
        StringMatcher::exact(s.chars())
    }
}

impl From<String> for StringMatcher {
    fn from(s: String) -> Self {
        StringMatcher::exact(s.chars())
    }
}

impl From<&[char]> for StringMatcher {
    fn from(chars: &[char]) -> Self {
        StringMatcher::exact(chars.iter().copied())
    }
}

impl fmt::Display for StringMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringMatcher::Exact(m) => fmt::Display::fmt(m, f),
            StringMatcher::Char(m) => fmt::Display::fmt(m, f),
            StringMatcher::None(m) => fmt::Display::fmt(m, f),
        }
    }
}

impl fmt::Display for ExactMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.chars.iter().collect();
        write!(f, "Exact[\"{}\"]", text)
    }
}

impl fmt::Display for CharMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Char['{}']", self.ch)
    }
}

impl fmt::Display for NoneMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("None")
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
