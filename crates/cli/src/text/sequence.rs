// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Indexed character access over different buffer representations.

use std::collections::VecDeque;

/// Read-only character buffer addressed by character index.
pub trait CharSequence {
    /// Number of characters in the sequence.
    fn len(&self) -> usize;

    /// Character at `index`, or `None` past the end.
    fn char_at(&self, index: usize) -> Option<char>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CharSequence for [char] {
    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.get(index).copied()
    }
}

impl CharSequence for Vec<char> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.as_slice().char_at(index)
    }
}

/// Strings are indexed by `char`, not by byte.
///
/// A lookup only inspects the bytes up to `index`: an all-ASCII prefix is
/// read directly, anything else walks `chars()`. Each call is still linear
/// in `index`, so probing many offsets should go through [`IndexedStr`].
impl CharSequence for str {
    fn len(&self) -> usize {
        self.chars().count()
    }

    fn char_at(&self, index: usize) -> Option<char> {
        match self.as_bytes().get(..=index) {
            Some(prefix) if prefix.is_ascii() => prefix.last().map(|&b| char::from(b)),
            _ => self.chars().nth(index),
        }
    }
}

impl CharSequence for String {
    fn len(&self) -> usize {
        CharSequence::len(self.as_str())
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.as_str().char_at(index)
    }
}

impl CharSequence for VecDeque<char> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.get(index).copied()
    }
}

/// A string with constant-time character indexing.
///
/// ASCII text is read in place; other text is decoded once into chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedStr<'a> {
    repr: Repr<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Repr<'a> {
    Ascii(&'a [u8]),
    Decoded(Vec<char>),
}

impl<'a> IndexedStr<'a> {
    pub fn new(text: &'a str) -> Self {
        let repr = if text.is_ascii() {
            Repr::Ascii(text.as_bytes())
        } else {
            Repr::Decoded(text.chars().collect())
        };
        Self { repr }
    }
}

impl CharSequence for IndexedStr<'_> {
    fn len(&self) -> usize {
        match &self.repr {
            Repr::Ascii(bytes) => bytes.len(),
            Repr::Decoded(chars) => chars.len(),
        }
    }

    fn char_at(&self, index: usize) -> Option<char> {
        match &self.repr {
            Repr::Ascii(bytes) => bytes.get(index).map(|&b| char::from(b)),
            Repr::Decoded(chars) => chars.get(index).copied(),
        }
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
