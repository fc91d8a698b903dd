//! Output spans handed to the rendering layer.

use std::ops::Range;

use serde::Serialize;

use crate::class::TokenClass;

/// A classified slice of the source text.
///
/// Tokens from one run are contiguous and strictly ordered: concatenating
/// their text reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    offset: usize,
    class: TokenClass,
    text: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token starting at `offset`.
    #[must_use]
    pub const fn new(offset: usize, class: TokenClass, text: &'a str) -> Self {
        Self {
            offset,
            class,
            text,
        }
    }

    /// Returns the byte offset of the token in the source.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the byte offset just past the token.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Returns the byte range covered by the token.
    #[must_use]
    pub const fn byte_range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Returns the highlighting class.
    #[must_use]
    pub const fn class(&self) -> TokenClass {
        self.class
    }

    /// Returns the token text.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }
}
