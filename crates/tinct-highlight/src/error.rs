//! Error types for highlighting operations.
//!
//! This module provides structured error types for every stage of a
//! highlighting run: compiling the highlight query, parsing the source,
//! mapping capture labels onto classes, and slicing the merged spans.

use std::str::Utf8Error;

use thiserror::Error;

use crate::language::SupportedLanguage;

/// Errors from highlighting operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HighlightError {
    /// The query engine produced a capture label with no entry in the class
    /// table.
    #[error("unknown capture class: '{label}'")]
    UnknownCaptureClass {
        /// The label that could not be mapped.
        label: String,
    },

    /// A capture range is inverted or extends past the end of the source.
    #[error("capture span {start}..{end} is out of bounds for source of {len} bytes")]
    SpanOutOfBounds {
        /// Start offset of the offending capture.
        start: usize,
        /// End offset of the offending capture.
        end: usize,
        /// Length of the source in bytes.
        len: usize,
    },

    /// A merged span is not valid UTF-8, typically because a capture
    /// boundary falls inside a multi-byte character.
    #[error("span at byte {offset} is not valid UTF-8: {source}")]
    Decode {
        /// Start offset of the span that failed to decode.
        offset: usize,
        /// The underlying decoding failure.
        #[source]
        source: Utf8Error,
    },

    /// Failed to initialise the Tree-sitter parser for a language.
    #[error("failed to initialise parser for {language}: {message}")]
    ParserInit {
        /// The language that failed to initialise.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },

    /// Tree-sitter did not produce a syntax tree.
    #[error("failed to parse {language} source")]
    Parse {
        /// The language that failed to parse.
        language: SupportedLanguage,
    },

    /// The highlight query failed to compile.
    #[error("invalid highlight query for {language}: {message}")]
    QueryCompile {
        /// The language the query was compiled for.
        language: SupportedLanguage,
        /// Description of the compilation failure.
        message: String,
    },
}

impl HighlightError {
    /// Creates an unknown capture class error.
    #[must_use]
    pub fn unknown_capture_class(label: impl Into<String>) -> Self {
        Self::UnknownCaptureClass {
            label: label.into(),
        }
    }

    /// Creates an out-of-bounds span error.
    #[must_use]
    pub const fn span_out_of_bounds(start: usize, end: usize, len: usize) -> Self {
        Self::SpanOutOfBounds { start, end, len }
    }

    /// Creates a decoding error for the span starting at `offset`.
    #[must_use]
    pub const fn decode(offset: usize, source: Utf8Error) -> Self {
        Self::Decode { offset, source }
    }

    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParserInit {
            language,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub const fn parse(language: SupportedLanguage) -> Self {
        Self::Parse { language }
    }

    /// Creates a query compilation error.
    #[must_use]
    pub fn query_compile(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::QueryCompile {
            language,
            message: message.into(),
        }
    }
}
