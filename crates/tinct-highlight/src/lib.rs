//! Tree-sitter capture merging for syntax highlighting.
//!
//! A Tree-sitter highlight query labels byte ranges of a document with
//! capture names such as `keyword` or `punctuation.bracket`. Those captures
//! may repeat or overlap, and they leave gaps. This crate turns them into a
//! single ordered, gap-free sequence of classified [`Token`]s whose text
//! concatenates back to the input.
//!
//! - **Class table** via [`TokenClass`]: capture labels map onto a closed set
//!   of classes and unknown labels are rejected.
//! - **Span merging** via [`SpanMerger`]: first capture at a position wins,
//!   gaps become plain text.
//! - **Escape regions** via [`EscapeDelimiters`]: text between a configured
//!   byte pair is never classified.
//! - **Highlighting** via [`Highlighter`]: parse, query and merge in one
//!   call for a [`SupportedLanguage`].
//!
//! # Example: Highlighting Source
//!
//! ```
//! use tinct_highlight::{Highlighter, SupportedLanguage, TokenClass};
//!
//! let mut highlighter = Highlighter::new(SupportedLanguage::Rust)?;
//! let tokens = highlighter
//!     .highlight("let x = 1;")?
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! assert_eq!(tokens.first().map(|t| t.class()), Some(TokenClass::Keyword));
//! # Ok::<(), tinct_highlight::HighlightError>(())
//! ```
//!
//! # Example: Merging Captures From Another Engine
//!
//! ```
//! use tinct_highlight::{EscapeDelimiters, HighlightOptions, merge_labelled};
//!
//! let options = HighlightOptions::new().with_escape(EscapeDelimiters::new(b'<', b'>'));
//! let tokens = merge_labelled(
//!     "x<skip>y",
//!     [(0..1, "variable"), (7..8, "variable")],
//!     options,
//! )?;
//!
//! assert_eq!(tokens.len(), 3);
//! # Ok::<(), tinct_highlight::HighlightError>(())
//! ```

mod capture;
mod class;
mod error;
mod escape;
mod highlighter;
mod language;
mod merger;
mod query;
mod token;

pub use capture::{Capture, classify};
pub use class::TokenClass;
pub use error::HighlightError;
pub use escape::{EscapeDelimiters, EscapeParseError};
pub use highlighter::{Highlighter, TokenSource, Tokens};
pub use language::{LanguageParseError, SupportedLanguage};
pub use merger::{HighlightOptions, SpanMerger, merge, merge_labelled};
pub use query::HighlightQuery;
pub use token::Token;

#[cfg(test)]
mod tests;
